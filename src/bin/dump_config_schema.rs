use anyhow::Result;

fn main() -> Result<()> {
    let schema = schemars::schema_for!(paintboard::Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
