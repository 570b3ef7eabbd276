use anyhow::Context;
use clap::{ArgAction, Parser};
use paintboard::{
    Config,
    draw::CairoCanvas,
    import::ImportManager,
    input::{ControllerSettings, DrawingController},
    replay::Replay,
    script::Script,
};
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PAINTBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "paintboard")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand raster drawing board with scripted replay and PNG export"
)]
struct Cli {
    /// Replay a TOML event script on a fresh 800x500 canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory for myDrawing.png (overrides the config file)
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/paintboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the documented example config to the default location
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)?;
    let base_dir = script_path.parent().map(Path::to_path_buf).unwrap_or_default();
    let steps = script
        .steps(&base_dir)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let output_dir = cli.output.unwrap_or_else(|| config.export_directory());
    log::info!("Exports go to {}", output_dir.display());

    let runtime = tokio::runtime::Runtime::new().context("Failed to start decode runtime")?;
    let canvas = CairoCanvas::new().context("Failed to create canvas")?;
    let controller = DrawingController::new(canvas, ControllerSettings::from_config(&config));
    let mut replay = Replay::new(controller, ImportManager::new(runtime.handle()), output_dir);

    let summary = replay.run(steps)?;

    for path in &summary.exports {
        println!("Saved {}", path.display());
    }
    if summary.imports_failed > 0 {
        log::warn!(
            "{} image import(s) failed; nothing was drawn for them",
            summary.imports_failed
        );
    }

    Ok(())
}

fn print_usage() {
    println!("paintboard: Freehand raster drawing board");
    println!();
    println!("Usage:");
    println!("  paintboard --script session.toml             Replay a session");
    println!("  paintboard --script session.toml -o out/     Replay, exporting into out/");
    println!("  paintboard --init-config                     Write an example config");
    println!("  paintboard --help                            Show help");
    println!();
    println!("Script events ([[events]] tables, field `type`):");
    println!("  pointer-move/pointer-down/pointer-up (x, y), pointer-leave,");
    println!("  double-click (x, y), line-width (value), color (value),");
    println!("  swatch (index), toggle-mode, erase, reset, text (value),");
    println!("  import (path), settle, export");
}
