use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paintboard_cmd() -> Command {
    Command::cargo_bin("paintboard").expect("binary exists")
}

#[test]
fn paintboard_help_prints_about() {
    paintboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Freehand raster drawing board"));
}

#[test]
fn no_arguments_prints_usage() {
    paintboard_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("paintboard --script session.toml"));
}

#[test]
fn init_config_conflicts_with_script() {
    paintboard_cmd()
        .args(["--init-config", "--script", "session.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn script_replay_writes_drawing() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.toml");
    std::fs::write(
        &script,
        r##"
        [[events]]
        type = "reset"

        [[events]]
        type = "color"
        value = "#e74c3c"

        [[events]]
        type = "pointer-down"
        x = 10
        y = 10

        [[events]]
        type = "pointer-move"
        x = 300
        y = 200

        [[events]]
        type = "pointer-up"
        x = 300
        y = 200

        [[events]]
        type = "export"
        "##,
    )
    .unwrap();
    let out = temp.path().join("out");

    paintboard_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(temp.path().join("missing-config.toml"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("myDrawing.png"));

    let bytes = std::fs::read(out.join("myDrawing.png")).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn unknown_event_type_fails() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.toml");
    std::fs::write(&script, "[[events]]\ntype = \"teleport\"\n").unwrap();

    paintboard_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(temp.path().join("missing-config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();

    paintboard_cmd()
        .arg("--script")
        .arg(temp.path().join("nope.toml"))
        .arg("--config")
        .arg(temp.path().join("missing-config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}
