use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn strokematch_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("strokematch").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn strokematch_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    strokematch_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay input scripts through a shortcut profile",
        ));
}

#[test]
fn script_is_required() {
    let temp = TempDir::new().unwrap();
    strokematch_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replays_script_with_custom_profile() {
    let temp = TempDir::new().unwrap();
    let profile = temp.path().join("profile.toml");
    std::fs::write(
        &profile,
        r#"
[[action]]
name = "smudge"
cursor = "closed-hand"

[[stroke]]
action = "smudge"
binding = "Alt+Right"
"#,
    )
    .unwrap();
    let script = temp.path().join("drag.txt");
    std::fs::write(&script, "key-press alt\npress right 1 2\nrelease right\n").unwrap();

    strokematch_cmd(temp.path())
        .arg("--profile")
        .arg(&profile)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("line 1: key-press Alt -> passed; smudge: ready"))
        .stdout(predicate::str::contains("cursor: ClosedHand"))
        .stdout(predicate::str::contains(
            "line 2: press Right -> consumed; smudge: begin (mode 0, Right down at 1,2)",
        ))
        .stdout(predicate::str::contains("smudge: end (Right up at 1,2)"));
}

#[test]
fn replays_with_builtin_profile_when_config_missing() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("zoom.txt");
    std::fs::write(&script, "key-press ctrl\nwheel up\npress left\n").unwrap();

    strokematch_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("zoom: begin (mode 0, WheelUp at 0,0)"))
        .stdout(predicate::str::contains("pick_color: begin"))
        .stdout(predicate::str::contains("Script ended with a stroke still running"));
}

#[test]
fn bad_script_reports_line_number() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    std::fs::write(&script, "key-press space\n# fine so far\nteleport 3 4\n").unwrap();

    strokematch_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3: unknown command 'teleport'"));
}

#[test]
fn bad_profile_names_the_binding() {
    let temp = TempDir::new().unwrap();
    let profile = temp.path().join("profile.toml");
    std::fs::write(
        &profile,
        "[[stroke]]\naction = \"pan\"\nbinding = \"Space+Wheelie\"\n",
    )
    .unwrap();

    strokematch_cmd(temp.path())
        .arg("--profile")
        .arg(&profile)
        .arg("--print-profile")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Space+Wheelie"));

    let script = temp.path().join("empty.txt");
    std::fs::write(&script, "").unwrap();
    strokematch_cmd(temp.path())
        .arg("--profile")
        .arg(&profile)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Space+Wheelie"));
}

#[test]
fn print_profile_outputs_builtin_toml() {
    let temp = TempDir::new().unwrap();
    strokematch_cmd(temp.path())
        .arg("--print-profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[stroke]]"))
        .stdout(predicate::str::contains("binding = \"Space+Left\""));
}

#[test]
fn init_config_writes_default_profile_once() {
    let temp = TempDir::new().unwrap();
    strokematch_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote built-in profile"));
    assert!(temp.path().join("strokematch").join("config.toml").exists());

    strokematch_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config already exists"));
}
