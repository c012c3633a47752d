use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;
fn srcdump() -> Command {
    Command::cargo_bin("srcdump").unwrap()
}
#[test]
fn cli_exports_and_reports_size() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Main.kt"), "fun main() {}").unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("export.txt");
    srcdump()
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Export completed to"))
        .stdout(predicate::str::contains("File size: 0.00 MB"));
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("# FILE: Main.kt"));
}
#[test]
fn cli_binary_file_still_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.dat"), [0xc3, 0x28, 0xa0, 0xa1]).unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("export.txt");
    srcdump()
        .arg(dir.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .code(0);
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("# FILE: blob.dat\n"));
    assert!(report.contains("\n\n# [Binary file content not shown]\n\n# END OF FILE: blob.dat\n"));
}
#[test]
fn cli_missing_root_fails_without_touching_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("export.txt");
    fs::write(&output, "previous").unwrap();
    srcdump()
        .arg(dir.path().join("project_dir"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project directory not found"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}
#[test]
fn cli_skip_flags_and_config_file() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("out")).unwrap();
    fs::write(dir.path().join("out/Gen.kt"), "gen").unwrap();
    fs::write(dir.path().join("notes.log"), "log").unwrap();
    fs::write(dir.path().join("Main.kt"), "main").unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("export.txt");
    let config = out_dir.path().join("srcdump.toml");
    fs::write(&config, "title = \"MY EXPORT\"\nskip_dirs = [\"out\"]\n").unwrap();
    srcdump()
        .arg(dir.path())
        .args(["--skip-ext", "LOG", "--config"])
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("MY EXPORT\n"));
    assert!(report.contains("# FILE: Main.kt"));
    assert!(!report.contains("Gen.kt"));
    assert!(!report.contains("notes.log"));
}
#[test]
fn cli_bad_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("srcdump.toml");
    fs::write(&config, "no_such_key = 1\n").unwrap();
    srcdump()
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
#[test]
fn cli_json_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.png"), "b").unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("export.txt");
    let assert = srcdump()
        .arg(dir.path())
        .arg("-o")
        .arg(&output)
        .arg("--json")
        .assert()
        .success();
    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["stats"]["written"], 1);
    assert_eq!(summary["stats"]["skipped"], 1);
    assert_eq!(summary["bytes"], fs::metadata(&output).unwrap().len());
}
