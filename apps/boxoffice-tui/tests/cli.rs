//! Run the `boxoffice` binary against files on disk

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::{NamedTempFile, TempDir};

const DATASET: &str = "Decade,Title,Budget,Worldwide Gross\n\
1970s,Jaws,7,470.7\n\
1980s,E.T.,10,792.9\n\
1990s,Titanic,200,2264.7\n\
1990s,Broken Row,abc,1.0\n";

fn dataset_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DATASET.as_bytes()).unwrap();
    file
}

/// An empty config so a per-user config file cannot leak into the run
fn config_file() -> NamedTempFile {
    NamedTempFile::new().unwrap()
}

fn boxoffice(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_boxoffice"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_missing_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("dataset.csv");
    let config = config_file();
    let output = boxoffice(
        &[
            "--config",
            config.path().to_str().unwrap(),
            "--dataset",
            missing.to_str().unwrap(),
        ],
        "",
    );

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("not found in project location."));
    assert!(stdout.contains("Program is exiting..."));
}

#[test]
fn test_summary_prints_json() {
    let dataset = dataset_file();
    let config = config_file();
    let output = boxoffice(
        &[
            "--config",
            config.path().to_str().unwrap(),
            "--dataset",
            dataset.path().to_str().unwrap(),
            "--summary",
        ],
        "",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Unable to convert value to float at line: 1990s,Broken Row,abc,1.0"));

    let json = &stdout[stdout.find('{').unwrap()..];
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["movies"], 3);
    assert_eq!(value["budget"]["max_title"], "Titanic");
    assert_eq!(value["highest_grossing_decade"]["label"], "1990s");
}

#[test]
fn test_menu_runs_on_stdin() {
    let dataset = dataset_file();
    let config = config_file();
    let output = boxoffice(
        &[
            "--config",
            config.path().to_str().unwrap(),
            "--dataset",
            dataset.path().to_str().unwrap(),
        ],
        "1\n12\n\nq\n3\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("----------/// MENU ///----------"));
    assert!(stdout.contains("Good Bye!"));
}

#[test]
fn test_bad_config_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[charts]\nbudget_bin_width = 0").unwrap();
    let output = boxoffice(&["--config", config.path().to_str().unwrap()], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("bin widths must be positive"));
}
