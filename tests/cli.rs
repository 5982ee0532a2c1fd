use std::{fs, path::PathBuf, process::Command};

use pretty_assertions::assert_eq;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("stackcalc-cli").join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn writes_results_and_reports_success() {
    let dir = scratch_dir("success");
    fs::write(dir.join("exprs.txt"), "2 + 3 * 4\n---\n5 / 0\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_stackcalc")).current_dir(&dir)
                                                           .args(["exprs.txt", "results.txt"])
                                                           .output()
                                                           .unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout),
               "Results written successfully to 'results.txt'.\n");
    assert_eq!(fs::read_to_string(dir.join("results.txt")).unwrap(),
               "14\n---\nError: Division by zero\n");
}

#[test]
fn defaults_to_input_and_output_txt() {
    let dir = scratch_dir("defaults");
    fs::write(dir.join("input.txt"), "(2 + 3) * 4\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_stackcalc")).current_dir(&dir)
                                                              .status()
                                                              .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(dir.join("output.txt")).unwrap(), "20\n");
}

#[test]
fn missing_input_fails_without_output() {
    let dir = scratch_dir("missing");

    let out = Command::new(env!("CARGO_BIN_EXE_stackcalc")).current_dir(&dir)
                                                           .args(["nope.txt", "out.txt"])
                                                           .output()
                                                           .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: 'nope.txt' not found in current directory."));
    assert!(!dir.join("out.txt").exists());
}
