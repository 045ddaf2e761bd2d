#![cfg(unix)]

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use crate::common::{launcher_command, write_fake_runtime, VALID_EMAIL, VALID_TOKEN, VALID_URL};

fn read_capture(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("fake runtime should have written its capture file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn successful_launch_becomes_the_runtime_process() {
    let temp = tempdir().expect("can create temporary directory");
    let runtime = temp.path().join("uv");
    write_fake_runtime(&runtime);
    let project = temp.path().join("project");
    fs::create_dir(&project).expect("can create project dir");
    let capture = temp.path().join("capture.txt");

    let output = launcher_command()
        .arg("--runtime")
        .arg(&runtime)
        .arg("--project-dir")
        .arg(&project)
        .env("JIRA_URL", VALID_URL)
        .env("JIRA_EMAIL", VALID_EMAIL)
        .env("JIRA_API_TOKEN", VALID_TOKEN)
        .env("LAUNCH_CAPTURE_FILE", &capture)
        .output()
        .expect("launcher should run");

    assert!(
        output.status.success(),
        "launcher should exit with the fake runtime's status: {:?}, stderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let lines = read_capture(&capture);
    assert_eq!(lines.len(), 7, "capture: {lines:?}");

    // pwd may resolve symlinks (e.g. /tmp), so compare canonical forms.
    let reported_cwd = fs::canonicalize(&lines[0]).expect("captured cwd should exist");
    let expected_cwd = fs::canonicalize(&project).expect("project dir should exist");
    assert_eq!(reported_cwd, expected_cwd);

    assert_eq!(&lines[1..4], ["run", "python", "jira_mcp.py"]);
    assert_eq!(&lines[4..7], [VALID_URL, VALID_EMAIL, VALID_TOKEN]);
}

#[test]
fn successful_launch_keeps_the_token_off_stderr() {
    let temp = tempdir().expect("can create temporary directory");
    let runtime = temp.path().join("uv");
    write_fake_runtime(&runtime);
    let project = temp.path().join("project");
    fs::create_dir(&project).expect("can create project dir");
    let capture = temp.path().join("capture.txt");

    let output = launcher_command()
        .arg("--runtime")
        .arg(&runtime)
        .arg("--project-dir")
        .arg(&project)
        .env("JIRA_URL", VALID_URL)
        .env("JIRA_EMAIL", VALID_EMAIL)
        .env("JIRA_API_TOKEN", VALID_TOKEN)
        .env("LAUNCH_CAPTURE_FILE", &capture)
        .output()
        .expect("launcher should run");

    assert!(output.status.success(), "status: {:?}", output.status);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains(VALID_TOKEN), "stderr: {stderr}");
    assert!(
        output.stdout.is_empty(),
        "launcher stdout must stay clean for the MCP protocol: {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn home_local_uv_outranks_system_candidates() {
    let temp = tempdir().expect("can create temporary directory");
    let home = temp.path().join("home");
    let local_bin = home.join(".local/bin");
    fs::create_dir_all(&local_bin).expect("can create ~/.local/bin");
    write_fake_runtime(&local_bin.join("uv"));
    let project = temp.path().join("project");
    fs::create_dir(&project).expect("can create project dir");
    let capture = temp.path().join("capture.txt");

    let output = launcher_command()
        .arg("--project-dir")
        .arg(&project)
        .env("HOME", &home)
        .env("JIRA_URL", VALID_URL)
        .env("JIRA_EMAIL", VALID_EMAIL)
        .env("JIRA_API_TOKEN", VALID_TOKEN)
        .env("LAUNCH_CAPTURE_FILE", &capture)
        .output()
        .expect("launcher should run");

    assert!(
        output.status.success(),
        "status: {:?}, stderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        capture.exists(),
        "the ~/.local/bin/uv candidate must win the probe"
    );
}
