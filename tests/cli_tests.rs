//! CLI integration tests

use std::process::Command;

fn toast_notify_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_toast-notify"));
    // Keep the user's config file out of the picture
    cmd.env("XDG_CONFIG_HOME", "/nonexistent")
        .env("HOME", "/nonexistent")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let output = toast_notify_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--hero"));
    assert!(stdout.contains("--alarm"));
    assert!(stdout.contains("--choices"));
    assert!(stdout.contains("--progress"));
    assert!(stdout.contains("--status"));
    assert!(stdout.contains("--timeout"));
    assert!(stdout.contains("--json"));
}

#[test]
fn version_output() {
    let output = toast_notify_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("toast-notify"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage() {
    let output = toast_notify_bin()
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
}

#[test]
fn title_alone_prints_usage() {
    let output = toast_notify_bin()
        .arg("Only a title")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
}

#[test]
fn json_toast_reports_success_flag() {
    let output = toast_notify_bin()
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["Build", "Done", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should be JSON");
    assert!(value["success"].is_boolean(), "got: {}", stdout);
}

#[test]
fn json_progress_reports_success_flag() {
    let output = toast_notify_bin()
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["Build", "--progress", "0.5", "--status", "Halfway", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should be JSON");
    assert!(value["success"].is_boolean(), "got: {}", stdout);
}

#[test]
fn json_choice_has_choice_and_label() {
    let output = toast_notify_bin()
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["Proceed?", "--choices", "Yes", "No", "--timeout", "0", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should be JSON");
    let object = value.as_object().expect("JSON object");
    assert!(object.contains_key("choice"));
    assert!(object.contains_key("label"));
}
