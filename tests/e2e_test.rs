mod e2e;

use e2e::TmuxHarness;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_vizdeck")
}

/// Check if tmux is available, skip test if not
fn require_tmux() -> bool {
    std::process::Command::new("tmux")
        .arg("-V")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_displays_control_page() {
    if !require_tmux() {
        eprintln!("tmux not found, skipping test");
        return;
    }

    let harness = TmuxHarness::new("control");
    if let Err(e) = harness.start(binary_path()) {
        eprintln!("tmux session unavailable ({}), skipping test", e);
        return;
    }

    harness
        .wait_for_text("TouchDesigner Control", TIMEOUT)
        .expect("Should display the header title");
    harness
        .wait_for_text("Brightness", TIMEOUT)
        .expect("Should display the brightness section");

    let screen = harness.capture_screen().expect("Should capture screen");
    assert!(screen.contains("Visual"), "Screen:\n{}", screen);
    assert!(screen.contains("LIVE"), "Screen:\n{}", screen);
}

#[test]
fn test_live_toggle_and_pane_switch() {
    if !require_tmux() {
        eprintln!("tmux not found, skipping test");
        return;
    }

    let harness = TmuxHarness::new("toggle");
    if let Err(e) = harness.start(binary_path()) {
        eprintln!("tmux session unavailable ({}), skipping test", e);
        return;
    }
    harness
        .wait_for_text("TouchDesigner Control", TIMEOUT)
        .expect("App should start");

    harness.send_key("Space").expect("Failed to send Space");
    harness
        .wait_for_text("OFFLINE", TIMEOUT)
        .expect("Space should switch live mode off");

    harness.send_key("F3").expect("Failed to send F3");
    harness
        .wait_for_text("Performance (paused)", TIMEOUT)
        .expect("F3 should show the telemetry page");
}

#[test]
fn test_quit_with_q() {
    if !require_tmux() {
        eprintln!("tmux not found, skipping test");
        return;
    }

    let harness = TmuxHarness::new("quit");
    if let Err(e) = harness.start(binary_path()) {
        eprintln!("tmux session unavailable ({}), skipping test", e);
        return;
    }
    harness
        .wait_for_text("TouchDesigner Control", TIMEOUT)
        .expect("App should start");

    assert!(harness.is_running(), "App should be running initially");

    harness.send_key("q").expect("Failed to send 'q'");

    harness
        .wait_for_exit(TIMEOUT)
        .expect("App should exit after pressing q");

    assert!(!harness.is_running(), "App should have exited");
}
