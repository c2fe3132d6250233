//! Drives the real binary inside a detached tmux session.

use std::process::Command;
use std::time::{Duration, Instant};

pub struct TmuxHarness {
    session: String,
}

impl TmuxHarness {
    pub fn new(name: &str) -> Self {
        Self {
            session: format!("vizdeck-e2e-{}-{}", name, std::process::id()),
        }
    }

    fn tmux(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new("tmux")
            .args(args)
            .output()
            .map_err(|e| format!("failed to run tmux: {}", e))?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(String::from_utf8_lossy(&output.stderr).into_owned())
        }
    }

    /// Start `binary` in a 100x32 detached session
    pub fn start(&self, binary: &str) -> Result<(), String> {
        self.tmux(&[
            "new-session", "-d", "-s", &self.session, "-x", "100", "-y", "32", binary,
        ])
        .map(|_| ())
    }

    pub fn capture_screen(&self) -> Result<String, String> {
        self.tmux(&["capture-pane", "-p", "-t", &self.session])
    }

    pub fn send_key(&self, key: &str) -> Result<(), String> {
        self.tmux(&["send-keys", "-t", &self.session, key]).map(|_| ())
    }

    pub fn is_running(&self) -> bool {
        self.tmux(&["has-session", "-t", &self.session]).is_ok()
    }

    /// Poll the screen until it contains `text`
    pub fn wait_for_text(&self, text: &str, timeout: Duration) -> Result<(), String> {
        let start = Instant::now();
        let mut last = String::new();
        while start.elapsed() < timeout {
            if let Ok(screen) = self.capture_screen() {
                if screen.contains(text) {
                    return Ok(());
                }
                last = screen;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        Err(format!("'{}' not found within {:?}\nScreen:\n{}", text, timeout, last))
    }

    pub fn wait_for_exit(&self, timeout: Duration) -> Result<(), String> {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if !self.is_running() {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        Err(format!("session {} still running after {:?}", self.session, timeout))
    }
}

impl Drop for TmuxHarness {
    fn drop(&mut self) {
        let _ = self.tmux(&["kill-session", "-t", &self.session]);
    }
}
