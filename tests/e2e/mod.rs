//! End-to-end test modules for the unipkg CLI
//!
//! These tests run the built binary as a black box with `assert_cmd`. Anything
//! that reaches a package manager runs against shell scripts standing in for
//! `yay`, `flatpak`, `snap` and `sudo`, with `PATH` pointing only at them.

pub mod interactive_tests;
pub mod usage_tests;

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Replaced with the call log path in fake scripts.
const LOG_MARKER: &str = "@LOG@";

/// A directory of fake package managers that log every call.
pub struct FakeBackends {
    dir: TempDir,
    log: PathBuf,
}

impl FakeBackends {
    /// An empty `PATH`: no backend is installed.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("calls.log");
        Self { dir, log }
    }

    /// Fake yay, flatpak, snap and sudo that print and log their arguments.
    pub fn all() -> Self {
        Self::empty()
            .with_logging_script("yay", "")
            .with_logging_script("flatpak", "")
            .with_logging_script("snap", "")
            .with_script("sudo", "echo \"sudo $*\" >> '@LOG@'\nexec \"$@\"")
    }

    /// Writes an executable `#!/bin/sh` script named `name`.
    ///
    /// `@LOG@` in `body` is replaced with the call log path.
    pub fn with_script(self, name: &str, body: &str) -> Self {
        let path = self.dir.path().join(name);
        let body = body.replace(LOG_MARKER, &self.log.display().to_string());
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    /// A script that logs and echoes `name args...`, then runs `extra`.
    pub fn with_logging_script(self, name: &str, extra: &str) -> Self {
        let body = format!(
            "echo \"{name} $*\" >> '@LOG@'\necho \"[{name}] $*\"\n{extra}"
        );
        self.with_script(name, &body)
    }

    /// The unipkg binary with `PATH` restricted to the fakes.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("unipkg").unwrap();
        cmd.env_clear()
            .env("PATH", self.dir.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0");
        cmd
    }

    /// Every logged call, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
