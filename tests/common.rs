#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

/// Isolated home + database for one test.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let db = dir.path().join("timeclock.sqlite").to_string_lossy().to_string();
        Self { dir, db }
    }

    /// `timeclock --db <db>` with the config directory pointed at the temp dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("timeclock");
        cmd.env("TIMECLOCK_HOME", self.dir.path())
            .args(["--db", &self.db]);
        cmd
    }

    pub fn out_path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }

    /// Initialize the DB and register one employee (id 1).
    pub fn init_with_employee(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
        self.cmd()
            .args(["employee", "add", "Ana", "123", "Clerk"])
            .assert()
            .success();
    }
}
