#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated environment: its own HOME (so no user config leaks in)
/// and its own storage root.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("clocks")
    }

    /// `punchclock --root <root> ...` with HOME pointed at the sandbox.
    pub fn pc(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("punchclock");
        cmd.env("HOME", self.home())
            .arg("--root")
            .arg(self.root());
        cmd
    }

    pub fn record(&self, name: &str) -> PathBuf {
        self.root().join(format!("pc_{name}.json"))
    }

    /// Write a raw record, bypassing the CLI, to control timestamps.
    pub fn write_record(&self, name: &str, json: &str) {
        fs::create_dir_all(self.root()).expect("create root");
        fs::write(self.record(name), json).expect("write record");
    }

    pub fn read_record(&self, name: &str) -> String {
        read(&self.record(name))
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}
