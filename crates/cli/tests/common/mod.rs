// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A working directory holding `result.txt` and `answer.txt`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new(actual: &str, expected: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("result.txt"), actual).unwrap();
        std::fs::write(dir.path().join("answer.txt"), expected).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `resultcheck` running inside this workspace with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_resultcheck"));
        cmd.current_dir(self.path())
            .env_remove("RESULTCHECK_ACTUAL")
            .env_remove("RESULTCHECK_EXPECTED")
            .env_remove("RESULTCHECK_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
