//! Isolated metaphorever home directories for integration tests

#![allow(dead_code)]

use assert_cmd::prelude::*;
use metaphorever::core::dirs::HOME_ENV;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestHome {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestHome {
    pub fn data_dir(&self) -> PathBuf {
        self.path.join("data")
    }

    /// `metaphorever` bound to this home, offline and without colors.
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("metaphorever")?;
        cmd.env(HOME_ENV, &self.path)
            .env_remove("OPENAI_API_KEY")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    pub fn write_key(&self, key: &str, value: &Value) -> anyhow::Result<()> {
        write_json(&self.data_dir().join(format!("{key}.json")), value)
    }

    pub fn write_config(&self, value: &Value) -> anyhow::Result<()> {
        write_json(&self.path.join("config.json"), value)
    }

    pub fn read_key(&self, key: &str) -> anyhow::Result<Value> {
        let content = fs::read_to_string(self.data_dir().join(format!("{key}.json")))?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn setup_test_home() -> anyhow::Result<TestHome> {
    let dir = TempDir::new()?;
    let path = dir.path().to_path_buf();
    fs::create_dir_all(path.join("data"))?;
    Ok(TestHome { dir, path })
}

fn write_json(path: &Path, value: &Value) -> anyhow::Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
