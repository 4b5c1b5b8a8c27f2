//! Shared fixture for the CLI integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FLIGHTS_JSON: &str = r#"{
    "departures": [
        {"ident": "AAL1234", "destination": "KDFW", "aircraft_type": "A321", "status": "En Route / On Time", "time": "2025-03-14T15:30:00Z"},
        {"ident": "SKW5521", "destination": "KORD", "aircraft_type": "CRJ9", "status": "Scheduled", "time": "2025-03-14T18:05:00Z"}
    ],
    "scheduled_arrivals": [
        {"ident": "N512XA", "origin": "KTUL", "aircraft_type": "C172", "status": "PLANNED"}
    ],
    "scheduled_departures": []
}"#;

pub const WEATHER_JSON: &str =
    r#"{"temp": 20.0, "wind_speed": 7.4, "summary": "Partly cloudy"}"#;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("fids").join("config.toml")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// `fids` with its config pointed into the temp dir
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fids").expect("Failed to find fids binary");
        cmd.arg("--config").arg(self.config_path());
        cmd
    }

    pub fn preview(&self, flights: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("preview").arg("--flights").arg(flights);
        cmd
    }
}
