//! Shared helpers for integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the sequence fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// `synapsis` with config, data dir and colors isolated in a temp dir.
pub fn synapsis(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("synapsis").unwrap();
    cmd.env("SYNAPSIS_CONFIG", home.path().join("config.toml"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("NO_COLOR", "1")
        .env_remove("SYNAPSIS_LOG")
        .env_remove("RUST_LOG");
    cmd
}
