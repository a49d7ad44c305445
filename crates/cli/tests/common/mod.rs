//! Shared test utilities for envconf integration tests.
//!
//! Invariants / Assumptions:
//! - Commands are hermetic: variables that pick the config file are cleared,
//!   so each test controls the file through `--file` or `current_dir`.

use assert_cmd::Command;

/// Returns a hermetic `envconf` command for integration testing.
pub fn envconf_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envconf");

    cmd.env_remove("ENVCONF_FILE")
        .env_remove("ENV")
        .env_remove("DOTENV_DISABLED")
        .env_remove("RUST_LOG");

    cmd
}
