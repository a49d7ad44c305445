//! Store loading for command execution.
//!
//! Responsibilities:
//! - Resolve which file the CLI operates on.
//! - Build the `Store` with the syntax and section chosen on the command line.
//!
//! Does NOT handle:
//! - CLI argument definitions (see `args` module).
//! - Exporting file values into the environment; the CLI only inspects files.
//!
//! Invariants:
//! - `--file` (or `ENVCONF_FILE`) wins over the façade's `$ENV`/`.env` default.
//! - A missing file yields an empty store that still points at the path.

use envconf::{Store, Syntax};
use std::path::PathBuf;

use crate::args::Cli;

/// The file the CLI operates on.
pub(crate) fn config_file(cli: &Cli) -> PathBuf {
    cli.file
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(envconf_dotenv::env_file_path)
}

/// Load the store for this invocation, scoped to `--section`.
pub(crate) fn load_store(cli: &Cli) -> Store {
    let path = config_file(cli);
    tracing::debug!(path = %path.display(), section = %cli.section, "Loading config file");
    Store::builder()
        .with_path(path)
        .with_syntax(Syntax::new(cli.comment.into()))
        .with_section(cli.section.clone())
        .load()
}
