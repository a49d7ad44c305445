//! Process-wide configuration loaded from a default env file.
//!
//! Responsibilities:
//! - Locate the default file (`.env`, or the path named by `ENV`).
//! - Load it into an [`envconf::Store`] and mirror its `main` keys into the
//!   process environment.
//! - Offer an optional lazily-initialized singleton with free-function accessors.
//!
//! Does NOT handle:
//! - Parsing or precedence rules (see the `envconf` crate).
//!
//! Invariants / Assumptions:
//! - A missing file never fails loading; it yields an empty store.
//! - `DOTENV_DISABLED` set to "true" or "1" skips reading the file entirely.
//! - The singleton is read-only once initialized. Prefer passing a `Store`
//!   explicitly; the singleton exists for the outermost layer of a program.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use envconf::{DEFAULT_SECTION, Store, env_var_or_none, expand_home};

/// Default file name when `ENV` is not set.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment variable naming an alternate file.
pub const ENV_FILE_VAR: &str = "ENV";

/// Environment variable that disables loading when set to "true" or "1".
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

static STORE: OnceLock<Store> = OnceLock::new();

/// The file the façade reads: `$ENV` if set and non-empty, else `.env`.
pub fn env_file_path() -> PathBuf {
    env_var_or_none(ENV_FILE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

/// Check if loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load the default file. See [`load_from`].
pub fn load() -> Store {
    load_from(env_file_path())
}

/// Load `path` and export its `main` section into the process environment.
///
/// Returns an empty store (still pointing at `path`) when the file is
/// missing or loading is disabled.
pub fn load_from(path: impl AsRef<Path>) -> Store {
    let path = expand_home(path);
    let path = path.as_path();
    if dotenv_disabled() {
        tracing::debug!(path = %path.display(), "Env file loading disabled");
        let mut store = Store::new();
        store.set_path(path);
        return store;
    }
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No env file, using empty configuration");
        let mut store = Store::new();
        store.set_path(path);
        return store;
    }

    let store = Store::open(path);
    let exported = store.export_env(DEFAULT_SECTION);
    tracing::debug!(path = %path.display(), exported, "Env file loaded");
    store
}

/// Initialize the process-wide store on first call and return it.
pub fn init() -> &'static Store {
    STORE.get_or_init(load)
}

/// The process-wide store, loading it if needed.
pub fn env_conf() -> &'static Store {
    init()
}

pub fn string(name: &str) -> String {
    init().string(name)
}

pub fn string_or(name: &str, default: &str) -> String {
    init().string_or(name, default)
}

pub fn int(name: &str) -> i64 {
    init().int(name)
}

pub fn int_or(name: &str, default: i64) -> i64 {
    init().int_or(name, default)
}

pub fn uint(name: &str) -> u64 {
    init().uint(name)
}

pub fn uint_or(name: &str, default: u64) -> u64 {
    init().uint_or(name, default)
}

pub fn bool(name: &str) -> bool {
    init().bool(name)
}

pub fn bool_or(name: &str, default: bool) -> bool {
    init().bool_or(name, default)
}

pub fn float(name: &str) -> f64 {
    init().float(name)
}

pub fn float_or(name: &str, default: f64) -> f64 {
    init().float_or(name, default)
}
