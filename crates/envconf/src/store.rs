//! The configuration store: named sections plus the current-section selector.
//!
//! Responsibilities:
//! - Own every section and create them on demand.
//! - Route unscoped lookups and mutations to the current section.
//! - Load the backing file through `StoreBuilder`.
//!
//! Does NOT handle:
//! - Line-level parsing (see `parser.rs`).
//! - Writing the backing file (see `persistence.rs`).
//!
//! Invariants:
//! - The `main` section exists from construction onward.
//! - Reads take `&self` and mutations `&mut self`; sharing a store across
//!   threads means putting the whole store behind one lock, which then covers
//!   section creation and per-section mutation alike.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::env::{env_var_or_none, set_env_var};
use crate::error::Result;
use crate::parser::{Sections, parse_file};
use crate::path::expand_home;
use crate::section::{Section, Source, invalid_key};
use crate::syntax::Syntax;
use crate::value::Value;

/// Name of the implicit default section.
pub const DEFAULT_SECTION: &str = "main";

static EMPTY_SECTION: Section = Section::EMPTY;

/// Sections keyed by name, a backing path, and the current section name.
#[derive(Debug, Clone)]
pub struct Store {
    sections: Sections,
    current: String,
    path: Option<PathBuf>,
    syntax: Syntax,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty in-memory store with no backing file.
    pub fn new() -> Self {
        let mut sections = Sections::new();
        sections.insert(DEFAULT_SECTION.to_string(), Section::new());
        Self {
            sections,
            current: DEFAULT_SECTION.to_string(),
            path: None,
            syntax: Syntax::default(),
        }
    }

    /// Load `path` with the default syntax. See [`StoreBuilder::load`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        StoreBuilder::new().with_path(path).load()
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// The named section, or an empty one if it has never been created.
    pub fn section(&self, name: &str) -> &Section {
        self.sections.get(name).unwrap_or(&EMPTY_SECTION)
    }

    /// The named section, created if absent.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in lexicographic order.
    pub fn sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    pub(crate) fn iter_sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    pub fn current_section(&self) -> &str {
        &self.current
    }

    /// Change the scope used by the unscoped accessors.
    pub fn set_current_section(&mut self, name: impl Into<String>) {
        self.current = name.into();
    }

    fn current(&self) -> &Section {
        self.section(&self.current)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Set the backing path used by `save`. A leading `~` is expanded.
    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        self.path = Some(expand_home(path));
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Insert or overwrite `key` in the current section.
    ///
    /// On top of [`Section::put`], a key containing this store's comment
    /// marker is rejected.
    pub fn put(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Result<()> {
        let key = key.as_ref();
        if key.contains(self.syntax.comment.as_str()) {
            return Err(invalid_key(key.trim(), "the comment marker"));
        }
        let current = self.current.clone();
        self.section_mut(&current).put(key, value)
    }

    pub fn list(&self) -> Vec<String> {
        self.current().list()
    }

    pub fn resolve(&self, sources: &[Source<'_>]) -> Option<Value> {
        self.current().resolve(sources)
    }

    pub fn get_conf(&self, key: &str) -> Value {
        self.current().get_conf(key)
    }

    pub fn get_conf_or(&self, key: &str, default: &str) -> Value {
        self.current().get_conf_or(key, default)
    }

    pub fn get_env(&self, name: &str) -> Value {
        self.current().get_env(name)
    }

    pub fn get_env_or(&self, name: &str, default: &str) -> Value {
        self.current().get_env_or(name, default)
    }

    /// Config first, then environment. See [`Section::fetch`].
    pub fn fetch(&self, conf_key: &str, env_key: &str) -> Value {
        self.current().fetch(conf_key, env_key)
    }

    pub fn fetch_or(&self, conf_key: &str, env_key: &str, default: &str) -> Value {
        self.current().fetch_or(conf_key, env_key, default)
    }

    /// Environment first, then config. See [`Section::get`].
    pub fn get(&self, env_key: &str, conf_key: &str) -> Value {
        self.current().get(env_key, conf_key)
    }

    pub fn get_or(&self, env_key: &str, conf_key: &str, default: &str) -> Value {
        self.current().get_or(env_key, conf_key, default)
    }

    pub fn string(&self, key: &str) -> String {
        self.current().string(key)
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.current().string_or(key, default)
    }

    pub fn int(&self, key: &str) -> i64 {
        self.current().int(key)
    }

    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.current().int_or(key, default)
    }

    pub fn uint(&self, key: &str) -> u64 {
        self.current().uint(key)
    }

    pub fn uint_or(&self, key: &str, default: u64) -> u64 {
        self.current().uint_or(key, default)
    }

    pub fn bool(&self, key: &str) -> bool {
        self.current().bool(key)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.current().bool_or(key, default)
    }

    pub fn float(&self, key: &str) -> f64 {
        self.current().float(key)
    }

    pub fn float_or(&self, key: &str, default: f64) -> f64 {
        self.current().float_or(key, default)
    }

    pub fn getenv(&self, name: &str) -> Option<String> {
        env_var_or_none(name)
    }

    pub fn setenv(&self, name: &str, value: &str) -> Result<()> {
        set_env_var(name, value)
    }

    /// Copy every key of `section` into the process environment.
    ///
    /// Keys or values the environment cannot hold are logged and skipped.
    /// Returns the number of variables set.
    pub fn export_env(&self, section: &str) -> usize {
        let mut exported = 0;
        for (key, value) in self.section(section).iter() {
            match set_env_var(key, value) {
                Ok(()) => exported += 1,
                Err(e) => tracing::warn!(key, error = %e, "Skipping key that cannot be exported"),
            }
        }
        exported
    }

    /// Plain nested maps of every section, for serialization by callers.
    pub fn snapshot(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        self.sections
            .iter()
            .map(|(name, section)| (name.clone(), section.entries().clone()))
            .collect()
    }
}

/// Builder for a [`Store`] backed by a file.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    path: Option<PathBuf>,
    syntax: Syntax,
    section: Option<String>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backing file. A leading `~` is expanded to the home directory.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(expand_home(path));
        self
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Initial current section (defaults to `main`).
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        self.section = Some(name.into());
        self
    }

    /// Build the store, parsing the backing file if one was given.
    ///
    /// A missing or unreadable file is logged and yields an empty store that
    /// keeps the path, so a later `save` creates the file.
    pub fn load(self) -> Store {
        let mut store = Store::new();
        store.syntax = self.syntax;
        if let Some(name) = self.section {
            store.current = name;
        }
        if let Some(path) = self.path {
            if let Some(sections) = parse_file(&path, self.syntax) {
                store.sections.extend(sections);
            }
            store.path = Some(path);
        }
        store
    }
}
