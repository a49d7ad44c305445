//! Named key/value sections and the precedence chain over them.
//!
//! Responsibilities:
//! - Store raw string values for one section.
//! - Resolve a setting across the section map, the process environment,
//!   and a caller default, in an explicit order.
//! - Offer typed accessors on top of the config-only lookup.
//!
//! Does NOT handle:
//! - Choosing which section is addressed (see `store.rs`).
//! - Reading or writing files.
//!
//! Invariants:
//! - Keys are unique and never empty.
//! - Keys hold no `=` or line break; values hold no line break. Anything put
//!   into a section can be written as one `key = value` line.
//! - `get_conf` consults the map only; `get_env` the environment only;
//!   `fetch` map then environment; `get` environment then map.
//! - A key present in the map wins even if its value is empty; an environment
//!   variable set to the empty string counts as unset.

use std::collections::BTreeMap;

use crate::env::{env_var_or_none, set_env_var};
use crate::error::{EnvconfError, Result};
use crate::value::Value;

/// One candidate source in a precedence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// Look the key up in the section map.
    Config(&'a str),
    /// Look the name up in the process environment.
    Env(&'a str),
}

pub(crate) fn has_line_break(text: &str) -> bool {
    text.contains(['\r', '\n'])
}

pub(crate) fn invalid_key(key: &str, reason: &'static str) -> EnvconfError {
    EnvconfError::InvalidKey {
        key: key.to_string(),
        reason,
    }
}

/// A flat mapping of keys to raw string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: BTreeMap<String, String>,
}

impl Section {
    pub(crate) const EMPTY: Section = Section {
        entries: BTreeMap::new(),
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Use an empty `value` for a key without one.
    ///
    /// The key is trimmed; an empty key, a key containing `=` or a line
    /// break, and a value containing a line break are rejected.
    pub fn put(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Result<()> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(EnvconfError::EmptyKey);
        }
        if key.contains('=') {
            return Err(invalid_key(key, "'='"));
        }
        if has_line_break(key) {
            return Err(invalid_key(key, "a line break"));
        }
        let value = value.into();
        if has_line_break(&value) {
            return Err(EnvconfError::InvalidValue {
                key: key.to_string(),
            });
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Walk `sources` in order and return the first hit.
    pub fn resolve(&self, sources: &[Source<'_>]) -> Option<Value> {
        sources.iter().find_map(|source| match *source {
            Source::Config(key) => self.entries.get(key).map(|raw| Value::new(raw.as_str())),
            Source::Env(name) => env_var_or_none(name).map(Value::from),
        })
    }

    fn resolve_or(&self, sources: &[Source<'_>], default: &str) -> Value {
        self.resolve(sources).unwrap_or_else(|| Value::from(default))
    }

    /// Section map only; empty when absent.
    pub fn get_conf(&self, key: &str) -> Value {
        self.get_conf_or(key, "")
    }

    pub fn get_conf_or(&self, key: &str, default: &str) -> Value {
        self.resolve_or(&[Source::Config(key)], default)
    }

    /// Process environment only; empty when unset.
    pub fn get_env(&self, name: &str) -> Value {
        self.get_env_or(name, "")
    }

    pub fn get_env_or(&self, name: &str, default: &str) -> Value {
        self.resolve_or(&[Source::Env(name)], default)
    }

    /// Section map first, then the environment variable `env_key`.
    pub fn fetch(&self, conf_key: &str, env_key: &str) -> Value {
        self.fetch_or(conf_key, env_key, "")
    }

    pub fn fetch_or(&self, conf_key: &str, env_key: &str, default: &str) -> Value {
        self.resolve_or(&[Source::Config(conf_key), Source::Env(env_key)], default)
    }

    /// Environment variable `env_key` first, then the section map under `conf_key`.
    pub fn get(&self, env_key: &str, conf_key: &str) -> Value {
        self.get_or(env_key, conf_key, "")
    }

    pub fn get_or(&self, env_key: &str, conf_key: &str, default: &str) -> Value {
        self.resolve_or(&[Source::Env(env_key), Source::Config(conf_key)], default)
    }

    pub fn string(&self, key: &str) -> String {
        self.get_conf(key).into_string()
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.get_conf_or(key, default).into_string()
    }

    pub fn int(&self, key: &str) -> i64 {
        self.get_conf(key).as_int()
    }

    /// `default` applies only when the key is absent; a malformed value still yields 0.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.typed_or(key, default, |value| value.as_int())
    }

    pub fn uint(&self, key: &str) -> u64 {
        self.get_conf(key).as_uint()
    }

    pub fn uint_or(&self, key: &str, default: u64) -> u64 {
        self.typed_or(key, default, |value| value.as_uint())
    }

    pub fn bool(&self, key: &str) -> bool {
        self.get_conf(key).as_bool()
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.typed_or(key, default, |value| value.as_bool())
    }

    pub fn float(&self, key: &str) -> f64 {
        self.get_conf(key).as_float()
    }

    pub fn float_or(&self, key: &str, default: f64) -> f64 {
        self.typed_or(key, default, |value| value.as_float())
    }

    fn typed_or<T>(&self, key: &str, default: T, convert: impl FnOnce(&Value) -> T) -> T {
        match self.resolve(&[Source::Config(key)]) {
            Some(value) => convert(&value),
            None => default,
        }
    }

    /// Keys currently stored, in lexicographic order.
    pub fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Environment lookup that ignores the section map.
    pub fn getenv(&self, name: &str) -> Option<String> {
        env_var_or_none(name)
    }

    /// Environment write that ignores the section map.
    pub fn setenv(&self, name: &str, value: &str) -> Result<()> {
        set_env_var(name, value)
    }

    pub(crate) fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}
