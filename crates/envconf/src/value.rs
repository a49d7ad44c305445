//! Typed view over a raw configuration string.
//!
//! Responsibilities:
//! - Convert a raw string to integers, booleans, and floats on demand.
//!
//! Invariants:
//! - Conversions never fail visibly: malformed input yields the zero value
//!   of the target type (`0`, `0.0`, `false`).
//! - Nothing here panics or logs.

use std::fmt;

/// A single resolved setting, as read from the file, the environment, or a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw string, unchanged.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Base-10 signed integer, or `0` when the raw string is not one
    /// (out-of-range input included).
    pub fn as_int(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }

    /// Base-10 unsigned integer, or `0`. Signs are rejected.
    pub fn as_uint(&self) -> u64 {
        if self.0.starts_with(['+', '-']) {
            return 0;
        }
        self.0.parse().unwrap_or(0)
    }

    /// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`;
    /// anything else is `false`.
    pub fn as_bool(&self) -> bool {
        matches!(self.0.as_str(), "1" | "t" | "T" | "TRUE" | "true" | "True")
    }

    pub fn as_float(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
