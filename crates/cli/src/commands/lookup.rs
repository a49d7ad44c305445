//! Lookup commands: one per precedence order.
//!
//! Responsibilities:
//! - Resolve a single setting through the `envconf` precedence chains.
//! - Report a miss as `NotFound` when no default was supplied.
//!
//! Invariants:
//! - `conf` reads the file only, `env` the environment only, `fetch` the file
//!   then the environment, `get` the environment then the file.

use anyhow::Result;
use envconf::{Source, Store};

use crate::args::OutputFormat;
use crate::error::NotFound;
use crate::formatters::format_value;

/// Which sources a lookup consults, in order.
pub enum Lookup {
    Conf { key: String },
    Env { name: String },
    Fetch { conf_key: String, env_key: String },
    Get { env_key: String, conf_key: String },
}

impl Lookup {
    fn sources(&self) -> Vec<Source<'_>> {
        match self {
            Lookup::Conf { key } => vec![Source::Config(key)],
            Lookup::Env { name } => vec![Source::Env(name)],
            Lookup::Fetch { conf_key, env_key } => {
                vec![Source::Config(conf_key), Source::Env(env_key)]
            }
            Lookup::Get { env_key, conf_key } => {
                vec![Source::Env(env_key), Source::Config(conf_key)]
            }
        }
    }

    /// Name shown in output and error messages.
    fn label(&self) -> &str {
        match self {
            Lookup::Conf { key } => key.as_str(),
            Lookup::Env { name } => name.as_str(),
            Lookup::Fetch { conf_key, .. } | Lookup::Get { conf_key, .. } => conf_key.as_str(),
        }
    }
}

/// Resolve `lookup` against the store's current section.
pub fn resolve(store: &Store, lookup: &Lookup, default: Option<&str>) -> Result<String> {
    match store.resolve(&lookup.sources()) {
        Some(value) => Ok(value.into_string()),
        None => match default {
            Some(default) => Ok(default.to_string()),
            None => Err(NotFound(format!(
                "'{}' in section [{}]",
                lookup.label(),
                store.current_section()
            ))
            .into()),
        },
    }
}

pub fn run(
    store: &Store,
    lookup: Lookup,
    default: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let value = resolve(store, &lookup, default)?;
    println!(
        "{}",
        format_value(output, store.current_section(), lookup.label(), &value)?
    );
    Ok(())
}
