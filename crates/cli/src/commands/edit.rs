//! Commands that modify the config file.

use anyhow::{Context, Result};
use envconf::Store;

use crate::args::OutputFormat;
use crate::formatters::format_save;

/// Set `key` in the current section and save, backing up the previous file.
pub fn set(mut store: Store, key: &str, value: &str, output: OutputFormat) -> Result<()> {
    let section = store.current_section().to_string();
    store
        .put(key, value)
        .with_context(|| format!("Failed to set '{key}' in section [{section}]"))?;
    let report = store.save().context("Failed to save config file")?;
    println!("{}", format_save(output, &report)?);
    Ok(())
}
