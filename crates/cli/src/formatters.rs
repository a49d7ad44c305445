//! Output formatting for command results.
//!
//! Responsibilities:
//! - Render values, key lists, and whole stores as text or JSON.
//!
//! Invariants:
//! - Text output of a single value is the raw value, so scripts can use it directly.
//! - JSON output is always a single document followed by a newline.

use anyhow::Result;
use envconf::{SaveReport, Store};
use serde::Serialize;
use std::path::Path;

use crate::args::OutputFormat;

#[derive(Serialize)]
struct ValueOutput<'a> {
    section: &'a str,
    key: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct SaveOutput<'a> {
    path: &'a Path,
    backup: Option<&'a Path>,
}

pub(crate) fn format_value(
    format: OutputFormat,
    section: &str,
    key: &str,
    value: &str,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ValueOutput {
            section,
            key,
            value,
        })?),
    }
}

pub(crate) fn format_names(format: OutputFormat, names: &[String]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(names.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
    }
}

pub(crate) fn format_store(format: OutputFormat, store: &Store) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(store.render().trim_end().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&store.snapshot())?),
    }
}

pub(crate) fn format_save(format: OutputFormat, report: &SaveReport) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match &report.backup {
            Some(backup) => format!(
                "Saved {} (previous file backed up to {})",
                report.path.display(),
                backup.display()
            ),
            None => format!("Saved {}", report.path.display()),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SaveOutput {
            path: &report.path,
            backup: report.backup.as_deref(),
        })?),
    }
}
