//! Writing a store back to its backing file.
//!
//! Responsibilities:
//! - Serialize sections to the text format.
//! - Back up the previous file under a timestamped name.
//! - Replace the backing file with the new content.
//!
//! Does NOT handle:
//! - Reading files (see `parser.rs`).
//! - Locking against other processes touching the same path.
//!
//! Invariants:
//! - Output is deterministic: sections and keys in lexicographic order.
//! - New content is fully written to `<path>.tmp` before the old file is
//!   moved aside, so a failed write never loses the previous file.
//! - Every filesystem failure is returned to the caller.
//! - Nothing is written unless every section name and key reads back as
//!   itself.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{EnvconfError, IoOp, Result};
use crate::path::{backup_path, temp_path};
use crate::section::{has_line_break, invalid_key};
use crate::store::Store;
use crate::syntax::Syntax;

/// Where a save wrote to and where the previous file went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub backup: Option<PathBuf>,
}

impl Store {
    /// Serialize every section as text.
    ///
    /// Values that would not parse back unchanged (containing the comment
    /// marker, or with surrounding whitespace) are quoted when they contain
    /// no `"` themselves.
    pub fn render(&self) -> String {
        let syntax = self.syntax();
        let mut out = String::new();
        for (index, (name, section)) in self.iter_sections().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "[{name}]");
            for (key, value) in section.iter() {
                let _ = writeln!(out, "{key} = {}", render_value(value, syntax));
            }
        }
        out
    }

    /// Write the store to its backing path.
    ///
    /// Creates missing parent directories and renames an existing file to
    /// `<path><RFC3339 timestamp>` before the new content takes its place.
    pub fn save(&self) -> Result<SaveReport> {
        let path = self.path().ok_or(EnvconfError::NoPath)?;
        self.check_writable()?;
        let path = std::path::absolute(path).map_err(|source| EnvconfError::Io {
            op: IoOp::ResolvePath,
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EnvconfError::Io {
                op: IoOp::CreateDir,
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp = temp_path(&path);
        std::fs::write(&temp, self.render()).map_err(|source| EnvconfError::Io {
            op: IoOp::Write,
            path: temp.clone(),
            source,
        })?;

        let backup = match backup_existing(&path) {
            Ok(backup) => backup,
            Err(e) => {
                let _ = std::fs::remove_file(&temp);
                return Err(e);
            }
        };

        std::fs::rename(&temp, &path).map_err(|source| EnvconfError::Io {
            op: IoOp::Replace,
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            backup = ?backup.as_ref().map(|p| p.display().to_string()),
            "Saved config file"
        );

        Ok(SaveReport { path, backup })
    }

    /// Reject names that `section_mut` accepted but the text format cannot
    /// carry: the parser would read them back differently.
    fn check_writable(&self) -> Result<()> {
        let marker = self.syntax().comment.as_str();
        for (name, section) in self.iter_sections() {
            if name.is_empty()
                || name.trim() != name
                || has_line_break(name)
                || name.contains(marker)
            {
                return Err(EnvconfError::InvalidSectionName(name.to_string()));
            }
            if let Some(key) = section.list().into_iter().find(|key| key.contains(marker)) {
                return Err(invalid_key(&key, "the comment marker"));
            }
        }
        Ok(())
    }
}

fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = backup_path(path, chrono::Local::now());
    std::fs::rename(path, &backup).map_err(|source| EnvconfError::Io {
        op: IoOp::Backup,
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        backup = %backup.display(),
        "Backed up previous config file"
    );
    Ok(Some(backup))
}

fn render_value(value: &str, syntax: Syntax) -> String {
    let needs_quotes = value.contains(syntax.comment.as_str())
        || value.trim() != value
        || value.starts_with('"');
    if needs_quotes && !value.contains('"') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}
