//! Text-format ingestion.
//!
//! Responsibilities:
//! - Turn the backing file's text into named sections.
//! - Read the backing file from disk, degrading to nothing when it is absent.
//!
//! Does NOT handle:
//! - Writing files (see `persistence.rs`).
//! - Home-directory expansion of the path (see `path.rs`).
//!
//! Invariants:
//! - Parsing starts in the `main` section.
//! - Malformed lines (no `=`, empty key) are dropped without error.
//! - The key comes from the comment-stripped line; the value is re-extracted
//!   from the raw line so a quoted value may contain the comment marker.
//! - A missing or unreadable file is never an error to the caller.
//! - Invalid UTF-8 is replaced, never fatal; a leading byte-order mark is ignored.

use std::collections::BTreeMap;
use std::path::Path;

use crate::section::Section;
use crate::store::DEFAULT_SECTION;
use crate::syntax::Syntax;

/// Sections parsed from one file, keyed by name.
pub type Sections = BTreeMap<String, Section>;

/// Parse file contents into sections.
///
/// The returned map always contains the `main` section.
pub fn parse_str(text: &str, syntax: Syntax) -> Sections {
    let mut sections = Sections::new();
    let mut current = DEFAULT_SECTION.to_string();
    sections.insert(current.clone(), Section::new());

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for (index, raw) in text.lines().enumerate() {
        let line = syntax.strip_comment(raw);

        if let Some(name) = section_header(line) {
            current = name.to_string();
            sections.entry(current.clone()).or_default();
            continue;
        }

        let Some((lhs, _)) = line.split_once('=') else {
            if !line.trim().is_empty() {
                tracing::trace!(line = index + 1, "Skipping line without '='");
            }
            continue;
        };
        let key = lhs.trim();
        if key.is_empty() {
            tracing::trace!(line = index + 1, "Skipping line with empty key");
            continue;
        }

        let value = raw
            .split_once('=')
            .map(|(_, rhs)| parse_value(rhs.trim(), syntax))
            .unwrap_or_default();

        if let Err(e) = sections.entry(current.clone()).or_default().put(key, value) {
            tracing::trace!(line = index + 1, error = %e, "Skipping line");
        }
    }

    sections
}

/// Normalize the right-hand side of an assignment.
///
/// A value starting with `"` yields the text up to the next `"` (or the rest
/// of the input when unclosed), verbatim. Anything else is cut at the comment
/// marker and trimmed.
pub fn parse_value(raw: &str, syntax: Syntax) -> String {
    if let Some(quoted) = raw.strip_prefix('"') {
        let end = quoted.find('"').unwrap_or(quoted.len());
        return quoted[..end].to_string();
    }
    syntax.strip_comment(raw).trim().to_string()
}

fn section_header(line: &str) -> Option<&str> {
    let name = line.trim().strip_prefix('[')?.strip_suffix(']')?.trim();
    (!name.is_empty()).then_some(name)
}

/// Parse the file at `path`, or return `None` (after logging) when it cannot be read.
pub(crate) fn parse_file(path: &Path, syntax: Syntax) -> Option<Sections> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            if matches!(text, std::borrow::Cow::Owned(_)) {
                tracing::warn!(
                    path = %path.display(),
                    "Config file is not valid UTF-8, replaced invalid bytes"
                );
            }
            let sections = parse_str(&text, syntax);
            tracing::debug!(
                path = %path.display(),
                sections = sections.len(),
                "Config file loaded"
            );
            Some(sections)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to load config file, skipped it"
            );
            None
        }
    }
}
