//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map errors raised by commands to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 4 means a lookup found no value and no default was given.

use thiserror::Error;

/// A lookup that found nothing in any source and had no default.
#[derive(Debug, Error)]
#[error("No value found for {0}")]
pub struct NotFound(pub String);

/// Structured exit codes for envconf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O failure, invalid input, or anything unclassified.
    GeneralError = 1,

    /// Value not found - no source had the key and no default was given.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.chain().any(|cause| cause.is::<NotFound>()) {
            return ExitCode::NotFound;
        }
        ExitCode::GeneralError
    }
}
