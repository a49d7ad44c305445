//! Process environment access.
//!
//! Responsibilities:
//! - Read environment variables with empty values treated as unset.
//! - Write environment variables after validating name and value.
//!
//! Does NOT handle:
//! - Deciding precedence between the environment and the file (see `section.rs`).
//!
//! Invariants:
//! - An environment variable that is set to the empty string is reported as `None`.
//! - Values are returned untrimmed.
//! - Invalid names and values are rejected before reaching `std::env::set_var`,
//!   which would otherwise panic.

use crate::error::{EnvconfError, Result};

/// Read an environment variable, returning None if unset, empty, or not valid unicode.
pub fn env_var_or_none(name: &str) -> Option<String> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return None;
    }
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Set an environment variable for the current process.
///
/// The environment is process-global: callers that mutate it from several
/// threads must serialize those calls themselves.
pub fn set_env_var(name: &str, value: &str) -> Result<()> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(EnvconfError::InvalidEnvName(name.to_string()));
    }
    if value.contains('\0') {
        return Err(EnvconfError::InvalidEnvValue {
            name: name.to_string(),
        });
    }

    // SAFETY: name and value were validated above; concurrent access to the
    // environment is the caller's responsibility as documented.
    unsafe {
        std::env::set_var(name, value);
    }
    tracing::trace!(name, "Environment variable set");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_unset_and_empty() {
        let key = "_ENVCONF_TEST_ENV_VAR";
        temp_env::with_var_unset(key, || {
            assert!(env_var_or_none(key).is_none(), "Unset env var should return None");
        });
        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "Empty env var should return None");
        });
        temp_env::with_vars([(key, Some(" padded "))], || {
            assert_eq!(env_var_or_none(key), Some(" padded ".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_set_env_var_roundtrip() {
        let key = "_ENVCONF_TEST_SET_VAR";
        temp_env::with_var_unset(key, || {
            set_env_var(key, "value").unwrap();
            assert_eq!(std::env::var(key).unwrap(), "value");
        });
    }

    #[test]
    fn test_set_env_var_rejects_bad_names() {
        assert!(matches!(
            set_env_var("", "v"),
            Err(EnvconfError::InvalidEnvName(_))
        ));
        assert!(matches!(
            set_env_var("A=B", "v"),
            Err(EnvconfError::InvalidEnvName(_))
        ));
        assert!(matches!(
            set_env_var("_ENVCONF_NUL_VALUE", "a\0b"),
            Err(EnvconfError::InvalidEnvValue { .. })
        ));
    }

    #[test]
    fn test_env_var_or_none_ignores_invalid_names() {
        assert!(env_var_or_none("").is_none());
        assert!(env_var_or_none("A=B").is_none());
    }
}
