//! Environment variable helpers

use thiserror::Error;

/// Error raised when a required environment variable is missing or empty
#[derive(Debug, Error)]
#[error("{name} not found in environment variables. Please set it in your .env file or shell.")]
pub struct MissingEnvVar {
    /// Name of the missing variable
    pub name: String,
}

/// Read a required environment variable
///
/// Returns an error suitable for a startup diagnostic when the variable is
/// absent or empty.
pub fn require_env(name: &str) -> Result<String, MissingEnvVar> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingEnvVar {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_present() {
        unsafe {
            std::env::set_var("CHAT_UTILS_TEST_VAR", "value");
        }
        assert_eq!(require_env("CHAT_UTILS_TEST_VAR").unwrap(), "value");
        unsafe {
            std::env::remove_var("CHAT_UTILS_TEST_VAR");
        }
    }

    #[test]
    fn test_require_env_missing() {
        unsafe {
            std::env::remove_var("CHAT_UTILS_TEST_MISSING");
        }
        let err = require_env("CHAT_UTILS_TEST_MISSING").unwrap_err();
        assert!(err.to_string().contains("CHAT_UTILS_TEST_MISSING"));
    }

    #[test]
    fn test_require_env_empty() {
        unsafe {
            std::env::set_var("CHAT_UTILS_TEST_EMPTY", "  ");
        }
        assert!(require_env("CHAT_UTILS_TEST_EMPTY").is_err());
        unsafe {
            std::env::remove_var("CHAT_UTILS_TEST_EMPTY");
        }
    }
}
