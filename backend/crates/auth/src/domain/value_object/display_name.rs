//! Display Name Value Object
//!
//! Shown on the leaderboard. Not unique, not used for login.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// NFKC-normalize, collapse inner whitespace runs and validate length.
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let collapsed = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

        if collapsed.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        let char_count = collapsed.chars().count();
        if char_count > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters (got {})",
                DISPLAY_NAME_MAX_LENGTH, char_count
            )));
        }

        if collapsed.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains control characters"));
        }

        Ok(Self(collapsed))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_collapses_whitespace() {
        let name = DisplayName::new("  Test   Student ").unwrap();
        assert_eq!(name.as_str(), "Test Student");
    }

    #[test]
    fn test_display_name_nfkc() {
        // Fullwidth letters fold to ASCII
        let name = DisplayName::new("\u{FF21}da").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_display_name_invalid() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("a".repeat(DISPLAY_NAME_MAX_LENGTH + 1)).is_err());
        assert!(DisplayName::new("a".repeat(DISPLAY_NAME_MAX_LENGTH)).is_ok());
    }
}
