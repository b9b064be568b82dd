//! Length rules for card and column titles.
//!
//! Lengths are counted in Unicode scalar values. A title made only of
//! whitespace is treated as empty.

use crate::error::ValidationError;

/// Minimum number of characters in a card title.
pub const CARD_TITLE_MIN: usize = 3;

/// Maximum number of characters in a card title.
pub const CARD_TITLE_MAX: usize = 65;

/// Minimum number of characters in a column title.
pub const COLUMN_TITLE_MIN: usize = 3;

/// Maximum number of characters in a column title.
pub const COLUMN_TITLE_MAX: usize = 35;

/// Checks a card title against [`CARD_TITLE_MIN`] and [`CARD_TITLE_MAX`].
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first rule that failed.
///
/// # Examples
///
/// ```
/// use quadro_protocol::validation::validate_card_title;
///
/// assert!(validate_card_title("Fix login").is_ok());
/// assert!(validate_card_title("ab").is_err());
/// assert!(validate_card_title("   ").is_err());
/// ```
pub fn validate_card_title(title: &str) -> Result<(), ValidationError> {
    check_length(title, CARD_TITLE_MIN, CARD_TITLE_MAX)
}

/// Checks a column title against [`COLUMN_TITLE_MIN`] and [`COLUMN_TITLE_MAX`].
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first rule that failed.
pub fn validate_column_title(title: &str) -> Result<(), ValidationError> {
    check_length(title, COLUMN_TITLE_MIN, COLUMN_TITLE_MAX)
}

fn check_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    let actual = value.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { min, actual });
    }
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}
