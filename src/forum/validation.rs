//! Field validation for user-supplied forum content.
//!
//! Every store operation validates its inputs before touching state, so a
//! rejected request never leaves a partial mutation behind. Blank input is the
//! only thing rejected; there is no length cap on any field.

use crate::error::{ForumError, Result};

/// Trims `value` and checks it is non-empty.
///
/// Returns the trimmed, owned value on success. `field` names the input in
/// the error message.
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ForumError::validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Checks an emoji value is not blank.
///
/// Emoji are compared byte-for-byte, so the value is only checked, never
/// trimmed.
pub fn validate_emoji(emoji: &str) -> Result<()> {
    if emoji.trim().is_empty() {
        return Err(ForumError::validation("Emoji cannot be empty"));
    }
    Ok(())
}
