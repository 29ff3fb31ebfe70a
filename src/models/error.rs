//! Validation errors shared by the planning models.

use chrono::NaiveTime;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("End time {end} must be after start time {start}")]
    TimeRange { start: NaiveTime, end: NaiveTime },

    #[error("Color must be in hex format (#RRGGBB or #RGB), got \"{0}\"")]
    Color(String),
}

/// Accepts `#RRGGBB` and `#RGB`.
pub(crate) fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let digits = color.strip_prefix('#').unwrap_or("");
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::Color(color.to_string()))
    }
}
