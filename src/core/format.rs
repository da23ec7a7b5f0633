//! Display formatting for secret values.
//!
//! Masking here is for display only. Comparison always runs on full values.

use crate::core::constants::{MAX_DISPLAY_LEN, NOT_FOUND_MARKER, TOO_LONG_MARKER};
use crate::core::domain::SecretValue;

/// Render a value outcome for display.
///
/// `None` (absent) and `Unresolved` both render as the not-found marker.
/// Values longer than [`MAX_DISPLAY_LEN`] characters are replaced by a marker.
pub fn format_value(value: Option<&SecretValue>) -> &str {
    match value {
        None | Some(SecretValue::Unresolved) => NOT_FOUND_MARKER,
        Some(SecretValue::Resolved(v)) if v.chars().count() > MAX_DISPLAY_LEN => TOO_LONG_MARKER,
        Some(SecretValue::Resolved(v)) => v,
    }
}

/// Whether [`format_value`] replaced the value with a marker.
pub fn is_marker(value: Option<&SecretValue>) -> bool {
    match value {
        Some(SecretValue::Resolved(v)) => v.chars().count() > MAX_DISPLAY_LEN,
        _ => true,
    }
}
