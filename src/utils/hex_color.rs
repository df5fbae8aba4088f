//! Hex color code validation for landing-page customization fields.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// Validates a `#RGB` or `#RRGGBB` hex color code.
///
/// Used as a `validator` custom function on customization payloads.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if HEX_COLOR.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}
