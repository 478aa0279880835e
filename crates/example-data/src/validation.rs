//! Validation rules for generated records.
//!
//! Generated names are held to a tidier shape than the backend requires
//! (it only rejects blank names), so demo data reads cleanly. Descriptions
//! use the backend's `Description` minimum so every generated complaint is
//! accepted when the initial state is built.
//!
//! # Display names
//!
//! - Between [`DISPLAY_NAME_MIN`] and [`DISPLAY_NAME_MAX`] characters
//! - Letters, digits, spaces, apostrophes, hyphens, and full stops only
//! - Must not be whitespace-only
//!
//! # Descriptions
//!
//! - At least [`DESCRIPTION_MIN`] characters once trimmed

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 2;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Minimum trimmed length of a complaint description.
pub const DESCRIPTION_MIN: usize = 10;

/// Validates a generated display name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_display_name;
///
/// assert!(is_valid_display_name("Arjun Sharma"));
/// assert!(is_valid_display_name("O'Brien"));
/// assert!(!is_valid_display_name("a"));            // Too short
/// assert!(!is_valid_display_name("user@email"));   // Invalid character
/// assert!(!is_valid_display_name("   "));          // Whitespace-only
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_display_name_char)
}

/// Validates a complaint description against backend constraints.
///
/// ```
/// use example_data::is_valid_description;
///
/// assert!(is_valid_description("Room has no water supply"));
/// assert!(!is_valid_description("  broken  "));
/// ```
#[must_use]
pub fn is_valid_description(description: &str) -> bool {
    description.trim().chars().count() >= DESCRIPTION_MIN
}

fn is_valid_display_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '\'' | '-' | '.')
}

/// Drops characters outside the generated-name alphabet from a raw name.
///
/// Length is not enforced here.
#[must_use]
pub(crate) fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .filter(|c| is_valid_display_name_char(*c))
        .collect()
}
