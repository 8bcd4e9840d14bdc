//! Locale-tolerant numeric parsing.
//!
//! Converts a textual value into a floating-point number under a locale
//! convention where one character groups thousands and another marks the
//! decimal point (by default `.` and `,`, so `"1.234,56"` reads as
//! `1234.56`). A value that cannot be converted yields `None`, never an
//! error: callers treat unparseable input as a normal, expected outcome
//! and fold it into their classification decisions.

use serde::{Deserialize, Serialize};

/// Separator convention for locale-formatted numbers.
///
/// The default matches locales that write `1.234,56` for `1234.56`.
///
/// # Examples
///
/// ```
/// use tabula_core::parse::NumberFormat;
///
/// let format = NumberFormat::default();
/// assert_eq!(format.parse("1.234,56"), Some(1234.56));
/// assert_eq!(format.parse("42"), Some(42.0));
/// assert_eq!(format.parse("N/A"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Character treated as a thousands separator and stripped.
    pub thousands: char,
    /// Character treated as the decimal separator.
    pub decimal: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands: '.',
            decimal: ',',
        }
    }
}

impl NumberFormat {
    /// Creates a format with explicit separators.
    pub fn new(thousands: char, decimal: char) -> Self {
        Self { thousands, decimal }
    }

    /// Parses a raw textual value under this format.
    ///
    /// The value is trimmed, every thousands separator is removed, the
    /// first remaining decimal separator becomes `.`, and the result goes
    /// through the standard float parse. Empty input, a second decimal
    /// separator, or any stray character yields `None`.
    pub fn parse(&self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let stripped: String = trimmed.chars().filter(|c| *c != self.thousands).collect();
        let normalized = stripped.replacen(self.decimal, ".", 1);
        normalized.parse::<f64>().ok()
    }
}
