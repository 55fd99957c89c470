//! Calendar identifier validation.
//!
//! The identifier is interpolated into the upstream URL, so it is validated
//! before any I/O happens. Two policies exist: numeric-only (the Adventar
//! default) and a looser slug check for hosts with non-numeric ids.

use std::fmt;

use super::CalendarIdError;

/// Longest identifier accepted by the slug policy.
pub const MAX_CALENDAR_ID_LEN: usize = 64;

/// A validated calendar identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarId(String);

impl CalendarId {
    /// Validates `raw` and wraps it.
    ///
    /// With `require_numeric`, only ASCII digits are accepted (no sign, no
    /// whitespace). Otherwise 1 to [`MAX_CALENDAR_ID_LEN`] characters from
    /// `[A-Za-z0-9_-]` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rssize_core::calendar::CalendarId;
    ///
    /// assert!(CalendarId::parse("8470", true).is_ok());
    /// assert!(CalendarId::parse("rust-2023", true).is_err());
    /// assert!(CalendarId::parse("rust-2023", false).is_ok());
    /// ```
    pub fn parse(raw: &str, require_numeric: bool) -> Result<Self, CalendarIdError> {
        if raw.is_empty() {
            return Err(CalendarIdError::Empty);
        }

        if require_numeric {
            if !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CalendarIdError::NotNumeric(raw.to_string()));
            }
        } else if raw.len() > MAX_CALENDAR_ID_LEN
            || !raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(CalendarIdError::InvalidFormat(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
