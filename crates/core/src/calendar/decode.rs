use super::{CalendarPayload, DecodeError};

/// Decodes the `data-react-props` JSON blob into a [`CalendarPayload`].
///
/// Fails if the blob is not JSON or lacks `calendar.id`, `calendar.year`,
/// `entries`, or an entry `id`. Unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use rssize_core::calendar::decode_payload;
///
/// let payload = decode_payload(r#"{"calendar":{"id":42,"year":2023},"entries":[]}"#).unwrap();
/// assert_eq!(payload.calendar.year, 2023);
/// ```
pub fn decode_payload(props: &str) -> Result<CalendarPayload, DecodeError> {
    let payload = serde_json::from_str(props)?;
    Ok(payload)
}
