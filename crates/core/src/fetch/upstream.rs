use url::Url;

use crate::calendar::CalendarId;

use super::{FetchError, Result};

/// Host serving the calendars.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://adventar.org";

/// Builds `{base}/calendars/{calendar_id}`.
///
/// Any path on `base` is kept, so a base of `http://proxy/mirror/` yields
/// `http://proxy/mirror/calendars/{id}`.
///
/// # Examples
///
/// ```
/// use rssize_core::calendar::CalendarId;
/// use rssize_core::fetch::calendar_url;
/// use url::Url;
///
/// let base = Url::parse("https://adventar.org").unwrap();
/// let id = CalendarId::parse("42", true).unwrap();
/// assert_eq!(calendar_url(&base, &id).unwrap(), "https://adventar.org/calendars/42");
/// ```
pub fn calendar_url(base: &Url, calendar_id: &CalendarId) -> Result<String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push("calendars")
        .push(calendar_id.as_str());
    Ok(url.to_string())
}
