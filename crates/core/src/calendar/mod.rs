mod decode;
mod error;
mod id;
mod types;

pub use decode::decode_payload;
pub use error::{CalendarIdError, DecodeError};
pub use id::{CalendarId, MAX_CALENDAR_ID_LEN};
pub use types::{CalendarEntry, CalendarInfo, CalendarPayload, PageMetadata};
