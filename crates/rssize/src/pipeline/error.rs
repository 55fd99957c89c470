use thiserror::Error;

use rssize_core::calendar::DecodeError;
use rssize_core::feed::FeedError;
use rssize_core::fetch::FetchError;
use rssize_core::page::ParseError;

/// A stage failure that aborts feed generation for one request.
///
/// Each variant carries the calendar id so the log line alone is enough to
/// find the failing calendar.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch calendar {calendar_id} from {url}")]
    Fetch {
        calendar_id: String,
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("failed to parse page of calendar {calendar_id}")]
    Parse {
        calendar_id: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to decode props of calendar {calendar_id}")]
    Decode {
        calendar_id: String,
        #[source]
        source: DecodeError,
    },
    #[error("failed to serialize feed of calendar {calendar_id}")]
    Feed {
        calendar_id: String,
        #[source]
        source: FeedError,
    },
}

impl PipelineError {
    /// Name of the stage that failed, for structured logs.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Fetch { .. } => "fetch",
            PipelineError::Parse { .. } => "parse",
            PipelineError::Decode { .. } => "decode",
            PipelineError::Feed { .. } => "feed",
        }
    }

    pub fn calendar_id(&self) -> &str {
        match self {
            PipelineError::Fetch { calendar_id, .. }
            | PipelineError::Parse { calendar_id, .. }
            | PipelineError::Decode { calendar_id, .. }
            | PipelineError::Feed { calendar_id, .. } => calendar_id,
        }
    }
}
