use serde::{Deserialize, Serialize};

use crate::serde::deserialize_string_or_null;

/// One day of an Adventar calendar.
///
/// Unclaimed or unpublished days carry empty strings for their text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Entry identifier, unique within a calendar.
    pub id: i64,
    /// Display date as rendered by the upstream (e.g. `"12/1"`).
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub title: String,
    /// Article URL. Empty until the author publishes.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub comment: String,
}

impl CalendarEntry {
    /// Creates a new entry with only an id and title.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            date: String::new(),
            image: String::new(),
            title: title.into(),
            url: String::new(),
            comment: String::new(),
        }
    }

    /// Sets the article URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the display date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Returns true if this entry links to a published article.
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Calendar header inside the props payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarInfo {
    pub id: i64,
    pub year: i32,
}

/// Structured data embedded in the calendar page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarPayload {
    pub calendar: CalendarInfo,
    /// Entries in source order. Feed items follow the same order.
    pub entries: Vec<CalendarEntry>,
}

/// Document-level fields used for the feed header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// The upstream URL the page was requested from.
    pub url: String,
}
