//! Functional core for rssize.
//!
//! Pure types and functions for turning an Adventar calendar page into an RSS
//! feed, plus the trait seams (`Cache`, `PageFetcher`, `FirstSeenRepository`)
//! that the server crate implements with real I/O.

pub mod cache;
pub mod calendar;
pub mod feed;
pub mod fetch;
pub mod page;
pub mod reconcile;
pub mod serde;
pub mod storage;
