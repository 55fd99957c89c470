use chrono::{DateTime, Utc};
use rss::{Channel, ChannelBuilder, Item, ItemBuilder};

use crate::calendar::PageMetadata;
use crate::reconcile::ReconciledEntry;

use super::FeedError;

/// Content type of the serialized feed.
pub const RSS_CONTENT_TYPE: &str = "text/xml";

/// Builds the RSS channel for a calendar.
///
/// The channel header comes from the page metadata and `now`; each
/// reconciled entry becomes one item, in the order given.
pub fn assemble_feed(
    metadata: &PageMetadata,
    entries: &[ReconciledEntry],
    now: DateTime<Utc>,
) -> Channel {
    let items: Vec<Item> = entries.iter().map(entry_to_item).collect();

    ChannelBuilder::default()
        .title(metadata.title.clone())
        .link(metadata.url.clone())
        .description(metadata.description.clone())
        .pub_date(Some(now.to_rfc2822()))
        .items(items)
        .build()
}

fn entry_to_item(reconciled: &ReconciledEntry) -> Item {
    ItemBuilder::default()
        .title(Some(reconciled.entry.title.clone()))
        .link(Some(reconciled.entry.url.clone()))
        .pub_date(Some(reconciled.first_seen.to_rfc2822()))
        .build()
}

/// Serializes a channel to an RSS 2.0 XML document.
pub fn to_rss(channel: &Channel) -> Result<Vec<u8>, FeedError> {
    let bytes = channel.write_to(Vec::new())?;
    Ok(bytes)
}
