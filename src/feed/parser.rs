//! RSS parsing and date filtering
//!
//! StatBank feed items carry their publication date twice: a standard
//! `pubDate` and an ISO date in the `ssbrss` namespace extension. The
//! extension value is authoritative; `pubDate` is the fallback.

use chrono::{DateTime, NaiveDate};
use rss::{Channel, Item};
use serde::Serialize;

use super::errors::FeedResult;

/// One entry of the publications feed
#[derive(Debug, Clone, Serialize)]
pub struct Publication {
    /// Entry title
    pub title: String,
    /// Link to the publication
    pub link: String,
    /// Entry summary
    pub summary: String,
    /// Raw `pubDate` string if present
    pub published: Option<String>,
    /// Publication calendar date if determinable
    pub date: Option<NaiveDate>,
}

/// Parses the feed XML into publications, in feed order
pub fn parse_feed(xml: &str) -> FeedResult<Vec<Publication>> {
    let channel = Channel::read_from(xml.as_bytes())?;
    Ok(channel.items().iter().map(to_publication).collect())
}

/// Parses the feed and keeps only entries published on `date`, if given
pub fn latest_publications(xml: &str, date: Option<NaiveDate>) -> FeedResult<Vec<Publication>> {
    let mut publications = parse_feed(xml)?;
    if let Some(wanted) = date {
        publications.retain(|p| p.date == Some(wanted));
    }
    Ok(publications)
}

fn to_publication(item: &Item) -> Publication {
    Publication {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        summary: item.description().unwrap_or_default().to_string(),
        published: item.pub_date().map(str::to_string),
        date: entry_date(item),
    }
}

/// The entry's calendar date: the `ssbrss:date` extension, else `pubDate`
fn entry_date(item: &Item) -> Option<NaiveDate> {
    for elements in item.extensions().values() {
        if let Some(dates) = elements.get("date") {
            if let Some(value) = dates.first().and_then(|ext| ext.value()) {
                if let Ok(date) = value.trim().parse::<NaiveDate>() {
                    return Some(date);
                }
            }
        }
    }

    item.pub_date()
        .and_then(|raw| DateTime::parse_from_rfc2822(raw).ok())
        .map(|dt| dt.date_naive())
}
