//! StatBank publications feed
//!
//! Parses the publications RSS feed and filters entries by publication
//! date. Fetching the XML is the client's job; everything here is pure.

mod errors;
mod parser;

pub use errors::{FeedError, FeedResult};
pub use parser::{latest_publications, parse_feed, Publication};
