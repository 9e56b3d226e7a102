//! Platform link handling for imported subscriptions.
//!
//! The extractor does not know how a platform spells its channel URLs. It asks
//! a [`ChannelLinkHandler`] to build a URL from a channel id and to decide
//! whether that URL really is a channel reference.
//!
//! ## Adding a platform
//!
//! 1. Create a new file in this directory (e.g. `peertube.rs`).
//! 2. Define a handler struct and implement [`ChannelLinkHandler`] for it.
//! 3. Add `mod peertube;` below and re-export the struct.
//! 4. Build a [`SubscriptionExtractor`](crate::SubscriptionExtractor) with it.

mod youtube;

pub use youtube::{ChannelUrlError, YoutubeChannelLinkHandler, YOUTUBE_SERVICE_ID};

/// Builds and accepts channel URLs for one platform.
///
/// Implementations must be pure: the same input always gives the same answer.
pub trait ChannelLinkHandler {
    /// Canonical channel URL for a platform channel id.
    fn channel_url(&self, id: &str) -> String;

    /// Whether `url` is a valid channel reference on this platform.
    fn accept_url(&self, url: &str) -> bool;

    /// Page where users can generate an export for this platform, if any.
    fn related_url(&self) -> Option<&str> {
        None
    }
}
