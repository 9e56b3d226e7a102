//! Import of channel subscriptions from video-platform takeout exports.
//!
//! The crate turns the raw bytes of a takeout export into a list of
//! [`SubscriptionItem`]s, or rejects the whole export with an
//! [`InvalidSourceError`] when it is not a recognizable export at all.
//!
//! - [`subscription`] - source parsing, item building and the extractor entry point
//! - [`service`] - the link-handler seam and the YouTube implementation
//! - [`config`] - optional TOML configuration for the extractor
//!
//! # Example
//!
//! ```
//! use subimport::SubscriptionExtractor;
//!
//! let extractor = SubscriptionExtractor::youtube();
//! let source = br#"[{"snippet":{"resourceId":{"channelId":"UCEOXxzW2vU0P-0THehuIIeg"},"title":"Example"}}]"#;
//!
//! let items = extractor.parse(source).unwrap();
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].url(), "https://www.youtube.com/channel/UCEOXxzW2vU0P-0THehuIIeg");
//! assert_eq!(items[0].name(), "Example");
//! ```

pub mod config;
pub mod service;
pub mod subscription;

pub use config::{ConfigError, ImportConfig};
pub use service::{ChannelLinkHandler, YoutubeChannelLinkHandler, YOUTUBE_SERVICE_ID};
pub use subscription::{InvalidSourceError, SubscriptionExtractor, SubscriptionItem};
