//! Subscription import from takeout exports.
//!
//! Import runs in two steps:
//!
//! - **Source parsing** (`takeout`): decide whether the bytes are a takeout
//!   export at all and read one raw candidate per array element
//! - **Item building** (`item`): turn each candidate into a
//!   [`SubscriptionItem`] through the platform's
//!   [`ChannelLinkHandler`](crate::ChannelLinkHandler), or drop it
//!
//! Only the first step can fail. A malformed source is rejected whole with an
//! [`InvalidSourceError`]; unusable rows inside a well-formed source are
//! skipped without error.
//!
//! # Example
//!
//! ```
//! use subimport::{InvalidSourceError, SubscriptionExtractor};
//!
//! let extractor = SubscriptionExtractor::youtube();
//!
//! assert!(extractor.parse(b"[]").unwrap().is_empty());
//! assert!(matches!(
//!     extractor.parse(br#"{"a":"b"}"#),
//!     Err(InvalidSourceError::NotAnArray(_))
//! ));
//! ```

mod error;
mod extractor;
mod item;
mod takeout;

pub use error::InvalidSourceError;
pub use extractor::SubscriptionExtractor;
pub use item::SubscriptionItem;
