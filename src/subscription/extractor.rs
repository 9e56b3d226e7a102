use std::io::Read;

use super::error::InvalidSourceError;
use super::item::{build_item, SubscriptionItem};
use super::takeout::parse_candidates;
use crate::config::ImportConfig;
use crate::service::{ChannelLinkHandler, YoutubeChannelLinkHandler, YOUTUBE_SERVICE_ID};

/// Extracts subscriptions for one platform from takeout exports.
///
/// Holds no mutable state; one instance can parse any number of sources,
/// from any number of threads when the link handler allows it.
#[derive(Debug, Clone)]
pub struct SubscriptionExtractor<H = YoutubeChannelLinkHandler> {
    service_id: u32,
    link_handler: H,
    max_source_bytes: u64,
}

impl SubscriptionExtractor<YoutubeChannelLinkHandler> {
    /// Extractor for YouTube takeout exports with default limits.
    pub fn youtube() -> Self {
        Self::new(YOUTUBE_SERVICE_ID, YoutubeChannelLinkHandler)
    }
}

impl<H: ChannelLinkHandler> SubscriptionExtractor<H> {
    /// Creates an extractor stamping `service_id` on every item it emits.
    pub fn new(service_id: u32, link_handler: H) -> Self {
        Self {
            service_id,
            link_handler,
            max_source_bytes: ImportConfig::default().max_source_bytes,
        }
    }

    /// Creates an extractor with service id and size cap taken from `config`.
    pub fn from_config(config: &ImportConfig, link_handler: H) -> Self {
        Self {
            service_id: config.service_id,
            link_handler,
            max_source_bytes: config.max_source_bytes,
        }
    }

    /// Overrides the maximum accepted source size in bytes.
    pub fn with_max_source_bytes(mut self, max_source_bytes: u64) -> Self {
        self.max_source_bytes = max_source_bytes;
        self
    }

    /// Service id stamped on every item this extractor emits.
    pub fn service_id(&self) -> u32 {
        self.service_id
    }

    /// Page where users can generate an export, as reported by the link handler.
    pub fn related_url(&self) -> Option<&str> {
        self.link_handler.related_url()
    }

    /// Parses a fully buffered export into subscription items.
    ///
    /// Items keep the order of their source rows. Rows without a channel id,
    /// or whose channel URL the link handler rejects, are skipped. A
    /// structurally valid export with no usable rows yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSourceError`] when the bytes are not a takeout export
    /// at all: too large, not UTF-8, not JSON, not an array, or an array
    /// element that is not an object. No items are returned in that case.
    pub fn parse(&self, source: &[u8]) -> Result<Vec<SubscriptionItem>, InvalidSourceError> {
        if source.len() as u64 > self.max_source_bytes {
            return Err(InvalidSourceError::TooLarge {
                limit: self.max_source_bytes,
            });
        }

        let candidates = parse_candidates(source)?;
        let total = candidates.len();

        let items: Vec<SubscriptionItem> = candidates
            .into_iter()
            .filter_map(|candidate| build_item(candidate, self.service_id, &self.link_handler))
            .collect();

        tracing::info!(
            service_id = self.service_id,
            imported = items.len(),
            skipped = total - items.len(),
            "Parsed subscription export"
        );
        Ok(items)
    }

    /// Drains `reader` and parses its contents with [`parse`](Self::parse).
    ///
    /// At most one byte past the size cap is read, so an oversized stream is
    /// rejected without buffering it entirely. The caller keeps ownership of
    /// the underlying stream.
    ///
    /// # Errors
    ///
    /// Everything [`parse`](Self::parse) rejects, plus
    /// [`InvalidSourceError::Io`] when the reader fails.
    pub fn from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<Vec<SubscriptionItem>, InvalidSourceError> {
        let mut buf = Vec::new();
        reader
            .take(self.max_source_bytes.saturating_add(1))
            .read_to_end(&mut buf)?;
        self.parse(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID_ID: &str = "UCEOXxzW2vU0P-0THehuIIeg";

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_youtube_extractor_defaults() {
        let extractor = SubscriptionExtractor::youtube();
        assert_eq!(extractor.service_id(), YOUTUBE_SERVICE_ID);
        assert_eq!(
            extractor.related_url(),
            Some("https://takeout.google.com/takeout/custom/youtube")
        );
    }

    #[test]
    fn test_parse_keeps_valid_and_drops_invalid() {
        let source = format!(
            r#"[{{"snippet":{{"resourceId":{{"channelId":"gibberish"}},"title":"name1"}}}},
                {{"snippet":{{"resourceId":{{"channelId":"{VALID_ID}"}},"title":"name2"}}}}]"#
        );

        let items = SubscriptionExtractor::youtube()
            .parse(source.as_bytes())
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "name2");
        assert_eq!(
            items[0].url(),
            "https://www.youtube.com/channel/UCEOXxzW2vU0P-0THehuIIeg"
        );
    }

    #[test]
    fn test_service_id_comes_from_extractor() {
        let source = format!(r#"[{{"snippet":{{"resourceId":{{"channelId":"{VALID_ID}"}}}}}}]"#);
        let extractor = SubscriptionExtractor::new(9, YoutubeChannelLinkHandler);

        let items = extractor.parse(source.as_bytes()).unwrap();
        assert_eq!(items[0].service_id(), 9);
    }

    #[test]
    fn test_from_config_applies_settings() {
        let config = ImportConfig {
            max_source_bytes: 4,
            service_id: 5,
        };
        let extractor = SubscriptionExtractor::from_config(&config, YoutubeChannelLinkHandler);

        assert_eq!(extractor.service_id(), 5);
        assert!(extractor.parse(b"[]").is_ok());
        assert!(matches!(
            extractor.parse(b"[ ]  "),
            Err(InvalidSourceError::TooLarge { limit: 4 })
        ));
    }

    #[test]
    fn test_from_reader_matches_parse() {
        let source = format!(
            r#"[{{"snippet":{{"resourceId":{{"channelId":"{VALID_ID}"}},"title":"A"}}}}]"#
        );
        let extractor = SubscriptionExtractor::youtube();

        let from_slice = extractor.parse(source.as_bytes()).unwrap();
        let from_reader = extractor.from_reader(source.as_bytes()).unwrap();
        assert_eq!(from_slice, from_reader);
    }

    #[test]
    fn test_from_reader_rejects_oversized_stream() {
        let extractor = SubscriptionExtractor::youtube().with_max_source_bytes(8);
        let source = std::io::repeat(b' ');

        let result = extractor.from_reader(source);
        assert!(matches!(
            result,
            Err(InvalidSourceError::TooLarge { limit: 8 })
        ));
    }

    #[test]
    fn test_from_reader_io_failure_is_invalid_source() {
        let result = SubscriptionExtractor::youtube().from_reader(FailingReader);
        assert!(matches!(result, Err(InvalidSourceError::Io(_))));
    }

    #[test]
    fn test_source_at_limit_accepted() {
        let extractor = SubscriptionExtractor::youtube().with_max_source_bytes(2);
        assert!(extractor.parse(b"[]").unwrap().is_empty());
        assert!(extractor.from_reader(&b"[]"[..]).unwrap().is_empty());
    }
}
