use thiserror::Error;
use url::Url;

use super::ChannelLinkHandler;

/// Service id assigned to YouTube.
pub const YOUTUBE_SERVICE_ID: u32 = 0;

const CHANNEL_URL_PREFIX: &str = "https://www.youtube.com/channel/";
const CHANNEL_PATH_PREFIX: &str = "/channel/";
const TAKEOUT_URL: &str = "https://takeout.google.com/takeout/custom/youtube";
const YOUTUBE_HOSTS: [&str; 3] = ["youtube.com", "www.youtube.com", "m.youtube.com"];

/// Channel ids are `UC` followed by 22 URL-safe base64 characters.
const CHANNEL_ID_PREFIX: &str = "UC";
const CHANNEL_ID_LEN: usize = 24;

/// Reasons a URL is not a YouTube channel URL.
#[derive(Error, Debug)]
pub enum ChannelUrlError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The host is not a YouTube host.
    #[error("Not a YouTube host: {0}")]
    ForeignHost(String),
    /// The path is not `/channel/<id>`.
    #[error("Not a channel path: {0}")]
    NotAChannelPath(String),
    /// The id segment is not a well-formed channel id.
    #[error("Invalid channel id: {0}")]
    InvalidChannelId(String),
    /// The URL names a channel but is not in canonical form.
    #[error("Not a canonical channel URL: {0:?}")]
    NotCanonical(String),
}

/// Link handler for YouTube channel URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoutubeChannelLinkHandler;

impl YoutubeChannelLinkHandler {
    /// Extracts the channel id from a YouTube channel URL.
    ///
    /// Accepts `http`/`https` URLs on `youtube.com`, `www.youtube.com` or
    /// `m.youtube.com` whose path starts with `/channel/<id>`. Anything after
    /// the id segment (`/videos`, a query string) is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelUrlError`] naming the first check that failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use subimport::YoutubeChannelLinkHandler;
    ///
    /// let id = YoutubeChannelLinkHandler::channel_id(
    ///     "https://www.youtube.com/channel/UCEOXxzW2vU0P-0THehuIIeg/videos",
    /// )
    /// .unwrap();
    /// assert_eq!(id, "UCEOXxzW2vU0P-0THehuIIeg");
    ///
    /// assert!(YoutubeChannelLinkHandler::channel_id("https://www.youtube.com/channel/gibberish").is_err());
    /// ```
    pub fn channel_id(url_str: &str) -> Result<String, ChannelUrlError> {
        parse_channel_url(url_str).map(|(_, id)| id)
    }

    /// Extracts the channel id from a URL that is exactly a channel URL.
    ///
    /// Stricter than [`channel_id`](Self::channel_id): the path must be
    /// `/channel/<id>` with nothing after it, there may be no query, fragment,
    /// port or credentials, and the string must already be in the form the URL
    /// parser would produce (no stripped whitespace, no `..` segments, no case
    /// folding of the host).
    ///
    /// # Errors
    ///
    /// Returns [`ChannelUrlError::NotCanonical`] when the URL names a channel
    /// but carries anything extra, or the error from
    /// [`channel_id`](Self::channel_id).
    pub fn canonical_channel_id(url_str: &str) -> Result<String, ChannelUrlError> {
        let (url, id) = parse_channel_url(url_str)?;

        let exact_path = url.path().len() == CHANNEL_PATH_PREFIX.len() + id.len();
        if url.as_str() != url_str
            || !exact_path
            || url.query().is_some()
            || url.fragment().is_some()
            || url.port().is_some()
            || !url.username().is_empty()
            || url.password().is_some()
        {
            return Err(ChannelUrlError::NotCanonical(url_str.to_owned()));
        }

        Ok(id)
    }
}

impl ChannelLinkHandler for YoutubeChannelLinkHandler {
    fn channel_url(&self, id: &str) -> String {
        format!("{}{}", CHANNEL_URL_PREFIX, id)
    }

    fn accept_url(&self, url: &str) -> bool {
        Self::canonical_channel_id(url).is_ok()
    }

    fn related_url(&self) -> Option<&str> {
        Some(TAKEOUT_URL)
    }
}

fn parse_channel_url(url_str: &str) -> Result<(Url, String), ChannelUrlError> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(ChannelUrlError::UnsupportedScheme(scheme.to_owned())),
    }

    let host = url.host_str().unwrap_or_default();
    if !YOUTUBE_HOSTS.contains(&host) {
        return Err(ChannelUrlError::ForeignHost(host.to_owned()));
    }

    let mut segments = url
        .path_segments()
        .ok_or_else(|| ChannelUrlError::NotAChannelPath(url.path().to_owned()))?;
    let (Some("channel"), Some(id)) = (segments.next(), segments.next()) else {
        return Err(ChannelUrlError::NotAChannelPath(url.path().to_owned()));
    };

    if !is_channel_id(id) {
        return Err(ChannelUrlError::InvalidChannelId(id.to_owned()));
    }

    let id = id.to_owned();
    Ok((url, id))
}

fn is_channel_id(id: &str) -> bool {
    id.len() == CHANNEL_ID_LEN
        && id.starts_with(CHANNEL_ID_PREFIX)
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
