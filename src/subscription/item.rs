use serde::Serialize;

use crate::service::ChannelLinkHandler;

/// An unvalidated subscription row read from a source.
///
/// Lives only for the duration of one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawCandidate {
    pub display_name: Option<String>,
    pub platform_id: Option<String>,
}

/// A channel subscription imported from an export.
///
/// Only the extractor constructs these, and only after the platform's link
/// handler has accepted `url`. An absent display name is stored as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionItem {
    service_id: u32,
    url: String,
    name: String,
}

impl SubscriptionItem {
    /// Identifier of the platform this subscription belongs to.
    pub fn service_id(&self) -> u32 {
        self.service_id
    }

    /// Canonical channel URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display name, empty when the export carried none.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Turns one candidate into an item, or `None` when it cannot be used.
///
/// Candidates without an identifier and candidates whose synthesized URL the
/// link handler rejects are dropped without error.
pub(crate) fn build_item<H>(
    candidate: RawCandidate,
    service_id: u32,
    link_handler: &H,
) -> Option<SubscriptionItem>
where
    H: ChannelLinkHandler + ?Sized,
{
    let RawCandidate {
        display_name,
        platform_id,
    } = candidate;

    let Some(channel_id) = platform_id else {
        tracing::debug!(name = ?display_name, "Skipping subscription without channel id");
        return None;
    };

    let url = link_handler.channel_url(&channel_id);
    if !link_handler.accept_url(&url) {
        tracing::debug!(channel_id = %channel_id, url = %url, "Skipping subscription with unacceptable channel URL");
        return None;
    }

    Some(SubscriptionItem {
        service_id,
        url,
        name: display_name.unwrap_or_default(),
    })
}
