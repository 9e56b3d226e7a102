//! Source parser for takeout subscription exports.
//!
//! A takeout export is a JSON array with one object per subscription:
//!
//! ```json
//! [{"snippet": {"title": "Name", "resourceId": {"channelId": "UC..."}}}]
//! ```
//!
//! Shape violations (not UTF-8, not JSON, not an array, an element that is not
//! an object) reject the whole source. Inside a correctly shaped element every
//! field is optional: a missing field and a field of the wrong JSON type both
//! read as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::{json_kind, InvalidSourceError};
use super::item::RawCandidate;

#[derive(Debug, Default, Deserialize)]
struct TakeoutEntry {
    #[serde(default, deserialize_with = "lenient_object")]
    snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    resource_id: Option<ResourceId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    #[serde(default, deserialize_with = "lenient")]
    channel_id: Option<String>,
}

/// Deserializes an optional field, reading a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Like [`lenient`], but only a JSON object may populate a nested record.
///
/// Derived structs also accept sequences, so `["id"]` would otherwise fill
/// fields by position.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(T::deserialize(value).ok()),
        _ => Ok(None),
    }
}

/// Parses a takeout export into candidates, preserving source order.
///
/// # Errors
///
/// Returns [`InvalidSourceError`] at the first structural violation; no
/// candidates are returned in that case.
pub(crate) fn parse_candidates(source: &[u8]) -> Result<Vec<RawCandidate>, InvalidSourceError> {
    let text = std::str::from_utf8(source)?;

    let document: Value = match serde_json::from_str(text) {
        Ok(document) => document,
        Err(e) => {
            if let Some(format) = markup_format(text) {
                return Err(InvalidSourceError::UnsupportedFormat(format));
            }
            return Err(e.into());
        }
    };

    let entries = match document {
        Value::Array(entries) => entries,
        other => return Err(InvalidSourceError::NotAnArray(json_kind(&other))),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            entry @ Value::Object(_) => Ok(candidate_from(index, entry)),
            other => Err(InvalidSourceError::ElementNotObject {
                index,
                kind: json_kind(&other),
            }),
        })
        .collect()
}

fn candidate_from(index: usize, entry: Value) -> RawCandidate {
    // Every field is lenient, so decoding an object cannot fail in practice.
    let entry: TakeoutEntry = serde_json::from_value(entry).unwrap_or_else(|e| {
        tracing::debug!(index, error = %e, "Unreadable subscription entry, treating as empty");
        TakeoutEntry::default()
    });

    let snippet = entry.snippet.unwrap_or_default();
    RawCandidate {
        display_name: snippet.title,
        platform_id: snippet.resource_id.and_then(|r| r.channel_id),
    }
}

/// Names the markup format when non-JSON text looks like XML.
fn markup_format(text: &str) -> Option<&'static str> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('<') {
        return None;
    }
    if trimmed.contains("<opml") {
        Some("OPML")
    } else {
        Some("XML")
    }
}
