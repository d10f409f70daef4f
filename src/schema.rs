use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single public channel as returned by the listing endpoint.
///
/// The record is intentionally opaque: whatever object the API
/// returns is carried verbatim into the `data.json` snapshot,
/// unknown fields included. The only field the collector ever
/// interprets is `name`.
///
/// DESIGN NOTES:
/// - No local identity. Records are kept in fetch order and are
///   never deduplicated; the upstream listing defines ordering.
/// - Field order inside a record follows the decoded object, so
///   re-serializing an unchanged state is byte-stable.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct ChannelRecord(pub Map<String, Value>);

impl ChannelRecord {
    /// Returns the channel name used for the `names.json` snapshot.
    ///
    /// A missing or non-string `name` yields the empty string, so
    /// the names snapshot always stays one-to-one with the records
    /// snapshot even for malformed entries.
    pub fn name(&self) -> String {
        self.0
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

// ------------------------------------------------------------
// Page response
// ------------------------------------------------------------
//
// One page of the public listing. The endpoint signals the end
// of pagination with an empty `channels` array rather than an
// HTTP status or an explicit cursor.
//
// Fields other than `channels` (pagination metadata etc.) are
// ignored on purpose.
//
#[derive(Debug, Deserialize)]
pub struct ChannelPage {
    /// Channel records of this page, in listing order
    pub channels: Vec<ChannelRecord>,
}
