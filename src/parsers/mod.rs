//! Parsers for the serialized heatmap data handed over by the host app

mod levels;
mod tally;

pub use levels::LevelMapParser;
pub use tally::TallyParser;

use crate::types::DateLevelMap;
use serde_json::{Map, Value};

/// Turns the raw stored string into a `DateLevelMap`.
///
/// Implementations never fail: a widget render must not crash the host,
/// so anything unreadable degrades to an empty map.
pub trait HeatmapDataParser: Send + Sync {
    /// Parser name (e.g., "levels")
    fn name(&self) -> &str;

    /// Parse the stored payload; `None` means the key was never written
    fn parse(&self, raw: Option<&str>) -> DateLevelMap;
}

/// Parse a `{"YYYY-MM-DD": level}` payload
pub fn parse_levels(raw: Option<&str>) -> DateLevelMap {
    LevelMapParser.parse(raw)
}

/// Decode the top-level JSON object shared by all payload formats.
/// Returns `None` (after logging) when the payload is absent, blank,
/// malformed, or not an object.
fn decode_object(parser: &str, raw: Option<&str>) -> Option<Map<String, Value>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(other) => {
            log::warn!(
                "[{parser}] expected a JSON object, got {}; using empty data",
                json_kind(&other)
            );
            None
        }
        Err(e) => {
            log::warn!("[{parser}] malformed payload ({e}); using empty data");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_object_absent() {
        assert!(decode_object("test", None).is_none());
        assert!(decode_object("test", Some("")).is_none());
        assert!(decode_object("test", Some("   \n")).is_none());
    }

    #[test]
    fn test_decode_object_non_object() {
        assert!(decode_object("test", Some("null")).is_none());
        assert!(decode_object("test", Some("[1, 2]")).is_none());
        assert!(decode_object("test", Some("42")).is_none());
        assert!(decode_object("test", Some("\"text\"")).is_none());
    }

    #[test]
    fn test_decode_object_ok() {
        let obj = decode_object("test", Some(r#"{"a": 1}"#)).unwrap();
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_parse_levels_roundtrip() {
        let map = parse_levels(Some(r#"{"2024-01-01": 3}"#));
        assert_eq!(map.get("2024-01-01"), Some(3));
    }

    #[test]
    fn test_parsers_have_distinct_names() {
        assert_ne!(LevelMapParser.name(), TallyParser.name());
    }
}
