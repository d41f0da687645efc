//! `{"YYYY-MM-DD": level}` payload parser

use crate::types::DateLevelMap;
use serde_json::Value;

use super::{decode_object, HeatmapDataParser};

/// Parser for the date → integer level mapping written by the host app
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelMapParser;

impl HeatmapDataParser for LevelMapParser {
    fn name(&self) -> &str {
        "levels"
    }

    fn parse(&self, raw: Option<&str>) -> DateLevelMap {
        let Some(obj) = decode_object(self.name(), raw) else {
            return DateLevelMap::new();
        };

        obj.into_iter()
            .filter_map(|(key, value)| match coerce_level(&value) {
                Some(level) => Some((key, level)),
                None => {
                    log::debug!("[levels] skipping '{key}': non-numeric value {value}");
                    None
                }
            })
            .collect()
    }
}

/// Coerce a JSON value to an integer level.
/// Floats truncate toward zero; numeric strings are accepted.
fn coerce_level(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(truncate))
        }
        _ => None,
    }
}

/// `as` saturates at the i64 bounds, which clamping absorbs later
fn truncate(f: f64) -> i64 {
    f.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> DateLevelMap {
        LevelMapParser.parse(Some(raw))
    }

    #[test]
    fn test_parse_none_is_empty() {
        assert!(LevelMapParser.parse(None).is_empty());
    }

    #[test]
    fn test_parse_empty_string_is_empty() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_malformed_is_empty() {
        assert!(parse("{not json").is_empty());
        assert!(parse("[1,2,3]").is_empty());
        assert!(parse("null").is_empty());
    }

    #[test]
    fn test_parse_integers() {
        let map = parse(r#"{"2024-01-01": 3, "2024-01-02": 0, "2024-01-03": 5}"#);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("2024-01-01"), Some(3));
        assert_eq!(map.get("2024-01-02"), Some(0));
        assert_eq!(map.get("2024-01-03"), Some(5));
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        let map = parse(r#"{"2024-01-01": 9, "2024-01-02": -2}"#);
        assert_eq!(map.get("2024-01-01"), Some(9));
        assert_eq!(map.get("2024-01-02"), Some(-2));
    }

    #[test]
    fn test_parse_floats_truncate() {
        let map = parse(r#"{"a": 3.9, "b": -1.5, "c": 1e30}"#);
        assert_eq!(map.get("a"), Some(3));
        assert_eq!(map.get("b"), Some(-1));
        assert_eq!(map.get("c"), Some(i64::MAX));
    }

    #[test]
    fn test_parse_numeric_strings() {
        let map = parse(r#"{"a": "4", "b": " 2.7 ", "c": "high"}"#);
        assert_eq!(map.get("a"), Some(4));
        assert_eq!(map.get("b"), Some(2));
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn test_parse_skips_non_numeric_values() {
        let map = parse(r#"{"a": true, "b": null, "c": [1], "d": {"x": 1}, "e": 2}"#);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("e"), Some(2));
    }

    #[test]
    fn test_parse_keys_verbatim() {
        let map = parse(r#"{"not-a-date": 2}"#);
        assert_eq!(map.get("not-a-date"), Some(2));
    }
}
