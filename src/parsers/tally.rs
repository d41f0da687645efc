//! Per-day tally payload parser

use crate::types::{DateLevelMap, DayTally};

use super::{decode_object, HeatmapDataParser};

/// Parser for `{"YYYY-MM-DD": {"completed": n, "total": m, "extra": bool}}`.
/// Each tally is classified into a level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TallyParser;

impl HeatmapDataParser for TallyParser {
    fn name(&self) -> &str {
        "tallies"
    }

    fn parse(&self, raw: Option<&str>) -> DateLevelMap {
        let Some(obj) = decode_object(self.name(), raw) else {
            return DateLevelMap::new();
        };

        obj.into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<DayTally>(value) {
                Ok(tally) => Some((key, tally.level().value() as i64)),
                Err(e) => {
                    log::debug!("[tallies] skipping '{key}': {e}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tallies() {
        let raw = r#"{
            "2024-01-01": {"completed": 5, "total": 5, "extra": true},
            "2024-01-02": {"completed": 5, "total": 5},
            "2024-01-03": {"completed": 3, "total": 5},
            "2024-01-04": {"completed": 1, "total": 5},
            "2024-01-05": {"completed": 0, "total": 5}
        }"#;
        let map = TallyParser.parse(Some(raw));
        assert_eq!(map.get("2024-01-01"), Some(5));
        assert_eq!(map.get("2024-01-02"), Some(4));
        assert_eq!(map.get("2024-01-03"), Some(3));
        assert_eq!(map.get("2024-01-04"), Some(2));
        assert_eq!(map.get("2024-01-05"), Some(1));
    }

    #[test]
    fn test_parse_tallies_skips_bad_entries() {
        let raw = r#"{"a": {"completed": 2}, "b": 3, "c": {"completed": 2, "total": 4}}"#;
        let map = TallyParser.parse(Some(raw));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("c"), Some(3));
    }

    #[test]
    fn test_parse_tallies_malformed() {
        assert!(TallyParser.parse(Some("{oops")).is_empty());
        assert!(TallyParser.parse(None).is_empty());
    }
}
