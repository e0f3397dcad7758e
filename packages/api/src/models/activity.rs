use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One line of the account activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    /// ISO-8601 timestamp as sent by the backend.
    pub timestamp: String,
}

impl ActivityEntry {
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

/// Order entries most recent first.
///
/// Entries whose timestamp does not parse sink to the end, keeping their
/// relative order.
pub fn sort_newest_first(entries: &mut [ActivityEntry]) {
    entries.sort_by_cached_key(|entry| std::cmp::Reverse(entry.parsed_timestamp()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(action: &str, timestamp: &str) -> ActivityEntry {
        ActivityEntry {
            action: action.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    fn actions(entries: &[ActivityEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.action.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let mut entries = vec![
            entry("january", "2024-01-01T00:00:00Z"),
            entry("march", "2024-03-01T00:00:00Z"),
        ];
        sort_newest_first(&mut entries);
        assert_eq!(actions(&entries), vec!["march", "january"]);
    }

    #[test]
    fn test_compares_instants_across_offsets() {
        // 10:00+02:00 is 08:00Z, earlier than 09:00Z.
        let mut entries = vec![
            entry("offset", "2024-05-01T10:00:00+02:00"),
            entry("utc", "2024-05-01T09:00:00Z"),
        ];
        sort_newest_first(&mut entries);
        assert_eq!(actions(&entries), vec!["utc", "offset"]);
    }

    #[test]
    fn test_millisecond_precision() {
        let mut entries = vec![
            entry("first", "2024-05-01T09:00:00.100Z"),
            entry("second", "2024-05-01T09:00:00.250Z"),
        ];
        sort_newest_first(&mut entries);
        assert_eq!(actions(&entries), vec!["second", "first"]);
    }

    #[test]
    fn test_unparseable_sink_to_end() {
        let mut entries = vec![
            entry("bad-a", "yesterday"),
            entry("old", "2023-01-01T00:00:00Z"),
            entry("bad-b", ""),
            entry("new", "2024-01-01T00:00:00Z"),
        ];
        sort_newest_first(&mut entries);
        assert_eq!(actions(&entries), vec!["new", "old", "bad-a", "bad-b"]);
    }

    #[test]
    fn test_empty_is_fine() {
        let mut entries: Vec<ActivityEntry> = Vec::new();
        sort_newest_first(&mut entries);
        assert!(entries.is_empty());
    }
}
