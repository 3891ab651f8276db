//! Tests for parsing statistics

use super::super::stats::ParseStats;
use super::create_test_fstab;
use crate::app::services::fstab_parser::FstabParser;

#[test]
fn test_new_stats_are_zero() {
    let stats = ParseStats::new();
    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.entries_parsed, 0);
    assert_eq!(stats.lines_skipped(), 0);
}

#[test]
fn test_stats_for_realistic_fstab() {
    let report = FstabParser::default()
        .parse_reader_with_stats(create_test_fstab().as_bytes())
        .unwrap();
    let stats = &report.stats;

    assert_eq!(stats.lines_read, 18);
    assert_eq!(stats.comment_lines, 7);
    assert_eq!(stats.blank_lines, 3);
    assert_eq!(stats.entries_parsed, 8);
    assert_eq!(report.entries.len(), stats.entries_parsed);
    assert_eq!(
        stats.lines_read,
        stats.lines_skipped() + stats.entries_parsed
    );
}

#[test]
fn test_stats_serialize() {
    let stats = ParseStats {
        lines_read: 3,
        comment_lines: 1,
        blank_lines: 1,
        entries_parsed: 1,
    };
    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("\"entries_parsed\":1"));
}
