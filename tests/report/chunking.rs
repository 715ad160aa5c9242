use nse_options_rs::report::{MESSAGE_LIMIT, chunk_messages, format_scan};
use nse_options_rs::{NseError, ScanEntry, SignalThresholds, summarize};

use crate::common::three_strike_snapshot;

#[test]
fn packs_parts_under_limit() {
    let parts = ["aaaa", "bbbb", "cccc"];
    // Each part costs 5 characters with its newline.
    let msgs = chunk_messages(&parts, 10);
    assert_eq!(msgs, vec!["aaaa\nbbbb\n".to_string(), "cccc\n".to_string()]);
    assert!(msgs.iter().all(|m| m.chars().count() <= 10));
}

#[test]
fn oversized_part_stands_alone() {
    let big = "x".repeat(25);
    let parts = vec!["a".to_string(), big.clone(), "b".to_string()];
    let msgs = chunk_messages(&parts, 10);
    assert_eq!(msgs, vec!["a\n".to_string(), format!("{big}\n"), "b\n".to_string()]);
}

#[test]
fn empty_input_yields_no_messages() {
    let parts: [&str; 0] = [];
    assert!(chunk_messages(&parts, MESSAGE_LIMIT).is_empty());
}

#[test]
fn counts_characters_not_bytes() {
    // Four emoji are 16 bytes but 4 characters.
    let parts = ["📊📊📊📊", "📈📈📈📈"];
    let msgs = chunk_messages(&parts, 10);
    assert_eq!(msgs.len(), 1);
}

#[test]
fn scan_output_is_chunked() {
    let summary = summarize(&three_strike_snapshot(), &SignalThresholds::default()).unwrap();
    let mut entries: Vec<ScanEntry> = (0..60)
        .map(|i| ScanEntry {
            symbol: format!("SYM{i}"),
            outcome: Ok(summary.clone()),
        })
        .collect();
    entries.push(ScanEntry {
        symbol: "BAD".into(),
        outcome: Err(NseError::EmptyData {
            symbol: "BAD".into(),
        }),
    });

    let msgs = format_scan(&entries);
    assert!(msgs.len() > 1);
    assert!(msgs.iter().all(|m| m.chars().count() <= MESSAGE_LIMIT));
    assert!(msgs.last().unwrap().contains("⚠️ No data for BAD"));
    let blocks: usize = msgs.iter().map(|m| m.matches("📊 **").count()).sum();
    assert_eq!(blocks, 60);
}
