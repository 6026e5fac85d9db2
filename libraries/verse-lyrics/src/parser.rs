//! LRC-style timestamped text parsing
//!
//! Each non-blank line is matched against `[mm:ss]text` or `[mm:ss.fff]text`
//! (1-3 fractional digits, right-padded to millisecond precision). Lines
//! without a usable tag are kept with a synthetic timestamp so plain-text
//! lyrics still scroll; blank lines are dropped. Parsing never errors.

use crate::types::LyricLine;
use once_cell::sync::Lazy;
use regex::Regex;

/// Offset applied to a synthetic timestamp, relative to the previous line
const SYNTHETIC_STEP_MS: u64 = 1000;

static TIMESTAMP_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{1,3}):(\d{2})(?:\.(\d{1,3}))?\]\s*(.*)$").expect("timestamp tag regex")
});

/// Parse raw lyric text into an ordered line list
///
/// The result is stably sorted ascending by timestamp: out-of-order tags are
/// reordered, ties keep input order. Blank or empty input yields an empty
/// list.
pub fn parse(raw: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match TIMESTAMP_TAG.captures(line) {
            Some(caps) => {
                let minutes: u64 = caps[1].parse().unwrap_or(0);
                let seconds: u64 = caps[2].parse().unwrap_or(0);
                let millis = caps.get(3).map_or(0, |m| parse_fraction(m.as_str()));

                let timestamp_ms = minutes * 60_000 + seconds * 1000 + millis;
                lines.push(LyricLine::new(timestamp_ms, caps[4].trim()));
            }
            None => {
                // No usable tag: offset from the previous emitted line
                let timestamp_ms = lines
                    .last()
                    .map_or(0, |prev| prev.timestamp_ms + SYNTHETIC_STEP_MS);
                lines.push(LyricLine::new(timestamp_ms, line));
            }
        }
    }

    // sort_by_key is stable: equal timestamps keep input order
    lines.sort_by_key(|line| line.timestamp_ms);
    lines
}

/// Right-pad a 1-3 digit fraction to millisecond precision
///
/// "2" means 200 ms, "25" means 250 ms, "250" means 250 ms.
fn parse_fraction(digits: &str) -> u64 {
    let value: u64 = digits.parse().unwrap_or(0);
    match digits.len() {
        1 => value * 100,
        2 => value * 10,
        _ => value,
    }
}
