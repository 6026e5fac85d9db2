//! Position-driven lyric line tracking

use crate::types::LyricLine;
use std::ops::Range;
use tracing::debug;
use verse_core::{PlaybackController, Result};

/// Tracks which lyric line is current for a stream of playback positions
///
/// The index stays correct under arbitrary position jumps in either
/// direction, not just monotonic advance: every update recomputes the index
/// by binary search over the (sorted) line timestamps.
///
/// One synchronizer is driven by one logical session owner; position updates
/// arrive on a single sequential stream.
#[derive(Debug, Default)]
pub struct LyricSynchronizer {
    /// Sorted line sequence for the current sync session
    lines: Vec<LyricLine>,

    /// Index of the current line, `None` before the first update or when
    /// detached
    current_index: Option<usize>,

    /// Whether a non-empty line sequence is attached
    synchronized: bool,

    /// Most recent position seen, kept across attach/detach so a re-attach
    /// can resume mid-track
    last_position_ms: Option<u64>,
}

impl LyricSynchronizer {
    /// Create a new, detached synchronizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the line sequence, starting a new sync session
    ///
    /// Synchronization engages only for a non-empty sequence. If positions
    /// were already being received, the current index is recomputed from the
    /// last known position immediately.
    pub fn attach(&mut self, lines: Vec<LyricLine>) {
        debug!(line_count = lines.len(), "attaching lyric sequence");
        self.synchronized = !lines.is_empty();
        self.lines = lines;
        self.current_index = match (self.synchronized, self.last_position_ms) {
            (true, Some(position)) => Some(self.index_for(position)),
            _ => None,
        };
    }

    /// End the sync session
    pub fn detach(&mut self) {
        debug!("detaching lyric sequence");
        self.synchronized = false;
        self.current_index = None;
    }

    /// Feed a playback position update
    ///
    /// Returns the new current index only when it changed; repeating a
    /// position (or moving within the same line) publishes nothing. No-op
    /// while detached or with an empty sequence.
    pub fn update_position(&mut self, position_ms: u64) -> Option<usize> {
        self.last_position_ms = Some(position_ms);

        if !self.synchronized || self.lines.is_empty() {
            return None;
        }

        let index = self.index_for(position_ms);
        if self.current_index == Some(index) {
            return None;
        }

        self.current_index = Some(index);
        Some(index)
    }

    /// Index of the last line whose timestamp is `<=` the position
    ///
    /// Positions before the first line map to index 0; positions past the
    /// last line map to the last index.
    fn index_for(&self, position_ms: u64) -> usize {
        let reached = self
            .lines
            .partition_point(|line| line.timestamp_ms <= position_ms);
        reached.saturating_sub(1)
    }

    /// Whether a non-empty sequence is attached
    pub fn is_synchronized(&self) -> bool {
        self.synchronized
    }

    /// Index of the current line, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The current line, if any
    pub fn current_line(&self) -> Option<&LyricLine> {
        self.current_index.and_then(|i| self.lines.get(i))
    }

    /// The full attached line sequence
    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    /// Index range of lines within `radius` of the current line
    ///
    /// Inclusive on both sides, clamped to the sequence bounds. Empty when
    /// there is no current line.
    pub fn context_window(&self, radius: usize) -> Range<usize> {
        match self.current_index {
            Some(index) => {
                let start = index.saturating_sub(radius);
                let end = (index + radius).min(self.lines.len().saturating_sub(1));
                start..end + 1
            }
            None => 0..0,
        }
    }

    /// Lines within `radius` of the current line
    pub fn context_lines(&self, radius: usize) -> &[LyricLine] {
        &self.lines[self.context_window(radius)]
    }

    /// Jump playback to the timestamp of the given line
    ///
    /// An out-of-range index is a no-op; in range, the seek is issued on the
    /// playback collaborator.
    pub fn seek_to_line(
        &self,
        index: usize,
        controller: &mut dyn PlaybackController,
    ) -> Result<()> {
        match self.lines.get(index) {
            Some(line) => controller.seek_to(line.timestamp_ms),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(timestamps: &[u64]) -> Vec<LyricLine> {
        timestamps
            .iter()
            .enumerate()
            .map(|(i, &ts)| LyricLine::new(ts, format!("line {i}")))
            .collect()
    }

    fn attached(timestamps: &[u64]) -> LyricSynchronizer {
        let mut sync = LyricSynchronizer::new();
        sync.attach(lines(timestamps));
        sync
    }

    struct RecordingController {
        seeks: Vec<u64>,
    }

    impl PlaybackController for RecordingController {
        fn seek_to(&mut self, position_ms: u64) -> Result<()> {
            self.seeks.push(position_ms);
            Ok(())
        }
    }

    #[test]
    fn position_between_lines_selects_last_reached() {
        let mut sync = attached(&[0, 15_500, 20_000, 25_500]);
        assert_eq!(sync.update_position(18_000), Some(1));
    }

    #[test]
    fn position_at_start_selects_first() {
        let mut sync = attached(&[0, 15_500, 20_000, 25_500]);
        assert_eq!(sync.update_position(0), Some(0));
    }

    #[test]
    fn position_before_first_line_clamps_to_first() {
        let mut sync = attached(&[5000, 10_000]);
        assert_eq!(sync.update_position(100), Some(0));
    }

    #[test]
    fn position_past_end_clamps_to_last() {
        let mut sync = attached(&[0, 15_500, 20_000, 25_500]);
        assert_eq!(sync.update_position(999_999), Some(3));
    }

    #[test]
    fn repeated_update_publishes_nothing() {
        let mut sync = attached(&[0, 15_500, 20_000, 25_500]);
        assert_eq!(sync.update_position(18_000), Some(1));
        assert_eq!(sync.update_position(18_000), None);
        assert_eq!(sync.update_position(19_000), None); // same line
    }

    #[test]
    fn backward_seek_recomputes_index() {
        let mut sync = attached(&[0, 15_500, 20_000, 25_500]);
        assert_eq!(sync.update_position(26_000), Some(3));
        assert_eq!(sync.update_position(1000), Some(0));
    }

    #[test]
    fn update_while_detached_is_noop() {
        let mut sync = LyricSynchronizer::new();
        assert_eq!(sync.update_position(5000), None);

        let mut sync = attached(&[0, 1000]);
        sync.update_position(1500);
        sync.detach();
        assert_eq!(sync.update_position(500), None);
        assert_eq!(sync.current_index(), None);
    }

    #[test]
    fn attach_empty_does_not_synchronize() {
        let mut sync = LyricSynchronizer::new();
        sync.attach(Vec::new());
        assert!(!sync.is_synchronized());
        assert_eq!(sync.update_position(1000), None);
    }

    #[test]
    fn attach_recomputes_from_last_known_position() {
        let mut sync = LyricSynchronizer::new();
        sync.update_position(18_000);

        sync.attach(lines(&[0, 15_500, 20_000, 25_500]));
        assert_eq!(sync.current_index(), Some(1));
    }

    #[test]
    fn context_window_mid_sequence() {
        let mut sync = attached(&[0, 1000, 2000, 3000]);
        sync.update_position(2500); // index 2
        assert_eq!(sync.context_window(1), 1..4);
        assert_eq!(sync.context_lines(1).len(), 3);
    }

    #[test]
    fn context_window_clamps_at_start() {
        let mut sync = attached(&[0, 1000, 2000, 3000]);
        sync.update_position(0); // index 0
        assert_eq!(sync.context_window(1), 0..2);
    }

    #[test]
    fn context_window_empty_without_index() {
        let sync = attached(&[0, 1000]);
        assert!(sync.context_window(2).is_empty());
        assert!(sync.context_lines(2).is_empty());
    }

    #[test]
    fn seek_to_line_issues_seek_at_timestamp() {
        let sync = attached(&[0, 15_500, 20_000]);
        let mut controller = RecordingController { seeks: Vec::new() };

        sync.seek_to_line(1, &mut controller).unwrap();
        assert_eq!(controller.seeks, vec![15_500]);
    }

    #[test]
    fn seek_out_of_range_is_noop() {
        let sync = attached(&[0, 15_500]);
        let mut controller = RecordingController { seeks: Vec::new() };

        sync.seek_to_line(99, &mut controller).unwrap();
        assert!(controller.seeks.is_empty());
    }
}
