//! Historical Playback Cursor
//!
//! An integer cursor over a chronologically ordered sequence. The visible
//! trend series is always the prefix `[0..=index]`; every operation
//! saturates at the sequence bounds.

/// Cursor into an ordered sequence of `len` periods.
///
/// Invariant: `index <= len - 1` whenever `len > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackCursor {
    index: usize,
    len: usize,
}

impl PlaybackCursor {
    /// Cursor over an empty sequence. All operations are no-ops.
    pub fn empty() -> Self {
        PlaybackCursor { index: 0, len: 0 }
    }

    /// Cursor positioned on the most recent period.
    pub fn at_latest(len: usize) -> Self {
        PlaybackCursor {
            index: len.saturating_sub(1),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    pub fn jump_first(&mut self) {
        self.index = 0;
    }

    pub fn jump_last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }

    pub fn step_back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn step_forward(&mut self) {
        if !self.at_end() {
            self.index += 1;
        }
    }

    /// Direct-set from the slider. The continuous control value is floored
    /// to an integer index and clamped into range.
    pub fn seek(&mut self, raw: f64) {
        if self.len == 0 {
            return;
        }
        let floored = raw.max(0.0).floor() as usize;
        self.index = floored.min(self.len - 1);
    }

    /// Number of periods in the visible prefix: `index + 1`.
    pub fn visible_len(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.index + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_on_most_recent_period() {
        let cursor = PlaybackCursor::at_latest(6);
        assert_eq!(cursor.index(), 5);
        assert!(cursor.at_end());
        assert_eq!(cursor.visible_len(), 6);
    }

    #[test]
    fn step_back_shrinks_visible_prefix() {
        // Six periods, cursor starts at index 5; one step back shows five.
        let mut cursor = PlaybackCursor::at_latest(6);
        cursor.step_back();
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.visible_len(), 5);
    }

    #[test]
    fn stepping_saturates_at_bounds() {
        let mut cursor = PlaybackCursor::at_latest(3);
        cursor.step_forward();
        assert_eq!(cursor.index(), 2);

        cursor.jump_first();
        cursor.step_back();
        assert_eq!(cursor.index(), 0);

        for _ in 0..10 {
            cursor.step_forward();
        }
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn jumps_hit_exact_endpoints() {
        let mut cursor = PlaybackCursor::at_latest(13);
        cursor.jump_first();
        assert!(cursor.at_start());
        assert_eq!(cursor.visible_len(), 1);
        cursor.jump_last();
        assert_eq!(cursor.index(), 12);
    }

    #[test]
    fn seek_floors_and_clamps() {
        let mut cursor = PlaybackCursor::at_latest(6);
        cursor.seek(2.9);
        assert_eq!(cursor.index(), 2);
        cursor.seek(99.0);
        assert_eq!(cursor.index(), 5);
        cursor.seek(-4.0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut cursor = PlaybackCursor::empty();
        cursor.step_forward();
        cursor.step_back();
        cursor.jump_last();
        cursor.seek(3.0);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.visible_len(), 0);
        assert!(cursor.is_empty());
    }
}
