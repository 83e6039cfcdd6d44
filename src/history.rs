use std::collections::VecDeque;

use crate::canvas::Bitmap;

/// Most snapshots kept at once, baseline included
pub const HISTORY_CAP: usize = 10;

/// Bounded stack of full-bitmap snapshots for undo.
///
/// Never empty: it starts with the blank canvas as its baseline. Once the cap
/// is exceeded the oldest snapshot is dropped, so the baseline moves forward
/// with it.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    /// Snapshots below the newest, oldest first
    older: VecDeque<Bitmap>,
    newest: Bitmap,
}

#[allow(clippy::len_without_is_empty)]
impl HistoryStack {
    /// Creates a history holding only `baseline`
    pub fn new(baseline: Bitmap) -> Self {
        Self {
            older: VecDeque::with_capacity(HISTORY_CAP),
            newest: baseline,
        }
    }

    /// Records a snapshot, evicting the oldest past the cap
    pub fn push(&mut self, bitmap: Bitmap) {
        let previous = std::mem::replace(&mut self.newest, bitmap);
        self.older.push_back(previous);
        while self.len() > HISTORY_CAP {
            self.older.pop_front();
            log::debug!("History full, dropped oldest snapshot");
        }
    }

    /// Drops the newest snapshot and returns the one to restore.
    ///
    /// With only the baseline left this changes nothing and returns it.
    pub fn undo(&mut self) -> &Bitmap {
        if let Some(previous) = self.older.pop_back() {
            self.newest = previous;
        }
        &self.newest
    }

    /// The newest snapshot
    pub fn current(&self) -> &Bitmap {
        &self.newest
    }

    pub fn len(&self) -> usize {
        self.older.len() + 1
    }

    /// Whether there is an older snapshot to go back to
    pub fn can_undo(&self) -> bool {
        !self.older.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn marked(value: u8) -> Bitmap {
        RgbaImage::from_pixel(2, 2, Rgba([value, 0, 0, 255]))
    }

    #[test]
    fn test_push_and_undo() {
        let mut history = HistoryStack::new(marked(0));
        history.push(marked(1));
        history.push(marked(2));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), &marked(2));

        assert_eq!(history.undo(), &marked(1));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_undo_stops_at_baseline() {
        let mut history = HistoryStack::new(marked(0));
        history.push(marked(1));

        history.undo();
        assert!(!history.can_undo());
        assert_eq!(history.undo(), &marked(0));
        assert_eq!(history.undo(), &marked(0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_eviction_keeps_newest() {
        let mut history = HistoryStack::new(marked(0));
        for value in 1..=15 {
            history.push(marked(value));
        }
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.current(), &marked(15));

        // Undo all the way down lands on the oldest survivor, not the baseline
        for _ in 0..20 {
            history.undo();
        }
        assert_eq!(history.current(), &marked(6));
    }
}
