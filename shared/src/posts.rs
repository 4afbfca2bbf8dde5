//! Incremental reveal of pre-rendered post cards.

use std::ops::Range;

/// Cards visible before the first "load more" click.
pub const INITIAL_VISIBLE: usize = 6;

/// Cards revealed per click.
pub const REVEAL_STEP: usize = 3;

/// Label shown on the control once every card is visible.
pub const NO_MORE_POSTS_LABEL: &str = "No more posts";

/// Class that keeps a card out of the layout.
pub const HIDDEN_CARD_CLASS: &str = "d-none";

/// Visible-count cursor over `total` cards kept in document order.
///
/// The cursor only moves forward. Once it reaches `total` it is exhausted
/// and every further [`advance`](Self::advance) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreCursor {
    total: usize,
    visible: usize,
    step: usize,
}

impl LoadMoreCursor {
    /// Cursor with the site defaults (6 up front, 3 per click).
    pub fn new(total: usize) -> Self {
        Self::with_limits(total, INITIAL_VISIBLE, REVEAL_STEP)
    }

    /// Cursor with custom window sizes. A zero `step` is bumped to one so a
    /// click always makes progress.
    pub fn with_limits(total: usize, initial: usize, step: usize) -> Self {
        Self {
            total,
            visible: initial.min(total),
            step: step.max(1),
        }
    }

    /// Number of cards currently visible.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Whether every card is visible.
    pub fn is_exhausted(&self) -> bool {
        self.visible >= self.total
    }

    /// Indices that must start hidden.
    pub fn initially_hidden(&self) -> Range<usize> {
        self.visible..self.total
    }

    /// Reveal up to one step of cards and return their indices. Empty when
    /// the cursor is already exhausted.
    pub fn advance(&mut self) -> Range<usize> {
        let start = self.visible;
        let end = (start + self.step).min(self.total);
        self.visible = end;
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn few_cards_are_exhausted_from_the_start() {
        let cursor = LoadMoreCursor::new(4);
        assert_eq!(cursor.visible(), 4);
        assert!(cursor.is_exhausted());
        assert!(cursor.initially_hidden().is_empty());
    }

    #[test]
    fn no_cards_at_all() {
        let mut cursor = LoadMoreCursor::new(0);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), 0..0);
    }

    #[test]
    fn zero_step_still_progresses() {
        let mut cursor = LoadMoreCursor::with_limits(3, 1, 0);
        assert_eq!(cursor.advance(), 1..2);
    }

    #[test]
    fn exact_multiple_exhausts_on_last_step() {
        let mut cursor = LoadMoreCursor::new(9);
        assert_eq!(cursor.initially_hidden(), 6..9);
        assert_eq!(cursor.advance(), 6..9);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), 9..9);
    }
}
