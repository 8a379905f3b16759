use crate::core::swipe::{SwipeAction, interpret_swipe};

/// Live drag state for one task row.
///
/// The renderer feeds raw gesture translations in and reads [`offset`] back
/// to slide the row. Only the horizontal component is kept; vertical drift
/// is discarded so rows never leave their lane. Deciding what the gesture
/// means is left entirely to [`interpret_swipe`].
///
/// [`offset`]: SwipeTracker::offset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    offset: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the gesture's current translation.
    pub fn drag_update(&mut self, x: f32, _y: f32) {
        self.offset = x;
    }

    /// Horizontal offset the row should be drawn at.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Finish the gesture: interpret the final displacement against the
    /// row's completion flag and snap the offset back to zero, whatever the
    /// outcome was.
    pub fn drag_end(&mut self, is_complete: bool) -> Option<SwipeAction> {
        let action = interpret_swipe(self.offset, is_complete);
        self.offset = 0.0;
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_horizontal_only() {
        let mut tracker = SwipeTracker::new();
        tracker.drag_update(42.0, -300.0);
        assert_eq!(tracker.offset(), 42.0);
    }

    #[test]
    fn drag_end_interprets_and_snaps_back() {
        let mut tracker = SwipeTracker::new();
        tracker.drag_update(150.0, 0.0);
        assert_eq!(tracker.drag_end(false), Some(SwipeAction::Complete));
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn cancelled_drag_still_snaps_back() {
        let mut tracker = SwipeTracker::new();
        tracker.drag_update(60.0, 0.0);
        assert_eq!(tracker.drag_end(false), None);
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn left_swipe_depends_on_completion() {
        let mut tracker = SwipeTracker::new();
        tracker.drag_update(-120.0, 0.0);
        assert_eq!(tracker.drag_end(true), Some(SwipeAction::Uncomplete));

        tracker.drag_update(-120.0, 0.0);
        assert_eq!(tracker.drag_end(false), Some(SwipeAction::Snooze));
    }
}
