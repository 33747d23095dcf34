use crate::diff::{diff, FrameDiff};
use crate::frame::Frame;

/// Remembers the last emitted frame and turns new frames into diffs.
#[derive(Debug, Default)]
pub struct FrameTracker {
    last: Frame,
    primed: bool,
}

impl FrameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff `next` against the previous frame. The first call after
    /// construction or `force_full` yields every field.
    pub fn update(&mut self, next: &Frame) -> FrameDiff {
        let changes = if self.primed {
            diff(&self.last, next)
        } else {
            FrameDiff::full(next)
        };
        self.last.apply(&changes);
        self.primed = true;
        changes
    }

    /// Make the next update a full diff, e.g. after a terminal resize.
    pub fn force_full(&mut self) {
        self.primed = false;
    }

    pub fn last(&self) -> &Frame {
        &self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_is_full() {
        let mut tracker = FrameTracker::new();
        let d = tracker.update(&Frame::default());
        assert!(d.is_changed());
        assert_eq!(d.command_input.as_deref(), Some(""));
    }

    #[test]
    fn later_updates_are_sparse() {
        let mut tracker = FrameTracker::new();
        let mut frame = Frame::default();
        tracker.update(&frame);
        assert!(!tracker.update(&frame).is_changed());

        frame.command_input = "gg".into();
        let d = tracker.update(&frame);
        assert_eq!(d.command_input.as_deref(), Some("gg"));
        assert!(d.folders.is_none());
        assert_eq!(tracker.last(), &frame);
    }

    #[test]
    fn force_full_resends_everything() {
        let mut tracker = FrameTracker::new();
        let frame = Frame::default();
        tracker.update(&frame);
        tracker.force_full();
        assert_eq!(tracker.update(&frame), FrameDiff::full(&frame));
    }
}
