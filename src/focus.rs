//! Focus management for keyboard activation
//!
//! Components are rebuilt every frame, so focus cannot be attached to a
//! component instance. Instead every activatable control claims the next
//! slot in render order while it draws, and the ring remembers which slot
//! index holds focus. Tab/Shift-Tab move that index over the slots claimed
//! in the previous frame.
//!
//! Containers that leave a control undrawn (a list scrolled past a row)
//! still `skip` its slots, so numbering stays stable while scrolling.
//!
//! # Example
//!
//! ```ignore
//! let ring = FocusRing::new();
//! ring.begin_frame();
//! let first = ring.claim();  // control #0
//! let second = ring.claim(); // control #1
//! ring.end_frame();
//!
//! ring.focus_next();         // focuses #0
//! ```

use std::cell::Cell;

/// Focus ring navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Move to next focusable control (Tab)
    Next,
    /// Move to previous focusable control (Shift+Tab)
    Previous,
}

/// A slot claimed by a control during a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusSlot {
    /// Position of the control in render order
    pub index: usize,
    /// Whether this control currently holds focus
    pub focused: bool,
}

/// Render-order focus tracking
///
/// Uses interior mutability so that controls can claim slots through the
/// shared render context.
#[derive(Debug)]
pub struct FocusRing {
    focused: Cell<Option<usize>>,
    /// Slots claimed so far in the frame being rendered
    claimed: Cell<usize>,
    /// Slots claimed by the last completed frame
    count: Cell<usize>,
    /// Focus was moved since the last completed frame
    moved: Cell<bool>,
    wrap_around: bool,
}

impl FocusRing {
    pub fn new() -> Self {
        FocusRing {
            focused: Cell::new(None),
            claimed: Cell::new(0),
            count: Cell::new(0),
            moved: Cell::new(false),
            wrap_around: true,
        }
    }

    /// Set whether focus wraps around at boundaries
    pub fn with_wrap_around(mut self, wrap: bool) -> Self {
        self.wrap_around = wrap;
        self
    }

    /// Reset slot numbering for a new render pass
    pub fn begin_frame(&self) {
        self.claimed.set(0);
    }

    /// Record how many controls the frame rendered
    ///
    /// Focus on a slot that no longer exists is dropped.
    pub fn end_frame(&self) {
        let count = self.claimed.get();
        self.count.set(count);
        self.moved.set(false);
        if matches!(self.focused.get(), Some(idx) if idx >= count) {
            self.focused.set(None);
        }
    }

    /// Claim the next slot in render order
    pub fn claim(&self) -> FocusSlot {
        let index = self.claimed.get();
        self.claimed.set(index + 1);
        FocusSlot {
            index,
            focused: self.focused.get() == Some(index),
        }
    }

    /// Reserve slots for controls that are not drawn this frame
    pub fn skip(&self, count: usize) {
        self.claimed.set(self.claimed.get() + count);
    }

    /// Index the next claimed slot will get
    pub fn next_slot(&self) -> usize {
        self.claimed.get()
    }

    /// Slot that focus just moved to, until the frame showing it ends
    ///
    /// Scrolling containers use this to bring the focused control on screen.
    pub fn reveal_target(&self) -> Option<usize> {
        self.focused.get().filter(|_| self.moved.get())
    }

    /// Focus a specific slot
    pub fn focus(&self, index: usize) -> bool {
        if index < self.count.get() {
            self.focused.set(Some(index));
            self.moved.set(true);
            true
        } else {
            false
        }
    }

    /// Clear focus
    pub fn blur(&self) {
        self.focused.set(None);
    }

    /// Currently focused slot
    pub fn focused(&self) -> Option<usize> {
        self.focused.get()
    }

    /// Number of focusable controls in the last frame
    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn focus_next(&self) -> bool {
        self.move_focus(FocusDirection::Next)
    }

    pub fn focus_prev(&self) -> bool {
        self.move_focus(FocusDirection::Previous)
    }

    /// Move focus in a direction
    pub fn move_focus(&self, direction: FocusDirection) -> bool {
        let len = self.count.get();
        if len == 0 {
            return false;
        }

        let next = match (self.focused.get(), direction) {
            (None, FocusDirection::Next) => Some(0),
            (None, FocusDirection::Previous) => Some(len - 1),
            (Some(idx), FocusDirection::Next) if idx + 1 < len => Some(idx + 1),
            (Some(idx), FocusDirection::Previous) if idx > 0 => Some(idx - 1),
            (Some(_), FocusDirection::Next) if self.wrap_around => Some(0),
            (Some(_), FocusDirection::Previous) if self.wrap_around => Some(len - 1),
            (Some(_), _) => None,
        };

        match next {
            Some(idx) => {
                tracing::debug!(from = ?self.focused.get(), to = idx, "focus moved");
                self.focused.set(Some(idx));
                self.moved.set(true);
                true
            }
            None => false,
        }
    }
}

impl Default for FocusRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_with(count: usize) -> FocusRing {
        let ring = FocusRing::new();
        ring.begin_frame();
        for _ in 0..count {
            ring.claim();
        }
        ring.end_frame();
        ring
    }

    #[test]
    fn test_claim_reports_focus() {
        let ring = ring_with(3);
        assert!(ring.focus(1));

        ring.begin_frame();
        assert!(!ring.claim().focused);
        let second = ring.claim();
        assert_eq!(second.index, 1);
        assert!(second.focused);
        assert!(!ring.claim().focused);
        ring.end_frame();
    }

    #[test]
    fn test_focus_next_prev_wraps() {
        let ring = ring_with(3);

        ring.focus_next();
        assert_eq!(ring.focused(), Some(0));
        ring.focus_next();
        ring.focus_next();
        assert_eq!(ring.focused(), Some(2));

        ring.focus_next(); // Wraps
        assert_eq!(ring.focused(), Some(0));

        ring.focus_prev(); // Wraps back
        assert_eq!(ring.focused(), Some(2));
    }

    #[test]
    fn test_no_wrap() {
        let ring = ring_with(2).with_wrap_around(false);
        ring.focus(1);
        assert!(!ring.focus_next());
        assert_eq!(ring.focused(), Some(1));

        ring.focus(0);
        assert!(!ring.focus_prev());
        assert_eq!(ring.focused(), Some(0));
    }

    #[test]
    fn test_shrinking_frame_drops_stale_focus() {
        let ring = ring_with(3);
        ring.focus(2);

        ring.begin_frame();
        ring.claim();
        ring.end_frame();

        assert_eq!(ring.focused(), None);
        assert_eq!(ring.count(), 1);
    }

    #[test]
    fn test_skipped_slots_keep_numbering() {
        let ring = ring_with(3);
        ring.focus(2);

        ring.begin_frame();
        ring.skip(2);
        assert_eq!(ring.next_slot(), 2);
        assert!(ring.claim().focused);
        ring.end_frame();

        assert_eq!(ring.count(), 3);
        assert_eq!(ring.focused(), Some(2));
    }

    #[test]
    fn test_reveal_target_lasts_one_frame() {
        let ring = ring_with(2);
        assert_eq!(ring.reveal_target(), None);

        ring.focus_next();
        assert_eq!(ring.reveal_target(), Some(0));

        ring.begin_frame();
        ring.claim();
        ring.claim();
        ring.end_frame();
        assert_eq!(ring.reveal_target(), None);
        assert_eq!(ring.focused(), Some(0));
    }

    #[test]
    fn test_empty_ring() {
        let ring = ring_with(0);
        assert!(!ring.focus_next());
        assert!(!ring.focus(0));
    }
}
