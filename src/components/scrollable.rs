//! Vertical viewport over line-based content
//!
//! Tracks how far content has been scrolled and which lines are visible.
//! Nothing is rendered here; containers such as `ListView` consult it.
//!
//! # Example
//! ```ignore
//! let mut scroll = ScrollableView::new(60); // 60 lines of content
//! scroll.page_down(20);
//!
//! // lines 19..39 are on screen in a 20-line viewport
//! let visible = scroll.visible_range(20);
//! ```

use std::ops::Range;

/// Vertical scroll position over content of a known height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollableView {
    /// Total content height in lines
    content_height: usize,
    /// First visible line
    offset: usize,
}

impl ScrollableView {
    pub fn new(content_height: usize) -> Self {
        ScrollableView {
            content_height,
            offset: 0,
        }
    }

    /// Start at a previously saved offset
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self, viewport_height: usize) -> usize {
        self.content_height.saturating_sub(viewport_height)
    }

    /// Keep the offset inside the scrollable range
    pub fn clamp(&mut self, viewport_height: usize) {
        self.offset = self.offset.min(self.max_offset(viewport_height));
    }

    /// Scroll up by `lines`
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down by `lines`, stopping at the last full viewport
    pub fn scroll_down(&mut self, lines: usize, viewport_height: usize) {
        self.offset = self
            .offset
            .saturating_add(lines)
            .min(self.max_offset(viewport_height));
    }

    /// Page up (keeps one line of overlap)
    pub fn page_up(&mut self, viewport_height: usize) {
        self.scroll_up(viewport_height.saturating_sub(1).max(1));
    }

    /// Page down (keeps one line of overlap)
    pub fn page_down(&mut self, viewport_height: usize) {
        self.scroll_down(viewport_height.saturating_sub(1).max(1), viewport_height);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, viewport_height: usize) {
        self.offset = self.max_offset(viewport_height);
    }

    /// Lines currently on screen
    pub fn visible_range(&self, viewport_height: usize) -> Range<usize> {
        let end = (self.offset + viewport_height).min(self.content_height);
        self.offset.min(end)..end
    }

    /// Whether lines `start..end` fit entirely inside the viewport
    pub fn shows(&self, lines: Range<usize>, viewport_height: usize) -> bool {
        let visible = self.visible_range(viewport_height);
        lines.start >= visible.start && lines.end <= visible.end
    }

    /// Scroll the least distance that brings `lines` fully on screen
    ///
    /// Bands taller than the viewport are shown from their first line.
    pub fn reveal(&mut self, lines: Range<usize>, viewport_height: usize) {
        if lines.start < self.offset || lines.len() > viewport_height {
            self.offset = lines.start;
        } else if lines.end > self.offset + viewport_height {
            self.offset = lines.end - viewport_height;
        }
        self.clamp(viewport_height);
    }

    /// Whether there is content above or below the viewport
    pub fn can_scroll(&self, viewport_height: usize) -> (bool, bool) {
        (
            self.offset > 0,
            self.offset < self.max_offset(viewport_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scrolling_is_clamped() {
        let mut scroll = ScrollableView::new(30);
        scroll.scroll_up(3);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_down(5, 10);
        assert_eq!(scroll.offset(), 5);

        scroll.scroll_down(100, 10);
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn test_reveal_moves_the_least_distance() {
        let mut scroll = ScrollableView::new(30).with_offset(10);

        scroll.reveal(4..7, 10);
        assert_eq!(scroll.offset(), 4);

        scroll.reveal(15..18, 10);
        assert_eq!(scroll.offset(), 8);

        // already visible
        scroll.reveal(9..12, 10);
        assert_eq!(scroll.offset(), 8);

        // taller than the viewport: top edge wins
        scroll.reveal(12..25, 10);
        assert_eq!(scroll.offset(), 12);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollableView::new(100);
        scroll.page_down(20);
        assert_eq!(scroll.offset(), 19);
        assert_eq!(scroll.visible_range(20), 19..39);

        scroll.page_up(20);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_to_bottom(20);
        assert_eq!(scroll.offset(), 80);
        assert_eq!(scroll.can_scroll(20), (true, false));

        scroll.scroll_to_top();
        assert_eq!(scroll.can_scroll(20), (false, true));
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut scroll = ScrollableView::new(5).with_offset(4);
        scroll.clamp(10);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(10), 0..5);
        assert_eq!(scroll.can_scroll(10), (false, false));
    }

    #[test]
    fn test_shows_whole_ranges_only() {
        let scroll = ScrollableView::new(50).with_offset(10);
        assert!(scroll.shows(10..13, 10));
        assert!(scroll.shows(17..20, 10));
        assert!(!scroll.shows(18..21, 10));
        assert!(!scroll.shows(8..11, 10));
    }
}
