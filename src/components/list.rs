//! Grouped list of titled sections with vertical scrolling
//!
//! Rows are arbitrary components, usually `FlexibleRow`s. Only rows that fit
//! entirely inside the viewport are drawn, so a control is never half
//! visible and never clickable off-screen. Rows scrolled out of view still
//! reserve their focus slots, and moving focus onto such a row scrolls it
//! back into view.
//!
//! Navigation:
//! - `Up`/`k`, `Down`/`j`: scroll one line
//! - `PageUp`/`PageDown`: scroll one screen
//! - `Home`/`End`: jump to top or bottom
//! - mouse wheel over the list: scroll three lines
//!
//! # Example
//!
//! ```ignore
//! let scroll = State::new(0usize);
//!
//! let list = ListView::new()
//!     .title("FlexibleRow Variations")
//!     .scroll_state(scroll.clone())
//!     .section(
//!         Section::new("Basic Patterns")
//!             .row(FlexibleRow::titled("Simple Title", || Text::new("Value"))),
//!     );
//! ```

use crate::component::{measured_size, propagate_event, Component};
use crate::components::scrollable::ScrollableView;
use crate::components::text::truncate_to_width;
use crate::context::{RenderContext, UseTheme};
use crate::event::{Event, EventHandler, Key, MouseEvent};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::state::State;
use crate::style::Style;
use crate::theme::Theme;
use anyhow::Result;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Lines scrolled per mouse wheel notch
const WHEEL_LINES: usize = 3;

/// A titled group of rows
pub struct Section {
    title: String,
    rows: Vec<Box<dyn Component>>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Add a row (builder style)
    pub fn row(mut self, row: impl Component + 'static) -> Self {
        self.push(row);
        self
    }

    pub fn push(&mut self, row: impl Component + 'static) {
        self.rows.push(Box::new(row));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What occupies a band of lines in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Title,
    Header(usize),
    Row(usize, usize),
}

/// A line band: entry, first line, height
type Placement = (Entry, usize, usize);

/// Scrollable list of sections under an optional screen title
pub struct ListView {
    title: Option<String>,
    sections: Vec<Section>,
    scroll: State<usize>,
    /// Area from the last render, used for wheel hit-testing and paging
    viewport: Rect,
    content_height: usize,
}

impl ListView {
    pub fn new() -> Self {
        ListView {
            title: None,
            sections: Vec::new(),
            scroll: State::new(0),
            viewport: Rect::default(),
            content_height: 0,
        }
    }

    /// Screen title shown above the first section
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Keep the scroll offset in caller-owned state so it survives rebuilds
    pub fn scroll_state(mut self, scroll: State<usize>) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Current scroll offset in lines
    pub fn offset(&self) -> usize {
        self.scroll.get()
    }

    /// Assign every title, header and row its band of lines
    fn placements(&self, theme: &Theme) -> Vec<Placement> {
        let spacing = theme.section_spacing as usize;
        let mut placements = Vec::new();
        let mut line = 0usize;

        if self.title.is_some() {
            placements.push((Entry::Title, line, 1));
            line += 1 + spacing;
        }

        for (s, section) in self.sections.iter().enumerate() {
            if s > 0 {
                line += spacing;
            }
            placements.push((Entry::Header(s), line, 1));
            line += 1;

            for (r, row) in section.rows.iter().enumerate() {
                let height = measured_size(row, theme).1 as usize;
                placements.push((Entry::Row(s, r), line, height));
                line += height;
            }
        }
        placements
    }

    fn content_height(placements: &[Placement]) -> usize {
        placements
            .last()
            .map_or(0, |(_, line, height)| line + height)
    }

    /// Lines of the row holding focus slot `target`, counting slots from `first`
    fn row_holding(
        &self,
        placements: &[Placement],
        first: usize,
        target: usize,
    ) -> Option<Range<usize>> {
        let mut slot = first;
        for &(entry, line, height) in placements {
            if let Entry::Row(s, r) = entry {
                let slots = self.sections[s].rows[r].focus_slots();
                if (slot..slot + slots).contains(&target) {
                    return Some(line..line + height);
                }
                slot += slots;
            }
        }
        None
    }

    fn scroll_view(&self) -> ScrollableView {
        ScrollableView::new(self.content_height).with_offset(self.scroll.get())
    }

    fn scroll_with(&self, f: impl FnOnce(&mut ScrollableView, usize)) -> bool {
        let viewport = self.viewport.height as usize;
        let mut view = self.scroll_view();
        let before = view.offset();
        f(&mut view, viewport);
        if view.offset() != before {
            tracing::trace!(from = before, to = view.offset(), "list scrolled");
            self.scroll.set(view.offset());
        }
        true
    }

    fn draw_heading(
        renderer: &mut Renderer,
        text: &str,
        x: u16,
        y: u16,
        bounds: Rect,
        style: Style,
    ) -> Result<()> {
        let room = bounds.right().saturating_sub(x);
        if room == 0 {
            return Ok(());
        }
        renderer.move_cursor(x, y)?;
        renderer.write_styled(truncate_to_width(text, room), style)
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ListView {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(Key::Up) | Event::Key(Key::Char('k')) => {
                self.scroll_with(|view, _| view.scroll_up(1))
            }
            Event::Key(Key::Down) | Event::Key(Key::Char('j')) => {
                self.scroll_with(|view, viewport| view.scroll_down(1, viewport))
            }
            Event::Key(Key::PageUp) => self.scroll_with(|view, viewport| view.page_up(viewport)),
            Event::Key(Key::PageDown) => {
                self.scroll_with(|view, viewport| view.page_down(viewport))
            }
            Event::Key(Key::Home) => self.scroll_with(|view, _| view.scroll_to_top()),
            Event::Key(Key::End) => {
                self.scroll_with(|view, viewport| view.scroll_to_bottom(viewport))
            }
            Event::Mouse(MouseEvent::ScrollUp(col, row)) if self.viewport.contains(*col, *row) => {
                self.scroll_with(|view, _| view.scroll_up(WHEEL_LINES))
            }
            Event::Mouse(MouseEvent::ScrollDown(col, row))
                if self.viewport.contains(*col, *row) =>
            {
                self.scroll_with(|view, viewport| view.scroll_down(WHEEL_LINES, viewport))
            }
            _ => self
                .sections
                .iter_mut()
                .any(|section| propagate_event(&mut section.rows, event)),
        }
    }
}

impl Component for ListView {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let theme = self.use_theme(ctx);
        let placements = self.placements(theme);
        self.viewport = bounds;
        self.content_height = Self::content_height(&placements);

        let viewport = bounds.height as usize;
        let mut view = self.scroll_view();
        view.clamp(viewport);
        if let Some(target) = ctx.focus.reveal_target() {
            if let Some(lines) = self.row_holding(&placements, ctx.focus.next_slot(), target) {
                view.reveal(lines, viewport);
            }
        }
        self.scroll.set(view.offset());

        let text_x = bounds.x.saturating_add(theme.row_padding);
        for (entry, line, height) in placements {
            if height == 0 || !view.shows(line..line + height, viewport) {
                if let Entry::Row(s, r) = entry {
                    ctx.focus.skip(self.sections[s].rows[r].focus_slots());
                }
                continue;
            }
            let y = bounds.y + (line - view.offset()) as u16;
            match entry {
                Entry::Title => {
                    if let Some(title) = &self.title {
                        Self::draw_heading(renderer, title, text_x, y, bounds, theme.title_style())?;
                    }
                }
                Entry::Header(s) => {
                    let title = &self.sections[s].title;
                    let style = theme.section_header_style();
                    Self::draw_heading(renderer, title, text_x, y, bounds, style)?;
                }
                Entry::Row(s, r) => {
                    let rect = Rect::new(bounds.x, y, bounds.width, height as u16);
                    self.sections[s].rows[r].render(renderer, rect, ctx)?;
                }
            }
        }
        Ok(())
    }

    fn min_size(&self, theme: &Theme) -> (u16, u16) {
        let placements = self.placements(theme);
        let heading_width = |text: &str| (text.width() as u16).saturating_add(theme.row_padding);

        let width = self
            .sections
            .iter()
            .flat_map(|section| {
                std::iter::once(heading_width(&section.title))
                    .chain(section.rows.iter().map(|row| measured_size(row, theme).0))
            })
            .chain(self.title.as_deref().map(heading_width))
            .max()
            .unwrap_or(0);
        let height = Self::content_height(&placements).min(u16::MAX as usize) as u16;
        (width, height)
    }

    fn fills(&self) -> bool {
        true
    }

    fn focus_slots(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .map(|row| row.focus_slots())
            .sum()
    }

    fn name(&self) -> &str {
        "ListView"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{dispatch, render_frame};
    use crate::components::{ControlButton, ControlRadio, FlexibleRow, Text};
    use crate::focus::FocusRing;
    use std::cell::Cell;
    use std::rc::Rc;

    fn sample(scroll: State<usize>) -> ListView {
        ListView::new()
            .title("Rows")
            .scroll_state(scroll)
            .section(
                Section::new("First")
                    .row(FlexibleRow::titled("one", || Text::new("1")))
                    .row(FlexibleRow::titled("two", || Text::new("2"))),
            )
            .section(Section::new("Second").row(FlexibleRow::titled("three", || Text::new("3"))))
    }

    fn render(list: &mut ListView, width: u16, height: u16) -> Renderer {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let ctx = RenderContext::new(&theme, &focus);
        let mut renderer = Renderer::headless(width, height);
        focus.begin_frame();
        list.render(&mut renderer, Rect::new(0, 0, width, height), &ctx)
            .unwrap();
        focus.end_frame();
        renderer
    }

    #[test]
    fn test_layout_of_title_headers_and_rows() {
        let theme = Theme::default();
        let list = sample(State::new(0));

        // title, gap, header, 2 rows of 3, gap, header, row of 3
        assert_eq!(list.min_size(&theme).1, 1 + 1 + 1 + 6 + 1 + 1 + 3);

        let mut list = list;
        let renderer = render(&mut list, 12, 14);
        let buffer = renderer.buffer();
        assert_eq!(buffer.line(0).trim_end(), " Rows");
        assert_eq!(buffer.line(2).trim_end(), " First");
        assert_eq!(buffer.line(4), " one      1 ");
        assert_eq!(buffer.line(7), " two      2 ");
        assert_eq!(buffer.line(10).trim_end(), " Second");
        assert_eq!(buffer.line(12), " three    3 ");
    }

    #[test]
    fn test_partially_visible_rows_are_skipped() {
        let mut list = sample(State::new(0));
        let renderer = render(&mut list, 12, 6);
        let buffer = renderer.buffer();
        assert_eq!(buffer.line(4).trim_end(), " one");
        // "two" would start at line 6, outside the viewport
        assert!(buffer.find("2").is_none());
    }

    #[test]
    fn test_keyboard_and_wheel_scrolling() {
        let scroll = State::new(0);
        let mut list = sample(scroll.clone());
        render(&mut list, 12, 6);

        assert!(list.handle_event(&Event::Key(Key::Down)));
        assert_eq!(scroll.get(), 1);

        assert!(list.handle_event(&Event::Mouse(MouseEvent::ScrollDown(3, 3))));
        assert_eq!(scroll.get(), 4);

        assert!(list.handle_event(&Event::Key(Key::End)));
        assert_eq!(scroll.get(), 14 - 6);

        assert!(list.handle_event(&Event::Key(Key::PageUp)));
        assert_eq!(scroll.get(), 3);

        // wheel outside the list is not ours
        assert!(!list.handle_event(&Event::Mouse(MouseEvent::ScrollUp(40, 40))));

        assert!(list.handle_event(&Event::Key(Key::Home)));
        assert_eq!(scroll.get(), 0);
    }

    #[test]
    fn test_offset_is_clamped_on_render() {
        let scroll = State::new(500);
        let mut list = sample(scroll.clone());
        render(&mut list, 12, 10);
        assert_eq!(scroll.get(), 4);
    }

    fn sort_list(order: &State<usize>, scroll: &State<usize>) -> ListView {
        let section = ["Name", "Date", "Size"].into_iter().enumerate().fold(
            Section::new("Sort"),
            |section, (index, title)| {
                let order = order.clone();
                section.row(FlexibleRow::titled(title, move || {
                    let order = order.clone();
                    ControlRadio::new(order.get() == index, move || order.set(index))
                }))
            },
        );
        ListView::new().scroll_state(scroll.clone()).section(section)
    }

    #[test]
    fn test_scrolling_keeps_focus_on_the_same_control() {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let mut renderer = Renderer::headless(20, 6);
        let order = State::new(2usize);
        let scroll = State::new(0usize);

        let mut list = sort_list(&order, &scroll);
        render_frame(&mut list, &mut renderer, &theme, &focus).unwrap();
        dispatch(&mut list, &Event::Key(Key::Tab), &mut renderer, &focus);
        assert_eq!(focus.focused(), Some(0));

        for _ in 0..2 {
            let mut list = sort_list(&order, &scroll);
            render_frame(&mut list, &mut renderer, &theme, &focus).unwrap();
            dispatch(&mut list, &Event::Key(Key::Down), &mut renderer, &focus);
        }
        assert_eq!(scroll.get(), 2);

        // "Name" is scrolled out but still owns slot 0
        let mut list = sort_list(&order, &scroll);
        render_frame(&mut list, &mut renderer, &theme, &focus).unwrap();
        assert!(renderer.buffer().find("Name").is_none());
        assert_eq!(focus.count(), 3);
        assert_eq!(focus.focused(), Some(0));

        dispatch(&mut list, &Event::Key(Key::Enter), &mut renderer, &focus);
        assert_eq!(order.get(), 2);
    }

    #[test]
    fn test_focus_movement_scrolls_row_into_view() {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let mut renderer = Renderer::headless(20, 6);
        let order = State::new(2usize);
        let scroll = State::new(4usize);

        let mut list = sort_list(&order, &scroll);
        render_frame(&mut list, &mut renderer, &theme, &focus).unwrap();
        assert!(renderer.buffer().find("Name").is_none());

        dispatch(&mut list, &Event::Key(Key::Tab), &mut renderer, &focus);
        let mut list = sort_list(&order, &scroll);
        render_frame(&mut list, &mut renderer, &theme, &focus).unwrap();
        assert_eq!(scroll.get(), 1);
        assert!(renderer.buffer().find("Name").is_some());

        dispatch(&mut list, &Event::Key(Key::Enter), &mut renderer, &focus);
        assert_eq!(order.get(), 0);

        // a plain redraw leaves the offset to the user
        scroll.set(3);
        let mut list = sort_list(&order, &scroll);
        render_frame(&mut list, &mut renderer, &theme, &focus).unwrap();
        assert_eq!(scroll.get(), 3);
    }

    #[test]
    fn test_events_reach_rows() {
        let pressed = Rc::new(Cell::new(false));
        let flag = pressed.clone();
        let mut list = ListView::new().section(Section::new("Actions").row(
            FlexibleRow::center_only(move || {
                let flag = flag.clone();
                ControlButton::title("Go", move || flag.set(true))
            }),
        ));

        let renderer = render(&mut list, 10, 4);
        let (x, y) = renderer.buffer().find("G").unwrap();
        assert!(list.handle_event(&Event::click(x, y)));
        assert!(pressed.get());
    }
}
