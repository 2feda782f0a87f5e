//! Borderless action button with a title, an icon, or both

use super::Interaction;
use crate::component::Component;
use crate::components::image::Image;
use crate::components::text::truncate_to_width;
use crate::context::{RenderContext, UseTheme};
use crate::event::{Event, EventHandler};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;
use unicode_width::UnicodeWidthStr;

/// Button that runs an action when activated
///
/// Only the three constructors exist, so a button always has at least a
/// title or an icon.
pub struct ControlButton {
    title: Option<String>,
    icon: Option<Image>,
    action: Box<dyn FnMut()>,
    interaction: Interaction,
}

impl ControlButton {
    /// Text-only button
    pub fn title(title: impl Into<String>, action: impl FnMut() + 'static) -> Self {
        Self::build(Some(title.into()), None, action)
    }

    /// Icon-only button
    pub fn image(symbol: impl Into<String>, action: impl FnMut() + 'static) -> Self {
        Self::build(None, Some(Image::system(symbol)), action)
    }

    /// Icon followed by a title
    pub fn labeled(
        title: impl Into<String>,
        symbol: impl Into<String>,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self::build(Some(title.into()), Some(Image::system(symbol)), action)
    }

    fn build(title: Option<String>, icon: Option<Image>, action: impl FnMut() + 'static) -> Self {
        ControlButton {
            title,
            icon,
            action: Box::new(action),
            interaction: Interaction::default(),
        }
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon(&self) -> Option<&Image> {
        self.icon.as_ref()
    }

    /// Run the action once
    pub fn activate(&mut self) {
        tracing::debug!(
            title = self.title.as_deref().unwrap_or(""),
            icon = self.icon.as_ref().map_or("", |i| i.symbol_name()),
            "button activated"
        );
        (self.action)();
    }

    fn gap(&self, theme: &Theme) -> u16 {
        if self.icon.is_some() && self.title.is_some() {
            theme.button_icon_gap
        } else {
            0
        }
    }
}

impl EventHandler for ControlButton {
    fn handle_event(&mut self, event: &Event) -> bool {
        if self.interaction.activated_by(event) {
            self.activate();
            true
        } else {
            false
        }
    }
}

impl Component for ControlButton {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let theme = self.use_theme(ctx);
        let width = self.min_size(theme).0.min(bounds.width);
        self.interaction
            .record(ctx, Rect::new(bounds.x, bounds.y, width, bounds.height.min(1)));

        if bounds.is_empty() {
            return Ok(());
        }

        let mut style = theme.accent_style();
        if self.interaction.focused() {
            style = style.patch(theme.focus_style());
        }

        let mut x = bounds.x;
        if let Some(icon) = &self.icon {
            x = icon.draw(renderer, x, bounds.y, style)?;
        }
        if let Some(title) = &self.title {
            x = x.saturating_add(self.gap(theme));
            let room = bounds.right().saturating_sub(x);
            if room > 0 {
                renderer.move_cursor(x, bounds.y)?;
                renderer.write_styled(truncate_to_width(title, room), style)?;
            }
        }
        Ok(())
    }

    fn min_size(&self, theme: &Theme) -> (u16, u16) {
        let icon = self.icon.as_ref().map_or(0, |i| i.glyph().width() as u16);
        let title = self.title.as_deref().map_or(0, |t| t.width() as u16);
        (icon + self.gap(theme) + title, 1)
    }

    fn focus_slots(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "ControlButton"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;
    use crate::focus::FocusRing;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    fn render(button: &mut ControlButton, focus: &FocusRing, width: u16) -> Renderer {
        let theme = Theme::default();
        let ctx = RenderContext::new(&theme, focus);
        let mut renderer = Renderer::headless(width, 1);
        focus.begin_frame();
        button
            .render(&mut renderer, Rect::new(0, 0, width, 1), &ctx)
            .unwrap();
        focus.end_frame();
        renderer
    }

    #[test]
    fn test_regions() {
        let theme = Theme::default();
        let focus = FocusRing::new();

        let mut title_only = ControlButton::title("Cancel", || {});
        assert_eq!(title_only.min_size(&theme), (6, 1));
        assert_eq!(render(&mut title_only, &focus, 8).buffer().line(0), "Cancel  ");

        let mut icon_only = ControlButton::image("gearshape", || {});
        assert_eq!(icon_only.min_size(&theme), (1, 1));
        assert_eq!(render(&mut icon_only, &focus, 3).buffer().line(0), "⚙  ");

        let mut both = ControlButton::labeled("Delete", "trash", || {});
        assert_eq!(both.min_size(&theme), (8, 1));
        assert_eq!(render(&mut both, &focus, 8).buffer().line(0), "⌫ Delete");
    }

    #[test]
    fn test_accent_and_focus_styles() {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let mut button = ControlButton::title("Edit", || {});

        let renderer = render(&mut button, &focus, 4);
        let cell = renderer.buffer().get(0, 0).unwrap();
        assert_eq!(cell.style.fg, Some(theme.accent));
        assert!(!cell.style.reverse);

        focus.focus(0);
        let renderer = render(&mut button, &focus, 4);
        assert!(renderer.buffer().get(0, 0).unwrap().style.reverse);
    }

    #[test]
    fn test_click_inside_bounds_runs_action_once() {
        let focus = FocusRing::new();
        let (count, action) = counter();
        let mut button = ControlButton::title("Save", action);
        render(&mut button, &focus, 10);

        assert!(button.handle_event(&Event::click(2, 0)));
        assert_eq!(count.get(), 1);

        // past the title is outside the button
        assert!(!button.handle_event(&Event::click(6, 0)));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_keyboard_activation_needs_focus() {
        let focus = FocusRing::new();
        let (count, action) = counter();
        let mut button = ControlButton::image("heart.fill", action);

        render(&mut button, &focus, 4);
        assert!(!button.handle_event(&Event::Key(Key::Enter)));

        focus.focus(0);
        render(&mut button, &focus, 4);
        assert!(button.handle_event(&Event::Key(Key::Enter)));
        assert!(button.handle_event(&Event::Key(Key::Char(' '))));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_title_truncates_to_bounds() {
        let focus = FocusRing::new();
        let mut button = ControlButton::labeled("Duplicate", "doc.on.doc", || {});
        let renderer = render(&mut button, &focus, 5);
        assert_eq!(renderer.buffer().line(0), "⧉ Dup");
    }
}
