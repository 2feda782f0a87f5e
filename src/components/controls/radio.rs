//! Single-choice indicator driven by the caller's selection state

use super::Interaction;
use crate::component::Component;
use crate::components::image::Image;
use crate::context::{RenderContext, UseTheme};
use crate::event::{Event, EventHandler};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::{Color, Theme};
use anyhow::Result;

/// Radio indicator
///
/// The radio does not own its selection. The caller decides `is_selected`
/// and updates its own state from the action; the next render reflects it.
pub struct ControlRadio {
    is_selected: bool,
    action: Box<dyn FnMut()>,
    selected_image: String,
    unselected_image: String,
    selected_color: Color,
    unselected_color: Color,
    interaction: Interaction,
}

impl ControlRadio {
    pub fn new(is_selected: bool, action: impl FnMut() + 'static) -> Self {
        ControlRadio {
            is_selected,
            action: Box::new(action),
            selected_image: "circle.inset.filled".to_string(),
            unselected_image: "circle".to_string(),
            selected_color: Color::blue(),
            unselected_color: Color::gray(),
            interaction: Interaction::default(),
        }
    }

    pub fn selected_image(mut self, symbol: impl Into<String>) -> Self {
        self.selected_image = symbol.into();
        self
    }

    pub fn unselected_image(mut self, symbol: impl Into<String>) -> Self {
        self.unselected_image = symbol.into();
        self
    }

    pub fn selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    pub fn unselected_color(mut self, color: Color) -> Self {
        self.unselected_color = color;
        self
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Symbol shown for the current selection state
    pub fn current_image(&self) -> &str {
        if self.is_selected {
            &self.selected_image
        } else {
            &self.unselected_image
        }
    }

    /// Tint for the current selection state
    pub fn current_color(&self) -> Color {
        if self.is_selected {
            self.selected_color
        } else {
            self.unselected_color
        }
    }

    /// Run the action once
    pub fn activate(&mut self) {
        tracing::debug!(selected = self.is_selected, "radio activated");
        (self.action)();
    }

    fn icon(&self) -> Image {
        Image::system(self.current_image()).foreground(self.current_color())
    }
}

impl EventHandler for ControlRadio {
    fn handle_event(&mut self, event: &Event) -> bool {
        if self.interaction.activated_by(event) {
            self.activate();
            true
        } else {
            false
        }
    }
}

impl Component for ControlRadio {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let width = 1.min(bounds.width);
        self.interaction
            .record(ctx, Rect::new(bounds.x, bounds.y, width, bounds.height.min(1)));

        if bounds.is_empty() {
            return Ok(());
        }

        let theme = self.use_theme(ctx);
        let mut base = theme.text_style();
        if self.interaction.focused() {
            base = base.patch(theme.focus_style());
        }
        self.icon().draw(renderer, bounds.x, bounds.y, base)?;
        Ok(())
    }

    fn min_size(&self, theme: &Theme) -> (u16, u16) {
        self.icon().min_size(theme)
    }

    fn focus_slots(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "ControlRadio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusRing;
    use std::cell::Cell;
    use std::rc::Rc;

    fn render(radio: &mut ControlRadio) -> Renderer {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let ctx = RenderContext::new(&theme, &focus);
        let mut renderer = Renderer::headless(2, 1);
        radio
            .render(&mut renderer, Rect::new(0, 0, 2, 1), &ctx)
            .unwrap();
        renderer
    }

    #[test]
    fn test_defaults_follow_selection() {
        let mut selected = ControlRadio::new(true, || {});
        assert_eq!(selected.current_image(), "circle.inset.filled");
        assert_eq!(selected.current_color(), Color::blue());
        let cell = render(&mut selected).buffer().get(0, 0).cloned().unwrap();
        assert_eq!(cell.symbol, "◉");
        assert_eq!(cell.style.fg, Some(Color::blue()));

        let mut unselected = ControlRadio::new(false, || {});
        assert_eq!(unselected.current_image(), "circle");
        assert_eq!(unselected.current_color(), Color::gray());
        let cell = render(&mut unselected).buffer().get(0, 0).cloned().unwrap();
        assert_eq!(cell.symbol, "○");
        assert_eq!(cell.style.fg, Some(Color::gray()));
    }

    #[test]
    fn test_custom_images_and_colors() {
        let favourite = ControlRadio::new(true, || {})
            .selected_image("heart.fill")
            .unselected_image("heart")
            .selected_color(Color::red())
            .unselected_color(Color::gray());
        assert_eq!(favourite.current_image(), "heart.fill");
        assert_eq!(favourite.current_color(), Color::red());

        let star = ControlRadio::new(false, || {})
            .selected_image("star.fill")
            .unselected_image("star")
            .selected_color(Color::yellow());
        assert_eq!(star.current_image(), "star");
        assert_eq!(star.current_color(), Color::gray());
    }

    #[test]
    fn test_activation_never_changes_selection() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut radio = ControlRadio::new(true, move || counter.set(counter.get() + 1));
        render(&mut radio);

        assert!(radio.handle_event(&Event::click(0, 0)));
        assert_eq!(calls.get(), 1);
        assert!(radio.is_selected());

        assert!(!radio.handle_event(&Event::click(1, 0)));
        assert_eq!(calls.get(), 1);
    }
}
