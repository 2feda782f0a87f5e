//! On/off switch bound to a caller-owned boolean

use super::Interaction;
use crate::component::Component;
use crate::context::{RenderContext, UseTheme};
use crate::event::{Event, EventHandler};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::state::Binding;
use crate::style::Style;
use crate::theme::Theme;
use anyhow::Result;

const TRACK_ON: &str = "━━●";
const TRACK_OFF: &str = "●━━";
const TRACK_WIDTH: u16 = 3;

/// Switch that flips a bound boolean
///
/// The label is kept for accessibility but never drawn; only the track is
/// visible.
pub struct ControlToggle {
    label: Option<String>,
    is_on: Binding<bool>,
    interaction: Interaction,
}

impl ControlToggle {
    /// Unlabeled toggle
    pub fn new(is_on: Binding<bool>) -> Self {
        Self::with_label(None, is_on)
    }

    pub fn with_label(label: Option<String>, is_on: Binding<bool>) -> Self {
        ControlToggle {
            label,
            is_on,
            interaction: Interaction::default(),
        }
    }

    /// The label, or an empty string when none was given
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Current value read through the binding
    pub fn is_on(&self) -> bool {
        self.is_on.get()
    }

    /// Flip the bound value once
    pub fn activate(&mut self) {
        let next = !self.is_on.get();
        tracing::debug!(label = self.label(), on = next, "toggle flipped");
        self.is_on.set(next);
    }
}

impl EventHandler for ControlToggle {
    fn handle_event(&mut self, event: &Event) -> bool {
        if self.interaction.activated_by(event) {
            self.activate();
            true
        } else {
            false
        }
    }
}

impl Component for ControlToggle {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let width = TRACK_WIDTH.min(bounds.width);
        self.interaction
            .record(ctx, Rect::new(bounds.x, bounds.y, width, bounds.height.min(1)));

        if bounds.is_empty() {
            return Ok(());
        }

        let theme = self.use_theme(ctx);
        let (track, color) = if self.is_on.get() {
            (TRACK_ON, theme.toggle_on)
        } else {
            (TRACK_OFF, theme.toggle_off)
        };
        let mut style = Style::new().fg(color);
        if self.interaction.focused() {
            style = style.patch(theme.focus_style());
        }

        renderer.move_cursor(bounds.x, bounds.y)?;
        renderer.write_styled(track, style)
    }

    fn min_size(&self, _theme: &Theme) -> (u16, u16) {
        (TRACK_WIDTH, 1)
    }

    fn focus_slots(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "ControlToggle"
    }
}
