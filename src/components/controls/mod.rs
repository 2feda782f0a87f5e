//! Interactive controls: button, toggle switch and radio indicator
//!
//! Controls record where they were drawn and whether they held focus during
//! render. The next event is matched against that record, so a click lands
//! on whatever the user actually saw.

mod button;
mod radio;
mod toggle;

pub use button::ControlButton;
pub use radio::ControlRadio;
pub use toggle::ControlToggle;

use crate::context::{RenderContext, UseFocus};
use crate::event::Event;
use crate::layout::Rect;

/// Bounds and focus of a control from its last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Interaction {
    bounds: Option<Rect>,
    focused: bool,
}

impl Interaction {
    /// Claim a focus slot and remember the area actually drawn
    pub(crate) fn record(&mut self, ctx: &RenderContext, drawn: Rect) {
        let slot = self.use_focus(ctx);
        self.focused = slot.focused;
        self.bounds = (!drawn.is_empty()).then_some(drawn);
    }

    pub(crate) fn focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn activated_by(&self, event: &Event) -> bool {
        event.activates(self.bounds, self.focused)
    }
}
