//! Built-in slot fillers: empty content and the flexible spacer

use crate::component::Component;
use crate::context::RenderContext;
use crate::event::EventHandler;
use crate::layout::Rect;
use crate::render::Renderer;
use anyhow::Result;

/// Content for an unused slot
///
/// Zero-sized and never drawn. Layouts skip it entirely, so an empty slot
/// does not even contribute a gap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Empty {
    pub fn new() -> Self {
        Empty
    }
}

impl EventHandler for Empty {}

impl Component for Empty {
    fn render(
        &mut self,
        _renderer: &mut Renderer,
        _bounds: Rect,
        _ctx: &RenderContext,
    ) -> Result<()> {
        Ok(())
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Empty"
    }
}

/// Flexible spacer that expands to fill available space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer;

impl Spacer {
    pub fn new() -> Self {
        Spacer
    }
}

impl EventHandler for Spacer {}

impl Component for Spacer {
    fn render(
        &mut self,
        _renderer: &mut Renderer,
        _bounds: Rect,
        _ctx: &RenderContext,
    ) -> Result<()> {
        // Spacer doesn't render anything
        Ok(())
    }

    fn fills(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Spacer"
    }
}
