//! Component system - trait for renderable UI content

use crate::context::RenderContext;
use crate::event::{Event, EventHandler};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

/// Core component trait for all UI content
///
/// Components are immediate-mode values: a parent builds them, asks for
/// their size, renders them into bounds, and keeps the rendered instance
/// only long enough to route the next event to it.
pub trait Component: EventHandler {
    /// Render the component to the given rectangle
    ///
    /// Components must stay within their bounds.
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()>;

    /// Intrinsic size (columns, rows) needed to show everything
    fn min_size(&self, _theme: &Theme) -> (u16, u16) {
        (0, 0)
    }

    /// Empty content occupies no space and contributes no gaps
    fn is_empty(&self) -> bool {
        false
    }

    /// Whether the component grows to fill free space in a stack
    fn fills(&self) -> bool {
        false
    }

    /// Number of focus slots a render of this component claims
    ///
    /// Containers that skip drawing a child reserve this many slots instead.
    fn focus_slots(&self) -> usize {
        0
    }

    /// Get component name for debugging
    fn name(&self) -> &str {
        "Component"
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        (**self).render(renderer, bounds, ctx)
    }

    fn min_size(&self, theme: &Theme) -> (u16, u16) {
        (**self).min_size(theme)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn fills(&self) -> bool {
        (**self).fills()
    }

    fn focus_slots(&self) -> usize {
        (**self).focus_slots()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Conditional content: `None` behaves like empty content
impl<C: Component> Component for Option<C> {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        match self {
            Some(inner) => inner.render(renderer, bounds, ctx),
            None => Ok(()),
        }
    }

    fn min_size(&self, theme: &Theme) -> (u16, u16) {
        self.as_ref().map_or((0, 0), |inner| inner.min_size(theme))
    }

    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(|inner| inner.is_empty())
    }

    fn fills(&self) -> bool {
        self.as_ref().is_some_and(|inner| inner.fills())
    }

    fn focus_slots(&self) -> usize {
        self.as_ref().map_or(0, |inner| inner.focus_slots())
    }

    fn name(&self) -> &str {
        self.as_ref().map_or("None", |inner| inner.name())
    }
}

/// Size a component contributes to a layout: zero when it is empty
pub fn measured_size<C: Component + ?Sized>(component: &C, theme: &Theme) -> (u16, u16) {
    if component.is_empty() {
        (0, 0)
    } else {
        component.min_size(theme)
    }
}

/// Helper to propagate events to children
pub fn propagate_event<C: Component>(children: &mut [C], event: &Event) -> bool {
    for child in children.iter_mut() {
        if child.handle_event(event) {
            return true; // Event consumed
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusRing;

    struct Probe {
        width: u16,
        rendered: bool,
        consume: bool,
        seen: usize,
    }

    impl Probe {
        fn new(width: u16, consume: bool) -> Self {
            Probe {
                width,
                rendered: false,
                consume,
                seen: 0,
            }
        }
    }

    impl EventHandler for Probe {
        fn handle_event(&mut self, _event: &Event) -> bool {
            self.seen += 1;
            self.consume
        }
    }

    impl Component for Probe {
        fn render(
            &mut self,
            _renderer: &mut Renderer,
            _bounds: Rect,
            _ctx: &RenderContext,
        ) -> Result<()> {
            self.rendered = true;
            Ok(())
        }

        fn min_size(&self, _theme: &Theme) -> (u16, u16) {
            (self.width, 1)
        }

        fn name(&self) -> &str {
            "Probe"
        }
    }

    #[test]
    fn test_option_none_is_empty() {
        let theme = Theme::default();
        let none: Option<Probe> = None;
        assert!(none.is_empty());
        assert_eq!(none.min_size(&theme), (0, 0));
        assert_eq!(none.name(), "None");

        let some = Some(Probe::new(4, false));
        assert!(!some.is_empty());
        assert_eq!(measured_size(&some, &theme), (4, 1));
    }

    #[test]
    fn test_boxed_component_delegates() {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let ctx = RenderContext::new(&theme, &focus);
        let mut renderer = Renderer::headless(10, 1);

        let mut boxed: Box<dyn Component> = Box::new(Probe::new(3, false));
        boxed.render(&mut renderer, Rect::new(0, 0, 3, 1), &ctx).unwrap();
        assert_eq!(boxed.min_size(&theme), (3, 1));
        assert_eq!(boxed.name(), "Probe");
    }

    #[test]
    fn test_propagation_stops_at_first_consumer() {
        let mut children = vec![
            Probe::new(1, false),
            Probe::new(1, true),
            Probe::new(1, true),
        ];
        assert!(propagate_event(&mut children, &Event::click(0, 0)));
        assert_eq!(children[0].seen, 1);
        assert_eq!(children[1].seen, 1);
        assert_eq!(children[2].seen, 0);
    }
}
