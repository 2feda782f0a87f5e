//! Horizontal and vertical stacks of heterogeneous children

use crate::component::{measured_size, propagate_event, Component};
use crate::context::RenderContext;
use crate::event::{Event, EventHandler};
use crate::layout::{Alignment, FlexDirection, FlexItem, FlexLayout, Rect};
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

/// Stack of boxed children laid out along one axis
///
/// Horizontal stacks center children vertically. Vertical stacks give every
/// child the full width, so content starts at the leading edge. Empty
/// children collapse and take no gap; children that fill (such as `Spacer`)
/// share the free space.
pub struct Stack {
    children: Vec<Box<dyn Component>>,
    direction: FlexDirection,
    spacing: Option<u16>,
}

impl Stack {
    /// Create a new stack with flex direction
    pub fn new(direction: FlexDirection) -> Self {
        Stack {
            children: Vec::new(),
            direction,
            spacing: None,
        }
    }

    /// Create a horizontal stack with the theme's default spacing
    pub fn horizontal() -> Self {
        Self::new(FlexDirection::Row)
    }

    /// Create a vertical stack with the theme's default spacing
    pub fn vertical() -> Self {
        Self::new(FlexDirection::Column)
    }

    /// Override the gap between children
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Add a child (builder style)
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.push(child);
        self
    }

    /// Add a child
    pub fn push(&mut self, child: impl Component + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.iter().all(|c| c.is_empty())
    }

    fn layout(&self, theme: &Theme) -> FlexLayout {
        let align = match self.direction {
            FlexDirection::Row => Alignment::Center,
            FlexDirection::Column => Alignment::Stretch,
        };
        FlexLayout::new(self.direction)
            .gap(self.spacing.unwrap_or(theme.stack_spacing))
            .align(align)
    }

    fn items(&self, theme: &Theme) -> Vec<FlexItem> {
        self.children
            .iter()
            .map(|child| {
                let (w, h) = measured_size(child, theme);
                let (main, cross) = match self.direction {
                    FlexDirection::Row => (w, h),
                    FlexDirection::Column => (h, w),
                };
                if child.fills() {
                    FlexItem {
                        main: crate::layout::Size::Flex(1),
                        cross,
                    }
                } else {
                    FlexItem::fixed(main, cross)
                }
            })
            .collect()
    }
}

impl EventHandler for Stack {
    fn handle_event(&mut self, event: &Event) -> bool {
        propagate_event(&mut self.children, event)
    }
}

impl Component for Stack {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let items = self.items(ctx.theme);
        let rects = self.layout(ctx.theme).layout(bounds, &items);

        for (child, rect) in self.children.iter_mut().zip(rects) {
            if !child.is_empty() {
                child.render(renderer, rect, ctx)?;
            }
        }
        Ok(())
    }

    fn min_size(&self, theme: &Theme) -> (u16, u16) {
        let items = self.items(theme);
        let gaps = self.layout(theme).total_gap(&items);
        let main: u16 = items
            .iter()
            .map(|item| match item.main {
                crate::layout::Size::Fixed(s) => s,
                crate::layout::Size::Flex(_) => 0,
            })
            .fold(gaps, u16::saturating_add);
        let cross = items.iter().map(|item| item.cross).max().unwrap_or(0);

        match self.direction {
            FlexDirection::Row => (main, cross),
            FlexDirection::Column => (cross, main),
        }
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }

    fn focus_slots(&self) -> usize {
        self.children
            .iter()
            .filter(|child| !child.is_empty())
            .map(|child| child.focus_slots())
            .sum()
    }

    fn name(&self) -> &str {
        "Stack"
    }
}
