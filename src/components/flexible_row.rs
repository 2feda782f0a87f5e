//! Flexible row - three-slot horizontal composition
//!
//! A row is built from three content producers: leading, center and
//! trailing. They are called again on every render, so whatever state they
//! capture is always read fresh. Content is laid out as
//!
//! ```text
//! ┌ padding ───────────────────────────────────────────┐
//! │ [leading] [center] [ spacer ...........] [trailing] │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Empty slots collapse to nothing, including their gap, so the reduced
//! constructors render exactly like `new` with `Empty` in the unused slots.
//! When the row is too narrow the center gives up width first, then the
//! leading slot, so trailing content stays anchored to the right edge.
//!
//! # Example
//!
//! ```ignore
//! let sort_order = State::new(0usize);
//! let order = sort_order.clone();
//!
//! let row = FlexibleRow::titled("Name", move || {
//!     let order = order.clone();
//!     ControlRadio::new(order.get() == 0, move || order.set(0))
//! });
//! ```

use crate::component::{measured_size, Component};
use crate::components::slot_content::{Empty, Spacer};
use crate::components::text::Text;
use crate::context::RenderContext;
use crate::event::{Event, EventHandler};
use crate::layout::{Alignment, FlexDirection, FlexItem, FlexLayout, Rect, Size};
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

/// Producer of one slot's content
pub type SlotFn<T> = Box<dyn Fn() -> T>;

/// Slot instances from the most recent render, kept for event routing
struct RenderedSlots<L, C, T> {
    leading: L,
    center: C,
    trailing: T,
}

/// Generic three-slot row
pub struct FlexibleRow<L, C, T> {
    leading: SlotFn<L>,
    center: SlotFn<C>,
    trailing: SlotFn<T>,
    padding: Option<u16>,
    spacing: Option<u16>,
    rendered: Option<RenderedSlots<L, C, T>>,
}

impl<L, C, T> FlexibleRow<L, C, T>
where
    L: Component,
    C: Component,
    T: Component,
{
    /// Row with all three slots supplied
    pub fn new(
        leading: impl Fn() -> L + 'static,
        center: impl Fn() -> C + 'static,
        trailing: impl Fn() -> T + 'static,
    ) -> Self {
        FlexibleRow {
            leading: Box::new(leading),
            center: Box::new(center),
            trailing: Box::new(trailing),
            padding: None,
            spacing: None,
            rendered: None,
        }
    }

    /// Override the outer padding (theme `row_padding` by default)
    pub fn with_padding(mut self, padding: u16) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Override the gap between items (theme `stack_spacing` by default)
    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = Some(spacing);
        self
    }

    fn layout(&self, theme: &Theme) -> FlexLayout {
        FlexLayout::new(FlexDirection::Row)
            .gap(self.spacing.unwrap_or(theme.stack_spacing))
            .padding(self.padding.unwrap_or(theme.row_padding))
            .align(Alignment::Center)
    }

    /// Layout items for leading, center, spacer, trailing
    fn items(leading: &L, center: &C, trailing: &T, theme: &Theme) -> [FlexItem; 4] {
        let fixed = |(w, h): (u16, u16)| FlexItem::fixed(w, h);
        [
            fixed(measured_size(leading, theme)),
            fixed(measured_size(center, theme)),
            FlexItem::flex(1),
            fixed(measured_size(trailing, theme)),
        ]
    }

    /// Width of the fixed items plus the gaps between them
    fn content_width(layout: &FlexLayout, items: &[FlexItem]) -> u16 {
        items
            .iter()
            .map(|item| match item.main {
                Size::Fixed(w) => w,
                Size::Flex(_) => 0,
            })
            .fold(layout.total_gap(items), u16::saturating_add)
    }

    /// Shrink the center, then the leading slot, until the items fit `width`
    fn fit(layout: &FlexLayout, items: &mut [FlexItem; 4], width: u16) {
        for idx in [1, 0] {
            let overflow = Self::content_width(layout, &items[..]).saturating_sub(width);
            if overflow == 0 {
                return;
            }
            if let Size::Fixed(w) = items[idx].main {
                items[idx].main = Size::Fixed(w.saturating_sub(overflow));
            }
        }
    }
}

/// Render a slot into its rect; a slot squeezed to nothing keeps its focus slots
fn draw_slot<S: Component>(
    slot: &mut S,
    renderer: &mut Renderer,
    rect: Rect,
    ctx: &RenderContext,
) -> Result<()> {
    if slot.is_empty() {
        return Ok(());
    }
    if rect.is_empty() {
        ctx.focus.skip(slot.focus_slots());
        return Ok(());
    }
    slot.render(renderer, rect, ctx)
}

impl<C, T> FlexibleRow<Empty, C, T>
where
    C: Component,
    T: Component,
{
    /// Row without leading content
    pub fn center_trailing(
        center: impl Fn() -> C + 'static,
        trailing: impl Fn() -> T + 'static,
    ) -> Self {
        Self::new(|| Empty, center, trailing)
    }
}

impl<T> FlexibleRow<Empty, Text, T>
where
    T: Component,
{
    /// Row with a plain text title in the center and trailing content
    pub fn titled(title: impl Into<String>, trailing: impl Fn() -> T + 'static) -> Self {
        let title = title.into();
        Self::new(|| Empty, move || Text::new(title.clone()), trailing)
    }
}

impl<C> FlexibleRow<Empty, C, Empty>
where
    C: Component,
{
    /// Row with only center content
    pub fn center_only(center: impl Fn() -> C + 'static) -> Self {
        Self::new(|| Empty, center, || Empty)
    }
}

impl<L, C, T> EventHandler for FlexibleRow<L, C, T>
where
    L: Component,
    C: Component,
    T: Component,
{
    fn handle_event(&mut self, event: &Event) -> bool {
        let Some(slots) = self.rendered.as_mut() else {
            return false;
        };
        slots.leading.handle_event(event)
            || slots.center.handle_event(event)
            || slots.trailing.handle_event(event)
    }
}

impl<L, C, T> Component for FlexibleRow<L, C, T>
where
    L: Component,
    C: Component,
    T: Component,
{
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let mut leading = (self.leading)();
        let mut center = (self.center)();
        let mut trailing = (self.trailing)();

        let layout = self.layout(ctx.theme);
        let padding = self.padding.unwrap_or(ctx.theme.row_padding);
        let mut items = Self::items(&leading, &center, &trailing, ctx.theme);
        Self::fit(&layout, &mut items, bounds.inner(padding).width);
        let rects = layout.layout(bounds, &items);

        draw_slot(&mut leading, renderer, rects[0], ctx)?;
        draw_slot(&mut center, renderer, rects[1], ctx)?;
        Spacer.render(renderer, rects[2], ctx)?;
        draw_slot(&mut trailing, renderer, rects[3], ctx)?;

        self.rendered = Some(RenderedSlots {
            leading,
            center,
            trailing,
        });
        Ok(())
    }

    fn min_size(&self, theme: &Theme) -> (u16, u16) {
        let leading = (self.leading)();
        let center = (self.center)();
        let trailing = (self.trailing)();

        let items = Self::items(&leading, &center, &trailing, theme);
        let padding = self.padding.unwrap_or(theme.row_padding).saturating_mul(2);

        let content_width = Self::content_width(&self.layout(theme), &items);
        let content_height = items.iter().map(|item| item.cross).max().unwrap_or(0);

        (
            content_width.saturating_add(padding),
            content_height.saturating_add(padding),
        )
    }

    fn focus_slots(&self) -> usize {
        let leading = (self.leading)();
        let center = (self.center)();
        let trailing = (self.trailing)();

        [
            (leading.is_empty(), leading.focus_slots()),
            (center.is_empty(), center.focus_slots()),
            (trailing.is_empty(), trailing.focus_slots()),
        ]
        .into_iter()
        .filter(|(empty, _)| !empty)
        .map(|(_, slots)| slots)
        .sum()
    }

    fn name(&self) -> &str {
        "FlexibleRow"
    }
}
