//! Layout system - flex-based positioning and sizing

/// Rectangle bounds in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Create rectangle from terminal dimensions (fills entire screen)
    pub fn fullscreen(cols: u16, rows: u16) -> Self {
        Rect::new(0, 0, cols, rows)
    }

    /// Get right edge x-coordinate
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get bottom edge y-coordinate
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle covers no cells
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Create a subrect with padding applied on all four edges
    pub fn inner(&self, padding: u16) -> Self {
        let padding2 = padding.saturating_mul(2);
        Rect {
            x: self.x.saturating_add(padding),
            y: self.y.saturating_add(padding),
            width: self.width.saturating_sub(padding2),
            height: self.height.saturating_sub(padding2),
        }
    }

    /// Overlapping area of two rectangles (zero-sized when disjoint)
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

/// Flex direction for container layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

/// Cross-axis alignment options for flex containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
    Stretch,
}

/// Main-axis size constraint for flex children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Fixed size in cells. `Fixed(0)` items collapse and take no gap.
    Fixed(u16),
    /// Proportional share of the free space (flex grow factor)
    Flex(u16),
}

impl Size {
    fn is_collapsed(&self) -> bool {
        matches!(self, Size::Fixed(0))
    }
}

/// A child entry for [`FlexLayout::layout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexItem {
    /// Size along the main axis
    pub main: Size,
    /// Preferred size along the cross axis (ignored by `Alignment::Stretch`)
    pub cross: u16,
}

impl FlexItem {
    pub fn fixed(main: u16, cross: u16) -> Self {
        FlexItem {
            main: Size::Fixed(main),
            cross,
        }
    }

    pub fn flex(grow: u16) -> Self {
        FlexItem {
            main: Size::Flex(grow),
            cross: 0,
        }
    }
}

/// Flex container layout calculator
#[derive(Debug, Clone)]
pub struct FlexLayout {
    direction: FlexDirection,
    gap: u16,
    padding: u16,
    align: Alignment,
}

impl FlexLayout {
    /// Create a new flex layout
    pub fn new(direction: FlexDirection) -> Self {
        FlexLayout {
            direction,
            gap: 0,
            padding: 0,
            align: Alignment::Stretch,
        }
    }

    /// Set gap between children
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Set padding around container
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Set cross-axis alignment
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Total gap contributed between the non-collapsed items
    pub fn total_gap(&self, items: &[FlexItem]) -> u16 {
        let visible = items.iter().filter(|i| !i.main.is_collapsed()).count() as u16;
        self.gap.saturating_mul(visible.saturating_sub(1))
    }

    /// Calculate child rectangles for given container and items
    ///
    /// Collapsed items (`Fixed(0)`) still get a zero-width rect at the
    /// current offset so callers can zip results with their children.
    /// Flex rounding leftovers go to the last flex item.
    pub fn layout(&self, container: Rect, items: &[FlexItem]) -> Vec<Rect> {
        if items.is_empty() {
            return Vec::new();
        }

        let inner = container.inner(self.padding);
        let flex_sizes = self.flex_sizes(&inner, items);

        let mut rects = Vec::with_capacity(items.len());
        let mut offset = 0u16;
        let mut placed_visible = false;

        for (item, flex_size) in items.iter().zip(flex_sizes) {
            let child_main_size = match item.main {
                Size::Fixed(s) => s,
                Size::Flex(_) => flex_size,
            };

            if !item.main.is_collapsed() {
                if placed_visible {
                    offset = offset.saturating_add(self.gap);
                }
                placed_visible = true;
            }

            rects.push(self.child_rect(&inner, offset, child_main_size, item.cross));
            offset = offset.saturating_add(child_main_size);
        }

        rects
    }

    /// Resolve the main-axis size of every flex item (0 for fixed items)
    fn flex_sizes(&self, inner: &Rect, items: &[FlexItem]) -> Vec<u16> {
        let main_size = match self.direction {
            FlexDirection::Row => inner.width,
            FlexDirection::Column => inner.height,
        };

        let mut fixed_space = 0u16;
        let mut flex_units = 0u16;
        for item in items {
            match item.main {
                Size::Fixed(s) => fixed_space = fixed_space.saturating_add(s),
                Size::Flex(f) => flex_units = flex_units.saturating_add(f),
            }
        }

        let flex_space = main_size
            .saturating_sub(self.total_gap(items))
            .saturating_sub(fixed_space);
        let unit = if flex_units > 0 {
            flex_space / flex_units
        } else {
            0
        };
        let leftover = flex_space.saturating_sub(unit.saturating_mul(flex_units));
        let last_flex = items
            .iter()
            .rposition(|i| matches!(i.main, Size::Flex(f) if f > 0));

        items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item.main {
                Size::Fixed(_) => 0,
                Size::Flex(f) => {
                    let base = unit.saturating_mul(f);
                    if Some(idx) == last_flex {
                        base.saturating_add(leftover)
                    } else {
                        base
                    }
                }
            })
            .collect()
    }

    fn child_rect(&self, inner: &Rect, offset: u16, child_main_size: u16, cross: u16) -> Rect {
        match self.direction {
            FlexDirection::Row => {
                let x = inner.x.saturating_add(offset);
                let (y, height) = self.cross_placement(inner.y, inner.height, cross);
                Rect::new(x, y, child_main_size, height)
            }
            FlexDirection::Column => {
                let (x, width) = self.cross_placement(inner.x, inner.width, cross);
                let y = inner.y.saturating_add(offset);
                Rect::new(x, y, width, child_main_size)
            }
        }
    }

    /// Calculate offset and extent for cross-axis alignment
    fn cross_placement(&self, base: u16, container_size: u16, child_size: u16) -> (u16, u16) {
        let child_size = child_size.min(container_size);
        match self.align {
            Alignment::Start => (base, child_size),
            Alignment::Center => (
                base.saturating_add((container_size - child_size) / 2),
                child_size,
            ),
            Alignment::End => (base.saturating_add(container_size - child_size), child_size),
            Alignment::Stretch => (base, container_size),
        }
    }
}
