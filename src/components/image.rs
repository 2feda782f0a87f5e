//! Symbol icons rendered as single terminal glyphs

use crate::component::Component;
use crate::context::{RenderContext, UseTheme};
use crate::event::EventHandler;
use crate::layout::Rect;
use crate::render::Renderer;
use crate::style::Style;
use crate::theme::{Color, Theme};
use anyhow::Result;
use unicode_width::UnicodeWidthStr;

/// Glyph drawn for symbol names missing from the table
pub const MISSING_GLYPH: &str = "□";

/// Known symbol names and the glyphs that stand in for them
const SYMBOLS: &[(&str, &str)] = &[
    ("circle", "○"),
    ("circle.fill", "●"),
    ("circle.inset.filled", "◉"),
    ("heart", "♡"),
    ("heart.fill", "♥"),
    ("star", "☆"),
    ("star.fill", "★"),
    ("checkmark", "✓"),
    ("xmark", "✗"),
    ("trash", "⌫"),
    ("pencil", "✎"),
    ("gearshape", "⚙"),
    ("doc.on.doc", "⧉"),
    ("square.and.arrow.up", "⇪"),
    ("chevron.left", "‹"),
    ("chevron.right", "›"),
    ("person.circle.fill", "☻"),
    ("plus", "+"),
    ("minus", "−"),
];

/// Look up the glyph for a symbol name
pub fn symbol_glyph(name: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(symbol, _)| *symbol == name)
        .map(|(_, glyph)| *glyph)
}

/// A named symbol icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    name: String,
    color: Option<Color>,
}

impl Image {
    /// Icon for a system symbol name such as `"star.fill"`
    pub fn system(name: impl Into<String>) -> Self {
        Image {
            name: name.into(),
            color: None,
        }
    }

    /// Tint the icon
    pub fn foreground(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn symbol_name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Glyph drawn for this icon
    pub fn glyph(&self) -> &'static str {
        symbol_glyph(&self.name).unwrap_or(MISSING_GLYPH)
    }

    /// Draw the icon at (x, y) on top of a base style, returning the next column
    pub(crate) fn draw(&self, renderer: &mut Renderer, x: u16, y: u16, base: Style) -> Result<u16> {
        if symbol_glyph(&self.name).is_none() {
            tracing::warn!(symbol = %self.name, "unknown symbol name");
        }
        let style = match self.color {
            Some(color) => base.fg(color),
            None => base,
        };
        renderer.move_cursor(x, y)?;
        renderer.write_styled(self.glyph(), style)?;
        Ok(x.saturating_add(self.glyph().width() as u16))
    }
}

impl EventHandler for Image {}

impl Component for Image {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        if bounds.is_empty() {
            return Ok(());
        }
        let base = self.use_theme(ctx).text_style();
        self.draw(renderer, bounds.x, bounds.y, base)?;
        Ok(())
    }

    fn min_size(&self, _theme: &Theme) -> (u16, u16) {
        (self.glyph().width() as u16, 1)
    }

    fn name(&self) -> &str {
        "Image"
    }
}
