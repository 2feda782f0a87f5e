//! Text component for displaying styled text

use crate::component::Component;
use crate::context::{RenderContext, UseTheme};
use crate::event::EventHandler;
use crate::layout::Rect;
use crate::render::Renderer;
use crate::style::Style;
use crate::theme::{Color, Theme};
use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal alignment within the text's bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Typographic role of a text run
///
/// Terminals have one font size, so roles map to attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    Body,
    /// Screen title: bold and underlined
    Title,
    /// Bold
    Headline,
    /// Same weight as body, used with secondary color
    Subheadline,
    /// Dim
    Caption,
}

impl Font {
    fn style(self) -> Style {
        match self {
            Font::Body | Font::Subheadline => Style::new(),
            Font::Title => Style::new().bold().underline(),
            Font::Headline => Style::new().bold(),
            Font::Caption => Style::new().dim(),
        }
    }
}

/// Single-line text component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    font: Font,
    color: Option<Color>,
    secondary: bool,
    align: TextAlign,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            content: content.into(),
            font: Font::Body,
            color: None,
            secondary: false,
            align: TextAlign::Start,
        }
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Explicit foreground color
    pub fn foreground(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Use the theme's secondary color unless an explicit color is set
    pub fn secondary(mut self) -> Self {
        self.secondary = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Get text content
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Display width in cells
    pub fn width(&self) -> u16 {
        self.content.width() as u16
    }

    /// Resolve the final cell style against a theme
    pub fn resolved_style(&self, theme: &Theme) -> Style {
        let base = if self.secondary {
            theme.secondary_style()
        } else {
            theme.text_style()
        };
        let base = match self.color {
            Some(color) => base.fg(color),
            None => base,
        };
        base.patch(self.font.style())
    }
}

/// Longest prefix of `text` that fits in `max` cells
pub fn truncate_to_width(text: &str, max: u16) -> &str {
    let mut used = 0usize;
    for (idx, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > max as usize {
            return &text[..idx];
        }
    }
    text
}

impl EventHandler for Text {}

impl Component for Text {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        if self.content.is_empty() || bounds.is_empty() {
            return Ok(());
        }

        let display = truncate_to_width(&self.content, bounds.width);
        let display_width = display.width() as u16;
        let x = match self.align {
            TextAlign::Start => bounds.x,
            TextAlign::Center => bounds.x + (bounds.width - display_width) / 2,
            TextAlign::End => bounds.x + (bounds.width - display_width),
        };

        let style = self.resolved_style(self.use_theme(ctx));
        renderer.move_cursor(x, bounds.y)?;
        renderer.write_styled(display, style)
    }

    fn min_size(&self, _theme: &Theme) -> (u16, u16) {
        (self.width(), 1)
    }

    fn name(&self) -> &str {
        "Text"
    }
}
