//! Cell styles - colors and text attributes attached to rendered cells

use crate::terminal::TerminalCapabilities;
use crate::theme::Color;

/// Visual attributes of a rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Style {
    /// Plain style with no color or attributes
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Layer `other` on top of this style: colors in `other` win, attributes accumulate
    pub fn patch(self, other: Style) -> Self {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            underline: self.underline || other.underline,
            reverse: self.reverse || other.reverse,
        }
    }

    /// Check whether the style changes anything about plain output
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// ANSI escape prefix for this style
    ///
    /// Colors are dropped when `colors` is false; attributes are always emitted.
    pub fn to_ansi(&self, caps: &TerminalCapabilities, colors: bool) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str("\x1b[1m");
        }
        if self.dim {
            out.push_str("\x1b[2m");
        }
        if self.underline {
            out.push_str("\x1b[4m");
        }
        if self.reverse {
            out.push_str("\x1b[7m");
        }
        if colors {
            if let Some(fg) = &self.fg {
                out.push_str(&fg.degrade(caps));
            }
            if let Some(bg) = &self.bg {
                out.push_str(&bg.bg(caps));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_prefers_overlay_colors() {
        let base = Style::new().fg(Color::white()).dim();
        let overlay = Style::new().fg(Color::blue()).reversed();
        let merged = base.patch(overlay);

        assert_eq!(merged.fg, Some(Color::blue()));
        assert!(merged.dim);
        assert!(merged.reverse);
    }

    #[test]
    fn test_ansi_without_colors_keeps_attributes() {
        let caps = TerminalCapabilities::default();
        let style = Style::new().fg(Color::red()).bold();

        assert_eq!(style.to_ansi(&caps, false), "\x1b[1m");
        assert!(style.to_ansi(&caps, true).contains("38;2;255;69;58"));
        assert!(Style::new().to_ansi(&caps, true).is_empty());
    }
}
