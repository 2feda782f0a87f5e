//! Default palette and spacing shared by the built-in components

mod color;

pub use color::{AnsiColor, Color};

use crate::style::Style;
use crate::terminal::TerminalCapabilities;

/// Colors and spacing used by the built-in components
///
/// Spacing values are in character cells.
#[derive(Debug, Clone)]
pub struct Theme {
    pub text_fg: Color,
    pub secondary_fg: Color,
    pub accent: Color,

    pub toggle_on: Color,
    pub toggle_off: Color,

    /// Padding on every edge of a flexible row
    pub row_padding: u16,
    /// Gap between adjacent non-empty items in a row or stack
    pub stack_spacing: u16,
    /// Gap between a button's icon and its title
    pub button_icon_gap: u16,
    /// Blank lines between list sections
    pub section_spacing: u16,

    pub caps: TerminalCapabilities,
}

impl Theme {
    /// Create a new theme with terminal capabilities
    pub fn new(caps: TerminalCapabilities) -> Self {
        Theme {
            text_fg: Color::white(),
            secondary_fg: Color::gray(),
            accent: Color::blue(),

            toggle_on: Color::green(),
            toggle_off: Color::gray(),

            row_padding: 1,
            stack_spacing: 1,
            button_icon_gap: 1,
            section_spacing: 1,

            caps,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::new().fg(self.text_fg)
    }

    pub fn secondary_style(&self) -> Style {
        Style::new().fg(self.secondary_fg)
    }

    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub fn section_header_style(&self) -> Style {
        Style::new().fg(self.secondary_fg).bold()
    }

    pub fn title_style(&self) -> Style {
        Style::new().fg(self.text_fg).bold().underline()
    }

    /// Style applied on top of a control that holds keyboard focus
    pub fn focus_style(&self) -> Style {
        Style::new().reversed()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(TerminalCapabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();

        assert_eq!(theme.toggle_on, Color::green());
        assert_eq!(theme.toggle_off, Color::gray());
        assert_eq!(theme.row_padding, 1);
        assert_eq!(theme.accent_style().fg, Some(Color::blue()));
    }
}
