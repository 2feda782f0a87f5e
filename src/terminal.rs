//! Terminal abstraction - geometry, capabilities, and context

use anyhow::Result;

/// Terminal geometry in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    /// Terminal width in columns (characters)
    pub cols: u16,
    /// Terminal height in rows (lines)
    pub rows: u16,
}

impl TerminalGeometry {
    /// Create geometry with explicit dimensions
    pub fn new(cols: u16, rows: u16) -> Self {
        TerminalGeometry { cols, rows }
    }

    /// Get current terminal geometry
    #[cfg(feature = "tui")]
    pub fn detect() -> Result<Self> {
        use anyhow::Context;

        let (cols, rows) = crossterm::terminal::size().context("Failed to get terminal size")?;
        Ok(TerminalGeometry { cols, rows })
    }

    /// Without a terminal backend there is nothing to query; assume 80x24
    #[cfg(not(feature = "tui"))]
    pub fn detect() -> Result<Self> {
        Ok(TerminalGeometry::new(80, 24))
    }
}

/// Terminal capability detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Supports 24-bit true color
    pub truecolor: bool,
    /// Supports 256 colors
    pub colors_256: bool,
    /// Inside tmux/screen multiplexer
    pub in_multiplexer: bool,
    /// Supports mouse events
    pub mouse: bool,
}

impl TerminalCapabilities {
    /// Detect terminal capabilities from the environment
    pub fn detect() -> Self {
        Self::from_vars(
            &std::env::var("TERM").unwrap_or_default(),
            &std::env::var("COLORTERM").unwrap_or_default(),
            std::env::var("TMUX").is_ok(),
        )
    }

    /// Derive capabilities from `TERM`, `COLORTERM` and whether `TMUX` is set
    pub fn from_vars(term: &str, colorterm: &str, tmux: bool) -> Self {
        let truecolor = colorterm.contains("truecolor")
            || colorterm.contains("24bit")
            || term.contains("kitty");

        // 256 color support is pretty universal now
        let colors_256 = term.contains("256") || truecolor;

        TerminalCapabilities {
            truecolor,
            colors_256,
            in_multiplexer: tmux || term.starts_with("screen") || term.starts_with("tmux"),
            mouse: term != "dumb",
        }
    }
}

impl Default for TerminalCapabilities {
    /// Full-color capabilities, used for headless rendering
    fn default() -> Self {
        TerminalCapabilities {
            truecolor: true,
            colors_256: true,
            in_multiplexer: false,
            mouse: true,
        }
    }
}

/// Complete terminal context combining geometry and capabilities
#[derive(Debug, Clone)]
pub struct TerminalContext {
    pub geometry: TerminalGeometry,
    pub capabilities: TerminalCapabilities,
}

impl TerminalContext {
    /// Create a new terminal context by detecting current environment
    pub fn detect() -> Result<Self> {
        Ok(TerminalContext {
            geometry: TerminalGeometry::detect()?,
            capabilities: TerminalCapabilities::detect(),
        })
    }

    /// Context for an off-screen buffer of the given size
    pub fn headless(cols: u16, rows: u16) -> Self {
        TerminalContext {
            geometry: TerminalGeometry::new(cols, rows),
            capabilities: TerminalCapabilities::default(),
        }
    }

    /// Get character dimensions
    pub fn char_dimensions(&self) -> (u16, u16) {
        (self.geometry.cols, self.geometry.rows)
    }
}
