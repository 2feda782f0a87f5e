//! Rendering backend - cell buffers, frame diffing, and terminal output
//!
//! Components draw into a back buffer through cursor-style calls. At the end
//! of a frame the back buffer is diffed against what is already on screen and
//! only changed cells are written out. A headless renderer skips the output
//! step, which is what tests use to inspect frames.

use crate::layout::Rect;
use crate::style::Style;
use crate::terminal::{TerminalCapabilities, TerminalContext};
use anyhow::Result;
use std::io::{self, BufWriter, Write};
use unicode_width::UnicodeWidthChar;

/// Default buffer capacity for write batching (16KB)
const WRITE_BUFFER_CAPACITY: usize = 16 * 1024;

/// A single character cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Grapheme drawn in this cell; empty for the trailing half of a wide character
    pub symbol: String,
    pub style: Style,
}

impl Cell {
    fn blank() -> Self {
        Cell {
            symbol: " ".to_string(),
            style: Style::default(),
        }
    }

    fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Grid of cells covering the whole screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer
    pub fn new(width: u16, height: u16) -> Self {
        Buffer {
            width,
            height,
            cells: vec![Cell::blank(); width as usize * height as usize],
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at a position
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Reset every cell to blank
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::blank();
        }
    }

    /// Write a string starting at (x, y) without wrapping
    ///
    /// Characters that do not fit are dropped. Returns the column after the
    /// last written cell.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > self.width || y >= self.height {
                break;
            }
            if let Some(i) = self.index(col, y) {
                self.cells[i] = Cell {
                    symbol: ch.to_string(),
                    style,
                };
            }
            for extra in 1..width {
                if let Some(i) = self.index(col + extra, y) {
                    self.cells[i] = Cell {
                        symbol: String::new(),
                        style,
                    };
                }
            }
            col += width;
        }
        col
    }

    /// Text content of one row, with trailing blanks kept
    pub fn line(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.symbol.as_str())
            .collect()
    }

    /// Position of the first cell showing `symbol`, scanning row by row
    pub fn find(&self, symbol: &str) -> Option<(u16, u16)> {
        self.cells
            .iter()
            .position(|c| c.symbol == symbol)
            .map(|i| ((i % self.width as usize) as u16, (i / self.width as usize) as u16))
    }

    /// Cells in `self` that differ from `previous`, in row-major order
    pub fn diff<'a>(&'a self, previous: &Buffer) -> Vec<(u16, u16, &'a Cell)> {
        let same_shape = self.width == previous.width && self.height == previous.height;
        self.cells
            .iter()
            .enumerate()
            .filter(|(i, cell)| !same_shape || previous.cells[*i] != **cell)
            .map(|(i, cell)| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
            .collect()
    }
}

enum Output {
    Headless,
    Terminal(BufWriter<io::Stdout>),
}

/// Immediate-mode renderer with a cursor, a back buffer, and the last
/// flushed frame
pub struct Renderer {
    output: Output,
    context: TerminalContext,
    /// Frame being drawn
    back: Buffer,
    /// Frame currently on screen
    front: Buffer,
    cursor: (u16, u16),
    colors: bool,
    in_alt_screen: bool,
    /// Next flush repaints every cell
    force_full: bool,
}

impl Renderer {
    /// Create a renderer writing to stdout, sized to the terminal
    pub fn new() -> Result<Self> {
        let context = TerminalContext::detect()?;
        let writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, io::stdout());
        Ok(Self::with_output(Output::Terminal(writer), context))
    }

    /// Create an off-screen renderer of the given size
    pub fn headless(cols: u16, rows: u16) -> Self {
        Self::with_output(Output::Headless, TerminalContext::headless(cols, rows))
    }

    fn with_output(output: Output, context: TerminalContext) -> Self {
        let (cols, rows) = context.char_dimensions();
        Renderer {
            output,
            context,
            back: Buffer::new(cols, rows),
            front: Buffer::new(cols, rows),
            cursor: (0, 0),
            colors: true,
            in_alt_screen: false,
            force_full: true,
        }
    }

    /// Enable or disable color output (attributes are always written)
    pub fn set_colors(&mut self, enabled: bool) {
        self.colors = enabled;
        self.force_full = true;
    }

    pub fn capabilities(&self) -> TerminalCapabilities {
        self.context.capabilities
    }

    /// Get current terminal context
    pub fn context(&self) -> &TerminalContext {
        &self.context
    }

    /// Drawable area
    pub fn area(&self) -> Rect {
        self.back.area()
    }

    /// Frame being drawn
    pub fn buffer(&self) -> &Buffer {
        &self.back
    }

    /// Enter alternative screen buffer
    ///
    /// Note: This immediately flushes to ensure the screen switch happens.
    pub fn enter_alt_screen(&mut self) -> Result<()> {
        if !self.in_alt_screen {
            self.write_raw("\x1b[?1049h")?;
            self.flush()?;
            self.in_alt_screen = true;
            self.force_full = true;
        }
        Ok(())
    }

    /// Exit alternative screen buffer
    pub fn exit_alt_screen(&mut self) -> Result<()> {
        if self.in_alt_screen {
            self.write_raw("\x1b[?1049l")?;
            self.flush()?;
            self.in_alt_screen = false;
        }
        Ok(())
    }

    /// Clear the screen and repaint everything on the next frame
    pub fn clear(&mut self) -> Result<()> {
        self.write_raw("\x1b[2J")?;
        self.front.reset();
        self.force_full = true;
        Ok(())
    }

    /// Hide cursor
    pub fn hide_cursor(&mut self) -> Result<()> {
        self.write_raw("\x1b[?25l")
    }

    /// Show cursor
    pub fn show_cursor(&mut self) -> Result<()> {
        self.write_raw("\x1b[?25h")
    }

    /// Move the drawing cursor (0-indexed)
    #[inline]
    pub fn move_cursor(&mut self, col: u16, row: u16) -> Result<()> {
        self.cursor = (col, row);
        Ok(())
    }

    /// Write text at the drawing cursor and advance it
    #[inline]
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.write_styled(text, Style::default())
    }

    /// Write styled text at the drawing cursor and advance it
    pub fn write_styled(&mut self, text: &str, style: Style) -> Result<()> {
        let (col, row) = self.cursor;
        let next = self.back.set_string(col, row, text, style);
        self.cursor = (next, row);
        Ok(())
    }

    /// Write a repeated character
    pub fn write_repeated(&mut self, ch: char, count: usize, style: Style) -> Result<()> {
        let text: String = std::iter::repeat(ch).take(count).collect();
        self.write_styled(&text, style)
    }

    /// Start a frame with a blank back buffer
    pub fn begin_frame(&mut self) {
        self.back.reset();
        self.cursor = (0, 0);
    }

    /// Finish a frame: write changed cells and swap buffers
    ///
    /// Returns the number of cells written.
    pub fn end_frame(&mut self) -> Result<usize> {
        let changed = if self.force_full {
            self.back.diff(&Buffer::new(0, 0))
        } else {
            self.back.diff(&self.front)
        };
        let count = changed.len();

        if let Output::Terminal(writer) = &mut self.output {
            write_cells(writer, &changed, &self.context.capabilities, self.colors)?;
            writer.flush()?;
        }

        tracing::trace!(cells = count, full = self.force_full, "frame flushed");
        self.front = self.back.clone();
        self.force_full = false;
        Ok(count)
    }

    /// Resize buffers to new terminal dimensions
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.context.geometry.cols = cols;
        self.context.geometry.rows = rows;
        self.back = Buffer::new(cols, rows);
        self.front = Buffer::new(cols, rows);
        self.force_full = true;
    }

    /// Flush output buffer to terminal
    pub fn flush(&mut self) -> Result<()> {
        if let Output::Terminal(writer) = &mut self.output {
            writer.flush()?;
        }
        Ok(())
    }

    fn write_raw(&mut self, seq: &str) -> Result<()> {
        if let Output::Terminal(writer) = &mut self.output {
            writer.write_all(seq.as_bytes())?;
        }
        Ok(())
    }

    /// Check if the renderer is in alternative screen mode
    pub fn in_alt_screen(&self) -> bool {
        self.in_alt_screen
    }
}

/// Emit changed cells, moving the cursor only when a run breaks
fn write_cells(
    writer: &mut impl Write,
    cells: &[(u16, u16, &Cell)],
    caps: &TerminalCapabilities,
    colors: bool,
) -> Result<()> {
    let mut expected: Option<(u16, u16)> = None;
    let mut current_style: Option<Style> = None;

    for (x, y, cell) in cells {
        if cell.is_continuation() {
            continue;
        }
        if expected != Some((*x, *y)) {
            write!(writer, "\x1b[{};{}H", y + 1, x + 1)?;
        }
        if current_style != Some(cell.style) {
            write!(writer, "\x1b[0m{}", cell.style.to_ansi(caps, colors))?;
            current_style = Some(cell.style);
        }
        writer.write_all(cell.symbol.as_bytes())?;
        let width = cell.symbol.chars().next().and_then(|c| c.width()).unwrap_or(1) as u16;
        expected = Some((x + width, *y));
    }

    if current_style.is_some() {
        writer.write_all(b"\x1b[0m")?;
    }
    Ok(())
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Restore terminal state even during panics
        let _ = self.exit_alt_screen();
        let _ = self.show_cursor();
        let _ = self.flush();
    }
}
