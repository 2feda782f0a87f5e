//! Color types with automatic degradation support

use crate::terminal::TerminalCapabilities;

/// Color representation with automatic degradation support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// True color RGB
    Rgb(u8, u8, u8),
    /// 256-color palette index
    Palette256(u8),
    /// 16-color ANSI
    Ansi16(AnsiColor),
}

/// 16-color ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

const ANSI_TABLE: [(AnsiColor, (u8, u8, u8)); 16] = [
    (AnsiColor::Black, (0, 0, 0)),
    (AnsiColor::Red, (170, 0, 0)),
    (AnsiColor::Green, (0, 170, 0)),
    (AnsiColor::Yellow, (170, 85, 0)),
    (AnsiColor::Blue, (0, 0, 170)),
    (AnsiColor::Magenta, (170, 0, 170)),
    (AnsiColor::Cyan, (0, 170, 170)),
    (AnsiColor::White, (170, 170, 170)),
    (AnsiColor::BrightBlack, (85, 85, 85)),
    (AnsiColor::BrightRed, (255, 85, 85)),
    (AnsiColor::BrightGreen, (85, 255, 85)),
    (AnsiColor::BrightYellow, (255, 255, 85)),
    (AnsiColor::BrightBlue, (85, 85, 255)),
    (AnsiColor::BrightMagenta, (255, 85, 255)),
    (AnsiColor::BrightCyan, (85, 255, 255)),
    (AnsiColor::BrightWhite, (255, 255, 255)),
];

impl Color {
    /// Create a color from RGB values
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn white() -> Self {
        Color::Rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Color::Rgb(0, 0, 0)
    }

    pub fn gray() -> Self {
        Color::Rgb(142, 142, 147)
    }

    pub fn blue() -> Self {
        Color::Rgb(10, 132, 255)
    }

    pub fn red() -> Self {
        Color::Rgb(255, 69, 58)
    }

    pub fn green() -> Self {
        Color::Rgb(48, 209, 88)
    }

    pub fn yellow() -> Self {
        Color::Rgb(255, 214, 10)
    }

    /// Foreground escape sequence degraded to terminal capabilities
    pub fn degrade(&self, caps: &TerminalCapabilities) -> String {
        if caps.truecolor {
            let (r, g, b) = self.to_rgb();
            format!("\x1b[38;2;{};{};{}m", r, g, b)
        } else if caps.colors_256 {
            format!("\x1b[38;5;{}m", self.to_palette_index())
        } else {
            format!("\x1b[{}m", self.to_ansi16().fg_code())
        }
    }

    /// Background escape sequence degraded to terminal capabilities
    pub fn bg(&self, caps: &TerminalCapabilities) -> String {
        if caps.truecolor {
            let (r, g, b) = self.to_rgb();
            format!("\x1b[48;2;{};{};{}m", r, g, b)
        } else if caps.colors_256 {
            format!("\x1b[48;5;{}m", self.to_palette_index())
        } else {
            format!("\x1b[{}m", self.to_ansi16().fg_code() + 10)
        }
    }

    fn to_palette_index(self) -> u8 {
        match self {
            Color::Palette256(idx) => idx,
            _ => {
                let (r, g, b) = self.to_rgb();
                rgb_to_256(r, g, b)
            }
        }
    }

    fn to_ansi16(self) -> AnsiColor {
        match self {
            Color::Ansi16(a) => a,
            _ => {
                let (r, g, b) = self.to_rgb();
                rgb_to_ansi16(r, g, b)
            }
        }
    }

    fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Palette256(idx) => palette256_to_rgb(idx),
            Color::Ansi16(a) => a.to_rgb(),
        }
    }
}

impl AnsiColor {
    fn to_rgb(self) -> (u8, u8, u8) {
        ANSI_TABLE
            .iter()
            .find(|(color, _)| *color == self)
            .map(|(_, rgb)| *rgb)
            .unwrap_or((255, 255, 255))
    }

    fn fg_code(self) -> u8 {
        let idx = ANSI_TABLE
            .iter()
            .position(|(color, _)| *color == self)
            .unwrap_or(15) as u8;
        if idx < 8 {
            30 + idx
        } else {
            90 + (idx - 8)
        }
    }
}

/// Convert RGB to 256-color palette index
fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((r - 8) / 10) + 232;
    }

    let scale = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}

/// Convert 256-color palette index to RGB
fn palette256_to_rgb(idx: u8) -> (u8, u8, u8) {
    if idx < 16 {
        ANSI_TABLE[idx as usize].1
    } else if idx >= 232 {
        let gray = 8 + (idx - 232) * 10;
        (gray, gray, gray)
    } else {
        let idx = idx - 16;
        ((idx / 36) * 51, ((idx % 36) / 6) * 51, (idx % 6) * 51)
    }
}

/// Nearest of the 16 ANSI colors by squared distance
fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> AnsiColor {
    let distance = |(cr, cg, cb): (u8, u8, u8)| {
        let dr = r as i32 - cr as i32;
        let dg = g as i32 - cg as i32;
        let db = b as i32 - cb as i32;
        dr * dr + dg * dg + db * db
    };

    ANSI_TABLE
        .iter()
        .min_by_key(|(_, rgb)| distance(*rgb))
        .map(|(color, _)| *color)
        .unwrap_or(AnsiColor::White)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(truecolor: bool, colors_256: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            truecolor,
            colors_256,
            in_multiplexer: false,
            mouse: true,
        }
    }

    #[test]
    fn test_rgb_to_256() {
        assert_eq!(rgb_to_256(255, 255, 255), 231);
        assert_eq!(rgb_to_256(0, 0, 0), 16);

        let gray_idx = rgb_to_256(128, 128, 128);
        assert!((232..=255).contains(&gray_idx));
    }

    #[test]
    fn test_truecolor_degradation() {
        let code = Color::white().degrade(&caps(true, true));
        assert!(code.contains("38;2;255;255;255"));
    }

    #[test]
    fn test_ansi16_degradation() {
        assert_eq!(Color::rgb(250, 250, 250).degrade(&caps(false, false)), "\x1b[97m");
        assert_eq!(Color::Ansi16(AnsiColor::Blue).degrade(&caps(false, false)), "\x1b[34m");
        assert_eq!(Color::Ansi16(AnsiColor::Blue).bg(&caps(false, false)), "\x1b[44m");
    }

    #[test]
    fn test_palette_passthrough() {
        assert_eq!(Color::Palette256(42).degrade(&caps(false, true)), "\x1b[38;5;42m");
    }
}
