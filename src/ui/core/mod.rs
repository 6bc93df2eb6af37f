pub mod geom;
pub mod painter;
pub mod style;
pub mod theme;

use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal cells.
pub fn text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}
