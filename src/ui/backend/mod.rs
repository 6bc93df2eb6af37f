//! Rendering backends.
//!
//! Paint commands are rasterised once, here, onto anything that can hold styled cells. The
//! headless [`test::TestBackend`] and the terminal backend only differ in where cells land.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::Style;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

/// A grid of styled cells.
pub trait CellSink {
    fn area(&self) -> Rect;

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);

    /// Layers `style` over the cell without touching its symbol.
    fn restyle(&mut self, x: u16, y: u16, style: Style);
}

pub fn raster(sink: &mut dyn CellSink, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => {
                for_each_cell(sink, *rect, |sink, x, y| sink.put(x, y, " ", *style))
            }
            PaintCmd::StyleRect { rect, style } => {
                for_each_cell(sink, *rect, |sink, x, y| sink.restyle(x, y, *style))
            }
            PaintCmd::HLine { pos, len, ch, style } => {
                let mut tmp = [0u8; 4];
                let symbol: &str = ch.encode_utf8(&mut tmp);
                for_each_cell(sink, Rect::new(pos.x, pos.y, *len, 1), |sink, x, y| {
                    sink.put(x, y, symbol, *style)
                });
            }
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => draw_text(sink, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style } => draw_border(sink, *rect, *style),
        }
    }
}

fn for_each_cell(
    sink: &mut dyn CellSink,
    rect: Rect,
    mut f: impl FnMut(&mut dyn CellSink, u16, u16),
) {
    let clip = rect.intersect(sink.area());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            f(sink, x, y);
        }
    }
}

fn draw_text(sink: &mut dyn CellSink, pos: Pos, text: &str, style: Style, clip: Option<Rect>) {
    let area = sink.area();
    let clip = clip.unwrap_or(area).intersect(area);
    if pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > clip.right() {
            // Wide glyphs are never split at the clip edge.
            break;
        }
        if x >= clip.x {
            sink.put(x, pos.y, g, style);
            for dx in 1..w {
                sink.put(x + dx, pos.y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(sink: &mut dyn CellSink, rect: Rect, style: Style) {
    let rect = rect.intersect(sink.area());
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    for x in rect.x + 1..right {
        sink.put(x, rect.y, "─", style);
        sink.put(x, bottom, "─", style);
    }
    for y in rect.y + 1..bottom {
        sink.put(rect.x, y, "│", style);
        sink.put(right, y, "│", style);
    }
    sink.put(rect.x, rect.y, "┌", style);
    sink.put(right, rect.y, "┐", style);
    sink.put(rect.x, bottom, "└", style);
    sink.put(right, bottom, "┘", style);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
