use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use crate::ui::backend::{raster, Backend, CellSink};
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintWidget { cmds }, to_rrect(area));
    }
}

/// Opaque terminal wrapper so the rest of the crate never names `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let a = frame.area();
            let area = Rect::new(a.x, a.y, a.width, a.height);
            let mut backend = RatatuiBackend { frame };
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        raster(&mut BufferSink { buf }, self.cmds);
    }
}

struct BufferSink<'a> {
    buf: &'a mut Buffer,
}

impl CellSink for BufferSink<'_> {
    fn area(&self) -> Rect {
        let a = self.buf.area;
        Rect::new(a.x, a.y, a.width, a.height)
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(to_ratatui_style(style));
        }
    }

    fn restyle(&mut self, x: u16, y: u16, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_style(to_ratatui_style(style));
        }
    }
}

fn to_rrect(r: Rect) -> RRect {
    RRect {
        x: r.x,
        y: r.y,
        width: r.w,
        height: r.h,
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    for (ours, theirs) in [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
        (Mod::UNDERLINE, RModifier::UNDERLINED),
        (Mod::REVERSE, RModifier::REVERSED),
    ] {
        if m.contains(ours) {
            out |= theirs;
        }
    }
    out
}
