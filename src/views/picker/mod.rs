//! Picker sheet: pure painting and hit-testing over the kernel state.

mod layout;

pub use hit_test::{hit_test_picker, PickerHit};
pub use layout::{compute_picker_layout, slide_rows, PickerLayout, SHEET_MAX_WIDTH};

use crate::kernel::picker::PickerMode;
use crate::kernel::PickerState;
use crate::services::config::PickerConfig;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::Theme;

#[derive(Debug, Default)]
pub struct PickerView {
    theme: Theme,
    layout: Option<PickerLayout>,
}

impl PickerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            layout: None,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Layout of the last paint; `None` while nothing is mounted.
    pub fn layout(&self) -> Option<&PickerLayout> {
        self.layout.as_ref()
    }

    pub fn hit_test(
        &self,
        state: &PickerState,
        config: &PickerConfig,
        pos: Pos,
    ) -> Option<PickerHit> {
        hit_test_picker(self.layout.as_ref()?, state, config, pos)
    }

    /// Paints backdrop and sheet; `focus` is the keyboard-focused column.
    pub fn paint(
        &mut self,
        painter: &mut Painter,
        area: Rect,
        state: &PickerState,
        config: &PickerConfig,
        focus: usize,
    ) {
        self.layout = compute_picker_layout(area, state, config);
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let theme = &self.theme;

        if let Some(style) = theme.backdrop(state.modal.opacity()) {
            painter.style_rect(area, style);
        }

        let sheet = layout.visible_sheet();
        if sheet.is_empty() {
            return;
        }
        let border = Style::default().fg(theme.sheet_border);
        painter.fill_rect(sheet, Style::default().bg(theme.sheet_bg));
        painter.border(sheet, border);

        paint_header(painter, layout, state, config, theme);
        if !layout.divider.is_empty() {
            painter.hline(
                Pos::new(layout.divider.x, layout.divider.y),
                layout.divider.w,
                '─',
                border,
            );
        }
        paint_wheels(painter, layout, state, config, theme, focus);
    }
}

fn paint_header(
    painter: &mut Painter,
    layout: &PickerLayout,
    state: &PickerState,
    config: &PickerConfig,
    theme: &Theme,
) {
    let labels = &config.labels;
    let header = layout.header;
    if header.is_empty() {
        return;
    }
    painter.text_clipped(
        Pos::new(layout.cancel.x, header.y),
        labels.cancel.as_str(),
        Style::default().fg(theme.cancel_fg),
        header,
    );
    let title_area = Rect::new(
        layout.cancel.right(),
        header.y,
        layout.confirm.x.saturating_sub(layout.cancel.right()),
        header.h,
    );
    painter.text_centered(
        title_area,
        0,
        state.props.title(labels),
        Style::default().fg(theme.title_fg).add_mod(Mod::BOLD),
    );
    painter.text_clipped(
        Pos::new(layout.confirm.x, header.y),
        labels.confirm.as_str(),
        Style::default().fg(theme.confirm_fg).add_mod(Mod::BOLD),
        header,
    );
}

fn paint_wheels(
    painter: &mut Painter,
    layout: &PickerLayout,
    state: &PickerState,
    config: &PickerConfig,
    theme: &Theme,
    focus: usize,
) {
    let Some(surface) = state.surface.as_ref() else {
        return;
    };
    let body = layout.body;
    if body.is_empty() {
        return;
    }
    let band = Rect::new(body.x, layout.band_row, body.w, 1);
    painter.fill_rect(band, Style::default().bg(theme.band_bg));

    let wheels = surface.wheels();
    for (column, rect) in layout.columns.iter().enumerate() {
        let Some(wheel) = wheels.wheel(column) else {
            continue;
        };
        let highlighted = wheel.highlighted_index();
        let focused = column == focus && state.modal.is_interactive();
        for y in rect.y..rect.bottom() {
            let Some(index) = layout.item_at_row(wheel, config.item_height, y) else {
                continue;
            };
            let is_highlighted = highlighted == Some(index);
            let mut style = theme.item(is_highlighted);
            if is_highlighted && focused {
                style = style.fg(theme.focus_fg).add_mod(Mod::UNDERLINE);
            }
            if y == layout.band_row {
                style = style.bg(theme.band_bg);
            }
            painter.text_centered(*rect, y - rect.y, &wheel.items()[index].label, style);
        }
    }

    if state.props.mode == PickerMode::Time {
        let style = Style::default()
            .fg(theme.separator_fg)
            .bg(theme.band_bg)
            .add_mod(Mod::BOLD);
        for gutter in &layout.gutters {
            painter.text_centered(
                *gutter,
                layout.band_row.saturating_sub(gutter.y),
                &config.labels.separator,
                style,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/picker.rs"]
mod tests;
