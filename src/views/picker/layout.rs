use crate::kernel::picker::{PickerMode, ValueWheel};
use crate::kernel::PickerState;
use crate::services::config::PickerConfig;
use crate::ui::core::geom::Rect;
use crate::ui::core::text_width;

pub const SHEET_MAX_WIDTH: u16 = 44;
/// Top border, header, divider, bottom border.
const CHROME_ROWS: u16 = 4;
const DATE_COLUMN_GAP: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLayout {
    pub area: Rect,
    /// Sheet at its current slide position; may extend past `area`.
    pub sheet: Rect,
    pub header: Rect,
    pub cancel: Rect,
    pub confirm: Rect,
    pub divider: Rect,
    pub body: Rect,
    pub columns: Vec<Rect>,
    /// Space between adjacent columns, one per gap.
    pub gutters: Vec<Rect>,
    pub band_row: u16,
}

impl PickerLayout {
    /// Part of the sheet that is actually on screen.
    pub fn visible_sheet(&self) -> Rect {
        self.sheet.intersect(self.area)
    }

    /// Item of `wheel` drawn on screen row `y`, following the live scroll offset.
    pub fn item_at_row(&self, wheel: &ValueWheel, item_height: f32, y: u16) -> Option<usize> {
        if y < self.body.y || y >= self.body.bottom() || item_height <= 0.0 {
            return None;
        }
        let base = (wheel.offset() / item_height).round();
        if !base.is_finite() {
            return None;
        }
        let index = base as i64 + y as i64 - self.band_row as i64;
        if index < 0 || index as usize >= wheel.items().len() {
            return None;
        }
        Some(index as usize)
    }
}

pub fn compute_picker_layout(
    area: Rect,
    state: &PickerState,
    config: &PickerConfig,
) -> Option<PickerLayout> {
    let surface = state.surface.as_ref()?;
    if area.is_empty() {
        return None;
    }

    let full_height = config.visible_rows.max(1).saturating_add(CHROME_ROWS);
    let resting = area.bottom_sheet(SHEET_MAX_WIDTH, full_height);
    let slide = slide_rows(
        state.modal.translate_y(),
        state.modal.timings().initial_translate_y,
        resting.h,
    );
    let sheet = resting.offset_y(slide);

    let inner = sheet.shrink(1, 1);
    let header = inner.row(0);
    let divider = inner.row(1);
    let body = Rect::new(
        inner.x,
        inner.y.saturating_add(2),
        inner.w,
        inner.h.saturating_sub(2),
    );

    let labels = &config.labels;
    let cancel_w = text_width(&labels.cancel).min(header.w);
    let cancel = Rect::new(header.x.saturating_add(1), header.y, cancel_w, header.h);
    let confirm_w = text_width(&labels.confirm).min(header.w);
    let confirm = Rect::new(
        header.right().saturating_sub(confirm_w.saturating_add(1)),
        header.y,
        confirm_w,
        header.h,
    );

    let gap = match state.props.mode {
        PickerMode::Date => DATE_COLUMN_GAP,
        PickerMode::Time => text_width(&labels.separator).saturating_add(2),
    };
    let columns = body.columns(surface.wheels().columns(), gap);
    let gutters = columns
        .windows(2)
        .map(|pair| {
            let x = pair[0].right();
            Rect::new(x, body.y, pair[1].x.saturating_sub(x), body.h)
        })
        .collect();

    Some(PickerLayout {
        area,
        sheet,
        header,
        cancel,
        confirm,
        divider,
        body,
        columns,
        gutters,
        band_row: body.y.saturating_add(body.h / 2),
    })
}

/// Converts the sheet's pixel offset into whole rows, scaled so the resting offset hides the
/// sheet exactly.
pub fn slide_rows(translate_y: f32, initial_translate_y: f32, sheet_height: u16) -> u16 {
    if initial_translate_y.is_nan() || initial_translate_y <= 0.0 || !translate_y.is_finite() {
        return 0;
    }
    let rows = (translate_y / initial_translate_y).max(0.0) * sheet_height as f32;
    rows.round().min(u16::MAX as f32) as u16
}
