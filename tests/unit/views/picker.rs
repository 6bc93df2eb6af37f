use super::*;
use crate::kernel::{Action, PickerProps, Store};
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use chrono::{NaiveDate, NaiveDateTime};
use std::time::{Duration, Instant};

const W: u16 = 60;
const H: u16 = 20;

fn at(h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn open_store(mode: PickerMode) -> Store {
    let t0 = Instant::now();
    let mut store = Store::new(PickerProps::new(mode, at(18, 45)), PickerConfig::default());
    store.dispatch(Action::SetVisible(true));
    store.dispatch(Action::Tick { now: t0 });
    store.dispatch(Action::Tick {
        now: t0 + Duration::from_millis(300),
    });
    store
}

fn paint(view: &mut PickerView, store: &Store) -> TestBackend {
    let area = Rect::new(0, 0, W, H);
    let mut painter = Painter::new();
    view.paint(&mut painter, area, store.state(), store.config(), 0);
    let mut backend = TestBackend::new(W, H);
    backend.draw(area, painter.cmds());
    backend
}

#[test]
fn open_sheet_rests_at_the_bottom() {
    let store = open_store(PickerMode::Date);
    let area = Rect::new(0, 0, W, H);
    let layout = compute_picker_layout(area, store.state(), store.config()).unwrap();

    assert_eq!(layout.sheet, Rect::new(8, 11, SHEET_MAX_WIDTH, 9));
    assert_eq!(layout.body, Rect::new(9, 14, 42, 5));
    assert_eq!(layout.band_row, 16);
    assert_eq!(layout.columns.len(), 3);
    assert_eq!(layout.gutters.len(), 2);
}

#[test]
fn painted_date_picker_shows_header_and_selection() {
    let store = open_store(PickerMode::Date);
    let mut view = PickerView::new();
    let backend = paint(&mut view, &store);
    let buf = backend.buffer();

    let header = buf.row_text(12);
    assert!(header.contains("Cancel"), "{header}");
    assert!(header.contains("Select date"), "{header}");
    assert!(header.contains("Done"), "{header}");

    let band = buf.row_text(16);
    assert!(band.contains("2024"), "{band}");
    assert!(band.contains("29"), "{band}");
    let above = buf.row_text(15);
    assert!(above.contains("2023") && above.contains("28"), "{above}");

    // Year column spans x 9..22; "2024" is centred at x 13.
    let cell = buf.cell(13, 16).unwrap();
    assert_eq!(cell.symbol, "2");
    assert!(cell.style.mods.contains(Mod::BOLD));
    assert_eq!(cell.style.bg, Some(view.theme().band_bg));
    let plain = buf.cell(13, 15).unwrap();
    assert!(!plain.style.mods.contains(Mod::BOLD));
}

#[test]
fn time_picker_draws_separator_between_columns() {
    let store = open_store(PickerMode::Time);
    let mut view = PickerView::new();
    let backend = paint(&mut view, &store);
    let band = backend.buffer().row_text(16);

    let hour = band.find("18").unwrap();
    let sep = band.find(':').unwrap();
    let minute = band.find("45").unwrap();
    assert!(hour < sep && sep < minute, "{band}");
    assert!(backend.buffer().row_text(12).contains("Select time"));
}

#[test]
fn nothing_is_painted_before_the_first_tick() {
    let mut store = Store::new(
        PickerProps::new(PickerMode::Date, at(9, 0)),
        PickerConfig::default(),
    );
    store.dispatch(Action::SetVisible(true));
    let mut view = PickerView::new();
    let backend = paint(&mut view, &store);
    assert!(backend.buffer().text().trim().is_empty());
    assert!(view.layout().unwrap().visible_sheet().is_empty());
}

#[test]
fn hit_test_finds_buttons_items_and_backdrop() {
    let store = open_store(PickerMode::Date);
    let mut view = PickerView::new();
    paint(&mut view, &store);
    let layout = view.layout().unwrap().clone();
    let (state, config) = (store.state(), store.config());

    let confirm = Pos::new(layout.confirm.x, layout.confirm.y);
    assert_eq!(view.hit_test(state, config, confirm), Some(PickerHit::Confirm));
    let cancel = Pos::new(layout.cancel.x, layout.cancel.y);
    assert_eq!(view.hit_test(state, config, cancel), Some(PickerHit::Cancel));
    assert_eq!(
        view.hit_test(state, config, Pos::new(0, 0)),
        Some(PickerHit::Backdrop)
    );
    assert_eq!(
        view.hit_test(state, config, Pos::new(13, 15)),
        Some(PickerHit::Item {
            column: 0,
            index: 123
        })
    );
    assert_eq!(
        view.hit_test(state, config, Pos::new(40, 17)),
        Some(PickerHit::Column { column: 2 })
    );
    assert_eq!(view.hit_test(state, config, Pos::new(W, 0)), None);
}

#[test]
fn closing_picker_takes_no_pointer_input() {
    let mut store = open_store(PickerMode::Date);
    let mut view = PickerView::new();
    paint(&mut view, &store);
    store.dispatch(Action::Cancel);
    assert_eq!(
        view.hit_test(store.state(), store.config(), Pos::new(0, 0)),
        None
    );
}

#[test]
fn slide_rows_scale_with_translation() {
    assert_eq!(slide_rows(300.0, 300.0, 9), 9);
    assert_eq!(slide_rows(0.0, 300.0, 9), 0);
    assert_eq!(slide_rows(150.0, 300.0, 9), 5);
    assert_eq!(slide_rows(400.0, 300.0, 9), 12);
    assert_eq!(slide_rows(100.0, 0.0, 9), 0);
    assert_eq!(slide_rows(f32::NAN, 300.0, 9), 0);
}
