use super::*;

fn config(step: u32) -> PickerConfig {
    let mut config = PickerConfig::default();
    assert!(config.set_minute_step(step));
    config
}

#[test]
fn off_grid_minute_is_floored() {
    let w = TimeWheel::new(PendingTime::new(14, 37), &config(5));
    assert_eq!(w.value(), PendingTime::new(14, 35));
    assert_eq!(w.wheel(TimeField::Minute).selected_value(), 35);
    assert_eq!(w.wheel(TimeField::Minute).selected_index(), Some(7));
}

#[test]
fn minute_domain_follows_step() {
    let w = TimeWheel::new(PendingTime::new(0, 0), &config(15));
    let values: Vec<i32> = w
        .wheel(TimeField::Minute)
        .items()
        .iter()
        .map(|i| i.value)
        .collect();
    assert_eq!(values, vec![0, 15, 30, 45]);
    assert_eq!(w.step(), 15);
}

#[test]
fn fields_change_independently() {
    let mut w = TimeWheel::new(PendingTime::new(9, 10), &config(5));
    assert_eq!(w.select(TimeField::Hour, 17), PendingTime::new(17, 10));
    assert_eq!(w.select(TimeField::Minute, 45), PendingTime::new(17, 45));
}

#[test]
fn out_of_range_input_is_clamped() {
    let mut w = TimeWheel::new(PendingTime::new(30, 59), &config(10));
    assert_eq!(w.value(), PendingTime::new(23, 50));
    assert_eq!(w.select(TimeField::Minute, -5), PendingTime::new(23, 0));
}

#[test]
fn external_value_is_snapped() {
    let mut w = TimeWheel::new(PendingTime::new(8, 0), &config(5));
    assert_eq!(w.set_value(PendingTime::new(12, 58)), PendingTime::new(12, 55));
    assert_eq!(w.wheel(TimeField::Hour).selected_value(), 12);
}

#[test]
fn converts_from_naive_time() {
    let time = NaiveTime::from_hms_opt(14, 37, 12).unwrap();
    assert_eq!(PendingTime::from(time), PendingTime::new(14, 37));
    assert_eq!(PendingTime::new(14, 37).snapped(5), PendingTime::new(14, 35));
}
