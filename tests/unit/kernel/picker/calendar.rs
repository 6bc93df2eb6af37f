use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn february_respects_leap_years() {
    assert_eq!(days_in_month(2024, 1), 29);
    assert_eq!(days_in_month(2023, 1), 28);
    assert_eq!(days_in_month(1900, 1), 28);
    assert_eq!(days_in_month(2000, 1), 29);
}

#[test]
fn month_lengths_across_the_year() {
    let lengths: Vec<u32> = (0..12).map(|m| days_in_month(2023, m)).collect();
    assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
}

#[test]
fn minute_is_floored_onto_step() {
    assert_eq!(snap_minute(37, 5), 35);
    assert_eq!(snap_minute(35, 5), 35);
    assert_eq!(snap_minute(59, 15), 45);
    assert_eq!(snap_minute(7, 1), 7);
}

#[test]
fn invalid_step_falls_back_to_default() {
    assert_eq!(normalize_step(7), DEFAULT_MINUTE_STEP);
    assert_eq!(normalize_step(0), DEFAULT_MINUTE_STEP);
    assert_eq!(snap_minute(37, 0), 35);
}

#[test]
fn year_items_cover_inclusive_range() {
    let items = year_items(ymd(2020, 6, 1), ymd(2023, 1, 1), &PickerLabels::default());
    let values: Vec<i32> = items.iter().map(|i| i.value).collect();
    assert_eq!(values, vec![2020, 2021, 2022, 2023]);
    assert_eq!(items[0].label, "2020");
}

#[test]
fn swapped_bounds_still_give_a_range() {
    assert_eq!(year_bounds(ymd(2030, 1, 1), ymd(2010, 1, 1)), (2010, 2030));
}

#[test]
fn labels_carry_configured_suffixes() {
    let labels = PickerLabels {
        year_suffix: "年".to_string(),
        month_suffix: "月".to_string(),
        day_suffix: "日".to_string(),
        ..PickerLabels::default()
    };
    assert_eq!(year_items(ymd(2024, 1, 1), ymd(2024, 1, 1), &labels)[0].label, "2024年");

    let months = month_items(&labels);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], WheelItem::new("1月", 0));
    assert_eq!(months[11], WheelItem::new("12月", 11));

    let days = day_items(2024, 1, &labels);
    assert_eq!(days.len(), 29);
    assert_eq!(days[28], WheelItem::new("29日", 29));
}

#[test]
fn time_items_are_zero_padded() {
    let hours = hour_items();
    assert_eq!(hours.len(), 24);
    assert_eq!(hours[7].label, "07");

    let minutes = minute_items(5);
    let labels: Vec<&str> = minutes.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["00", "05", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55"]
    );
    assert_eq!(minute_items(15).len(), 4);
}

#[test]
fn default_bounds() {
    assert_eq!(default_minimum_date(), ymd(1900, 1, 1));
    assert_eq!(default_maximum_date(), ymd(2100, 12, 31));
}
