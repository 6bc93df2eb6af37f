use super::*;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn empty_file_keeps_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    let mut config = PickerConfig::default();
    settings.apply_to(&mut config);
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn invalid_minute_step_falls_back_to_default() {
    let settings: Settings =
        serde_json::from_str(r#"{ "minute_step": 7, "visible_rows": 0 }"#).unwrap();
    let mut config = PickerConfig::default();
    settings.apply_to(&mut config);
    assert_eq!(config.minute_step, 5);
    assert_eq!(config.visible_rows, PickerConfig::default().visible_rows);
}

#[test]
fn fields_apply_individually() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "minute_step": 15,
            "animation": { "slide_down_ms": 400 },
            "labels": { "confirm": "OK", "year_suffix": "年" }
        }"#,
    )
    .unwrap();
    let mut config = PickerConfig::default();
    settings.apply_to(&mut config);

    assert_eq!(config.minute_step, 15);
    assert_eq!(config.timings.slide_down, Duration::from_millis(400));
    assert_eq!(config.timings.fade_in, Duration::from_millis(250));
    assert_eq!(config.labels.confirm, "OK");
    assert_eq!(config.labels.cancel, "Cancel");
    assert_eq!(config.labels.year_suffix, "年");
}

#[test]
fn default_file_round_trips_to_default_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    write_default_settings(&path).unwrap();

    let settings = load_settings_from(&path).unwrap();
    let mut config = PickerConfig::default();
    config.minute_step = 10;
    settings.apply_to(&mut config);
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn existing_file_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "minute_step": 30 }"#).unwrap();

    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().minute_step, Some(30));
}

#[test]
fn malformed_file_is_invalid_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);

    let missing = load_settings_from(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(missing.kind(), io::ErrorKind::NotFound);
}
