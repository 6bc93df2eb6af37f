use super::*;

#[test]
fn no_flags_open_the_date_picker() {
    let args = CliArgs::parse(Vec::<String>::new()).unwrap();
    assert_eq!(args, CliArgs::default());
    assert_eq!(args.mode, PickerMode::Date);
}

#[test]
fn time_and_step_flags() {
    let args = CliArgs::parse(["--time", "--minute-step", "15"]).unwrap();
    assert_eq!(args.mode, PickerMode::Time);
    assert_eq!(args.minute_step, Some(15));

    let args = CliArgs::parse(["--minute-step=10"]).unwrap();
    assert_eq!(args.minute_step, Some(10));
}

#[test]
fn bad_arguments_are_reported() {
    assert!(CliArgs::parse(["--minute-step"]).is_err());
    assert!(CliArgs::parse(["--minute-step", "five"]).is_err());
    assert!(CliArgs::parse(["--verbose"])
        .unwrap_err()
        .contains("--verbose"));
}

#[test]
fn help_flag() {
    assert!(CliArgs::parse(["-h"]).unwrap().help);
}

#[test]
fn usage_lists_every_mode_flag() {
    assert!(USAGE.contains("--date"));
    assert!(USAGE.contains("--time"));
    assert_eq!(
        CliArgs::parse(["--time", "--date"]).unwrap().mode,
        PickerMode::Date
    );
}
