use std::io;

use chrono::{Local, Timelike};

use wheelpick::app::{CliArgs, DemoHost, USAGE};
use wheelpick::services::config::PickerConfig;
use wheelpick::services::settings;

mod logging;

fn main() -> io::Result<()> {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let _logging = logging::init();

    let mut config = PickerConfig::default();
    if let Err(e) = settings::ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    if let Some(settings) = settings::load_settings() {
        settings.apply_to(&mut config);
    }
    if let Some(step) = args.minute_step {
        if !config.set_minute_step(step) {
            eprintln!("ignoring --minute-step {step}: must divide 60");
            tracing::warn!(step, "ignoring --minute-step: must divide 60");
        }
    }

    let now = Local::now().naive_local();
    let value = now.with_second(0).and_then(|v| v.with_nanosecond(0)).unwrap_or(now);

    let mut host = DemoHost::new(value, args.mode, config);
    host.open(args.mode);

    if let Some(signal) = wheelpick::tui::run(&mut host)? {
        tracing::info!(?signal, "terminated");
        std::process::exit(signal.exit_code());
    }
    tracing::info!(value = %host.value(), "exit");
    Ok(())
}
