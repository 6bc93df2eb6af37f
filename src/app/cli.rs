//! Command-line flags of the demo binary.

use crate::kernel::PickerMode;

pub const USAGE: &str = "usage: wheelpick [--date | --time] [--minute-step N]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Mode the picker opens in at startup.
    pub mode: PickerMode,
    pub minute_step: Option<u32>,
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = CliArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--time" => out.mode = PickerMode::Time,
                "--date" => out.mode = PickerMode::Date,
                "-h" | "--help" => out.help = true,
                "--minute-step" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "--minute-step needs a value".to_string())?;
                    out.minute_step = Some(parse_step(value.as_ref())?);
                }
                _ => match arg.strip_prefix("--minute-step=") {
                    Some(value) => out.minute_step = Some(parse_step(value)?),
                    None => return Err(format!("unknown argument: {arg}")),
                },
            }
        }
        Ok(out)
    }
}

fn parse_step(value: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("invalid minute step: {value}"))
}

#[cfg(test)]
#[path = "../../tests/unit/app/cli.rs"]
mod tests;
