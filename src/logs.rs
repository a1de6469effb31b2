use std::io::{self, IsTerminal};
use std::time::SystemTime;

use anyhow::{bail, Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Sends logs to stderr, stdout is reserved for the report. The logger
/// passes everything up to debug, `level` only sets the global max level so
/// that it can be changed later with [`set_level`].
pub fn init(level: &str) -> Result<()> {
    let level = parse_level(level)?;
    let is_terminal = io::stderr().is_terminal();

    let colors = ColoredLevelConfig::new()
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let now = humantime::format_rfc3339_millis(SystemTime::now());
            if is_terminal {
                out.finish(format_args!(
                    "{now} [{}] {message}",
                    colors.color(record.level())
                ))
            } else {
                out.finish(format_args!("{now} [{}] {message}", record.level()))
            }
        })
        .level(LevelFilter::Debug)
        .chain(io::stderr())
        .apply()
        .context("init logger")?;

    log::set_max_level(level);
    Ok(())
}

pub fn set_level(level: &str) -> Result<()> {
    log::set_max_level(parse_level(level)?);
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    Ok(match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        _ => bail!("unknown log level '{}'", level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error").unwrap(), LevelFilter::Error);
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert!(parse_level("trace").is_err());
    }

    #[test]
    fn test_set_level() {
        set_level("debug").unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);
        set_level("error").unwrap();
        assert_eq!(log::max_level(), LevelFilter::Error);

        assert!(set_level("verbose").is_err());
        assert_eq!(log::max_level(), LevelFilter::Error);
    }
}
