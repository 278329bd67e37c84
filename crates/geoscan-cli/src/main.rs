//! geoscan - report the GPS position of every image in a directory.

mod report;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use fern::colors::{Color, ColoredLevelConfig};
use geoscan_core::{scan_directory, ContainerSource, ScanConfig, DEFAULT_EXTENSION};

#[derive(Parser, Debug)]
#[command(name = "geoscan", version, about = "Extract GPS coordinates from image EXIF metadata")]
struct Cli {
    /// Directory containing the images
    directory: PathBuf,

    /// File extension to scan for (case-sensitive, without the dot)
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Write the report as JSON
    #[arg(long)]
    json: bool,

    /// Sets the level of debugging information
    #[arg(short, action = ArgAction::Count)]
    debug: u8,
}

fn log_level(count: u8) -> log::LevelFilter {
    match count {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let colors = ColoredLevelConfig::new().debug(Color::Magenta);
    fern::Dispatch::new()
        .chain(std::io::stderr())
        .level(level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:6}][{}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .apply()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(log_level(cli.debug))?;

    let config = ScanConfig::new(cli.directory).with_extension(cli.extension);
    let report = scan_directory(&ContainerSource, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        report::write_json(&mut out, &report)?;
    } else {
        report::write_text(&mut out, &report)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["geoscan", "/photos"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("/photos"));
        assert_eq!(cli.extension, "HEIC");
        assert!(!cli.json);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["geoscan", "-dd", "--json", "-e", "JPG", "/photos"]).unwrap();
        assert_eq!(cli.extension, "JPG");
        assert!(cli.json);
        assert_eq!(log_level(cli.debug), log::LevelFilter::Debug);
    }

    #[test]
    fn test_cli_requires_directory() {
        assert!(Cli::try_parse_from(["geoscan"]).is_err());
    }

    #[test]
    fn test_log_level_default_shows_file_warnings() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(1), log::LevelFilter::Info);
    }

    #[test]
    fn test_log_level_saturates() {
        assert_eq!(log_level(3), log::LevelFilter::Trace);
        assert_eq!(log_level(9), log::LevelFilter::Trace);
    }
}
