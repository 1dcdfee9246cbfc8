//! Diagnostic log initialization for the urlfeed binary.
//!
//! Stdout belongs to the menu, so the log goes to a file in the temp
//! directory by default and to stderr when a terminal destination is chosen.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use super::config::AppConfig;

/// Destination for log output. Only `File` is chosen by the binary today.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the configured log file.
    File,
    /// Write to the terminal (stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the logger described by `config`.
pub fn initialize(config: &AppConfig) {
    let loggers = build_loggers(config);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(config: &AppConfig) -> Vec<Box<dyn SharedLogger>> {
    let level = config.log_level;
    let log_config = build_config();

    match config.log_destination {
        LogDestination::File => match create_file_logger(&config.log_path, level, log_config) {
            Some(file_logger) => vec![file_logger],
            None => Vec::new(),
        },
        LogDestination::Terminal => vec![terminal_logger(level, log_config)],
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> =
                vec![terminal_logger(level, log_config.clone())];
            if let Some(file_logger) = create_file_logger(&config.log_path, level, log_config) {
                loggers.push(file_logger);
            }
            loggers
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config(destination: LogDestination, dir: &TempDir) -> AppConfig {
        AppConfig {
            log_destination: destination,
            log_path: dir.path().join("urlfeed.log"),
            log_level: LevelFilter::Debug,
        }
    }

    #[test]
    fn file_destination_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let config = config(LogDestination::File, &dir);

        assert_eq!(build_loggers(&config).len(), 1);
        assert!(config.log_path.is_file());
    }

    #[test]
    fn terminal_destination_skips_file() {
        let dir = TempDir::new().unwrap();
        let config = config(LogDestination::Terminal, &dir);

        assert_eq!(build_loggers(&config).len(), 1);
        assert!(!config.log_path.exists());
    }

    #[test]
    fn both_destination_logs_to_terminal_and_file() {
        let dir = TempDir::new().unwrap();
        let config = config(LogDestination::Both, &dir);

        assert_eq!(build_loggers(&config).len(), 2);
        assert!(config.log_path.is_file());
    }

    #[test]
    fn unwritable_log_path_falls_back_to_no_file_logger() {
        let dir = TempDir::new().unwrap();
        let mut config = config(LogDestination::Both, &dir);
        config.log_path = dir.path().join("missing").join("urlfeed.log");

        assert_eq!(build_loggers(&config).len(), 1);
        config.log_destination = LogDestination::File;
        assert!(build_loggers(&config).is_empty());
    }
}
