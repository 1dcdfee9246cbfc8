use std::path::PathBuf;

use log::LevelFilter;

use super::logging::LogDestination;

const LOG_FILENAME: &str = "urlfeed.log";

/// Runtime settings for the menu binary. There are no flags or config files;
/// `main` always starts from the defaults. The default log file lives in the
/// system temp directory so a run never writes into the working directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_destination: LogDestination,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::File,
            log_path: std::env::temp_dir().join(LOG_FILENAME),
            log_level: LevelFilter::Info,
        }
    }
}
