use std::time::Duration;

use clap::Parser;

use crate::data::paginate::DEFAULT_PAGE_SIZE;

/// Browse article datasets by language, topic and ILR level.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Manifest mapping language keys to data files (path or http(s) URL).
    #[arg(long, env = "ILR_BROWSER_MANIFEST", default_value = "available_files.json")]
    pub manifest: String,

    /// Cards per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    pub page_size: usize,

    /// Quiet period after typing before the search runs, in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub manifest_location: String,
    pub page_size: usize,
    pub debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manifest_location: "available_files.json".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce: crate::debounce::DEFAULT_QUIET_PERIOD,
        }
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            manifest_location: args.manifest,
            page_size: args.page_size,
            debounce: Duration::from_millis(args.debounce_ms),
        }
    }
}
