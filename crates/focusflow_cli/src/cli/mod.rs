use clap::{Parser, ValueEnum};
use focusflow_core::config::{Config, DEFAULT_TITLE_WIDTH, Theme};
use focusflow_core::error::AppError;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive terminal checklist", long_about = None)]
pub struct Cli {
    /// Color theme: vivid or plain
    ///
    /// Example: focusflow --theme plain
    #[arg(long, value_name = "NAME", default_value = "vivid", value_parser = parse_theme)]
    pub theme: Theme,

    /// Maximum characters shown in the Task column
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TITLE_WIDTH)]
    pub title_width: usize,

    /// Diagnostics level, written to stderr
    #[arg(long, value_enum, value_name = "LEVEL", default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::OFF,
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl Cli {
    pub fn config(&self) -> Result<Config, AppError> {
        Config::new(self.theme, self.title_width)
    }
}

fn parse_theme(raw: &str) -> Result<Theme, String> {
    Theme::from_name(raw).map_err(|err| err.message().to_string())
}
