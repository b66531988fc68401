use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("lunar calendar error: {0}")]
    Lunar(#[from] LunarError),
    #[error("failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    NotPositive { key: &'static str, value: String },
    #[error("{key} must be one of hanzi or pinyin, got {value:?}")]
    UnknownSymbolStyle { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LunarError {
    #[error("no locale lunar calendar is available")]
    Unavailable,
    #[error("{0} is outside the lunar table (1900-01-31 to 2101-01-28)")]
    OutOfRange(chrono::NaiveDate),
    #[error("lunar calendar could not format {0}")]
    Format(String),
}
