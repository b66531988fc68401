// Runtime settings for the live view and the chart cache.
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::error::ConfigError;

pub const REFRESH_MS_VAR: &str = "BAZI_REFRESH_MS";
pub const CACHE_CAPACITY_VAR: &str = "BAZI_CACHE_CAPACITY";
pub const SYMBOLS_VAR: &str = "BAZI_SYMBOLS";
pub const CJK_FONT_VAR: &str = "BAZI_CJK_FONT";

const DEFAULT_REFRESH_MS: u64 = 1000;
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// How stem, branch and sign names are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolStyle {
    Hanzi,
    Pinyin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub refresh_interval: Duration,
    pub cache_capacity: NonZeroUsize,
    pub symbol_style: SymbolStyle,
    /// Font with CJK coverage; without one the window falls back to pinyin.
    pub cjk_font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_MS),
            cache_capacity: NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            symbol_style: SymbolStyle::Pinyin,
            cjk_font_path: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from defaults, overriding each key that `lookup` resolves.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(REFRESH_MS_VAR) {
            let ms = parse_positive(REFRESH_MS_VAR, &value)?;
            config.refresh_interval = Duration::from_millis(ms as u64);
        }

        if let Some(value) = lookup(CACHE_CAPACITY_VAR) {
            let capacity = parse_positive(CACHE_CAPACITY_VAR, &value)?;
            config.cache_capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::NotPositive {
                key: CACHE_CAPACITY_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(path) = lookup(CJK_FONT_VAR).filter(|p| !p.trim().is_empty()) {
            config.cjk_font_path = Some(PathBuf::from(path));
            config.symbol_style = SymbolStyle::Hanzi;
        }

        // An explicit style wins over the font-based default.
        if let Some(value) = lookup(SYMBOLS_VAR) {
            config.symbol_style = match value.trim().to_ascii_lowercase().as_str() {
                "hanzi" => SymbolStyle::Hanzi,
                "pinyin" => SymbolStyle::Pinyin,
                _ => {
                    return Err(ConfigError::UnknownSymbolStyle {
                        key: SYMBOLS_VAR,
                        value,
                    })
                }
            };
        }

        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::NotPositive {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.refresh_interval, Duration::from_secs(1));
        assert_eq!(config.cache_capacity.get(), 256);
        assert_eq!(config.symbol_style, SymbolStyle::Pinyin);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (REFRESH_MS_VAR, "250"),
            (CACHE_CAPACITY_VAR, " 16 "),
            (CJK_FONT_VAR, "/usr/share/fonts/noto/NotoSansCJK.ttc"),
        ]))
        .unwrap();
        assert_eq!(config.refresh_interval, Duration::from_millis(250));
        assert_eq!(config.cache_capacity.get(), 16);
        assert_eq!(config.symbol_style, SymbolStyle::Hanzi);
        assert!(config.cjk_font_path.is_some());
    }

    #[test]
    fn test_explicit_style_beats_font() {
        let config = Config::from_lookup(lookup_from(&[
            (CJK_FONT_VAR, "font.ttf"),
            (SYMBOLS_VAR, "Pinyin"),
        ]))
        .unwrap();
        assert_eq!(config.symbol_style, SymbolStyle::Pinyin);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_lookup(lookup_from(&[(REFRESH_MS_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { key: REFRESH_MS_VAR, .. }));

        let err = Config::from_lookup(lookup_from(&[(CACHE_CAPACITY_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { .. }));

        let err = Config::from_lookup(lookup_from(&[(SYMBOLS_VAR, "emoji")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownSymbolStyle {
                key: SYMBOLS_VAR,
                value: "emoji".to_string()
            }
        );
    }
}
