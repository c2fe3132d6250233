use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use crate::state::Mode;

/// Embedded default configuration
const DEFAULT_CONFIG: &str = include_str!("../config.toml");

pub const MIN_TICK_MS: u64 = 16;
pub const AUDIO_BARS_RANGE: std::ops::RangeInclusive<usize> = 4..=64;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Raw TOML structure. Every key is optional so a user file can override
/// a single value.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    simulation: SimulationSection,
    #[serde(default)]
    defaults: DefaultsSection,
    #[serde(default)]
    logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize)]
struct SimulationSection {
    tick_ms: Option<u64>,
    audio_bars: Option<usize>,
    live_on_start: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultsSection {
    brightness: Option<u8>,
    mode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    file: Option<PathBuf>,
}

/// Initial values for a fresh `AppState`
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub brightness: u8,
    pub mode: Mode,
    pub live_on_start: bool,
    pub audio_bars: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            brightness: 75,
            mode: Mode::Visual,
            live_on_start: true,
            audio_bars: crate::state::DEFAULT_AUDIO_BARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick_ms: u64,
    pub audio_bars: usize,
    pub live_on_start: bool,
    pub brightness: u8,
    pub mode: Mode,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Embedded defaults plus the user override, if one exists. The override
    /// error is handed back since this runs before the logger exists.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        Self::load_from(user_config_path().as_deref())
    }

    /// Embedded defaults overridden by `path`. A missing file is not an error;
    /// an unreadable or invalid one yields the untouched embedded config.
    pub fn load_from(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        let mut config = Self::embedded();
        let Some(path) = path.filter(|p| p.exists()) else {
            return (config, None);
        };
        match config.merge_file(path) {
            Ok(()) => (config, None),
            Err(e) => (Self::embedded(), Some(e)),
        }
    }

    /// The configuration shipped with the binary
    pub fn embedded() -> Self {
        let mut config = Self::builtin();
        let file: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        config
            .apply(file)
            .expect("Embedded config.toml holds invalid values");
        config
    }

    /// Apply a TOML document on top of the current values
    pub fn merge_str(&mut self, contents: &str) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut next = self.clone();
        next.apply(file)?;
        *self = next;
        Ok(())
    }

    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_str(&contents)
    }

    pub fn defaults(&self) -> Defaults {
        Defaults {
            brightness: self.brightness,
            mode: self.mode,
            live_on_start: self.live_on_start,
            audio_bars: self.audio_bars,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Where the log file goes unless the config names one
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("vizdeck")
                .join("vizdeck.log")
        })
    }

    fn builtin() -> Self {
        let defaults = Defaults::default();
        Self {
            tick_ms: 500,
            audio_bars: defaults.audio_bars,
            live_on_start: defaults.live_on_start,
            brightness: defaults.brightness,
            mode: defaults.mode,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }

    fn apply(&mut self, file: ConfigFile) -> Result<(), ConfigError> {
        if let Some(tick_ms) = file.simulation.tick_ms {
            if tick_ms < MIN_TICK_MS {
                return Err(ConfigError::Invalid {
                    key: "simulation.tick_ms",
                    reason: format!("{} is below the minimum of {}", tick_ms, MIN_TICK_MS),
                });
            }
            self.tick_ms = tick_ms;
        }
        if let Some(bars) = file.simulation.audio_bars {
            if !AUDIO_BARS_RANGE.contains(&bars) {
                return Err(ConfigError::Invalid {
                    key: "simulation.audio_bars",
                    reason: format!(
                        "{} is outside {}..={}",
                        bars,
                        AUDIO_BARS_RANGE.start(),
                        AUDIO_BARS_RANGE.end()
                    ),
                });
            }
            self.audio_bars = bars;
        }
        if let Some(live) = file.simulation.live_on_start {
            self.live_on_start = live;
        }
        if let Some(brightness) = file.defaults.brightness {
            if brightness > crate::state::BRIGHTNESS_MAX {
                return Err(ConfigError::Invalid {
                    key: "defaults.brightness",
                    reason: format!("{} is above 100", brightness),
                });
            }
            self.brightness = brightness;
        }
        if let Some(mode) = file.defaults.mode {
            self.mode = Mode::from_id(&mode).ok_or_else(|| ConfigError::Invalid {
                key: "defaults.mode",
                reason: format!("unknown mode '{}'", mode),
            })?;
        }
        if let Some(level) = file.logging.level {
            self.log_level = level.parse().map_err(|_| ConfigError::Invalid {
                key: "logging.level",
                reason: format!("unknown level '{}'", level),
            })?;
        }
        if let Some(path) = file.logging.file {
            self.log_file = Some(path);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::embedded()
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vizdeck").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_config_parses() {
        let config = Config::embedded();
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.audio_bars, 24);
        assert!(config.live_on_start);
        assert_eq!(config.brightness, 75);
        assert_eq!(config.mode, Mode::Visual);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn override_applies_key_by_key() {
        let mut config = Config::embedded();
        config
            .merge_str("[defaults]\nmode = \"generative\"\n")
            .unwrap();
        assert_eq!(config.mode, Mode::Generative);
        assert_eq!(config.brightness, 75);
        assert_eq!(config.tick_ms, 500);
    }

    #[test]
    fn invalid_values_are_rejected_without_partial_update() {
        let mut config = Config::embedded();
        let err = config
            .merge_str("[simulation]\naudio_bars = 12\ntick_ms = 1\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "simulation.tick_ms", .. }));
        assert_eq!(config.audio_bars, 24);

        let err = config.merge_str("[defaults]\nmode = \"lasers\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "defaults.mode", .. }));

        let err = config.merge_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "logging.level", .. }));
    }

    #[test]
    fn parse_errors_surface() {
        let mut config = Config::embedded();
        let err = config.merge_str("[simulation\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn merge_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\ntick_ms = 250\nlive_on_start = false").unwrap();
        let mut config = Config::embedded();
        config.merge_file(file.path()).unwrap();
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert!(!config.defaults().live_on_start);
    }

    #[test]
    fn load_from_without_user_file_uses_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let (config, err) = Config::load_from(Some(dir.path().join("config.toml").as_path()));
        assert!(err.is_none());
        assert_eq!(config, Config::embedded());

        let (config, err) = Config::load_from(None);
        assert!(err.is_none());
        assert_eq!(config, Config::embedded());
    }

    #[test]
    fn load_from_applies_valid_user_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nbrightness = 30").unwrap();
        let (config, err) = Config::load_from(Some(file.path()));
        assert!(err.is_none());
        assert_eq!(config.brightness, 30);
    }

    #[test]
    fn malformed_user_file_falls_back_to_embedded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation\ntick_ms = 250").unwrap();
        let (config, err) = Config::load_from(Some(file.path()));
        assert!(matches!(err, Some(ConfigError::Parse(_))));
        assert_eq!(config, Config::embedded());
    }

    #[test]
    fn out_of_range_user_file_falls_back_to_embedded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\ntick_ms = 250\naudio_bars = 500").unwrap();
        let (config, err) = Config::load_from(Some(file.path()));
        assert!(matches!(
            err,
            Some(ConfigError::Invalid { key: "simulation.audio_bars", .. })
        ));
        assert_eq!(config, Config::embedded());
        assert_eq!(config.tick_ms, 500);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::embedded();
        let err = config.merge_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
