//! Player-facing configuration.
//!
//! The settings live in a plain text file, one `key = value` per line:
//!
//! ```text
//! allow_undo = true
//! number_of_consecutive_undos_without_counting_as_undo_used = 1
//! consider_undo_used_wins_in_statistic = false
//! closing_running_game_counts_as_loss = false
//! count_real_moves = true
//! ```
//!
//! Blank lines are ignored. A missing or blank file is populated with the
//! defaults above. Parse errors are reported but never fatal; see
//! [`Config::load_or_default`].

use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

const KEY_ALLOW_UNDO: &str = "allow_undo";
const KEY_UNDO_ALLOWANCE: &str = "number_of_consecutive_undos_without_counting_as_undo_used";
const KEY_CONSIDER_UNDO_WINS: &str = "consider_undo_used_wins_in_statistic";
const KEY_CLOSE_IS_LOSS: &str = "closing_running_game_counts_as_loss";
const KEY_COUNT_REAL_MOVES: &str = "count_real_moves";

/// Game rules and statistics settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether undo is available at all.
    pub allow_undo: bool,

    /// Consecutive undos tolerated before the game counts as "undo used".
    pub undo_allowance: u8,

    /// Credit wins to the statistics even if undo was used.
    pub consider_undo_wins: bool,

    /// Abandoning an unwon game records a loss.
    pub close_is_loss: bool,

    /// Count physical card transfers instead of moves.
    pub count_real_moves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_undo: true,
            undo_allowance: 1,
            consider_undo_wins: false,
            close_is_loss: false,
            count_real_moves: true,
        }
    }
}

impl Config {
    /// Enable or disable undo.
    #[must_use]
    pub fn with_undo(mut self, allow: bool) -> Self {
        self.allow_undo = allow;
        self
    }

    /// Set the consecutive undo allowance.
    #[must_use]
    pub fn with_undo_allowance(mut self, allowance: u8) -> Self {
        self.undo_allowance = allowance;
        self
    }

    /// Credit wins that used undo.
    #[must_use]
    pub fn with_consider_undo_wins(mut self, consider: bool) -> Self {
        self.consider_undo_wins = consider;
        self
    }

    /// Count abandoned games as losses.
    #[must_use]
    pub fn with_close_is_loss(mut self, close_is_loss: bool) -> Self {
        self.close_is_loss = close_is_loss;
        self
    }

    /// Count real (physical) moves.
    #[must_use]
    pub fn with_real_moves(mut self, real_moves: bool) -> Self {
        self.count_real_moves = real_moves;
        self
    }

    /// Parse the text form. The first bad line aborts the parse.
    ///
    /// Keys not mentioned keep their default values.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let (key, value) = raw
                .split_once('=')
                .ok_or(ConfigError::MissingEquals { line })?;
            let key = key.trim();
            let value = value.trim();

            match key {
                KEY_ALLOW_UNDO => config.allow_undo = parse_bool(line, value)?,
                KEY_UNDO_ALLOWANCE => config.undo_allowance = parse_number(line, value)?,
                KEY_CONSIDER_UNDO_WINS => config.consider_undo_wins = parse_bool(line, value)?,
                KEY_CLOSE_IS_LOSS => config.close_is_loss = parse_bool(line, value)?,
                KEY_COUNT_REAL_MOVES => config.count_real_moves = parse_bool(line, value)?,
                _ => {
                    return Err(ConfigError::UnknownKey {
                        line,
                        key: key.to_string(),
                    })
                }
            }
        }

        Ok(config)
    }

    /// Render the canonical text form.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "{KEY_ALLOW_UNDO} = {}\n\
             {KEY_UNDO_ALLOWANCE} = {}\n\
             {KEY_CONSIDER_UNDO_WINS} = {}\n\
             {KEY_CLOSE_IS_LOSS} = {}\n\
             {KEY_COUNT_REAL_MOVES} = {}\n",
            self.allow_undo,
            self.undo_allowance,
            self.consider_undo_wins,
            self.close_is_loss,
            self.count_real_moves,
        )
    }

    /// Load from `path`, writing the defaults if the file is missing or blank.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };

        if text.trim().is_empty() {
            let config = Self::default();
            fs::write(path, config.to_text())?;
            info!("wrote default config to {}", path.display());
            return Ok(config);
        }

        Self::parse(&text)
    }

    /// Load from `path`, falling back to the defaults on any error.
    ///
    /// The error, if any, is handed back so the caller can report it.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load_or_create(path) {
            Ok(config) => (config, None),
            Err(err) => {
                warn!("error parsing config, using defaults: {err}");
                (Self::default(), Some(err))
            }
        }
    }
}

fn parse_bool(line: usize, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            line,
            value: value.to_string(),
        }),
    }
}

fn parse_number(line: usize, value: &str) -> Result<u8, ConfigError> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| ConfigError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.allow_undo);
        assert_eq!(config.undo_allowance, 1);
        assert!(!config.consider_undo_wins);
        assert!(!config.close_is_loss);
        assert!(config.count_real_moves);
    }

    #[test]
    fn test_builder_pattern() {
        let config = Config::default()
            .with_undo(false)
            .with_undo_allowance(3)
            .with_close_is_loss(true);

        assert!(!config.allow_undo);
        assert_eq!(config.undo_allowance, 3);
        assert!(config.close_is_loss);
    }

    #[test]
    fn test_parse_full() {
        let text = "\
allow_undo = false
number_of_consecutive_undos_without_counting_as_undo_used = 7

consider_undo_used_wins_in_statistic=true
   closing_running_game_counts_as_loss   =   true
count_real_moves = false
";
        let config = Config::parse(text).unwrap();
        assert_eq!(
            config,
            Config {
                allow_undo: false,
                undo_allowance: 7,
                consider_undo_wins: true,
                close_is_loss: true,
                count_real_moves: false,
            }
        );
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = Config::parse("count_real_moves = false\n").unwrap();
        assert!(!config.count_real_moves);
        assert_eq!(config.undo_allowance, 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Config::parse("allow_undo true"),
            Err(ConfigError::MissingEquals { line: 1 })
        ));
        assert!(matches!(
            Config::parse("\nspeed = 3"),
            Err(ConfigError::UnknownKey { line: 2, .. })
        ));
        assert!(matches!(
            Config::parse("allow_undo = yes"),
            Err(ConfigError::InvalidBool { .. })
        ));
        assert!(matches!(
            Config::parse("number_of_consecutive_undos_without_counting_as_undo_used = 256"),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Config::parse("number_of_consecutive_undos_without_counting_as_undo_used = -1"),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Config::parse("number_of_consecutive_undos_without_counting_as_undo_used = x"),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_text_round_trip() {
        let config = Config::default().with_undo_allowance(255).with_real_moves(false);
        assert_eq!(Config::parse(&config.to_text()).unwrap(), config);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let path = std::env::temp_dir().join(format!("cellar-config-{}.txt", std::process::id()));
        let _ = fs::remove_file(&path);

        let config = Config::load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(Config::parse(&written).unwrap(), Config::default());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_or_create_fills_blank_file() {
        let path = std::env::temp_dir().join(format!("cellar-config-blank-{}.txt", std::process::id()));
        fs::write(&path, "  \n\t\n\n").unwrap();

        let config = Config::load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), Config::default().to_text());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_or_default_reports_error() {
        let path = std::env::temp_dir().join(format!("cellar-config-bad-{}.txt", std::process::id()));
        fs::write(&path, "allow_undo = maybe\n").unwrap();

        let (config, err) = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(err, Some(ConfigError::InvalidBool { line: 1, .. })));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_serialization() {
        let config = Config::default().with_undo_allowance(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
