//! # Configuration Management Module
//!
//! Loads and validates the TOML configuration that drives a riddlereef game.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - Game name, welcome text and player roster
//! - [`MatchSettings`] - Answer matcher strictness (`[matcher]`)
//! - [`ContentConfig`] - Optional riddle / room file overrides
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use riddlereef::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Config::create_default("config.toml").await?;
//!     let config = Config::load("config.toml").await?;
//!     println!("Threshold: {}", config.matcher.threshold);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! name = "Reef Town Riddles"
//! players = ["Coral", "Finley", "Bubbles", "Zippy"]
//!
//! [matcher]
//! threshold = 0.8
//! articles = ["a", "an", "the"]
//!
//! [content]
//! # riddles_file = "data/riddles.json"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section is optional; missing keys fall back to the defaults above.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::answer::{AnswerMatcher, MatchSettings};
use crate::game::seed_loader::{builtin_rooms, load_rooms_from_json};
use crate::game::{GameState, RiddleTable};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub matcher: MatchSettings,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_game_name")]
    pub name: String,
    #[serde(default)]
    pub welcome_message: String,
    /// Display names; player ids are assigned `1..=n` in this order.
    #[serde(default = "default_players")]
    pub players: Vec<String>,
    /// Print the similarity score after a wrong answer.
    #[serde(default)]
    pub show_scores: bool,
}

fn default_game_name() -> String {
    "Reef Town Riddles".to_string()
}

fn default_players() -> Vec<String> {
    ["Coral", "Finley", "Bubbles", "Zippy"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: default_game_name(),
            welcome_message: "Welcome to Reef Town! Solve a riddle in every shop.".to_string(),
            players: default_players(),
            show_scores: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// JSON riddle table; the embedded table is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riddles_file: Option<String>,
    /// JSON room list; the embedded map is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_toml_str(&content).map_err(|e| anyhow!("Invalid config file {}: {}", path, e))
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.matcher.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            bail!("matcher.threshold must be within 0.0..=1.0, got {}", threshold);
        }
        for article in &self.matcher.articles {
            if article.is_empty() || !article.chars().all(|c| c.is_ascii_lowercase()) {
                bail!(
                    "matcher.articles entries must be lowercase ascii words, got {:?}",
                    article
                );
            }
        }
        if self.game.players.is_empty() {
            bail!("game.players must name at least one player");
        }
        if self.game.players.iter().any(|p| p.trim().is_empty()) {
            bail!("game.players contains a blank name");
        }
        Ok(())
    }

    pub fn matcher(&self) -> AnswerMatcher {
        AnswerMatcher::new(self.matcher.clone())
    }

    /// Riddle table from `content.riddles_file`, or the embedded one.
    pub fn riddle_table(&self) -> Result<RiddleTable> {
        let table = match &self.content.riddles_file {
            Some(path) => RiddleTable::load(path)?,
            None => RiddleTable::builtin()?,
        };
        Ok(table)
    }

    /// Fresh game state with the configured roster and room map.
    pub fn new_game(&self) -> Result<GameState> {
        let rooms = match &self.content.rooms_file {
            Some(path) => load_rooms_from_json(path)?,
            None => builtin_rooms()?,
        };
        Ok(GameState::with_player_names(
            self.game.players.as_slice(),
            rooms,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::from_toml_str("").expect("parse");
        assert_eq!(config.matcher, MatchSettings::default());
        assert_eq!(config.game.players.len(), 4);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn matcher_section_overrides() {
        let config = Config::from_toml_str(
            r#"
            [matcher]
            threshold = 0.6
            articles = ["the"]
            "#,
        )
        .expect("parse");
        assert_eq!(config.matcher.threshold, 0.6);
        assert_eq!(config.matcher.articles, vec!["the"]);
        assert!(config.matcher().matches("mackerell", "mackerel"));
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        let err = Config::from_toml_str("[matcher]\nthreshold = 1.5").unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn uppercase_article_rejected() {
        assert!(Config::from_toml_str("[matcher]\narticles = [\"The\"]").is_err());
    }

    #[test]
    fn empty_roster_rejected() {
        assert!(Config::from_toml_str("[game]\nplayers = []").is_err());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");
        let back = Config::from_toml_str(&text).expect("parse");
        assert_eq!(back.game.name, Config::default().game.name);
        assert_eq!(back.matcher, MatchSettings::default());
    }

    #[test]
    fn unknown_level_falls_back() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
        let logging = LoggingConfig {
            level: "debug".to_string(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn new_game_uses_roster_and_builtin_rooms() {
        let config = Config::default();
        let state = config.new_game().expect("game");
        assert_eq!(state.players()[0].name, "Coral");
        assert_eq!(state.players()[3].id, "4");
        assert!(state.find_room("gambling-den").is_some());
        assert_eq!(config.riddle_table().expect("table").len(), 12);
    }
}
