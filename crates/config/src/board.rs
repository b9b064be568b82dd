//! Board startup settings.

use serde::{Deserialize, Serialize};

/// How new card and column ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Counters continuing after the highest id on the board.
    #[default]
    Sequential,
    /// Milliseconds since the Unix epoch, bumped to stay strictly increasing.
    Clock,
}

/// Settings for the board the application starts with.
///
/// # Examples
///
/// ```
/// use quadro_config::{BoardConfig, IdStrategy};
///
/// let config = BoardConfig::default();
/// assert!(config.sample_cards);
/// assert_eq!(config.ids, IdStrategy::Sequential);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Whether the seeded columns start with the four sample cards.
    #[serde(default = "default_sample_cards")]
    pub sample_cards: bool,

    /// Id generation strategy.
    #[serde(default)]
    pub ids: IdStrategy,
}

fn default_sample_cards() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            sample_cards: default_sample_cards(),
            ids: IdStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_strategy_uses_snake_case() {
        let json = serde_json::to_string(&IdStrategy::Clock).unwrap();
        assert_eq!(json, r#""clock""#);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"ids": "clock"}"#).unwrap();
        assert!(config.sample_cards);
        assert_eq!(config.ids, IdStrategy::Clock);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let result: serde_json::Result<BoardConfig> = serde_json::from_str(r#"{"ids": "uuid"}"#);
        assert!(result.is_err());
    }
}
