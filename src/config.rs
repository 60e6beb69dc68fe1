use crate::battle::context::DecisionState;
use crate::battle::state::{BattleSnapshot, BattlerId};
use crate::errors::LoadError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime knobs for the decision runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Seed for the random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Default `tracing` filter directive; `RUST_LOG` still takes precedence.
    pub log_filter: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AiConfig {
    pub fn from_ron_str(content: &str) -> Result<Self, LoadError> {
        parse_ron(content, "<inline>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_ron(path.as_ref())
    }
}

/// One decision to make: the battle as it stands and who is choosing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleFixture {
    pub battler: BattlerId,
    pub snapshot: BattleSnapshot,
    #[serde(default)]
    pub decisions: DecisionState,
}

impl BattleFixture {
    pub fn from_ron_str(content: &str) -> Result<Self, LoadError> {
        parse_ron(content, "<inline>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_ron(path.as_ref())
    }
}

fn parse_ron<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T, LoadError> {
    ron::from_str(content).map_err(|source| LoadError::Parse {
        path: origin.to_string(),
        source,
    })
}

fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    parse_ron(&content, &display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = AiConfig::from_ron_str("(seed: Some(7))").expect("config should parse");
        assert_eq!(
            config,
            AiConfig {
                seed: Some(7),
                log_filter: "info".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_errors_name_their_origin() {
        let err = AiConfig::from_ron_str("(seed: \"seven\")").unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref path, .. } if path == "<inline>"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = AiConfig::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_sample_fixture_parses() {
        let fixture = BattleFixture::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_battle.ron"))
            .expect("sample fixture should parse");
        assert_eq!(fixture.battler, BattlerId::OPPONENT_LEFT);
        assert!(fixture.snapshot.battler(BattlerId::PLAYER_LEFT).is_some());
    }
}
