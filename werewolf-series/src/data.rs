use crate::camp::Camp;
use crate::constants::LOG_TARGET_LOAD;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Sequence reference of a game. Ordering comes from the log, never from this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One player's part in a single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Participation {
    /// Stable account identifier, when the log carries one
    #[serde(default)]
    pub player_id: Option<String>,
    /// Display name used in this game
    #[serde(default)]
    pub player_name: String,
    /// Camp already resolved upstream; takes precedence over `role`
    #[serde(default, deserialize_with = "lenient_camp")]
    pub camp: Option<Camp>,
    /// Literal role name as written in the log
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub lover: bool,
    #[serde(default)]
    pub victorious: bool,
    /// True whenever the player died during the game, whatever the cause
    #[serde(default)]
    pub died: bool,
}

/// Unknown camp values become `None` so the role tables or the Villager
/// default decide, instead of failing the whole log.
fn lenient_camp<'de, D>(deserializer: D) -> Result<Option<Camp>, D::Error>
where
    D: Deserializer<'de>,
{
    let camp = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(label) => {
            let camp = Camp::from_label(&label);
            if camp.is_none() {
                log::warn!(target: LOG_TARGET_LOAD, "ignoring unknown camp {label:?}");
            }
            camp
        }
        other => {
            log::warn!(target: LOG_TARGET_LOAD, "ignoring non-text camp {other}");
            None
        }
    };
    Ok(camp)
}

impl Participation {
    #[must_use]
    pub fn named(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    #[must_use]
    pub fn with_camp(mut self, camp: Camp) -> Self {
        self.camp = Some(camp);
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn as_lover(mut self) -> Self {
        self.lover = true;
        self
    }

    #[must_use]
    pub fn victorious(mut self, victorious: bool) -> Self {
        self.victorious = victorious;
        self
    }

    #[must_use]
    pub fn died(mut self, died: bool) -> Self {
        self.died = died;
        self
    }
}

/// A finished game with every participation it recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    /// Display date, reported verbatim
    #[serde(default)]
    pub date: String,
    #[serde(default, alias = "players")]
    pub participations: Vec<Participation>,
}

impl GameRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: GameId::new(id),
            date: date.into(),
            participations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_participation(mut self, participation: Participation) -> Self {
        self.participations.push(participation);
        self
    }
}

/// Errors raised while loading a game log.
#[derive(Debug, Error)]
pub enum GameLogError {
    #[error("game log JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("game {id} appears more than once in the log")]
    DuplicateGame { id: GameId },
}

/// Chronologically ordered game log as delivered by the retrieval layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameLog {
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl GameLog {
    #[must_use]
    pub const fn empty() -> Self {
        Self { games: Vec::new() }
    }

    #[must_use]
    pub const fn from_games(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    /// Load a game log from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a game id is repeated.
    pub fn from_json(json: &str) -> Result<Self, GameLogError> {
        let log: Self = serde_json::from_str(json)?;
        let mut seen = HashSet::with_capacity(log.games.len());
        for game in &log.games {
            if !seen.insert(&game.id) {
                return Err(GameLogError::DuplicateGame {
                    id: game.id.clone(),
                });
            }
        }
        Ok(log)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[GameRecord] {
        &self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_log_from_json_applies_defaults() {
        let json = r#"{
            "games": [
                {
                    "id": "G1",
                    "date": "2024-03-01",
                    "players": [
                        { "player_name": "Ana", "role": "Loup", "victorious": true },
                        { "player_id": "u-2", "player_name": "Bo", "camp": "villager", "died": true }
                    ]
                }
            ]
        }"#;

        let log = GameLog::from_json(json).unwrap();
        assert_eq!(log.len(), 1);
        let game = &log.games[0];
        assert_eq!(game.id.as_str(), "G1");
        assert_eq!(game.participations.len(), 2);
        assert_eq!(game.participations[0].role.as_deref(), Some("Loup"));
        assert!(game.participations[0].victorious);
        assert!(!game.participations[0].died);
        assert_eq!(game.participations[1].camp, Some(Camp::Villager));
        assert_eq!(game.participations[1].player_id.as_deref(), Some("u-2"));
    }

    #[test]
    fn unknown_camps_do_not_sink_the_log() {
        let json = r#"{
            "games": [
                { "id": "G1", "date": "d1", "players": [
                    { "player_name": "Ana", "camp": "Villageois", "role": "Loup" },
                    { "player_name": "Bo", "camp": "WOLF" },
                    { "player_name": "Cyd", "camp": 7 }
                ] },
                { "id": "G2", "date": "d2", "players": [
                    { "player_name": "Ana", "camp": "wolf" },
                    { "player_name": "Cyd", "camp": null }
                ] }
            ]
        }"#;

        let log = GameLog::from_json(json).unwrap();
        assert_eq!(log.len(), 2);
        let first = &log.games[0].participations;
        assert_eq!(first[0].camp, None);
        assert_eq!(first[1].camp, Some(Camp::Wolf));
        assert_eq!(first[2].camp, None);

        let report = crate::compute_series_report(log.as_slice()).unwrap();
        assert_eq!(report.total_games_analyzed, 2);
        let ana = crate::PlayerKey::new("ana");
        let wolf = report.best_for(crate::SeriesChannel::Wolf, &ana).unwrap();
        assert_eq!(wolf.series_length, 2);
        let cyd = crate::PlayerKey::new("cyd");
        let villager = report.best_for(crate::SeriesChannel::Villager, &cyd).unwrap();
        assert_eq!(villager.series_length, 2);
    }

    #[test]
    fn game_log_rejects_repeated_ids() {
        let json = r#"{ "games": [ { "id": "G1" }, { "id": "G1" } ] }"#;
        let err = GameLog::from_json(json).unwrap_err();
        assert!(matches!(err, GameLogError::DuplicateGame { ref id } if id.as_str() == "G1"));
    }

    #[test]
    fn game_log_reports_parse_errors() {
        let err = GameLog::from_json("{ \"games\": 3 }").unwrap_err();
        assert!(matches!(err, GameLogError::Parse(_)));
        assert!(GameLog::from_json("{}").unwrap().is_empty());
    }
}
