//! Best-ever series records
use crate::channel::{ChannelMap, SeriesChannel};
use crate::data::GameId;
use crate::identity::PlayerKey;
use crate::tracker::StreakState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Games played per camp (or per role, for the solo channel) during a series
pub type CampTally = BTreeMap<String, u32>;

/// Snapshot of one series for one player and channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub player_key: PlayerKey,
    pub player_name: String,
    pub series_length: u32,
    pub start_game: GameId,
    pub end_game: GameId,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camp_counts: Option<CampTally>,
    /// Still running at the end of the analyzed window
    pub is_ongoing: bool,
    pub games: Vec<GameId>,
}

impl SeriesRecord {
    /// Copy the live streak into an owned record. `None` for an empty streak.
    #[must_use]
    pub fn snapshot(
        player_key: &PlayerKey,
        player_name: &str,
        channel: SeriesChannel,
        streak: &StreakState,
        is_ongoing: bool,
    ) -> Option<Self> {
        let start_game = streak.games.first()?.clone();
        let end_game = streak.games.last()?.clone();
        Some(Self {
            player_key: player_key.clone(),
            player_name: player_name.to_string(),
            series_length: streak.length,
            start_game,
            end_game,
            start_date: streak.start_date.clone(),
            end_date: streak.end_date.clone(),
            camp_counts: channel
                .reports_composition()
                .then(|| streak.tally.clone()),
            is_ongoing,
            games: streak.games.clone(),
        })
    }
}

/// Best record per channel for a single player.
///
/// A streak replaces the stored record when it is at least as long, so on a
/// tie the most recent series is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordBook {
    best: ChannelMap<Option<SeriesRecord>>,
}

impl RecordBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare a just-advanced streak against the stored best, returning true when it replaced it.
    pub fn observe(
        &mut self,
        channel: SeriesChannel,
        player_key: &PlayerKey,
        player_name: &str,
        streak: &StreakState,
    ) -> bool {
        let slot = &mut self.best[channel];
        let beats = slot
            .as_ref()
            .is_none_or(|best| streak.length >= best.series_length);
        if !beats {
            return false;
        }
        match SeriesRecord::snapshot(player_key, player_name, channel, streak, false) {
            Some(record) => {
                *slot = Some(record);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn best(&self, channel: SeriesChannel) -> Option<&SeriesRecord> {
        self.best[channel].as_ref()
    }

    /// Best length for the channel, 0 when the player never had a series there.
    #[must_use]
    pub fn best_length(&self, channel: SeriesChannel) -> u32 {
        self.best(channel).map_or(0, |record| record.series_length)
    }

    /// Flag the stored best as ongoing when the live streak still matches it.
    pub fn mark_ongoing(&mut self, channel: SeriesChannel, current_length: u32) -> bool {
        match self.best[channel].as_mut() {
            Some(record) if current_length > 0 && record.series_length == current_length => {
                record.is_ongoing = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn take(&mut self, channel: SeriesChannel) -> Option<SeriesRecord> {
        self.best[channel].take()
    }
}
