//! Report assembly
use crate::active::{collect_active, flag_ongoing};
use crate::aggregate::{ChannelStats, compute_all_stats};
use crate::channel::{ChannelMap, SeriesChannel};
use crate::config::EliteThresholds;
use crate::identity::PlayerKey;
use crate::record::SeriesRecord;
use crate::tracker::SeriesTracker;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Everything reported for one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChannelReport {
    /// Best series of every player who had one, longest first
    pub best: Vec<SeriesRecord>,
    /// Streaks still running, longest first
    pub active: Vec<SeriesRecord>,
    pub stats: ChannelStats,
}

/// Series analytics for a whole game log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesReport {
    pub channels: ChannelMap<ChannelReport>,
    pub total_games_analyzed: usize,
    pub total_players_count: usize,
}

impl SeriesReport {
    #[must_use]
    pub fn channel(&self, channel: SeriesChannel) -> &ChannelReport {
        &self.channels[channel]
    }

    /// Best record of one player on a channel, if they ever had a series there.
    #[must_use]
    pub fn best_for(&self, channel: SeriesChannel, player: &PlayerKey) -> Option<&SeriesRecord> {
        self.channels[channel]
            .best
            .iter()
            .find(|record| &record.player_key == player)
    }

    #[must_use]
    pub fn active_for(&self, channel: SeriesChannel, player: &PlayerKey) -> Option<&SeriesRecord> {
        self.channels[channel]
            .active
            .iter()
            .find(|record| &record.player_key == player)
    }
}

/// Longest first. The sort is stable, so equal lengths keep first-seen player order.
pub fn sort_by_length(records: &mut [SeriesRecord]) {
    records.sort_by_key(|record| Reverse(record.series_length));
}

/// Turn a finished replay into the report.
#[must_use]
pub fn assemble_report(mut tracker: SeriesTracker, thresholds: &EliteThresholds) -> SeriesReport {
    let total_games_analyzed = tracker.games_replayed();
    let players = tracker.players_mut();
    flag_ongoing(players);

    let mut active_lists = collect_active(players);
    let stats = compute_all_stats(players, thresholds);

    let mut best_lists: ChannelMap<Vec<SeriesRecord>> = ChannelMap::default();
    for player in players.iter_mut() {
        for channel in SeriesChannel::ALL {
            if let Some(mut record) = player.records.take(channel) {
                record.player_name.clone_from(&player.display_name);
                best_lists[channel].push(record);
            }
        }
    }

    let channels = ChannelMap::from_fn(|channel| {
        let mut best = std::mem::take(&mut best_lists[channel]);
        let mut active = std::mem::take(&mut active_lists[channel]);
        sort_by_length(&mut best);
        sort_by_length(&mut active);
        ChannelReport {
            best,
            active,
            stats: stats[channel],
        }
    });

    SeriesReport {
        channels,
        total_games_analyzed,
        total_players_count: players.len(),
    }
}
