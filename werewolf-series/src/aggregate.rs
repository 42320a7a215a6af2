//! Population-level numbers per channel
use crate::channel::{ChannelMap, SeriesChannel};
use crate::config::EliteThresholds;
use crate::numbers::rounded_mean;
use crate::tracker::PlayerSeries;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ChannelStats {
    /// Mean best length over every known player, zeros included, one decimal
    pub average_best: f64,
    pub elite_threshold: u32,
    /// Players whose best length reaches the elite threshold
    pub elite_count: usize,
    /// Players with a streak above zero at the end of the log
    pub active_count: usize,
    /// Players whose personal record is still running
    pub ongoing_count: usize,
}

/// Average and elite count for a population of best lengths.
#[must_use]
pub fn average_and_elite(best_lengths: &[u32], threshold: u32) -> (f64, usize) {
    let total = best_lengths.iter().map(|&len| u64::from(len)).sum();
    let elite = best_lengths.iter().filter(|&&len| len >= threshold).count();
    (rounded_mean(total, best_lengths.len()), elite)
}

#[must_use]
pub fn compute_channel_stats(
    players: &[PlayerSeries],
    channel: SeriesChannel,
    threshold: u32,
) -> ChannelStats {
    let best_lengths: Vec<u32> = players
        .iter()
        .map(|player| player.records.best_length(channel))
        .collect();
    let (average_best, elite_count) = average_and_elite(&best_lengths, threshold);
    ChannelStats {
        average_best,
        elite_threshold: threshold,
        elite_count,
        active_count: players
            .iter()
            .filter(|player| player.streaks[channel].is_active())
            .count(),
        ongoing_count: players
            .iter()
            .filter(|player| {
                player
                    .records
                    .best(channel)
                    .is_some_and(|record| record.is_ongoing)
            })
            .count(),
    }
}

#[must_use]
pub fn compute_all_stats(
    players: &[PlayerSeries],
    thresholds: &EliteThresholds,
) -> ChannelMap<ChannelStats> {
    ChannelMap::from_fn(|channel| compute_channel_stats(players, channel, thresholds.get(channel)))
}
