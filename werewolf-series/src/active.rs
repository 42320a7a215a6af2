//! Streaks still running once the whole log has been replayed
use crate::channel::{ChannelMap, SeriesChannel};
use crate::record::SeriesRecord;
use crate::tracker::PlayerSeries;

/// Snapshot every streak with a length above zero, marked ongoing.
///
/// Players appear in the order they were first seen.
#[must_use]
pub fn collect_active(players: &[PlayerSeries]) -> ChannelMap<Vec<SeriesRecord>> {
    ChannelMap::from_fn(|channel| {
        players
            .iter()
            .filter_map(|player| {
                SeriesRecord::snapshot(
                    &player.key,
                    &player.display_name,
                    channel,
                    &player.streaks[channel],
                    true,
                )
            })
            .collect()
    })
}

/// Flag personal records that are still in progress, returning how many were flagged.
pub fn flag_ongoing(players: &mut [PlayerSeries]) -> usize {
    let mut flagged = 0;
    for player in players.iter_mut() {
        for channel in SeriesChannel::ALL {
            let current = player.streaks[channel].length;
            if player.records.mark_ongoing(channel, current) {
                flagged += 1;
            }
        }
    }
    flagged
}
