//! Per-player replay of ordered games across every series channel.
//!
//! The tracker walks the game log once, in the order given. For each
//! participation it resolves the player and the camp, then advances or
//! resets the eight channels of that player:
//!
//! | channel  | continues when            | tally key  |
//! |----------|---------------------------|------------|
//! | villager | camp is Villager          | none       |
//! | wolf     | camp is Wolf              | none       |
//! | no_wolf  | camp is not Wolf          | camp       |
//! | solo     | camp is Other             | role label |
//! | win      | victorious                | camp       |
//! | loss     | not victorious            | camp       |
//! | death    | died                      | camp       |
//! | survival | survived                  | camp       |
//!
//! Any game that does not continue a channel resets it to zero. Every
//! advance is reported to the player's [`RecordBook`].

use crate::camp::{Camp, CampAssignment, CampClassifier};
use crate::channel::{ChannelMap, SeriesChannel};
use crate::constants::LOG_TARGET_REPLAY;
use crate::data::{GameId, GameRecord};
use crate::identity::{IdentityResolver, PlayerKey};
use crate::record::{CampTally, RecordBook};
use std::collections::HashMap;

/// Live state of one channel for one player
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreakState {
    pub length: u32,
    /// Games of the running streak, oldest first
    pub games: Vec<GameId>,
    pub start_date: String,
    pub end_date: String,
    pub tally: CampTally,
}

impl StreakState {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.length > 0
    }

    /// Append a game to the running streak.
    pub fn extend(&mut self, game: &GameRecord, tally_key: Option<&str>) {
        if self.length == 0 {
            self.start_date.clone_from(&game.date);
        }
        self.length = self.length.saturating_add(1);
        self.games.push(game.id.clone());
        self.end_date.clone_from(&game.date);
        if let Some(key) = tally_key {
            *self.tally.entry(key.to_string()).or_insert(0) += 1;
        }
    }

    pub fn reset(&mut self) {
        self.length = 0;
        self.games.clear();
        self.start_date.clear();
        self.end_date.clear();
        self.tally.clear();
    }
}

/// What one participation contributes to the channel transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome<'a> {
    pub camp: Camp,
    pub role: &'a str,
    pub victorious: bool,
    pub died: bool,
}

/// Effect of a game on a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<'a> {
    Continue { tally: Option<&'a str> },
    Reset,
}

impl<'a> Transition<'a> {
    const fn continue_if(condition: bool, tally: Option<&'a str>) -> Self {
        if condition {
            Self::Continue { tally }
        } else {
            Self::Reset
        }
    }
}

/// Continuation rule of each channel.
#[must_use]
pub fn transition<'a>(channel: SeriesChannel, outcome: &GameOutcome<'a>) -> Transition<'a> {
    let camp = Some(outcome.camp.label());
    match channel {
        SeriesChannel::Villager => Transition::continue_if(outcome.camp == Camp::Villager, None),
        SeriesChannel::Wolf => Transition::continue_if(outcome.camp == Camp::Wolf, None),
        SeriesChannel::NoWolf => Transition::continue_if(outcome.camp != Camp::Wolf, camp),
        SeriesChannel::Solo => {
            Transition::continue_if(outcome.camp == Camp::Other, Some(outcome.role))
        }
        SeriesChannel::Win => Transition::continue_if(outcome.victorious, camp),
        SeriesChannel::Loss => Transition::continue_if(!outcome.victorious, camp),
        SeriesChannel::Death => Transition::continue_if(outcome.died, camp),
        SeriesChannel::Survival => Transition::continue_if(!outcome.died, camp),
    }
}

/// Everything the replay knows about one identity
#[derive(Debug, Clone)]
pub struct PlayerSeries {
    pub key: PlayerKey,
    /// Most recently observed display name
    pub display_name: String,
    pub games_played: u32,
    pub streaks: ChannelMap<StreakState>,
    pub records: RecordBook,
    last_game_index: Option<usize>,
}

impl PlayerSeries {
    #[must_use]
    pub fn new(key: PlayerKey, display_name: String) -> Self {
        Self {
            key,
            display_name,
            games_played: 0,
            streaks: ChannelMap::default(),
            records: RecordBook::new(),
            last_game_index: None,
        }
    }

    #[must_use]
    pub fn current_length(&self, channel: SeriesChannel) -> u32 {
        self.streaks[channel].length
    }

    /// Advance every channel with the outcome of one game.
    pub fn advance(&mut self, game: &GameRecord, outcome: &GameOutcome<'_>) {
        self.games_played = self.games_played.saturating_add(1);
        for channel in SeriesChannel::ALL {
            let streak = &mut self.streaks[channel];
            match transition(channel, outcome) {
                Transition::Continue { tally } => {
                    streak.extend(game, tally);
                    self.records
                        .observe(channel, &self.key, &self.display_name, streak);
                }
                Transition::Reset => streak.reset(),
            }
        }
    }
}

/// Call-scoped identity to state map built by replaying a game log.
///
/// Players are kept in first-seen order so that every derived list is
/// deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct SeriesTracker {
    index: HashMap<PlayerKey, usize>,
    players: Vec<PlayerSeries>,
    games_replayed: usize,
    skipped_participations: usize,
    defaulted_camps: usize,
}

impl SeriesTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay the whole log in the given order.
    #[must_use]
    pub fn replay<C, R>(games: &[GameRecord], classifier: &C, resolver: &R) -> Self
    where
        C: CampClassifier + ?Sized,
        R: IdentityResolver + ?Sized,
    {
        Self::replay_with(games, classifier, resolver, |_, _| {})
    }

    /// Replay the log, handing the tracker to `after_game` once each game is applied.
    pub fn replay_with<C, R, F>(
        games: &[GameRecord],
        classifier: &C,
        resolver: &R,
        mut after_game: F,
    ) -> Self
    where
        C: CampClassifier + ?Sized,
        R: IdentityResolver + ?Sized,
        F: FnMut(&GameRecord, &Self),
    {
        let mut tracker = Self::new();
        for (game_index, game) in games.iter().enumerate() {
            tracker.apply_game(game_index, game, classifier, resolver);
            after_game(game, &tracker);
        }
        log::debug!(
            target: LOG_TARGET_REPLAY,
            "replayed {} games for {} players ({} participations skipped, {} camps defaulted)",
            tracker.games_replayed,
            tracker.players.len(),
            tracker.skipped_participations,
            tracker.defaulted_camps,
        );
        tracker
    }

    fn apply_game<C, R>(
        &mut self,
        game_index: usize,
        game: &GameRecord,
        classifier: &C,
        resolver: &R,
    ) where
        C: CampClassifier + ?Sized,
        R: IdentityResolver + ?Sized,
    {
        self.games_replayed += 1;
        for participation in &game.participations {
            let Some(player) = resolver.resolve(participation) else {
                log::warn!(
                    target: LOG_TARGET_REPLAY,
                    "game {}: skipping participation without a resolvable player ({:?})",
                    game.id,
                    participation.player_name,
                );
                self.skipped_participations += 1;
                continue;
            };

            let slot = *self.index.entry(player.key.clone()).or_insert_with(|| {
                self.players
                    .push(PlayerSeries::new(player.key.clone(), player.display_name.clone()));
                self.players.len() - 1
            });
            if self.players[slot].last_game_index == Some(game_index) {
                log::warn!(
                    target: LOG_TARGET_REPLAY,
                    "game {}: {} appears twice, ignoring the repeat",
                    game.id,
                    player.key,
                );
                self.skipped_participations += 1;
                continue;
            }

            let assignment = classifier.classify(participation).unwrap_or_else(|| {
                log::warn!(
                    target: LOG_TARGET_REPLAY,
                    "game {}: no camp for {}, counting as {}",
                    game.id,
                    player.display_name,
                    Camp::Villager,
                );
                self.defaulted_camps += 1;
                CampAssignment::new(Camp::Villager, Camp::Villager.label())
            });

            let series = &mut self.players[slot];
            series.last_game_index = Some(game_index);
            series.display_name = player.display_name;

            let outcome = GameOutcome {
                camp: assignment.camp,
                role: &assignment.role,
                victorious: participation.victorious,
                died: participation.died,
            };
            series.advance(game, &outcome);
        }
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerSeries] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut [PlayerSeries] {
        &mut self.players
    }

    #[must_use]
    pub fn player(&self, key: &PlayerKey) -> Option<&PlayerSeries> {
        self.index.get(key).map(|&slot| &self.players[slot])
    }

    #[must_use]
    pub const fn games_replayed(&self) -> usize {
        self.games_replayed
    }

    #[must_use]
    pub const fn skipped_participations(&self) -> usize {
        self.skipped_participations
    }

    #[must_use]
    pub const fn defaulted_camps(&self) -> usize {
        self.defaulted_camps
    }
}
