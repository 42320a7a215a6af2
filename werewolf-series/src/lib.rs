//! Werewolf Series Engine
//!
//! Platform-agnostic streak analytics for werewolf game logs. Given the
//! games in chronological order, the engine replays every participation and
//! reports, for eight channels, each player's longest series, the series
//! still running, and population aggregates.
//!
//! The engine is a pure batch function: it keeps no state between calls and
//! never performs I/O, so independent calls may run in parallel.

pub mod active;
pub mod aggregate;
pub mod camp;
pub mod channel;
pub mod config;
pub mod constants;
pub mod data;
pub mod identity;
pub mod numbers;
pub mod record;
pub mod report;
pub mod tracker;

// Re-export commonly used types
pub use aggregate::{ChannelStats, average_and_elite, compute_channel_stats};
pub use camp::{Camp, CampAssignment, CampClassifier, CampRules, RoleTableClassifier};
pub use channel::{ChannelMap, SeriesChannel};
pub use config::{EliteThresholds, SeriesConfig, SeriesConfigError};
pub use data::{GameId, GameLog, GameLogError, GameRecord, Participation};
pub use identity::{
    AliasResolver, IdentityResolver, ParticipantResolver, PlayerKey, ResolvedPlayer,
};
pub use record::{CampTally, RecordBook, SeriesRecord};
pub use report::{ChannelReport, SeriesReport, assemble_report, sort_by_length};
pub use tracker::{PlayerSeries, SeriesTracker, StreakState};

/// Series engine bound to a camp classifier, an identity resolver and elite thresholds
#[derive(Debug, Clone)]
pub struct SeriesEngine<C = RoleTableClassifier, R = ParticipantResolver>
where
    C: CampClassifier,
    R: IdentityResolver,
{
    classifier: C,
    resolver: R,
    thresholds: EliteThresholds,
}

impl SeriesEngine {
    /// Engine with the default role tables, resolver and thresholds
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self::new(
            RoleTableClassifier::default(),
            ParticipantResolver,
            EliteThresholds::default(),
        )
    }

    /// Create an engine with the default resolver from validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &SeriesConfig) -> Result<Self, SeriesConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.classifier(),
            ParticipantResolver,
            config.thresholds.clone(),
        ))
    }
}

impl Default for SeriesEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl<C, R> SeriesEngine<C, R>
where
    C: CampClassifier,
    R: IdentityResolver,
{
    /// Create a new engine with the provided collaborators
    pub const fn new(classifier: C, resolver: R, thresholds: EliteThresholds) -> Self {
        Self {
            classifier,
            resolver,
            thresholds,
        }
    }

    /// Swap the identity resolver, keeping classifier and thresholds
    pub fn with_resolver<R2: IdentityResolver>(self, resolver: R2) -> SeriesEngine<C, R2> {
        SeriesEngine {
            classifier: self.classifier,
            resolver,
            thresholds: self.thresholds,
        }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &EliteThresholds {
        &self.thresholds
    }

    /// Replay the games without assembling a report
    #[must_use]
    pub fn replay(&self, games: &[GameRecord]) -> SeriesTracker {
        SeriesTracker::replay(games, &self.classifier, &self.resolver)
    }

    /// Compute the series report for games given in chronological order.
    ///
    /// Returns `None` when there are no games, so "nothing to show" stays
    /// distinct from a report full of zeros.
    #[must_use]
    pub fn compute(&self, games: &[GameRecord]) -> Option<SeriesReport> {
        if games.is_empty() {
            log::debug!(target: constants::LOG_TARGET_REPLAY, "no games to analyze");
            return None;
        }
        Some(assemble_report(self.replay(games), &self.thresholds))
    }
}

/// Compute a report with the default rules
#[must_use]
pub fn compute_series_report(games: &[GameRecord]) -> Option<SeriesReport> {
    SeriesEngine::with_default_rules().compute(games)
}
