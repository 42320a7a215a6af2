//! Engine configuration: camp grouping rules and elite thresholds
use crate::camp::{CampRules, RoleTableClassifier};
use crate::channel::{ChannelMap, SeriesChannel};
use crate::constants::{
    ELITE_DEATH, ELITE_LOSS, ELITE_NO_WOLF, ELITE_SOLO, ELITE_SURVIVAL, ELITE_VILLAGER,
    ELITE_WIN, ELITE_WOLF, LOG_TARGET_CONFIG,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised when series configuration invariants are violated.
#[derive(Debug, Error)]
pub enum SeriesConfigError {
    #[error("series config JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("elite threshold for {channel} must be at least 1")]
    ZeroThreshold { channel: SeriesChannel },
    #[error("role {role:?} is listed in more than one camp table")]
    OverlappingRole { role: String },
}

/// Minimum best length for a player to count as elite on a channel.
///
/// Wolf and solo games are rarer per player, so their defaults are lower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EliteThresholds(pub ChannelMap<u32>);

impl EliteThresholds {
    #[must_use]
    pub const fn default_for(channel: SeriesChannel) -> u32 {
        match channel {
            SeriesChannel::Villager => ELITE_VILLAGER,
            SeriesChannel::Wolf => ELITE_WOLF,
            SeriesChannel::NoWolf => ELITE_NO_WOLF,
            SeriesChannel::Solo => ELITE_SOLO,
            SeriesChannel::Win => ELITE_WIN,
            SeriesChannel::Loss => ELITE_LOSS,
            SeriesChannel::Death => ELITE_DEATH,
            SeriesChannel::Survival => ELITE_SURVIVAL,
        }
    }

    #[must_use]
    pub fn get(&self, channel: SeriesChannel) -> u32 {
        self.0[channel]
    }

    #[must_use]
    pub fn with(mut self, channel: SeriesChannel, threshold: u32) -> Self {
        self.0[channel] = threshold;
        self
    }
}

impl Default for EliteThresholds {
    fn default() -> Self {
        Self(ChannelMap::from_fn(Self::default_for))
    }
}

impl<'de> Deserialize<'de> for EliteThresholds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = BTreeMap::<SeriesChannel, u32>::deserialize(deserializer)?;
        Ok(overrides
            .into_iter()
            .fold(Self::default(), |thresholds, (channel, value)| {
                thresholds.with(channel, value)
            }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SeriesConfig {
    #[serde(default)]
    pub camp: CampRules,
    #[serde(default)]
    pub thresholds: EliteThresholds,
}

impl SeriesConfig {
    /// Load and validate configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or the configuration is invalid.
    pub fn from_json(json: &str) -> Result<Self, SeriesConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            target: LOG_TARGET_CONFIG,
            "loaded series config ({} wolf roles, {} traitor roles, {} villager roles)",
            config.camp.wolf_roles.len(),
            config.camp.traitor_roles.len(),
            config.camp.villager_roles.len(),
        );
        Ok(config)
    }

    /// Check configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero elite threshold or a role listed in two camp tables.
    pub fn validate(&self) -> Result<(), SeriesConfigError> {
        if let Some((channel, _)) = self.thresholds.0.iter().find(|(_, value)| **value == 0) {
            return Err(SeriesConfigError::ZeroThreshold { channel });
        }
        if let Some(role) = self.camp.overlapping_roles().into_iter().next() {
            return Err(SeriesConfigError::OverlappingRole { role });
        }
        Ok(())
    }

    #[must_use]
    pub fn classifier(&self) -> RoleTableClassifier {
        RoleTableClassifier::new(&self.camp)
    }
}
