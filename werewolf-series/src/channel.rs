//! The eight streak channels and fixed per-channel storage
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One independent streak type tracked for every player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesChannel {
    /// Consecutive games in the Villager camp
    Villager,
    /// Consecutive games in the Wolf camp
    Wolf,
    /// Consecutive games in any camp but Wolf
    NoWolf,
    /// Consecutive games on a solo or special role
    Solo,
    Win,
    Loss,
    Death,
    Survival,
}

impl SeriesChannel {
    /// Every channel, in report order.
    pub const ALL: [Self; 8] = [
        Self::Villager,
        Self::Wolf,
        Self::NoWolf,
        Self::Solo,
        Self::Win,
        Self::Loss,
        Self::Death,
        Self::Survival,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Villager => "villager",
            Self::Wolf => "wolf",
            Self::NoWolf => "no_wolf",
            Self::Solo => "solo",
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Death => "death",
            Self::Survival => "survival",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Villager => "Longest Villager series",
            Self::Wolf => "Longest Wolf series",
            Self::NoWolf => "Longest series without Wolf",
            Self::Solo => "Longest solo-role series",
            Self::Win => "Longest win series",
            Self::Loss => "Longest loss series",
            Self::Death => "Longest death series",
            Self::Survival => "Longest survival series",
        }
    }

    /// Whether records of this channel carry a camp or role breakdown.
    #[must_use]
    pub const fn reports_composition(self) -> bool {
        !matches!(self, Self::Villager | Self::Wolf)
    }
}

impl std::fmt::Display for SeriesChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One value per [`SeriesChannel`], serialized as a channel-keyed object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChannelMap<T> {
    pub villager: T,
    pub wolf: T,
    pub no_wolf: T,
    pub solo: T,
    pub win: T,
    pub loss: T,
    pub death: T,
    pub survival: T,
}

impl<T> ChannelMap<T> {
    pub fn from_fn(mut f: impl FnMut(SeriesChannel) -> T) -> Self {
        Self {
            villager: f(SeriesChannel::Villager),
            wolf: f(SeriesChannel::Wolf),
            no_wolf: f(SeriesChannel::NoWolf),
            solo: f(SeriesChannel::Solo),
            win: f(SeriesChannel::Win),
            loss: f(SeriesChannel::Loss),
            death: f(SeriesChannel::Death),
            survival: f(SeriesChannel::Survival),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeriesChannel, &T)> {
        SeriesChannel::ALL.into_iter().map(move |ch| (ch, &self[ch]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(SeriesChannel, &T) -> U) -> ChannelMap<U> {
        ChannelMap::from_fn(|ch| f(ch, &self[ch]))
    }
}

impl<T> Index<SeriesChannel> for ChannelMap<T> {
    type Output = T;

    fn index(&self, channel: SeriesChannel) -> &T {
        match channel {
            SeriesChannel::Villager => &self.villager,
            SeriesChannel::Wolf => &self.wolf,
            SeriesChannel::NoWolf => &self.no_wolf,
            SeriesChannel::Solo => &self.solo,
            SeriesChannel::Win => &self.win,
            SeriesChannel::Loss => &self.loss,
            SeriesChannel::Death => &self.death,
            SeriesChannel::Survival => &self.survival,
        }
    }
}

impl<T> IndexMut<SeriesChannel> for ChannelMap<T> {
    fn index_mut(&mut self, channel: SeriesChannel) -> &mut T {
        match channel {
            SeriesChannel::Villager => &mut self.villager,
            SeriesChannel::Wolf => &mut self.wolf,
            SeriesChannel::NoWolf => &mut self.no_wolf,
            SeriesChannel::Solo => &mut self.solo,
            SeriesChannel::Win => &mut self.win,
            SeriesChannel::Loss => &mut self.loss,
            SeriesChannel::Death => &mut self.death,
            SeriesChannel::Survival => &mut self.survival,
        }
    }
}
