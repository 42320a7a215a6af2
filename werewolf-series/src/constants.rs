//! Centralized defaults for the series engine.
//!
//! Elite thresholds and role tables live here so that the default
//! behaviour of the engine can only change through reviewed code; callers
//! that need other values pass a [`crate::SeriesConfig`].

// Logging targets ---------------------------------------------------------
pub(crate) const LOG_TARGET_REPLAY: &str = "werewolf_series::replay";
pub(crate) const LOG_TARGET_CONFIG: &str = "werewolf_series::config";
pub(crate) const LOG_TARGET_LOAD: &str = "werewolf_series::load";

// Elite thresholds --------------------------------------------------------
pub(crate) const ELITE_VILLAGER: u32 = 5;
pub(crate) const ELITE_WOLF: u32 = 3;
pub(crate) const ELITE_NO_WOLF: u32 = 5;
pub(crate) const ELITE_SOLO: u32 = 3;
pub(crate) const ELITE_WIN: u32 = 5;
pub(crate) const ELITE_LOSS: u32 = 5;
pub(crate) const ELITE_DEATH: u32 = 5;
pub(crate) const ELITE_SURVIVAL: u32 = 5;

// Role tables -------------------------------------------------------------
pub(crate) const DEFAULT_WOLF_ROLES: &[&str] = &["Loup", "Wolf", "Werewolf", "Loup-Garou"];
pub(crate) const DEFAULT_TRAITOR_ROLES: &[&str] = &["Traître", "Traitor"];
pub(crate) const DEFAULT_VILLAGER_ROLES: &[&str] = &[
    "Villageois",
    "Villager",
    "Idiot du village",
    "Village Idiot",
    "Chasseur",
    "Hunter",
    "Voyante",
    "Seer",
    "Sorcière",
    "Witch",
];

/// Role label used for the solo channel when lovers are grouped as their own camp.
pub const LOVERS_ROLE: &str = "Lovers";
