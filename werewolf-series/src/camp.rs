//! Camp classification for participations
use crate::constants::{
    DEFAULT_TRAITOR_ROLES, DEFAULT_VILLAGER_ROLES, DEFAULT_WOLF_ROLES, LOVERS_ROLE,
};
use crate::data::Participation;
use serde::{Deserialize, Serialize};

/// High-level allegiance of a player in one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Camp {
    Villager,
    Wolf,
    /// Solo and special roles that play for neither main camp
    Other,
}

impl Camp {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Villager => "Villager",
            Self::Wolf => "Wolf",
            Self::Other => "Other",
        }
    }

    /// Parse a camp name case-insensitively, `None` for anything unrecognised.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "villager" => Some(Self::Villager),
            "wolf" => Some(Self::Wolf),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Camp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Camp resolved for a single participation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampAssignment {
    pub camp: Camp,
    /// Literal role label, used to key the solo channel tally
    pub role: String,
}

impl CampAssignment {
    #[must_use]
    pub fn new(camp: Camp, role: impl Into<String>) -> Self {
        Self {
            camp,
            role: role.into(),
        }
    }
}

/// Maps a participation to its camp.
///
/// Returning `None` means the camp could not be resolved; the tracker then
/// falls back to [`Camp::Villager`].
pub trait CampClassifier {
    fn classify(&self, participation: &Participation) -> Option<CampAssignment>;
}

impl<F> CampClassifier for F
where
    F: Fn(&Participation) -> Option<CampAssignment>,
{
    fn classify(&self, participation: &Participation) -> Option<CampAssignment> {
        self(participation)
    }
}

/// Grouping rules for roles that do not map to a camp one-to-one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampRules {
    #[serde(default = "CampRules::default_wolf_roles")]
    pub wolf_roles: Vec<String>,
    #[serde(default = "CampRules::default_traitor_roles")]
    pub traitor_roles: Vec<String>,
    #[serde(default = "CampRules::default_villager_roles")]
    pub villager_roles: Vec<String>,
    /// Traitors count as wolves; otherwise they play the `Other` camp
    #[serde(default = "CampRules::default_enabled")]
    pub traitor_joins_wolves: bool,
    /// Lovers are folded into the `Other` camp under a shared role label
    #[serde(default = "CampRules::default_enabled")]
    pub lovers_form_own_camp: bool,
}

impl CampRules {
    fn default_wolf_roles() -> Vec<String> {
        DEFAULT_WOLF_ROLES.iter().map(ToString::to_string).collect()
    }

    fn default_traitor_roles() -> Vec<String> {
        DEFAULT_TRAITOR_ROLES.iter().map(ToString::to_string).collect()
    }

    fn default_villager_roles() -> Vec<String> {
        DEFAULT_VILLAGER_ROLES
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    const fn default_enabled() -> bool {
        true
    }

    /// Role names listed in more than one table, in table order.
    #[must_use]
    pub fn overlapping_roles(&self) -> Vec<String> {
        let tables = [&self.wolf_roles, &self.traitor_roles, &self.villager_roles];
        let mut overlaps = Vec::new();
        for (idx, table) in tables.iter().enumerate() {
            for role in table.iter() {
                let key = normalize_role(role);
                let clash = tables[idx + 1..]
                    .iter()
                    .any(|other| other.iter().any(|r| normalize_role(r) == key));
                if clash && !overlaps.contains(role) {
                    overlaps.push(role.clone());
                }
            }
        }
        overlaps
    }
}

impl Default for CampRules {
    fn default() -> Self {
        Self {
            wolf_roles: Self::default_wolf_roles(),
            traitor_roles: Self::default_traitor_roles(),
            villager_roles: Self::default_villager_roles(),
            traitor_joins_wolves: true,
            lovers_form_own_camp: true,
        }
    }
}

fn normalize_role(role: &str) -> String {
    role.trim().to_lowercase()
}

fn normalize_table(table: &[String]) -> Vec<String> {
    table.iter().map(|r| normalize_role(r)).collect()
}

/// Table-driven classifier built from [`CampRules`].
///
/// Explicit camps win over role names. Any non-empty role missing from
/// every table is a solo role and lands in [`Camp::Other`].
#[derive(Debug, Clone)]
pub struct RoleTableClassifier {
    wolf: Vec<String>,
    traitor: Vec<String>,
    villager: Vec<String>,
    traitor_joins_wolves: bool,
    lovers_form_own_camp: bool,
}

impl RoleTableClassifier {
    #[must_use]
    pub fn new(rules: &CampRules) -> Self {
        Self {
            wolf: normalize_table(&rules.wolf_roles),
            traitor: normalize_table(&rules.traitor_roles),
            villager: normalize_table(&rules.villager_roles),
            traitor_joins_wolves: rules.traitor_joins_wolves,
            lovers_form_own_camp: rules.lovers_form_own_camp,
        }
    }

    fn camp_for_role(&self, role: &str) -> Camp {
        let key = normalize_role(role);
        if self.wolf.contains(&key) {
            Camp::Wolf
        } else if self.traitor.contains(&key) {
            if self.traitor_joins_wolves {
                Camp::Wolf
            } else {
                Camp::Other
            }
        } else if self.villager.contains(&key) {
            Camp::Villager
        } else {
            Camp::Other
        }
    }
}

impl Default for RoleTableClassifier {
    fn default() -> Self {
        Self::new(&CampRules::default())
    }
}

impl CampClassifier for RoleTableClassifier {
    fn classify(&self, participation: &Participation) -> Option<CampAssignment> {
        if participation.lover && self.lovers_form_own_camp {
            return Some(CampAssignment::new(Camp::Other, LOVERS_ROLE));
        }
        let role = participation
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty());
        match (participation.camp, role) {
            (Some(camp), Some(role)) => Some(CampAssignment::new(camp, role)),
            (Some(camp), None) => Some(CampAssignment::new(camp, camp.label())),
            (None, Some(role)) => Some(CampAssignment::new(self.camp_for_role(role), role)),
            (None, None) => None,
        }
    }
}
