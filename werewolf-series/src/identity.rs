//! Player identity resolution
//!
//! A player keeps one [`PlayerKey`] across display-name changes. The engine
//! only ever consumes an [`IdentityResolver`]; name history bookkeeping
//! belongs to whoever builds the resolver.
use crate::data::Participation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable identity key for a player
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerKey(pub String);

impl PlayerKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlayer {
    pub key: PlayerKey,
    /// Name the player used in this participation
    pub display_name: String,
}

pub trait IdentityResolver {
    /// Resolve the identity behind a participation, `None` when it cannot be identified.
    fn resolve(&self, participation: &Participation) -> Option<ResolvedPlayer>;
}

impl<F> IdentityResolver for F
where
    F: Fn(&Participation) -> Option<ResolvedPlayer>,
{
    fn resolve(&self, participation: &Participation) -> Option<ResolvedPlayer> {
        self(participation)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Keys players by `player_id`, falling back to the case-folded display name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticipantResolver;

impl IdentityResolver for ParticipantResolver {
    fn resolve(&self, participation: &Participation) -> Option<ResolvedPlayer> {
        let name = participation.player_name.trim();
        let id = participation
            .player_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());
        let key = match id {
            Some(id) => PlayerKey::new(id),
            None if !name.is_empty() => PlayerKey::new(name_key(name)),
            None => return None,
        };
        let display_name = if name.is_empty() {
            key.as_str().to_string()
        } else {
            name.to_string()
        };
        Some(ResolvedPlayer { key, display_name })
    }
}

/// Folds known former names onto a canonical identity before delegating.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver<R = ParticipantResolver> {
    aliases: HashMap<String, PlayerKey>,
    inner: R,
}

impl AliasResolver<ParticipantResolver> {
    /// Build from `(former name, canonical key)` pairs.
    #[must_use]
    pub fn from_pairs<I, A, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, K)>,
        A: AsRef<str>,
        K: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(ParticipantResolver), |resolver, (alias, key)| {
                resolver.with_alias(alias.as_ref(), key)
            })
    }
}

impl<R> AliasResolver<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            aliases: HashMap::new(),
            inner,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str, key: impl Into<String>) -> Self {
        self.aliases.insert(name_key(alias), PlayerKey::new(key));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<R: IdentityResolver> IdentityResolver for AliasResolver<R> {
    fn resolve(&self, participation: &Participation) -> Option<ResolvedPlayer> {
        let mut resolved = self.inner.resolve(participation)?;
        if let Some(canonical) = self.aliases.get(&name_key(&participation.player_name)) {
            resolved.key = canonical.clone();
        }
        Some(resolved)
    }
}
