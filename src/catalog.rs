use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

pub const CHAMPIONS_LEAGUE_FINAL_TICKET: &str = "CHAMPIONS_LEAGUE_FINAL_TICKET";
pub const KARAOKE_PRO_MICROPHONE: &str = "KARAOKE_PRO_MICROPHONE";
pub const PIRATES_OF_THE_CARRIBEAN_COLLECTION: &str = "PIRATES_OF_THE_CARRIBEAN_COLLECTION";

/// Subscribable content categories. The set is closed; identifiers outside
/// it never match a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Sports,
    Music,
    Movies,
    News,
    Kids,
}

impl Channel {
    /// Maps an arbitrary identifier to a known channel. Unrecognized
    /// identifiers are `None`, never an error.
    pub fn parse(identifier: &str) -> Option<Channel> {
        match identifier {
            "SPORTS" => Some(Channel::Sports),
            "MUSIC" => Some(Channel::Music),
            "MOVIES" => Some(Channel::Movies),
            "NEWS" => Some(Channel::News),
            "KIDS" => Some(Channel::Kids),
            _ => None,
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            Channel::Sports => "SPORTS",
            Channel::Music => "MUSIC",
            Channel::Movies => "MOVIES",
            Channel::News => "NEWS",
            Channel::Kids => "KIDS",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Reward(String);

impl Reward {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Reward {
    fn from(identifier: &str) -> Self {
        Reward::new(identifier)
    }
}

/// Fixed channel-to-rewards table, built once at startup and never mutated.
///
/// Lookup policy on miss: channels absent from the table, and identifiers
/// that do not parse as a known channel, both yield an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardCatalog {
    associations: BTreeMap<Channel, Vec<Reward>>,
}

impl RewardCatalog {
    pub fn new(associations: BTreeMap<Channel, Vec<Reward>>) -> Self {
        Self { associations }
    }

    /// The built-in promotional associations.
    pub fn with_defaults() -> Self {
        let mut associations = BTreeMap::new();
        associations.insert(
            Channel::Sports,
            vec![Reward::new(CHAMPIONS_LEAGUE_FINAL_TICKET)],
        );
        associations.insert(Channel::Music, vec![Reward::new(KARAOKE_PRO_MICROPHONE)]);
        associations.insert(
            Channel::Movies,
            vec![Reward::new(PIRATES_OF_THE_CARRIBEAN_COLLECTION)],
        );
        Self { associations }
    }

    pub fn rewards_for_channel(&self, channel: Channel) -> &[Reward] {
        self.associations
            .get(&channel)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolves an arbitrary identifier straight to its rewards, folding
    /// unknown identifiers into the empty case.
    pub fn rewards_for(&self, identifier: &str) -> &[Reward] {
        match Channel::parse(identifier) {
            Some(channel) => self.rewards_for_channel(channel),
            None => &[],
        }
    }

    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.associations.keys().copied()
    }
}
