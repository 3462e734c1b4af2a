//! Strategic deck archetypes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// A named strategic deck pattern.
///
/// Variant order is significant: detection ties resolve to the lowest
/// ordinal, and `Hybrid` sits last so a concrete pattern always wins a tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Beatdown,
    Control,
    Cycle,
    Siege,
    BridgeSpam,
    Bait,
    Hybrid,
}

impl Archetype {
    /// Every archetype in ordinal order.
    pub const ALL: [Archetype; 7] = [
        Archetype::Beatdown,
        Archetype::Control,
        Archetype::Cycle,
        Archetype::Siege,
        Archetype::BridgeSpam,
        Archetype::Bait,
        Archetype::Hybrid,
    ];

    /// Stable lowercase key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Archetype::Beatdown => "beatdown",
            Archetype::Control => "control",
            Archetype::Cycle => "cycle",
            Archetype::Siege => "siege",
            Archetype::BridgeSpam => "bridge_spam",
            Archetype::Bait => "bait",
            Archetype::Hybrid => "hybrid",
        }
    }

    /// Position in [`Archetype::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DeckError;

    /// Accepts any case, surrounding whitespace, and `-`, `_` or a space
    /// between words ("Bridge Spam", "bridge-spam", "bridge_spam").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str() == key || (key == "bridgespam" && *a == Archetype::BridgeSpam))
            .ok_or_else(|| DeckError::UnknownArchetype(s.to_string()))
    }
}

/// Parse a list of archetype keys, failing on the first unknown one.
pub fn parse_archetypes<I, S>(keys: I) -> Result<Vec<Archetype>, DeckError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter().map(|k| k.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration() {
        for (i, a) in Archetype::ALL.iter().enumerate() {
            assert_eq!(a.ordinal(), i);
        }
        assert!(Archetype::Beatdown < Archetype::Hybrid);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("  CYCLE ".parse::<Archetype>().unwrap(), Archetype::Cycle);
        assert_eq!("bridge-spam".parse::<Archetype>().unwrap(), Archetype::BridgeSpam);
        assert_eq!("Bridge Spam".parse::<Archetype>().unwrap(), Archetype::BridgeSpam);
        assert_eq!("bridgespam".parse::<Archetype>().unwrap(), Archetype::BridgeSpam);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "midrange".parse::<Archetype>().unwrap_err();
        assert_eq!(err, DeckError::UnknownArchetype("midrange".into()));
    }

    #[test]
    fn test_parse_list_stops_at_unknown() {
        let ok = parse_archetypes(["cycle", "siege"]).unwrap();
        assert_eq!(ok, vec![Archetype::Cycle, Archetype::Siege]);
        assert!(parse_archetypes(["cycle", "turbo"]).is_err());
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_string(&Archetype::BridgeSpam).unwrap();
        assert_eq!(json, "\"bridge_spam\"");
    }
}
