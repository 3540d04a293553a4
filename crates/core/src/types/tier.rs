//! Membership tier hierarchy.
//!
//! TradeUp orders its five tiers by an integer level so that tier gates can
//! be checked with a single comparison. Unknown or absent tier names resolve
//! to level 0, which is weaker than every real tier.

use serde::{Deserialize, Serialize};

/// A named membership tier, ordered from weakest to strongest.
///
/// ## Examples
///
/// ```
/// use tradeup_core::Tier;
///
/// let gold = Tier::from_name("Gold").unwrap();
/// assert_eq!(gold.level(), 3);
/// assert!(Tier::from_name("silver").unwrap().level() < gold.level());
/// assert!(Tier::from_name("cardboard").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    /// Parse a tier from its name, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the five tiers.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bronze" => Some(Self::Bronze),
            "silver" => Some(Self::Silver),
            "gold" => Some(Self::Gold),
            "platinum" => Some(Self::Platinum),
            "diamond" => Some(Self::Diamond),
            _ => None,
        }
    }

    /// The tier's position in the hierarchy (bronze = 1 .. diamond = 5).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Bronze => 1,
            Self::Silver => 2,
            Self::Gold => 3,
            Self::Platinum => 4,
            Self::Diamond => 5,
        }
    }

    /// Capitalized tier name for buyer-facing messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Hierarchy level for a tier name, 0 when the name is not a known tier.
#[must_use]
pub fn tier_level(name: &str) -> u8 {
    Tier::from_name(name).map_or(0, Tier::level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_levels_are_totally_ordered() {
        assert_eq!(Tier::Bronze.level(), 1);
        assert_eq!(Tier::Silver.level(), 2);
        assert_eq!(Tier::Gold.level(), 3);
        assert_eq!(Tier::Platinum.level(), 4);
        assert_eq!(Tier::Diamond.level(), 5);
        assert!(Tier::Bronze < Tier::Diamond);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Tier::from_name("GOLD"), Some(Tier::Gold));
        assert_eq!(Tier::from_name("  Platinum "), Some(Tier::Platinum));
        assert_eq!(Tier::from_name("vip"), None);
        assert_eq!(Tier::from_name(""), None);
    }

    #[test]
    fn test_tier_level_defaults_to_zero() {
        assert_eq!(tier_level("diamond"), 5);
        assert_eq!(tier_level("unranked"), 0);
        assert_eq!(tier_level(""), 0);
    }

    #[test]
    fn test_display_name_is_capitalized() {
        assert_eq!(Tier::Silver.display_name(), "Silver");
        assert_eq!(Tier::Gold.to_string(), "Gold");
    }
}
