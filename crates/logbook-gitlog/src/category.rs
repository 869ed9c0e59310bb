//! Changelog categories and their tiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Priority tier grouping categories by how commonly they are used.
///
/// Variants are declared from highest to lowest priority, so `Ord` sorts
/// `Core` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// The Keep a Changelog sections
    Core,
    /// Common additions to the core set
    Standard,
    /// Project-maintenance sections
    Extended,
    /// Niche sections most projects never use
    Specialized,
}

impl Tier {
    /// All tiers, highest priority first
    pub const ALL: [Tier; 4] = [Tier::Core, Tier::Standard, Tier::Extended, Tier::Specialized];

    /// Lowercase tier name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Standard => "standard",
            Self::Extended => "extended",
            Self::Specialized => "specialized",
        }
    }

    /// Categories belonging to this tier, in declaration order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| c.tier() == *self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A changelog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
    Breaking,
    Performance,
    Documentation,
    Dependencies,
    Tests,
    Build,
    Infrastructure,
    Internal,
    Configuration,
    Accessibility,
    Localization,
    Experimental,
    Compatibility,
    Migration,
}

impl Category {
    /// Every category, grouped by tier
    pub const ALL: [Category; 20] = [
        Category::Added,
        Category::Changed,
        Category::Deprecated,
        Category::Removed,
        Category::Fixed,
        Category::Security,
        Category::Breaking,
        Category::Performance,
        Category::Documentation,
        Category::Dependencies,
        Category::Tests,
        Category::Build,
        Category::Infrastructure,
        Category::Internal,
        Category::Configuration,
        Category::Accessibility,
        Category::Localization,
        Category::Experimental,
        Category::Compatibility,
        Category::Migration,
    ];

    /// Display name, also used as the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
            Self::Breaking => "Breaking",
            Self::Performance => "Performance",
            Self::Documentation => "Documentation",
            Self::Dependencies => "Dependencies",
            Self::Tests => "Tests",
            Self::Build => "Build",
            Self::Infrastructure => "Infrastructure",
            Self::Internal => "Internal",
            Self::Configuration => "Configuration",
            Self::Accessibility => "Accessibility",
            Self::Localization => "Localization",
            Self::Experimental => "Experimental",
            Self::Compatibility => "Compatibility",
            Self::Migration => "Migration",
        }
    }

    /// The tier this category belongs to
    pub fn tier(&self) -> Tier {
        match self {
            Self::Added
            | Self::Changed
            | Self::Deprecated
            | Self::Removed
            | Self::Fixed
            | Self::Security => Tier::Core,
            Self::Breaking | Self::Performance | Self::Documentation | Self::Dependencies => {
                Tier::Standard
            }
            Self::Tests
            | Self::Build
            | Self::Infrastructure
            | Self::Internal
            | Self::Configuration => Tier::Extended,
            Self::Accessibility
            | Self::Localization
            | Self::Experimental
            | Self::Compatibility
            | Self::Migration => Tier::Specialized,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
