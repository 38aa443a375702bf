//! The fixed selection sets a customer chooses from.
//!
//! Feature labels and budget brackets are substituted into the prompt exactly
//! as their `label()` returns them, so the labels here are part of the prompt
//! contract and must not change casually.

use std::fmt;

/// A preferred car feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Speed,
    Design,
    Comfort,
    LatestTechnology,
    EcoFriendly,
}

impl Feature {
    /// All features, in the order they are offered.
    pub const ALL: [Feature; 5] = [
        Feature::Speed,
        Feature::Design,
        Feature::Comfort,
        Feature::LatestTechnology,
        Feature::EcoFriendly,
    ];

    /// The label inserted into the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Feature::Speed => "Speed",
            Feature::Design => "Design",
            Feature::Comfort => "Comfort",
            Feature::LatestTechnology => "Latest Technology",
            Feature::EcoFriendly => "Eco-friendly",
        }
    }

    /// Parse a feature from its label or a short alias, ignoring case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|f| normalize(f.label()) == key)
            .or(match key.as_str() {
                "tech" | "technology" | "latest-tech" => Some(Feature::LatestTechnology),
                "eco" | "ecofriendly" => Some(Feature::EcoFriendly),
                _ => None,
            })
    }

    /// clap value parser.
    pub fn parse_arg(s: &str) -> std::result::Result<Self, String> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "unknown feature '{}' (expected one of: {})",
                s,
                Self::ALL.map(Feature::label).join(", ")
            )
        })
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A customer budget bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBracket {
    Under100k,
    From100kTo200k,
    Over200k,
}

impl BudgetBracket {
    /// All brackets, in the order they are offered.
    pub const ALL: [BudgetBracket; 3] = [
        BudgetBracket::Under100k,
        BudgetBracket::From100kTo200k,
        BudgetBracket::Over200k,
    ];

    /// The label inserted into the prompt.
    pub fn label(self) -> &'static str {
        match self {
            BudgetBracket::Under100k => "< 100k €",
            BudgetBracket::From100kTo200k => "100k-200k €",
            BudgetBracket::Over200k => "> 200k €",
        }
    }

    /// Parse a bracket from its label or a shell-friendly alias, ignoring case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|b| normalize(b.label()) == key)
            .or(match key.as_str() {
                "under-100k" | "<100k" | "lt-100k" | "low" => Some(BudgetBracket::Under100k),
                "100k-200k" | "mid" => Some(BudgetBracket::From100kTo200k),
                "over-200k" | ">200k" | "gt-200k" | "high" => Some(BudgetBracket::Over200k),
                _ => None,
            })
    }

    /// clap value parser.
    pub fn parse_arg(s: &str) -> std::result::Result<Self, String> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "unknown budget '{}' (expected one of: {})",
                s,
                Self::ALL.map(BudgetBracket::label).join(", ")
            )
        })
    }
}

impl fmt::Display for BudgetBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '_'], "-")
}
