//! Categorical parameters and the `SimulationParams` request shape.
//!
//! Every categorical field is a closed enum with explicit wire tokens. Parsing
//! is split in two: `from_token` reports a miss, `resolve` never does (unknown
//! tokens fall back to the documented default).

use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;

/// Define a token enum with explicit wire tokens and a default variant.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal), default = $default:ident => {
            $($variant:ident = $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Exact, case-sensitive wire token match.
            pub fn from_token(s: &str) -> Option<Self> {
                match s {
                    $($token => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Total resolution: unknown tokens map to the default variant.
            pub fn resolve(s: &str) -> Self {
                Self::from_token(s).unwrap_or_default()
            }

            pub fn as_token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_token())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_token(s).ok_or(CoreError::UnknownToken($field))
            }
        }
    };
}

token_enum!(
    /// Election synchronization model. Ordered by how much is synchronized.
    ElectionModel("electionModel"), default = Current => {
        Current = "current",
        Partial = "partial",
        Full    = "full",
    }
);

token_enum!(
    CostAssumption("costAssumption"), default = Medium => {
        Low    = "low",
        Medium = "medium",
        High   = "high",
    }
);

token_enum!(
    ManpowerLevel("manpowerLevel"), default = Standard => {
        Minimal  = "minimal",
        Standard = "standard",
        Heavy    = "heavy",
    }
);

token_enum!(
    /// Budget availability. Descriptive only; never enters the arithmetic.
    BudgetLevel("budgetLevel"), default = Normal => {
        Tight       = "tight",
        Normal      = "normal",
        Comfortable = "comfortable",
        High        = "high",
    }
);

impl ElectionModel {
    /// Human-facing model name used for saved-simulation titles.
    pub fn display_name(self) -> &'static str {
        match self {
            ElectionModel::Current => "Current System",
            ElectionModel::Partial => "Partial Synchronization",
            ElectionModel::Full => "Full Synchronization",
        }
    }
}

/// Numeric defaults applied when a request omits a field.
pub const DEFAULT_STATES_COUNT: u32 = 15;
pub const DEFAULT_CYCLE_LENGTH: u8 = 5;

/// One simulation request. Wire names are camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationParams {
    pub election_model: ElectionModel,
    pub states_count: u32,
    pub cycle_length: u8,
    pub cost_assumption: CostAssumption,
    pub manpower_level: ManpowerLevel,
    pub budget_level: BudgetLevel,
}

impl SimulationParams {
    /// Canonical parameter set used to compute the fallback result
    /// (full / 15 states / 5-year cycle / medium / standard / normal).
    pub const fn canonical() -> Self {
        Self {
            election_model: ElectionModel::Full,
            states_count: DEFAULT_STATES_COUNT,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            cost_assumption: CostAssumption::Medium,
            manpower_level: ManpowerLevel::Standard,
            budget_level: BudgetLevel::Normal,
        }
    }

    /// Build from raw string tokens, resolving unknown tokens to their defaults.
    pub fn from_tokens(
        election_model: &str,
        states_count: u32,
        cycle_length: u8,
        cost_assumption: &str,
        manpower_level: &str,
        budget_level: &str,
    ) -> Self {
        Self {
            election_model: ElectionModel::resolve(election_model),
            states_count,
            cycle_length,
            cost_assumption: CostAssumption::resolve(cost_assumption),
            manpower_level: ManpowerLevel::resolve(manpower_level),
            budget_level: BudgetLevel::resolve(budget_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_display() {
        for m in ElectionModel::ALL {
            assert_eq!(ElectionModel::from_token(&m.to_string()), Some(*m));
        }
        for b in BudgetLevel::ALL {
            assert_eq!(b.as_token().parse::<BudgetLevel>(), Ok(*b));
        }
    }

    #[test]
    fn unknown_tokens_resolve_to_defaults() {
        assert_eq!(ElectionModel::resolve("bogus"), ElectionModel::Current);
        assert_eq!(CostAssumption::resolve("moderate"), CostAssumption::Medium);
        assert_eq!(ManpowerLevel::resolve(""), ManpowerLevel::Standard);
        assert_eq!(BudgetLevel::resolve("NORMAL"), BudgetLevel::Normal);
    }

    #[test]
    fn from_str_names_the_field() {
        let err = "Full".parse::<ElectionModel>().unwrap_err();
        assert_eq!(err, CoreError::UnknownToken("electionModel"));
        assert_eq!(err.to_string(), "unknown token for electionModel");
    }

    #[test]
    fn models_are_ordered_by_synchronization() {
        assert!(ElectionModel::Current < ElectionModel::Partial);
        assert!(ElectionModel::Partial < ElectionModel::Full);
    }

    #[test]
    fn from_tokens_matches_canonical() {
        let p = SimulationParams::from_tokens("full", 15, 5, "medium", "standard", "normal");
        assert_eq!(p, SimulationParams::canonical());
    }
}
