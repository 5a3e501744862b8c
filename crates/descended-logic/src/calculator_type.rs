//! Calculator types — boss tiers, keys, ancient tokens.

use serde::{Deserialize, Serialize};

use crate::categories::{Category, BOSS_TIERS, KEY_KINDS, TOKEN_KINDS};
use crate::table::CostTable;
use crate::{database, keys, tokens};

/// Which calculator is active. Each has its own categories and cost table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorType {
    Boss,
    Key,
    AncientToken,
}

impl Default for CalculatorType {
    fn default() -> Self {
        Self::Boss
    }
}

impl CalculatorType {
    pub const ALL: [CalculatorType; 3] = [Self::Boss, Self::Key, Self::AncientToken];

    /// Stable id used in storage and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Boss => "boss",
            Self::Key => "key",
            Self::AncientToken => "ancient-token",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Boss => "Boss Calculator",
            Self::Key => "Key Calculator",
            Self::AncientToken => "Ancient Token Calculator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Boss => "Resources needed to summon bosses",
            Self::Key => "Resources needed to craft keys",
            Self::AncientToken => "Resources needed for Ancient Token Clusters",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Boss => "👹",
            Self::Key => "🗝️",
            Self::AncientToken => "🪙",
        }
    }

    /// Counters the user can set for this calculator, in display order.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Boss => &BOSS_TIERS,
            Self::Key => &KEY_KINDS,
            Self::AncientToken => &TOKEN_KINDS,
        }
    }

    pub fn table(&self) -> CostTable {
        match self {
            Self::Boss => database::boss_table(),
            Self::Key => CostTable::from_slice(&keys::KEY_TABLE),
            Self::AncientToken => CostTable::from_slice(&tokens::TOKEN_TABLE),
        }
    }
}

impl std::fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
