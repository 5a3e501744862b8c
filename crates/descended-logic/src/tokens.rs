//! Ancient Token Cluster costs.
//!
//! A cluster takes two of each dino token; the "Ancient Dino" counter covers
//! the crafting resources spent per cluster.

use crate::categories::tokens::{ANCIENT_DINO, CLUSTER};
use crate::table::Item;

/// Tokens dropped per mob kill.
pub const TOKENS_PER_MOB: u64 = 20;

pub static TOKEN_TABLE: [Item; 15] = [
    Item {
        name: "Raptor Token",
        icon: "raptor_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Carno Token",
        icon: "carno_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Bronto Token",
        icon: "bronto_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Giga Token",
        icon: "giga_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Rex Token",
        icon: "rex_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Trice Token",
        icon: "trice_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Stego Token",
        icon: "stego_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Quetz Token",
        icon: "quetz_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Wyvern Token",
        icon: "wyvern_token.png",
        costs: &[(CLUSTER, 2)],
    },
    Item {
        name: "Black Pearl",
        icon: "black_pearl.png",
        costs: &[(ANCIENT_DINO, 80)],
    },
    Item {
        name: "Excellent Essence",
        icon: "excellent_essence.png",
        costs: &[(ANCIENT_DINO, 100)],
    },
    Item {
        name: "Unreal Essence",
        icon: "unreal_essence.png",
        costs: &[(ANCIENT_DINO, 20)],
    },
    Item {
        name: "Excellent Soul",
        icon: "excellent_soul.png",
        costs: &[(ANCIENT_DINO, 5)],
    },
    Item {
        name: "Descended Essence",
        icon: "descended_essence.png",
        costs: &[(ANCIENT_DINO, 200)],
    },
    Item {
        name: "Artefact",
        icon: "artefact.png",
        costs: &[(ANCIENT_DINO, 1)],
    },
];

/// Mob kills needed to farm `tokens` tokens, rounded up.
pub fn mobs_needed(tokens: u64) -> u64 {
    tokens.div_ceil(TOKENS_PER_MOB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    #[test]
    fn test_mobs_needed_rounds_up() {
        assert_eq!(mobs_needed(0), 0);
        assert_eq!(mobs_needed(1), 1);
        assert_eq!(mobs_needed(20), 1);
        assert_eq!(mobs_needed(21), 2);
        assert_eq!(mobs_needed(180), 9);
    }

    #[test]
    fn test_resource_icons_match_database() {
        for item in TOKEN_TABLE.iter().filter(|i| i.cost(ANCIENT_DINO) > 0) {
            assert_eq!(item.icon, database::item_icon(item.name), "{}", item.name);
        }
    }

    #[test]
    fn test_nine_tokens_per_cluster() {
        let tokens = TOKEN_TABLE.iter().filter(|i| i.cost(CLUSTER) == 2).count();
        assert_eq!(tokens, 9);
    }
}
