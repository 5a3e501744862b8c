//! Boss item database — every resource a boss tier can cost.
//!
//! Costs are per boss summon. The key and token items also live here so the
//! table matches the game's own spreadsheet; [`items_for`] filters them out
//! of the boss calculator.

use crate::calculator_type::CalculatorType;
use crate::table::{CostTable, Item};

pub static DATABASE: [Item; 37] = [
    Item {
        name: "Artefact",
        icon: "artefact.png",
        costs: &[
            ("T4_Abyssal", 2),
            ("T4_Celestial", 2),
            ("T5_Nidhogg", 4),
            ("T5_Chaos", 3),
            ("T5_Order", 3),
            ("T6_Normal", 3),
            ("T6_Giga", 3),
            ("T7_DodoBleu", 3),
            ("T7_DodoRouge", 3),
            ("T7_WReaper", 3),
            ("T7_WGiga", 3),
            ("T8_Ascension", 5),
            ("T8_Descension", 5),
            ("T9_1Seal", 3),
            ("T9_2Seal", 5),
            ("T9_3Seal", 5),
            ("T9_4Seal", 5),
            ("T9_Cube", 3),
        ],
    },
    Item {
        name: "Abyssal Warfare Key",
        icon: "abyssal_key.png",
        costs: &[
            ("T5_Nidhogg", 1),
            ("T5_Chaos", 1),
            ("T5_Order", 1),
            ("T8_Ascension", 1),
            ("T8_Descension", 1),
            ("T9_1Seal", 1),
            ("T9_2Seal", 1),
            ("T9_3Seal", 1),
            ("T9_4Seal", 1),
            ("T9_Cube", 1),
        ],
    },
    Item {
        name: "Celestial Warfare Key",
        icon: "celestial_key.png",
        costs: &[
            ("T5_Nidhogg", 1),
            ("T5_Chaos", 1),
            ("T5_Order", 1),
            ("T8_Ascension", 1),
            ("T8_Descension", 1),
            ("T9_1Seal", 1),
            ("T9_2Seal", 1),
            ("T9_3Seal", 1),
            ("T9_4Seal", 1),
            ("T9_Cube", 1),
        ],
    },
    Item {
        name: "Ancient Token Cluster",
        icon: "ancient_token.png",
        costs: &[
            ("T4_Abyssal", 1),
            ("T4_Celestial", 1),
            ("T5_Nidhogg", 3),
            ("T5_Chaos", 1),
            ("T5_Order", 1),
            ("T6_Normal", 2),
            ("T6_Giga", 3),
            ("T7_DodoBleu", 2),
            ("T7_DodoRouge", 2),
            ("T7_WReaper", 2),
            ("T7_WGiga", 2),
            ("T8_Ascension", 3),
            ("T8_Descension", 3),
            ("T9_1Seal", 5),
            ("T9_2Seal", 6),
            ("T9_3Seal", 6),
            ("T9_4Seal", 6),
            ("T9_Cube", 3),
        ],
    },
    Item {
        name: "Combat Essence",
        icon: "combat_essence.png",
        costs: &[
            ("T4_Abyssal", 10),
            ("T4_Celestial", 10),
            ("T5_Nidhogg", 10),
            ("T5_Chaos", 10),
            ("T5_Order", 10),
            ("T7_DodoBleu", 10),
            ("T7_DodoRouge", 10),
        ],
    },
    Item {
        name: "Devilish Soul",
        icon: "devilish_soul.png",
        costs: &[
            ("T4_Abyssal", 12),
            ("T5_Nidhogg", 24),
            ("T5_Chaos", 10),
            ("T5_Order", 10),
            ("T6_Normal", 10),
            ("T6_Giga", 15),
            ("T7_DodoBleu", 10),
            ("T7_DodoRouge", 10),
            ("T7_WReaper", 15),
            ("T7_WGiga", 15),
            ("T8_Ascension", 40),
            ("T8_Descension", 40),
            ("T9_1Seal", 35),
            ("T9_2Seal", 40),
            ("T9_3Seal", 40),
            ("T9_4Seal", 60),
            ("T9_Cube", 40),
        ],
    },
    Item {
        name: "Divine Soul",
        icon: "divine_soul.png",
        costs: &[
            ("T4_Celestial", 12),
            ("T5_Nidhogg", 24),
            ("T5_Chaos", 10),
            ("T5_Order", 10),
            ("T6_Normal", 10),
            ("T6_Giga", 15),
            ("T7_DodoBleu", 10),
            ("T7_DodoRouge", 10),
            ("T7_WReaper", 15),
            ("T7_WGiga", 15),
            ("T8_Ascension", 40),
            ("T8_Descension", 40),
            ("T9_1Seal", 35),
            ("T9_2Seal", 40),
            ("T9_3Seal", 40),
            ("T9_4Seal", 60),
            ("T9_Cube", 40),
        ],
    },
    Item {
        name: "Devilish Hide",
        icon: "devilish_hide.png",
        costs: &[
            ("T4_Abyssal", 500),
            ("T5_Nidhogg", 3000),
            ("T5_Chaos", 1000),
            ("T5_Order", 1000),
            ("T6_Normal", 1000),
            ("T6_Giga", 2000),
            ("T7_DodoBleu", 1000),
            ("T7_DodoRouge", 1000),
            ("T7_WReaper", 1000),
            ("T7_WGiga", 1000),
            ("T9_Cube", 5000),
        ],
    },
    Item {
        name: "Divine Hide",
        icon: "divine_hide.png",
        costs: &[
            ("T4_Celestial", 500),
            ("T5_Nidhogg", 3000),
            ("T5_Chaos", 1000),
            ("T5_Order", 1000),
            ("T6_Normal", 1000),
            ("T6_Giga", 2000),
            ("T7_DodoBleu", 1000),
            ("T7_DodoRouge", 1000),
            ("T7_WReaper", 1000),
            ("T7_WGiga", 1000),
            ("T9_Cube", 5000),
        ],
    },
    Item {
        name: "Excellent Soul",
        icon: "excellent_soul.png",
        costs: &[
            ("T4_Abyssal", 20),
            ("T4_Celestial", 20),
            ("T5_Nidhogg", 30),
            ("T5_Chaos", 25),
            ("T5_Order", 25),
            ("T6_Normal", 25),
            ("T6_Giga", 30),
            ("T7_DodoBleu", 20),
            ("T7_DodoRouge", 20),
            ("T7_WReaper", 30),
            ("T7_WGiga", 30),
            ("T8_Ascension", 60),
            ("T8_Descension", 60),
            ("T9_Cube", 60),
        ],
    },
    Item {
        name: "Unreal Essence",
        icon: "unreal_essence.png",
        costs: &[
            ("T4_Abyssal", 50),
            ("T4_Celestial", 50),
            ("T5_Nidhogg", 1000),
            ("T5_Chaos", 100),
            ("T5_Order", 100),
        ],
    },
    Item {
        name: "Black Pearl",
        icon: "black_pearl.png",
        costs: &[
            ("T4_Abyssal", 500),
            ("T4_Celestial", 500),
            ("T5_Nidhogg", 1500),
            ("T5_Chaos", 1000),
            ("T5_Order", 1000),
            ("T6_Normal", 1000),
            ("T6_Giga", 1500),
            ("T7_DodoBleu", 800),
            ("T7_DodoRouge", 800),
            ("T7_WReaper", 1000),
            ("T7_WGiga", 1000),
            ("T8_Ascension", 2000),
            ("T8_Descension", 2000),
            ("T9_1Seal", 1000),
            ("T9_2Seal", 1500),
            ("T9_3Seal", 1500),
            ("T9_4Seal", 1500),
            ("T9_Cube", 2000),
        ],
    },
    Item {
        name: "Devilish Essence",
        icon: "devilish_essence.png",
        costs: &[
            ("T4_Abyssal", 1),
        ],
    },
    Item {
        name: "Divine Essence",
        icon: "divine_essence.png",
        costs: &[
            ("T4_Celestial", 1),
        ],
    },
    Item {
        name: "Abyssal Energy",
        icon: "abyssal_energy.png",
        costs: &[
            ("T4_Abyssal", 10),
        ],
    },
    Item {
        name: "Celestial Energy",
        icon: "celestial_energy.png",
        costs: &[
            ("T4_Celestial", 10),
        ],
    },
    Item {
        name: "Chaos Warchief Soul",
        icon: "chaos_warchief_soul.png",
        costs: &[
            ("T6_Normal", 2),
            ("T6_Giga", 2),
        ],
    },
    Item {
        name: "Order Warchief Soul",
        icon: "order_warchief_soul.png",
        costs: &[
            ("T6_Normal", 2),
            ("T6_Giga", 2),
        ],
    },
    Item {
        name: "Bionic Essence",
        icon: "bionic_essence.png",
        costs: &[
            ("T6_Giga", 500),
        ],
    },
    Item {
        name: "Bionic Soul",
        icon: "bionic_soul.png",
        costs: &[
            ("T7_DodoBleu", 5),
            ("T7_DodoRouge", 5),
            ("T7_WReaper", 6),
            ("T7_WGiga", 6),
        ],
    },
    Item {
        name: "Descended Ingot",
        icon: "descended_ingot.png",
        costs: &[
            ("T7_DodoBleu", 400),
            ("T7_DodoRouge", 400),
            ("T7_WReaper", 800),
            ("T7_WGiga", 800),
            ("T9_1Seal", 500),
            ("T9_2Seal", 450),
            ("T9_3Seal", 450),
            ("T9_4Seal", 600),
        ],
    },
    Item {
        name: "Ascended Warden Essence",
        icon: "ascended_warden_essence.png",
        costs: &[
            ("T7_WGiga", 5),
            ("T8_Ascension", 10),
            ("T9_Cube", 8),
        ],
    },
    Item {
        name: "Descended Warden Essence",
        icon: "descended_warden_essence.png",
        costs: &[
            ("T7_WReaper", 5),
            ("T8_Descension", 10),
            ("T9_Cube", 8),
        ],
    },
    Item {
        name: "Luminous Essence",
        icon: "luminous_essence.png",
        costs: &[
            ("T7_WReaper", 200),
        ],
    },
    Item {
        name: "Ancient Essence",
        icon: "ancient_essence.png",
        costs: &[
            ("T7_WGiga", 1000),
        ],
    },
    Item {
        name: "Bionic Giga Essence",
        icon: "bionic_giga_essence.png",
        costs: &[
            ("T8_Ascension", 1),
            ("T8_Descension", 1),
        ],
    },
    Item {
        name: "Descended Essence",
        icon: "descended_essence.png",
        costs: &[
            ("T7_WReaper", 1000),
            ("T7_WGiga", 1000),
            ("T8_Ascension", 2500),
            ("T8_Descension", 2500),
            ("T9_1Seal", 2000),
            ("T9_2Seal", 3000),
            ("T9_3Seal", 3000),
            ("T9_4Seal", 3000),
        ],
    },
    Item {
        name: "Excellent Essence",
        icon: "excellent_essence.png",
        costs: &[
            ("T8_Ascension", 2000),
            ("T8_Descension", 2000),
        ],
    },
    Item {
        name: "Warden Rex Trophy",
        icon: "warden_rex_trophy.png",
        costs: &[
            ("T8_Ascension", 5),
            ("T8_Descension", 5),
        ],
    },
    Item {
        name: "Warden Spino Trophy",
        icon: "warden_spino_trophy.png",
        costs: &[
            ("T8_Ascension", 5),
            ("T8_Descension", 5),
        ],
    },
    Item {
        name: "Warden Lizard Trophy",
        icon: "warden_lizard_trophy.png",
        costs: &[
            ("T8_Ascension", 5),
            ("T8_Descension", 5),
        ],
    },
    Item {
        name: "Warden Theri Trophy",
        icon: "warden_theri_trophy.png",
        costs: &[
            ("T8_Ascension", 5),
            ("T8_Descension", 5),
        ],
    },
    Item {
        name: "Supreme Warden Giga Trophy",
        icon: "supreme_warden_giga_trophy.png",
        costs: &[
            ("T8_Ascension", 1),
            ("T8_Descension", 1),
            ("T9_Cube", 1),
        ],
    },
    Item {
        name: "Supreme Warden Reaper Trophy",
        icon: "supreme_warden_reaper_trophy.png",
        costs: &[
            ("T8_Ascension", 1),
            ("T8_Descension", 1),
            ("T9_Cube", 1),
        ],
    },
    Item {
        name: "Soul of Ascension God",
        icon: "soul_ascension_god.png",
        costs: &[
            ("T9_1Seal", 1),
            ("T9_2Seal", 1),
            ("T9_3Seal", 1),
            ("T9_4Seal", 1),
            ("T9_Cube", 1),
        ],
    },
    Item {
        name: "Soul of Descension God",
        icon: "soul_descension_god.png",
        costs: &[
            ("T9_1Seal", 1),
            ("T9_2Seal", 1),
            ("T9_3Seal", 1),
            ("T9_4Seal", 1),
            ("T9_Cube", 1),
        ],
    },
    Item {
        name: "Seal Fragments",
        icon: "seal_fragment.png",
        costs: &[
            ("T9_Cube", 2),
        ],
    },
];

/// Look up an item in the full database.
pub fn item(name: &str) -> Option<&'static Item> {
    DATABASE.iter().find(|i| i.name == name)
}

/// Icon file for a database item, empty if unknown.
pub fn item_icon(name: &str) -> &'static str {
    item(name).map(|i| i.icon).unwrap_or("")
}

/// Unit cost of an item at a boss tier; 0 for unknown items or tiers.
pub fn item_cost(name: &str, tier: &str) -> u32 {
    item(name).map(|i| i.cost(tier)).unwrap_or(0)
}

fn is_key_item(name: &str) -> bool {
    name.to_lowercase().contains("key")
}

fn is_token_item(name: &str) -> bool {
    name.to_lowercase().contains("ancient token")
}

/// Database items relevant to a calculator type, in table order.
pub fn items_for(calculator: CalculatorType) -> Vec<&'static Item> {
    DATABASE
        .iter()
        .filter(|i| match calculator {
            CalculatorType::Boss => !is_key_item(i.name) && !is_token_item(i.name),
            CalculatorType::Key => is_key_item(i.name),
            CalculatorType::AncientToken => is_token_item(i.name),
        })
        .collect()
}

/// The boss calculator's cost table.
pub fn boss_table() -> CostTable {
    CostTable::new(items_for(CalculatorType::Boss))
}
