//! Key crafting costs — components needed per Abyssal, Celestial and God key.
//!
//! God keys only list what is specific to them (souls, energies, the token
//! cluster); the Abyssal and Celestial keys that feed a God key are entered
//! separately.

use crate::categories::keys;
use crate::table::{Item, DEFAULT_ICON};

pub static KEY_TABLE: [Item; 37] = [
    Item {
        name: "Abyssal Carcha Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Abyssal Dodoreaper Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Abyssal Dodorexy Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Abyssal Drake Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Abyssal Indominus Rex Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Abyssal Manticore Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Abyssal Spider Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Abyssal Element",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 3)],
    },
    Item {
        name: "Celestial Gigant Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Celestial Gorilla Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Celestial Rhynio Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Celestial Rock Golem Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Celestial Rock Drake Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Celestial Titano Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Celestial Wyvern Trophy",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Celestial Element",
        icon: DEFAULT_ICON,
        costs: &[(keys::CELESTIAL, 3)],
    },
    Item {
        name: "Abyssal Energy",
        icon: "abyssal_energy.png",
        costs: &[(keys::ABYSSAL, 300), (keys::GOD, 200)],
    },
    Item {
        name: "Celestial Energy",
        icon: "celestial_energy.png",
        costs: &[(keys::CELESTIAL, 300), (keys::GOD, 200)],
    },
    Item {
        name: "Element",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 500), (keys::CELESTIAL, 500)],
    },
    Item {
        name: "Black Pearl",
        icon: "black_pearl.png",
        costs: &[(keys::ABYSSAL, 500), (keys::CELESTIAL, 500)],
    },
    Item {
        name: "Oracle Essence",
        icon: DEFAULT_ICON,
        costs: &[(keys::ABYSSAL, 100), (keys::CELESTIAL, 100)],
    },
    Item {
        name: "Unreal Essence",
        icon: "unreal_essence.png",
        costs: &[(keys::ABYSSAL, 500), (keys::CELESTIAL, 500), (keys::GOD, 500)],
    },
    Item {
        name: "Ancient Token Cluster",
        icon: "ancient_token.png",
        costs: &[(keys::GOD, 1)],
    },
    Item {
        name: "Abyssal Carcha Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Abyssal Dodoreaper Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Abyssal Dodorexy Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Abyssal Drake Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Abyssal Indominus Rex Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Abyssal Manticore Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Abyssal Spider Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Celestial Gigant Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Celestial Gorilla Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Celestial Rhynio Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Celestial Rock Golem Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Celestial Rock Drake Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Celestial Titano Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
    Item {
        name: "Celestial Wyvern Soul",
        icon: DEFAULT_ICON,
        costs: &[(keys::GOD, 5)],
    },
];

/// Cost of one component for one key of the given kind.
pub fn key_cost(kind: &str, component: &str) -> u32 {
    KEY_TABLE
        .iter()
        .find(|i| i.name == component)
        .map(|i| i.cost(kind))
        .unwrap_or(0)
}
