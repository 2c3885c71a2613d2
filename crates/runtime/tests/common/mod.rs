#![allow(dead_code)]

use std::time::Duration;

use planner_core::{Item, ItemCategory, ItemId};
use planner_runtime::{ItemOracleImpl, Planner};
use uuid::Uuid;

pub fn id(n: u128) -> ItemId {
    ItemId::from_uuid(Uuid::from_u128(n))
}

pub const UCHIGATANA: u128 = 1;
pub const GREATSWORD: u128 = 2;
pub const VAGABOND_HELM: u128 = 3;
pub const VAGABOND_ARMOR: u128 = 4;
pub const SORESEAL: u128 = 5;
pub const MIMIC_TEAR: u128 = 6;
pub const ROCK_SLING: u128 = 7;
pub const CRIMSON_TEAR: u128 = 8;
pub const LONGSWORD: u128 = 9;

pub fn catalog() -> ItemOracleImpl {
    ItemOracleImpl::from_items([
        Item::new(id(UCHIGATANA), "Uchigatana", ItemCategory::Weapons).with_weight(5.5),
        Item::new(id(GREATSWORD), "Greatsword", ItemCategory::Weapons).with_weight(23.0),
        Item::new(id(LONGSWORD), "Longsword", ItemCategory::Weapons).with_weight(3.5),
        Item::new(id(VAGABOND_HELM), "Vagabond Knight Helm", ItemCategory::Helm).with_weight(6.1),
        Item::new(id(VAGABOND_ARMOR), "Vagabond Knight Armor", ItemCategory::Chest)
            .with_weight(11.4),
        Item::new(id(SORESEAL), "Radagon's Soreseal", ItemCategory::Talismans).with_weight(0.7),
        Item::new(id(MIMIC_TEAR), "Mimic Tear Ashes", ItemCategory::Spirits),
        Item::new(id(ROCK_SLING), "Rock Sling", ItemCategory::Spells),
        Item::new(id(CRIMSON_TEAR), "Crimson Crystal Tear", ItemCategory::CrystalTears),
    ])
}

pub fn planner() -> Planner {
    Planner::builder()
        .catalog(catalog())
        .in_memory_repositories()
        .build()
        .expect("planner should build with catalog and repositories")
}

/// Keeps successive timestamps strictly ordered.
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}
