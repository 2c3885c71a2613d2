//! JSON shapes shared with the build store. Requires the `serde` feature.
#![cfg(feature = "serde")]

use planner_core::{
    BuildPayload, DerivedStats, EquipmentSlot, ItemCategory, ItemId, LoadTier,
    compute_derived_stats, AttributeBlock,
};

#[test]
fn payload_parses_store_json() {
    let json = r#"{
        "name": "Rivers of Blood",
        "attributes": {
            "vigor": 60, "mind": 15, "endurance": 25, "strength": 12,
            "dexterity": 40, "intelligence": 9, "faith": 8, "arcane": 45
        },
        "equipment": {
            "rightHand1": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "leftHand1": "",
            "spirit": null
        },
        "talismans": ["a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8"]
    }"#;

    let payload: BuildPayload = serde_json::from_str(json).unwrap();
    let validated = payload.validate().unwrap();

    let weapon: ItemId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
    assert_eq!(
        validated.loadout.equipment.get(EquipmentSlot::RightHand1),
        Some(weapon)
    );
    assert_eq!(validated.loadout.equipment.get(EquipmentSlot::LeftHand1), None);
    assert!(validated.loadout.talismans[0].is_some());
    assert_eq!(validated.loadout.spells, [None; 4]);
    assert_eq!(validated.attributes.soul_level(), 135);
}

#[test]
fn categories_and_slots_use_store_spelling() {
    assert_eq!(
        serde_json::to_string(&ItemCategory::CrystalTears).unwrap(),
        "\"crystal_tears\""
    );
    assert_eq!(
        serde_json::to_string(&EquipmentSlot::LeftHand2).unwrap(),
        "\"leftHand2\""
    );
    let slot: EquipmentSlot = serde_json::from_str("\"rightHand3\"").unwrap();
    assert_eq!(slot, EquipmentSlot::RightHand3);
}

#[test]
fn derived_stats_serialize() {
    let stats = compute_derived_stats(&AttributeBlock::default(), 12.0).unwrap();
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["hit_points"], 414);
    assert_eq!(json["load_tier"], "Light");

    let back: DerivedStats = serde_json::from_value(json).unwrap();
    assert_eq!(back.load_tier, LoadTier::Light);
}
