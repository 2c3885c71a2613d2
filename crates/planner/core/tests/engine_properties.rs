use planner_core::{
    AttributeBlock, EquipmentSlot, EquippedItem, Item, ItemCategory, ItemId, LoadTier, Loadout,
    aggregate_carry_weight, compute_derived_stats,
    stats::{focus_points, hit_points},
};

fn catalog() -> Vec<Item> {
    vec![
        Item::new(ItemId::new_v4(), "Uchigatana", ItemCategory::Weapons).with_weight(5.5),
        Item::new(ItemId::new_v4(), "Brass Shield", ItemCategory::Weapons).with_weight(6.0),
        Item::new(ItemId::new_v4(), "Vagabond Knight Armor", ItemCategory::Chest).with_weight(11.4),
        Item::new(ItemId::new_v4(), "Radagon's Soreseal", ItemCategory::Talismans).with_weight(0.7),
        Item::new(ItemId::new_v4(), "Mimic Tear Ashes", ItemCategory::Spirits),
        Item::new(ItemId::new_v4(), "Black Knife Tiche", ItemCategory::Spirits).with_weight(2.0),
    ]
}

fn carry_weight(loadout: &Loadout, items: &[Item]) -> f64 {
    let equipped: Vec<EquippedItem> = loadout
        .weighted_refs()
        .iter()
        .filter_map(|(_, id)| items.iter().find(|item| item.id == *id))
        .map(EquippedItem::from)
        .collect();
    aggregate_carry_weight(&equipped).unwrap()
}

#[test]
fn spirit_choice_does_not_change_carry_weight() {
    let items = catalog();
    let mut first = Loadout::default();
    first.equipment.equip(EquipmentSlot::RightHand1, items[0].id);
    first.equipment.equip(EquipmentSlot::LeftHand1, items[1].id);
    first.equipment.equip(EquipmentSlot::Chest, items[2].id);
    first.talismans[0] = Some(items[3].id);

    let mut second = first;
    first.equipment.equip(EquipmentSlot::Spirit, items[4].id);
    second.equipment.equip(EquipmentSlot::Spirit, items[5].id);

    let a = carry_weight(&first, &items);
    let b = carry_weight(&second, &items);
    assert_eq!(a, b);
    assert!((a - 23.6).abs() < 1e-9);
}

#[test]
fn same_item_in_two_hands_weighs_twice() {
    let items = catalog();
    let mut loadout = Loadout::default();
    loadout.equipment.equip(EquipmentSlot::RightHand1, items[0].id);
    loadout.equipment.equip(EquipmentSlot::RightHand2, items[0].id);
    assert_eq!(carry_weight(&loadout, &items), 11.0);
}

#[test]
fn resources_never_decrease() {
    let mut last_hp = 0;
    let mut last_fp = 0;
    for value in 1..=99u8 {
        let hp = hit_points(value).unwrap();
        let fp = focus_points(value).unwrap();
        assert!(hp >= last_hp, "hp dropped at {value}");
        assert!(fp >= last_fp, "fp dropped at {value}");
        last_hp = hp;
        last_fp = fp;
    }
    assert_eq!(last_hp, 2100);
    assert_eq!(last_fp, 450);
}

#[test]
fn heavier_gear_moves_through_every_tier() {
    let attributes = AttributeBlock::default();
    let tiers: Vec<LoadTier> = [0.0, 15.0, 34.0, 48.2, 48.3]
        .into_iter()
        .map(|weight| compute_derived_stats(&attributes, weight).unwrap().load_tier)
        .collect();
    assert_eq!(
        tiers,
        vec![
            LoadTier::Light,
            LoadTier::Medium,
            LoadTier::Heavy,
            LoadTier::Heavy,
            LoadTier::Overloaded
        ]
    );
}
