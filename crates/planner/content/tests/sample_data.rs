//! The shipped sample data must stay loadable.
#![cfg(feature = "loaders")]

use std::path::PathBuf;

use planner_content::ContentFactory;
use planner_core::{ItemCategory, PlannerConfig};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn sample_catalog_loads() {
    let factory = ContentFactory::new(data_dir());
    let items = factory.load_items().expect("sample items.ron should parse");

    for category in ItemCategory::ALL {
        assert!(
            items.iter().any(|item| item.category == category),
            "no sample item for {category}"
        );
    }
    assert!(
        items
            .iter()
            .filter(|item| !item.category.carries_weight())
            .all(|item| item.weight.is_none())
    );
}

#[test]
fn sample_config_loads() {
    let config = ContentFactory::new(data_dir()).load_config().unwrap();
    assert_eq!(config, PlannerConfig::default());
}
