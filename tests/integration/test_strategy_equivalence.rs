// 戦略間の出力一致の統合テスト
use crate::fixtures::{sample_inventory_item, MisregisteredRecord};
use member_access::{
    catalog_for, AccessError, MemberCategory, Record, SampleRecord, StrategyKind,
};
use rust_decimal::Decimal;

#[test]
fn test_field_strategies_are_byte_identical() {
    let record = SampleRecord::sample();
    let catalog = catalog_for::<SampleRecord>();

    let outputs: Vec<String> = StrategyKind::ALL
        .iter()
        .map(|strategy| strategy.render(&record, &catalog, MemberCategory::Field).unwrap())
        .collect();

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(outputs[0].starts_with("StringField = Hello, IntField = 247, "));
    assert!(outputs[0].ends_with("BoolField = true, "));
}

#[test]
fn test_property_strategies_are_byte_identical() {
    let mut record = SampleRecord::sample();
    record.set_decimal_property(Decimal::new(-5, 1));
    let catalog = catalog_for::<SampleRecord>();

    let outputs: Vec<String> = StrategyKind::ALL
        .iter()
        .map(|strategy| {
            strategy
                .render(&record, &catalog, MemberCategory::Property)
                .unwrap()
        })
        .collect();

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(outputs[0].contains("DecimalProperty = -0.5, "));
}

#[test]
fn test_strategies_on_other_record_type() {
    let item = sample_inventory_item();
    let catalog = catalog_for::<crate::fixtures::InventoryItem>();

    for strategy in StrategyKind::ALL {
        assert_eq!(
            strategy.render(&item, &catalog, MemberCategory::Field).unwrap(),
            "Sku = SKU-001, Quantity = 12, UnitPrice = 19.99, "
        );
        assert_eq!(
            strategy
                .render(&item, &catalog, MemberCategory::Property)
                .unwrap(),
            "Weight = 0.75, Discontinued = false, "
        );
    }
}

#[test]
fn test_discovery_order_matches_catalog_order() {
    let catalog = catalog_for::<SampleRecord>();

    for category in MemberCategory::ALL {
        let discovered: Vec<&str> = SampleRecord::discover(category)
            .iter()
            .map(|info| info.name)
            .collect();
        let cataloged: Vec<&str> = catalog
            .entries(category)
            .iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(discovered, cataloged);
    }
}

#[test]
fn test_failure_aborts_generic_strategies() {
    let record = MisregisteredRecord { count: 1 };
    let catalog = catalog_for::<MisregisteredRecord>();

    // 型なし読み出しは型検査を経ないため成功する
    assert_eq!(
        StrategyKind::DirectDiscovery
            .render(&record, &catalog, MemberCategory::Field)
            .unwrap(),
        "Count = 1, "
    );

    for strategy in [
        StrategyKind::GenericIntrospection,
        StrategyKind::CatalogIndexed,
        StrategyKind::CatalogSequential,
    ] {
        assert!(matches!(
            strategy.render(&record, &catalog, MemberCategory::Field),
            Err(AccessError::TypeMismatch { .. })
        ));
    }
}
