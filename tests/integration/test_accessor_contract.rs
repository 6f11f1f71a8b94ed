// アクセサ契約の統合テスト
use crate::fixtures::{sample_inventory_item, MisregisteredRecord};
use member_access::{
    get_field, get_property, AccessError, MemberAccessor, MemberCategory, MemberKind,
    SampleRecord,
};
use rust_decimal::Decimal;

#[test]
fn test_every_declared_member_round_trips() {
    let record = SampleRecord::sample();

    assert_eq!(record.get_field::<String>("StringField").unwrap(), record.string_field);
    assert_eq!(record.get_field::<i32>("IntField").unwrap(), record.int_field);
    assert_eq!(record.get_field::<Decimal>("DecimalField").unwrap(), record.decimal_field);
    assert_eq!(record.get_field::<f64>("DoubleField").unwrap(), record.double_field);
    assert_eq!(record.get_field::<bool>("BoolField").unwrap(), record.bool_field);

    assert_eq!(
        record.get_property::<String>("StringProperty").unwrap(),
        record.string_property()
    );
    assert_eq!(record.get_property::<i32>("IntProperty").unwrap(), record.int_property());
    assert_eq!(
        record.get_property::<Decimal>("DecimalProperty").unwrap(),
        record.decimal_property()
    );
    assert_eq!(
        record.get_property::<f64>("DoubleProperty").unwrap(),
        record.double_property()
    );
    assert_eq!(record.get_property::<bool>("BoolProperty").unwrap(), record.bool_property());
}

#[test]
fn test_property_string_requested_as_int_fails() {
    let record = SampleRecord::sample();

    match get_property::<i32, _>(&record, "StringProperty") {
        Err(AccessError::TypeMismatch {
            requested,
            declared,
            ..
        }) => {
            assert_eq!(requested, MemberKind::Integer);
            assert_eq!(declared, MemberKind::Text);
        }
        other => panic!("TypeMismatchが期待されます: {other:?}"),
    }
}

#[test]
fn test_missing_member_fails() {
    let record = SampleRecord::sample();

    let error = get_field::<String, _>(&record, "Field_01").unwrap_err();
    assert!(matches!(
        error,
        AccessError::MemberNotFound {
            category: MemberCategory::Field,
            ..
        }
    ));
    assert!(error.to_string().contains("Field_01"));
}

#[test]
fn test_other_record_type() {
    let mut item = sample_inventory_item();

    assert_eq!(item.get_field::<String>("Sku").unwrap(), "SKU-001");
    assert_eq!(item.get_field::<i32>("Quantity").unwrap(), 12);
    assert_eq!(item.get_property::<f64>("Weight").unwrap(), 0.75);
    assert!(!item.get_property::<bool>("Discontinued").unwrap());

    item.set_discontinued(true);
    assert!(item.get_property::<bool>("Discontinued").unwrap());

    let error = item.get_field::<String>("StringField").unwrap_err();
    assert!(error.to_string().contains("InventoryItem"));
}

#[test]
fn test_misregistered_kind_surfaces_as_type_mismatch() {
    let record = MisregisteredRecord { count: 3 };

    // 登録上はf64なので要求型はそれに合わせても、実際の値の型で検出される
    assert!(matches!(
        record.get_field::<f64>("Count"),
        Err(AccessError::TypeMismatch {
            declared: MemberKind::Integer,
            ..
        })
    ));
    // 登録型と異なる要求は登録型で弾かれる
    assert!(matches!(
        record.get_field::<i32>("Count"),
        Err(AccessError::TypeMismatch {
            declared: MemberKind::Float,
            ..
        })
    ));
}
