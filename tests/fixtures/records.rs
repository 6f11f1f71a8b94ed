// SampleRecord以外のレコード型（登録テーブルを利用側で定義できることの確認用）

use member_access::{MemberDescriptor, MemberKind, MemberValue, Record};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub sku: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    weight: f64,
    discontinued: bool,
}

impl InventoryItem {
    pub fn new(sku: &str, quantity: i32, unit_price: Decimal) -> Self {
        Self {
            sku: sku.to_string(),
            quantity,
            unit_price,
            weight: 0.0,
            discontinued: false,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn discontinued(&self) -> bool {
        self.discontinued
    }

    pub fn set_discontinued(&mut self, discontinued: bool) {
        self.discontinued = discontinued;
    }
}

static INVENTORY_ITEM_MEMBERS: [MemberDescriptor<InventoryItem>; 5] = [
    MemberDescriptor::field("Sku", MemberKind::Text, |r: &InventoryItem| {
        MemberValue::Text(r.sku.clone())
    }),
    MemberDescriptor::field("Quantity", MemberKind::Integer, |r: &InventoryItem| {
        MemberValue::Integer(r.quantity)
    }),
    MemberDescriptor::field("UnitPrice", MemberKind::Decimal, |r: &InventoryItem| {
        MemberValue::Decimal(r.unit_price)
    }),
    MemberDescriptor::property("Weight", MemberKind::Float, |r: &InventoryItem| {
        MemberValue::Float(r.weight())
    }),
    MemberDescriptor::property("Discontinued", MemberKind::Boolean, |r: &InventoryItem| {
        MemberValue::Boolean(r.discontinued())
    }),
];

impl Record for InventoryItem {
    const TYPE_NAME: &'static str = "InventoryItem";

    fn descriptors() -> &'static [MemberDescriptor<Self>] {
        &INVENTORY_ITEM_MEMBERS
    }
}

/// 登録した型と読み出し関数の型が食い違っているレコード
pub struct MisregisteredRecord {
    pub count: i32,
}

static MISREGISTERED_MEMBERS: [MemberDescriptor<MisregisteredRecord>; 1] =
    [MemberDescriptor::field("Count", MemberKind::Float, |r: &MisregisteredRecord| {
        MemberValue::Integer(r.count)
    })];

impl Record for MisregisteredRecord {
    const TYPE_NAME: &'static str = "MisregisteredRecord";

    fn descriptors() -> &'static [MemberDescriptor<Self>] {
        &MISREGISTERED_MEMBERS
    }
}

pub fn sample_inventory_item() -> InventoryItem {
    let mut item = InventoryItem::new("SKU-001", 12, Decimal::new(1999, 2));
    item.set_weight(0.75);
    item
}
