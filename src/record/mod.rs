//! サンプルレコード
//!
//! 5種類のフィールドと、getter/setter経由で公開する5種類のプロパティを持つ

use crate::core::{MemberDescriptor, MemberKind, MemberValue, Record};
use rust_decimal::Decimal;

/// デモとベンチマークで使うレコード
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleRecord {
    pub string_field: String,
    pub int_field: i32,
    pub decimal_field: Decimal,
    pub double_field: f64,
    pub bool_field: bool,

    string_property: String,
    int_property: i32,
    decimal_property: Decimal,
    double_property: f64,
    bool_property: bool,
}

impl SampleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// デモ用の固定値で埋めたインスタンス
    pub fn sample() -> Self {
        Self {
            string_field: "Hello".to_string(),
            int_field: 247,
            decimal_field: Decimal::new(123456, 2),
            double_field: 2.5,
            bool_field: true,
            ..Self::default()
        }
        .with_string_property("World")
        .with_int_property(1024)
        .with_decimal_property(Decimal::new(9995, 2))
        .with_double_property(0.125)
        .with_bool_property(false)
    }

    pub fn string_property(&self) -> &str {
        &self.string_property
    }

    pub fn set_string_property(&mut self, value: impl Into<String>) {
        self.string_property = value.into();
    }

    pub fn int_property(&self) -> i32 {
        self.int_property
    }

    pub fn set_int_property(&mut self, value: i32) {
        self.int_property = value;
    }

    pub fn decimal_property(&self) -> Decimal {
        self.decimal_property
    }

    pub fn set_decimal_property(&mut self, value: Decimal) {
        self.decimal_property = value;
    }

    pub fn double_property(&self) -> f64 {
        self.double_property
    }

    pub fn set_double_property(&mut self, value: f64) {
        self.double_property = value;
    }

    pub fn bool_property(&self) -> bool {
        self.bool_property
    }

    pub fn set_bool_property(&mut self, value: bool) {
        self.bool_property = value;
    }

    pub fn with_string_property(mut self, value: impl Into<String>) -> Self {
        self.set_string_property(value);
        self
    }

    pub fn with_int_property(mut self, value: i32) -> Self {
        self.set_int_property(value);
        self
    }

    pub fn with_decimal_property(mut self, value: Decimal) -> Self {
        self.set_decimal_property(value);
        self
    }

    pub fn with_double_property(mut self, value: f64) -> Self {
        self.set_double_property(value);
        self
    }

    pub fn with_bool_property(mut self, value: bool) -> Self {
        self.set_bool_property(value);
        self
    }
}

// 宣言順 = カタログ順
static SAMPLE_RECORD_MEMBERS: [MemberDescriptor<SampleRecord>; 10] = [
    MemberDescriptor::field("StringField", MemberKind::Text, |r: &SampleRecord| {
        MemberValue::Text(r.string_field.clone())
    }),
    MemberDescriptor::field("IntField", MemberKind::Integer, |r: &SampleRecord| {
        MemberValue::Integer(r.int_field)
    }),
    MemberDescriptor::field("DecimalField", MemberKind::Decimal, |r: &SampleRecord| {
        MemberValue::Decimal(r.decimal_field)
    }),
    MemberDescriptor::field("DoubleField", MemberKind::Float, |r: &SampleRecord| {
        MemberValue::Float(r.double_field)
    }),
    MemberDescriptor::field("BoolField", MemberKind::Boolean, |r: &SampleRecord| {
        MemberValue::Boolean(r.bool_field)
    }),
    MemberDescriptor::property("StringProperty", MemberKind::Text, |r: &SampleRecord| {
        MemberValue::Text(r.string_property().to_owned())
    }),
    MemberDescriptor::property("IntProperty", MemberKind::Integer, |r: &SampleRecord| {
        MemberValue::Integer(r.int_property())
    }),
    MemberDescriptor::property("DecimalProperty", MemberKind::Decimal, |r: &SampleRecord| {
        MemberValue::Decimal(r.decimal_property())
    }),
    MemberDescriptor::property("DoubleProperty", MemberKind::Float, |r: &SampleRecord| {
        MemberValue::Float(r.double_property())
    }),
    MemberDescriptor::property("BoolProperty", MemberKind::Boolean, |r: &SampleRecord| {
        MemberValue::Boolean(r.bool_property())
    }),
];

impl Record for SampleRecord {
    const TYPE_NAME: &'static str = "SampleRecord";

    fn descriptors() -> &'static [MemberDescriptor<Self>] {
        &SAMPLE_RECORD_MEMBERS
    }
}
