// メンバー値の型タグと値表現
// 実行時リフレクションの代わりに、扱える型を固定の列挙で表す

use rust_decimal::Decimal;
use std::fmt;

/// メンバーの静的型を表すタグ
///
/// 判明した「型」はこの有限集合のいずれかに対応し、
/// ジェネリックアクセサの具象型はタグに対する`match`で選択する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// テキスト (`String`)
    Text,
    /// 整数 (`i32`)
    Integer,
    /// 固定小数点 (`rust_decimal::Decimal`)
    Decimal,
    /// 浮動小数点 (`f64`)
    Float,
    /// 真偽値 (`bool`)
    Boolean,
}

impl MemberKind {
    /// 対応するRustの型名
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::Integer => "i32",
            Self::Decimal => "Decimal",
            Self::Float => "f64",
            Self::Boolean => "bool",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_type())
    }
}

/// 型情報を失った（ゆるく型付けされた）メンバー値
///
/// 文字列化は各型の`Display`実装に従う：
/// 真偽値は`true`/`false`、`Decimal`は保持しているスケールのまま（`1234.56`）、
/// `f64`は最短の往復可能表現（`2.5`）
#[derive(Debug, Clone, PartialEq)]
pub enum MemberValue {
    Text(String),
    Integer(i32),
    Decimal(Decimal),
    Float(f64),
    Boolean(bool),
}

impl MemberValue {
    /// 値の型タグを取得
    pub fn kind(&self) -> MemberKind {
        match self {
            Self::Text(_) => MemberKind::Text,
            Self::Integer(_) => MemberKind::Integer,
            Self::Decimal(_) => MemberKind::Decimal,
            Self::Float(_) => MemberKind::Float,
            Self::Boolean(_) => MemberKind::Boolean,
        }
    }
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// ジェネリックアクセサで要求できる型
///
/// `KIND`と宣言型が一致しない場合、値は暗黙に変換されない
pub trait MemberType: Sized {
    /// この型に対応するタグ
    const KIND: MemberKind;

    /// 値が同じ型の場合のみ取り出す
    fn from_member_value(value: MemberValue) -> Option<Self>;
}

impl MemberType for String {
    const KIND: MemberKind = MemberKind::Text;

    fn from_member_value(value: MemberValue) -> Option<Self> {
        match value {
            MemberValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl MemberType for i32 {
    const KIND: MemberKind = MemberKind::Integer;

    fn from_member_value(value: MemberValue) -> Option<Self> {
        match value {
            MemberValue::Integer(value) => Some(value),
            _ => None,
        }
    }
}

impl MemberType for Decimal {
    const KIND: MemberKind = MemberKind::Decimal;

    fn from_member_value(value: MemberValue) -> Option<Self> {
        match value {
            MemberValue::Decimal(value) => Some(value),
            _ => None,
        }
    }
}

impl MemberType for f64 {
    const KIND: MemberKind = MemberKind::Float;

    fn from_member_value(value: MemberValue) -> Option<Self> {
        match value {
            MemberValue::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl MemberType for bool {
    const KIND: MemberKind = MemberKind::Boolean;

    fn from_member_value(value: MemberValue) -> Option<Self> {
        match value {
            MemberValue::Boolean(value) => Some(value),
            _ => None,
        }
    }
}
