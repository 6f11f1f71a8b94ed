//! メンバーアクセサ
//!
//! 実行時に文字列で与えられた名前からメンバーを解決し、
//! 呼び出し側が要求した型で値を返す

use crate::core::{AccessError, AccessResult, MemberCategory, MemberType, MemberValue, Record};

/// 名前でフィールドを読み出す
pub fn get_field<T: MemberType, R: Record>(record: &R, name: &str) -> AccessResult<T> {
    get_member(record, MemberCategory::Field, name)
}

/// 名前でプロパティを読み出す
pub fn get_property<T: MemberType, R: Record>(record: &R, name: &str) -> AccessResult<T> {
    get_member(record, MemberCategory::Property, name)
}

/// 名前とカテゴリでメンバーを解決し、`T`として返す
///
/// `T`は宣言型と完全に一致する必要がある（拡張・縮小変換は行わない）
pub fn get_member<T: MemberType, R: Record>(
    record: &R,
    category: MemberCategory,
    name: &str,
) -> AccessResult<T> {
    let descriptor = R::find_descriptor(category, name)
        .ok_or_else(|| AccessError::member_not_found(R::TYPE_NAME, category, name))?;

    if descriptor.kind != T::KIND {
        return Err(AccessError::type_mismatch(
            R::TYPE_NAME,
            category,
            name,
            T::KIND,
            descriptor.kind,
        ));
    }

    let value = (descriptor.read)(record);
    let actual = value.kind();
    T::from_member_value(value)
        .ok_or_else(|| AccessError::type_mismatch(R::TYPE_NAME, category, name, T::KIND, actual))
}

/// 型パラメータなしで名前だけを使って読み出す
pub fn read_member<R: Record>(
    record: &R,
    category: MemberCategory,
    name: &str,
) -> AccessResult<MemberValue> {
    R::find_descriptor(category, name)
        .map(|descriptor| (descriptor.read)(record))
        .ok_or_else(|| AccessError::member_not_found(R::TYPE_NAME, category, name))
}

/// レコードのメソッドとして呼べるアクセサ
///
/// `record.get_field::<i32>("IntField")`
pub trait MemberAccessor: Record {
    fn get_field<T: MemberType>(&self, name: &str) -> AccessResult<T> {
        get_member(self, MemberCategory::Field, name)
    }

    fn get_property<T: MemberType>(&self, name: &str) -> AccessResult<T> {
        get_member(self, MemberCategory::Property, name)
    }

    fn field_value(&self, name: &str) -> AccessResult<MemberValue> {
        read_member(self, MemberCategory::Field, name)
    }

    fn property_value(&self, name: &str) -> AccessResult<MemberValue> {
        read_member(self, MemberCategory::Property, name)
    }
}

impl<R: Record> MemberAccessor for R {}
