//! 名前（文字列）で指定したレコードのメンバーを静的な型で取り出す
//!
//! - [`catalog`] - レコード型ごとの（名前, 型）カタログ
//! - [`accessor`] - `get_field::<T>` / `get_property::<T>`
//! - [`strategies`] - 同じ出力を異なる解決方法で生成する4つの戦略
//! - [`benchmarks`] - 戦略ごとの計測

pub mod accessor;
pub mod benchmarks;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod record;
pub mod services;
pub mod strategies;

pub use accessor::{get_field, get_member, get_property, read_member, MemberAccessor};
pub use catalog::{catalog_for, CatalogEntry, MemberCatalog};
pub use crate::core::{
    AccessError, AccessResult, MemberCategory, MemberDescriptor, MemberKind, MemberType,
    MemberValue, Record,
};
pub use record::SampleRecord;
pub use strategies::{AccessStrategy, StrategyKind};
