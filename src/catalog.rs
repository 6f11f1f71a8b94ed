//! メンバーカタログ
//!
//! レコード型ごとに一度だけ構築する（名前, 型）の読み取り専用テーブル。
//! 構築後は共有参照で渡し、変更しない

use crate::core::{MemberCategory, MemberKind, Record};
use std::fmt;
use std::marker::PhantomData;

/// カタログの1エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub kind: MemberKind,
}

/// レコード型`R`のメンバーカタログ
pub struct MemberCatalog<R: Record> {
    fields: Vec<CatalogEntry>,
    properties: Vec<CatalogEntry>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> MemberCatalog<R> {
    /// 登録テーブルからカタログを構築
    pub fn build() -> Self {
        let mut fields = Vec::new();
        let mut properties = Vec::new();

        for descriptor in R::descriptors() {
            let entry = CatalogEntry {
                name: descriptor.name,
                kind: descriptor.kind,
            };
            let target = match descriptor.category {
                MemberCategory::Field => &mut fields,
                MemberCategory::Property => &mut properties,
            };
            debug_assert!(
                target.iter().all(|existing: &CatalogEntry| existing.name != entry.name),
                "{}: {} '{}' が重複して登録されています",
                R::TYPE_NAME,
                descriptor.category,
                entry.name
            );
            target.push(entry);
        }

        tracing::debug!(
            record_type = R::TYPE_NAME,
            fields = fields.len(),
            properties = properties.len(),
            "member catalog built"
        );

        Self {
            fields,
            properties,
            _record: PhantomData,
        }
    }

    pub fn type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    pub fn fields(&self) -> &[CatalogEntry] {
        &self.fields
    }

    pub fn properties(&self) -> &[CatalogEntry] {
        &self.properties
    }

    /// カテゴリのエントリをインデックス可能なスライスで取得
    pub fn entries(&self, category: MemberCategory) -> &[CatalogEntry] {
        match category {
            MemberCategory::Field => &self.fields,
            MemberCategory::Property => &self.properties,
        }
    }

    /// カテゴリのエントリを前方向のみのシーケンスとして取得
    pub fn sequence(&self, category: MemberCategory) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries(category).iter()
    }

    /// 名前から宣言型を引く
    pub fn kind_of(&self, category: MemberCategory, name: &str) -> Option<MemberKind> {
        self.entries(category)
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.kind)
    }

    pub fn len(&self) -> usize {
        self.fields.len() + self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.properties.is_empty()
    }
}

impl<R: Record> fmt::Debug for MemberCatalog<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberCatalog")
            .field("record_type", &R::TYPE_NAME)
            .field("fields", &self.fields)
            .field("properties", &self.properties)
            .finish()
    }
}

/// レコード型のカタログを構築
pub fn catalog_for<R: Record>() -> MemberCatalog<R> {
    MemberCatalog::build()
}
