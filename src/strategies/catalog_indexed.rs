// (c) カタログのインデックス走査 + ジェネリックアクセサ

use super::{append_typed, AccessStrategy};
use crate::catalog::MemberCatalog;
use crate::core::{AccessResult, MemberCategory, Record};

/// 事前構築したカタログをインデックスで走査する
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogIndexed;

impl AccessStrategy for CatalogIndexed {
    const NAME: &'static str = "CatalogIndexed";

    #[allow(clippy::needless_range_loop)]
    fn render<R: Record>(
        record: &R,
        catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> AccessResult<String> {
        let entries = catalog.entries(category);
        let mut out = String::new();

        for index in 0..entries.len() {
            let entry = &entries[index];
            append_typed(&mut out, record, category, entry.name, entry.kind)?;
        }

        Ok(out)
    }
}
