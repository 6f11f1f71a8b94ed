// (d) カタログの逐次走査 + ジェネリックアクセサ

use super::{append_typed, AccessStrategy};
use crate::catalog::MemberCatalog;
use crate::core::{AccessResult, MemberCategory, Record};

/// 事前構築したカタログを前方向イテレータで走査する
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogSequential;

impl AccessStrategy for CatalogSequential {
    const NAME: &'static str = "CatalogSequential";

    fn render<R: Record>(
        record: &R,
        catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> AccessResult<String> {
        let mut out = String::new();

        for entry in catalog.sequence(category) {
            append_typed(&mut out, record, category, entry.name, entry.kind)?;
        }

        Ok(out)
    }
}
