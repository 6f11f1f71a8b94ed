// (b) 動的列挙 + 型タグごとのジェネリックアクセサ

use super::{append_typed, AccessStrategy};
use crate::catalog::MemberCatalog;
use crate::core::{AccessResult, MemberCategory, Record};

/// 呼び出しのたびに（名前, 型）を列挙し、型ごとにジェネリックアクセサを呼ぶ
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericIntrospection;

impl AccessStrategy for GenericIntrospection {
    const NAME: &'static str = "GenericIntrospection";

    fn render<R: Record>(
        record: &R,
        _catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> AccessResult<String> {
        let mut out = String::new();

        for member in R::discover(category) {
            append_typed(&mut out, record, category, member.name, member.kind)?;
        }

        Ok(out)
    }
}
