// (a) 動的列挙 + 型パラメータなしの読み出し

use super::{append_member, AccessStrategy};
use crate::accessor::read_member;
use crate::catalog::MemberCatalog;
use crate::core::{AccessResult, MemberCategory, Record};

/// 呼び出しのたびにメンバーを列挙し、名前だけで値を読んで文字列化する
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectDiscovery;

impl AccessStrategy for DirectDiscovery {
    const NAME: &'static str = "DirectDiscovery";

    fn render<R: Record>(
        record: &R,
        _catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> AccessResult<String> {
        let mut out = String::new();

        for member in R::discover(category) {
            let value = read_member(record, category, member.name)?;
            append_member(&mut out, member.name, value);
        }

        Ok(out)
    }
}
