//! アクセス戦略
//!
//! 4つの戦略はいずれもレコードの全メンバーを `"<name> = <value>, "` の連結として
//! 出力し、結果は同一になる。異なるのは（名前, 型）の発見方法とアクセサの呼び方だけ：
//!
//! - [`DirectDiscovery`] - 動的列挙 + 型パラメータなしの読み出し
//! - [`GenericIntrospection`] - 動的列挙 + 型タグごとのジェネリックアクセサ
//! - [`CatalogIndexed`] - カタログをインデックスで走査
//! - [`CatalogSequential`] - カタログを前方向イテレータで走査

pub mod catalog_indexed;
pub mod catalog_sequential;
pub mod direct;
pub mod generic_introspection;

pub use catalog_indexed::CatalogIndexed;
pub use catalog_sequential::CatalogSequential;
pub use direct::DirectDiscovery;
pub use generic_introspection::GenericIntrospection;

use crate::accessor::get_member;
use crate::catalog::MemberCatalog;
use crate::core::{AccessResult, MemberCategory, MemberKind, Record};
use rust_decimal::Decimal;
use std::fmt::{self, Display, Write};

/// アクセス戦略の抽象化トレイト
///
/// 状態を持たない純粋関数として実装する
pub trait AccessStrategy {
    /// 戦略名（ベンチマーク表示用）
    const NAME: &'static str;

    /// 指定カテゴリの全メンバーを列挙した文字列を生成
    fn render<R: Record>(
        record: &R,
        catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> AccessResult<String>;

    fn list_fields<R: Record>(record: &R, catalog: &MemberCatalog<R>) -> AccessResult<String> {
        Self::render(record, catalog, MemberCategory::Field)
    }

    fn list_properties<R: Record>(record: &R, catalog: &MemberCatalog<R>) -> AccessResult<String> {
        Self::render(record, catalog, MemberCategory::Property)
    }
}

/// 戦略の選択子（CLI・ベンチマーク用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StrategyKind {
    /// 動的列挙 + 型なし読み出し
    DirectDiscovery,
    /// 動的列挙 + ジェネリックアクセサ
    GenericIntrospection,
    /// カタログ（インデックス走査）+ ジェネリックアクセサ
    CatalogIndexed,
    /// カタログ（逐次走査）+ ジェネリックアクセサ
    CatalogSequential,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::DirectDiscovery,
        StrategyKind::GenericIntrospection,
        StrategyKind::CatalogIndexed,
        StrategyKind::CatalogSequential,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::DirectDiscovery => DirectDiscovery::NAME,
            Self::GenericIntrospection => GenericIntrospection::NAME,
            Self::CatalogIndexed => CatalogIndexed::NAME,
            Self::CatalogSequential => CatalogSequential::NAME,
        }
    }

    /// 選択された戦略で出力を生成
    pub fn render<R: Record>(
        &self,
        record: &R,
        catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> AccessResult<String> {
        match self {
            Self::DirectDiscovery => DirectDiscovery::render(record, catalog, category),
            Self::GenericIntrospection => GenericIntrospection::render(record, catalog, category),
            Self::CatalogIndexed => CatalogIndexed::render(record, catalog, category),
            Self::CatalogSequential => CatalogSequential::render(record, catalog, category),
        }
    }

    /// 指定した戦略群が同じ出力を生成するかを確認
    pub fn verify_consistent<R: Record>(
        strategies: &[StrategyKind],
        record: &R,
        catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> AccessResult<bool> {
        let Some((first, rest)) = strategies.split_first() else {
            return Ok(true);
        };
        let expected = first.render(record, catalog, category)?;

        for strategy in rest {
            let output = strategy.render(record, catalog, category)?;
            if output != expected {
                tracing::warn!(
                    strategy = strategy.name(),
                    baseline = first.name(),
                    %category,
                    expected = %expected,
                    actual = %output,
                    "strategy output differs"
                );
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `"<name> = <value>, "` を追記
pub(crate) fn append_member(out: &mut String, name: &str, value: impl Display) {
    // Stringへの書き込みは失敗しない
    let _ = write!(out, "{name} = {value}, ");
}

/// 型タグに応じた具象型でジェネリックアクセサを呼び、追記する
pub(crate) fn append_typed<R: Record>(
    out: &mut String,
    record: &R,
    category: MemberCategory,
    name: &str,
    kind: MemberKind,
) -> AccessResult<()> {
    match kind {
        MemberKind::Text => {
            append_member(out, name, get_member::<String, R>(record, category, name)?)
        }
        MemberKind::Integer => {
            append_member(out, name, get_member::<i32, R>(record, category, name)?)
        }
        MemberKind::Decimal => {
            append_member(out, name, get_member::<Decimal, R>(record, category, name)?)
        }
        MemberKind::Float => {
            append_member(out, name, get_member::<f64, R>(record, category, name)?)
        }
        MemberKind::Boolean => {
            append_member(out, name, get_member::<bool, R>(record, category, name)?)
        }
    }
    Ok(())
}

/// 型タグに応じた具象型で読み出し、文字列化する
pub fn typed_display<R: Record>(
    record: &R,
    category: MemberCategory,
    name: &str,
    kind: MemberKind,
) -> AccessResult<String> {
    Ok(match kind {
        MemberKind::Text => get_member::<String, R>(record, category, name)?,
        MemberKind::Integer => get_member::<i32, R>(record, category, name)?.to_string(),
        MemberKind::Decimal => get_member::<Decimal, R>(record, category, name)?.to_string(),
        MemberKind::Float => get_member::<f64, R>(record, category, name)?.to_string(),
        MemberKind::Boolean => get_member::<bool, R>(record, category, name)?.to_string(),
    })
}
