// メンバーアクセスとベンチマークのトレイト定義

use super::types::StrategyMeasurement;
use super::value::{MemberKind, MemberValue};
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// メンバーの種別（フィールド / プロパティ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberCategory {
    Field,
    Property,
}

impl MemberCategory {
    pub const ALL: [MemberCategory; 2] = [MemberCategory::Field, MemberCategory::Property];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 動的に発見されたメンバーの（名前, 型）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: &'static str,
    pub kind: MemberKind,
}

/// 登録テーブルの1エントリ
///
/// 名前と型タグに加え、そのメンバーを読み出す関数を保持する
pub struct MemberDescriptor<R> {
    pub name: &'static str,
    pub category: MemberCategory,
    pub kind: MemberKind,
    pub read: fn(&R) -> MemberValue,
}

impl<R> MemberDescriptor<R> {
    /// フィールドとして登録
    pub const fn field(name: &'static str, kind: MemberKind, read: fn(&R) -> MemberValue) -> Self {
        Self {
            name,
            category: MemberCategory::Field,
            kind,
            read,
        }
    }

    /// プロパティとして登録
    pub const fn property(
        name: &'static str,
        kind: MemberKind,
        read: fn(&R) -> MemberValue,
    ) -> Self {
        Self {
            name,
            category: MemberCategory::Property,
            kind,
            read,
        }
    }

    pub const fn info(&self) -> MemberInfo {
        MemberInfo {
            name: self.name,
            kind: self.kind,
        }
    }
}

// deriveだと R: Clone / R: Debug が要求されるため手動実装
impl<R> Clone for MemberDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for MemberDescriptor<R> {}

impl<R> fmt::Debug for MemberDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// 名前でメンバーを引けるレコード型
///
/// 実装側は宣言順に並べた登録テーブルを静的に提供する。
/// 名前はカテゴリ内で一意であり、`kind`は読み出し関数が返す値の型と一致すること
pub trait Record: Sized + 'static {
    /// 型名（エラーメッセージ用）
    const TYPE_NAME: &'static str;

    /// コンパイル時に登録されたメンバーテーブル
    fn descriptors() -> &'static [MemberDescriptor<Self>];

    /// 宣言されたメンバーを動的に列挙する
    ///
    /// 呼び出しのたびにテーブルを走査して新しい一覧を作る
    fn discover(category: MemberCategory) -> Vec<MemberInfo> {
        Self::descriptors()
            .iter()
            .filter(|descriptor| descriptor.category == category)
            .map(MemberDescriptor::info)
            .collect()
    }

    /// 名前からメンバーの登録情報を探す
    fn find_descriptor(
        category: MemberCategory,
        name: &str,
    ) -> Option<&'static MemberDescriptor<Self>> {
        Self::descriptors()
            .iter()
            .find(|descriptor| descriptor.category == category && descriptor.name == name)
    }
}

/// ベンチマーク設定を抽象化するトレイト
#[automock]
pub trait BenchmarkConfig {
    /// 1サンプルあたりの呼び出し回数
    fn iterations(&self) -> usize;

    /// 計測前のウォームアップ呼び出し回数
    fn warmup_iterations(&self) -> usize;

    /// 計測サンプル数
    fn sample_count(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_reporting(&self) -> bool;
}

/// ベンチマーク進捗報告の抽象化トレイト
#[automock]
pub trait BenchmarkReporter {
    /// 計測開始時の報告
    fn report_started(&self, total_runs: usize);

    /// 1戦略・1カテゴリの計測完了時の報告
    fn report_measurement(&self, measurement: &StrategyMeasurement);

    /// 全計測完了時の報告
    fn report_completed(&self, total_runs: usize);
}
