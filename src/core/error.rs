// メンバーアクセス専用のカスタムエラー型定義

use super::traits::MemberCategory;
use super::value::MemberKind;
use thiserror::Error;

/// メンバーアクセス固有のエラー型
///
/// どちらもプログラム（または登録テーブル）の不整合を示し、
/// 呼び出し元の戦略はその場で中断する
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("メンバーが見つかりません: {record_type} に {category} '{name}' は宣言されていません")]
    MemberNotFound {
        record_type: &'static str,
        category: MemberCategory,
        name: String,
    },

    #[error("型不一致: {record_type}::{name} ({category}) は {declared} 型ですが {requested} 型が要求されました")]
    TypeMismatch {
        record_type: &'static str,
        category: MemberCategory,
        name: String,
        requested: MemberKind,
        declared: MemberKind,
    },
}

impl AccessError {
    /// メンバー未検出エラーの作成
    pub fn member_not_found(
        record_type: &'static str,
        category: MemberCategory,
        name: impl Into<String>,
    ) -> Self {
        Self::MemberNotFound {
            record_type,
            category,
            name: name.into(),
        }
    }

    /// 型不一致エラーの作成
    pub fn type_mismatch(
        record_type: &'static str,
        category: MemberCategory,
        name: impl Into<String>,
        requested: MemberKind,
        declared: MemberKind,
    ) -> Self {
        Self::TypeMismatch {
            record_type,
            category,
            name: name.into(),
            requested,
            declared,
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::MemberNotFound {
                record_type, name, ..
            } => ErrorContext::new("member_lookup")
                .with_resource(format!("{record_type}::{name}"))
                .with_suggestion("メンバー名とフィールド/プロパティの区別を確認してください"),
            Self::TypeMismatch {
                record_type,
                name,
                declared,
                ..
            } => ErrorContext::new("type_check")
                .with_resource(format!("{record_type}::{name}"))
                .with_suggestion(format!("{declared} 型で取得してください")),
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（型名::メンバー名）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// メンバーアクセスの結果型
pub type AccessResult<T> = std::result::Result<T, AccessError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型（ベンチマーク設定用）
#[derive(Error, Debug, Clone)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
