// テストユーティリティ
// 統合テストで共有するレコード型とヘルパー

pub mod records;

// 公開API
pub use records::*;
