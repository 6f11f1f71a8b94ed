//! パフォーマンス測定とベンチマークモジュール
//!
//! 4つのアクセス戦略の性能比較を提供

pub mod performance_comparison;

pub use performance_comparison::PerformanceComparison;
