// サービス層 - ベンチマークを支える設定と進捗報告
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultBenchmarkConfig;
pub use monitoring::{ConsoleBenchmarkReporter, NoOpBenchmarkReporter};
