// コアレイヤー - 値モデル、トレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;
pub mod value;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{AccessError, AccessResult, ErrorContext, ValidationError, ValidationResult};
pub use traits::{
    BenchmarkConfig, BenchmarkReporter, MemberCategory, MemberDescriptor, MemberInfo, Record,
};
pub use types::{Statistics, StrategyMeasurement};
pub use value::{MemberKind, MemberType, MemberValue};
