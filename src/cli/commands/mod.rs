pub mod benchmark;
pub mod demo;

pub use benchmark::*;
pub use demo::*;

use crate::core::AccessError;

/// アクセサの失敗に対象メンバーと対処方法を添える
///
/// それ以外のエラーはそのまま返す
pub fn explain_failure(error: anyhow::Error) -> anyhow::Error {
    let Some(access) = error.downcast_ref::<AccessError>() else {
        return error;
    };
    let context = access.context();
    tracing::debug!(
        operation = %context.operation,
        resource = ?context.resource,
        "member access failed"
    );

    let mut message = format!("{} に失敗しました", context.operation);
    if let Some(resource) = &context.resource {
        message.push_str(&format!(": {resource}"));
    }
    if let Some(suggestion) = &context.suggestion {
        message.push_str(&format!(" ({suggestion})"));
    }
    error.context(message)
}
