//! 发射器统一错误定义
//!
//! 只有两类失败：调用方传入了非法事件名，或监听器自身返回了错误。
//! 前者属于编程错误，不应重试；后者原样透传给 `emit` 的调用方。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// 监听器返回的错误，不做包装，`Display`/`source` 均透传
    #[error(transparent)]
    Listener(#[from] anyhow::Error),
}

impl EmitterError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        EmitterError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// 是否为非法输入（空事件名等）
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EmitterError::InvalidInput { .. })
    }

    /// 若为监听器错误，返回其原始错误
    pub fn listener_error(&self) -> Option<&anyhow::Error> {
        match self {
            EmitterError::Listener(err) => Some(err),
            _ => None,
        }
    }
}

/// 统一 Result 类型别名
pub type EmitterResult<T> = Result<T, EmitterError>;
