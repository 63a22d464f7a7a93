//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the pseudo connection library.
/// 伪连接库的主要错误类型。
///
/// The state machine operations themselves are total; only setting up a
/// machine can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The machine was constructed outside of a tokio runtime, so there is no
    /// timer facility to schedule the delayed transition on.
    ///
    /// 状态机在 tokio 运行时之外构造，没有可用于调度延迟转换的定时器。
    #[error("no tokio runtime available to schedule the connect timer: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;
