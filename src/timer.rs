//! 一次性延迟转换定时器
//! One-shot delayed transition timer
//!
//! 该模块提供可取消的一次性定时器，用于在固定延迟后完成连接握手。
//! 定时器在被取消或被丢弃时都会中止底层任务，因此不会留下悬空回调。
//!
//! This module provides a cancellable one-shot timer used to complete the
//! connection handshake after a fixed delay. The underlying task is aborted
//! both on explicit cancellation and on drop, so no callback outlives its
//! owner.

use std::time::Duration;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::trace;


/// A scheduled one-shot transition that has not fired yet.
///
/// Owning a `PendingTransition` is owning the timer: dropping it aborts the
/// scheduled task.
///
/// 一个尚未触发的一次性转换。持有 `PendingTransition` 即持有定时器，丢弃它会中止调度任务。
#[derive(Debug)]
pub(crate) struct PendingTransition {
    /// 调度时的纪元，用于识别过期的触发
    /// Epoch it was armed under, used to recognise stale firings
    epoch: u64,
    handle: JoinHandle<()>,
}

impl PendingTransition {
    /// Spawns a task on `runtime` that sleeps for `delay` and then runs
    /// `on_elapsed` once.
    ///
    /// 在 `runtime` 上启动一个任务，休眠 `delay` 后执行一次 `on_elapsed`。
    pub(crate) fn schedule<F>(runtime: &Handle, epoch: u64, delay: Duration, on_elapsed: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed();
        });
        trace!(epoch, ?delay, "Delayed transition armed");

        Self { epoch, handle }
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Cancels the transition. Has no effect if it already fired.
    /// 取消转换。如果已经触发则无效果。
    pub(crate) fn cancel(self) {
        trace!(epoch = self.epoch, "Delayed transition cancelled");
        // Drop aborts the task.
    }
}

impl Drop for PendingTransition {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
