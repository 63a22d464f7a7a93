//! 状态变化观察者接口。
//! The state change observer interface.
//!
//! A [`PseudoConnection`](crate::connection::PseudoConnection) has exactly one
//! observer, supplied at construction. Closures and tokio channel senders can
//! be used directly.

use crate::state::ConnectionState;
use tokio::sync::{mpsc, watch};
use tracing::trace;

/// Receives every state assignment of a pseudo connection.
///
/// Called synchronously while the machine's state lock is held, so it must
/// return quickly and must not call back into the same connection.
///
/// 接收伪连接的每一次状态赋值。
/// 在持有状态锁时同步调用，因此必须快速返回，且不能回调同一个连接。
pub trait StateObserver: Send + Sync + 'static {
    fn on_state_change(&self, state: ConnectionState);
}

impl<F> StateObserver for F
where
    F: Fn(ConnectionState) + Send + Sync + 'static,
{
    fn on_state_change(&self, state: ConnectionState) {
        self(state)
    }
}

impl StateObserver for mpsc::UnboundedSender<ConnectionState> {
    fn on_state_change(&self, state: ConnectionState) {
        if self.send(state).is_err() {
            trace!(%state, "State receiver dropped, notification discarded");
        }
    }
}

impl StateObserver for watch::Sender<ConnectionState> {
    fn on_state_change(&self, state: ConnectionState) {
        // `send_replace` so repeated assignments still mark the value as changed.
        self.send_replace(state);
    }
}
