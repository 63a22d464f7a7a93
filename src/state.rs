//! 定义伪连接的状态机。
//! Defines the state machine of a pseudo connection.
//!
//! The transition table lives here as a pure function so that the
//! [`PseudoConnection`](crate::connection::PseudoConnection) only has to deal
//! with timers and notification.
//!
//! 转换表以纯函数的形式定义在这里，`PseudoConnection` 只需处理定时器和通知。

use std::fmt;

/// The state of a pseudo connection.
/// 伪连接的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionState {
    /// No connection and no pending handshake.
    /// 未连接，也没有进行中的握手。
    #[default]
    Disconnected,

    /// `connect()` was called and the delayed transition is armed.
    /// 已调用 `connect()`，延迟转换已就绪。
    Connecting,

    /// The delayed transition fired without being cancelled.
    /// 延迟转换在未被取消的情况下触发。
    Connected,
}

/// An input to the state machine.
/// 状态机的输入事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// An explicit `connect()` call.
    Connect,
    /// The connect delay elapsed without being cancelled.
    DelayElapsed,
    /// An explicit `disconnect()` call.
    Disconnect,
}

impl ConnectionState {
    /// Applies `event` and returns the state to assign, or `None` if the event
    /// is ignored in this state.
    ///
    /// `Connect` and `Disconnect` are accepted from every state. `DelayElapsed`
    /// only completes a handshake that is still `Connecting`.
    ///
    /// 应用 `event` 并返回要赋值的新状态；如果该事件在当前状态下被忽略，则返回 `None`。
    pub fn on_event(self, event: ConnectionEvent) -> Option<ConnectionState> {
        use ConnectionState::*;

        match (self, event) {
            (_, ConnectionEvent::Connect) => Some(Connecting),
            (_, ConnectionEvent::Disconnect) => Some(Disconnected),
            (Connecting, ConnectionEvent::DelayElapsed) => Some(Connected),
            // 过期的定时器
            // Stale timer.
            (Disconnected | Connected, ConnectionEvent::DelayElapsed) => None,
        }
    }

    /// The event a toggle input resolves to in this state.
    /// 在当前状态下切换输入对应的事件。
    pub fn toggle_event(self) -> ConnectionEvent {
        match self {
            ConnectionState::Disconnected => ConnectionEvent::Connect,
            ConnectionState::Connecting | ConnectionState::Connected => {
                ConnectionEvent::Disconnect
            }
        }
    }

    /// Returns `true` for `Connecting` and `Connected`.
    pub fn is_active(self) -> bool {
        !matches!(self, ConnectionState::Disconnected)
    }

    /// Gets the string representation of this state.
    /// 获取状态的字符串表示。
    pub fn name(self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
