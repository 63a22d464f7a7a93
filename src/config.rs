//! 定义了伪连接状态机的可配置参数。
//! Defines configurable parameters for the pseudo connection state machine.

use std::time::Duration;

/// Default time spent in `Connecting` before the connection completes.
const DEFAULT_CONNECT_DELAY: Duration = Duration::from_secs(3);

/// A structure containing all configurable parameters for a connection.
///
/// 包含所有连接可配置参数的结构体。
#[derive(Debug, Clone)]
pub struct Config {
    /// How long the machine stays in `Connecting` before the delayed
    /// transition to `Connected` fires.
    /// 状态机在 `Connecting` 状态停留多久后触发到 `Connected` 的延迟转换。
    pub connect_delay: Duration,

    /// Which state assignments reach the observer.
    /// 哪些状态赋值会通知观察者。
    pub notify_policy: NotifyPolicy,
}

/// Controls whether assigning the state it already holds notifies the observer.
///
/// 控制重复赋值相同状态时是否通知观察者。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Every assignment notifies, including `disconnect()` while already
    /// disconnected.
    /// 每次赋值都通知，包括已断开时再次调用 `disconnect()`。
    #[default]
    Always,
    /// Only assignments that change the state notify.
    /// 仅在状态实际改变时通知。
    OnChange,
}

impl Config {
    /// Returns a copy of this config with a different connect delay.
    pub fn with_connect_delay(mut self, connect_delay: Duration) -> Self {
        self.connect_delay = connect_delay;
        self
    }

    /// Returns a copy of this config with a different notify policy.
    pub fn with_notify_policy(mut self, notify_policy: NotifyPolicy) -> Self {
        self.notify_policy = notify_policy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_delay: DEFAULT_CONNECT_DELAY,
            notify_policy: NotifyPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.connect_delay, Duration::from_secs(3));
        assert_eq!(config.notify_policy, NotifyPolicy::Always);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::default()
            .with_connect_delay(Duration::from_millis(250))
            .with_notify_policy(NotifyPolicy::OnChange);
        assert_eq!(config.connect_delay, Duration::from_millis(250));
        assert_eq!(config.notify_policy, NotifyPolicy::OnChange);
    }
}
