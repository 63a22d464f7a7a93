//! 定义了伪连接状态机。
//! Defines the pseudo connection state machine.
//!
//! A [`PseudoConnection`] models a two-step handshake: `connect()` moves to
//! `Connecting` straight away and a one-shot timer completes the move to
//! `Connected` after [`Config::connect_delay`]. `disconnect()` cancels that
//! timer. Every state assignment is reported to the single observer.
//!
//! `PseudoConnection` 模拟两步握手：`connect()` 立即进入 `Connecting`，
//! 一次性定时器在 `connect_delay` 之后完成到 `Connected` 的转换。
//! `disconnect()` 会取消该定时器。每次状态赋值都会通知唯一的观察者。

use crate::{
    config::{Config, NotifyPolicy},
    error::Result,
    observer::StateObserver,
    state::{ConnectionEvent, ConnectionState},
    timer::PendingTransition,
};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
};
use tokio::runtime::Handle;
use tracing::{debug, trace};


/// Mutable part of the machine, guarded by [`Shared::inner`].
#[derive(Debug, Default)]
struct Inner {
    state: ConnectionState,
    pending: Option<PendingTransition>,
    /// Incremented every time a delayed transition is armed.
    epoch: u64,
}

impl Inner {
    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

/// State shared between the owner and the timer task. The timer task only
/// ever holds a [`Weak`] reference.
struct Shared {
    inner: Mutex<Inner>,
    observer: Box<dyn StateObserver>,
    notify_policy: NotifyPolicy,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // `Inner` is valid after any partial update, so a panicking observer
        // does not wedge the machine.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 赋值新状态并通知观察者
    /// Assigns `next` and notifies the observer
    fn assign(&self, inner: &mut Inner, next: ConnectionState) {
        let previous = std::mem::replace(&mut inner.state, next);

        if previous == next {
            trace!(state = %next, "State reassigned");
            if self.notify_policy == NotifyPolicy::OnChange {
                return;
            }
        } else {
            debug!(from = %previous, to = %next, "State transition");
        }

        self.observer.on_state_change(next);
    }

    /// Called from the timer task once the connect delay has elapsed.
    fn complete_handshake(&self, epoch: u64) {
        let mut inner = self.lock();

        // The timer may have woken up while another thread held the lock and
        // cancelled or re-armed it.
        match inner.pending.as_ref() {
            Some(pending) if pending.epoch() == epoch => {}
            _ => {
                trace!(epoch, "Stale delayed transition ignored");
                return;
            }
        }
        inner.pending = None;

        if let Some(next) = inner.state.on_event(ConnectionEvent::DelayElapsed) {
            self.assign(&mut inner, next);
        }
    }
}

/// A toy connection that a tap toggles between disconnected and a
/// delayed-completion connected state.
///
/// All operations take `&self` and never fail. They may be called from any
/// thread; the delayed transition runs on the tokio runtime captured at
/// construction. Dropping the connection cancels a pending transition.
///
/// 一个由点击在断开与延迟完成的已连接状态之间切换的玩具连接。
///
/// # Examples
///
/// ```no_run
/// use pseudo_connection::{ConnectionState, PseudoConnection};
///
/// # async fn demo() -> pseudo_connection::error::Result<()> {
/// let connection = PseudoConnection::new(|state: ConnectionState| {
///     println!("now {state}");
/// })?;
/// connection.toggle(); // connecting
/// connection.toggle(); // disconnected, the pending transition never fires
/// # Ok(())
/// # }
/// ```
pub struct PseudoConnection {
    shared: Arc<Shared>,
    runtime: Handle,
    config: Config,
}

impl PseudoConnection {
    /// Creates a disconnected machine with the default [`Config`].
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// 使用默认配置创建一个处于断开状态的状态机。必须在 tokio 运行时中调用。
    pub fn new<O: StateObserver>(observer: O) -> Result<Self> {
        Self::with_config(Config::default(), observer)
    }

    /// Creates a disconnected machine with an explicit [`Config`].
    ///
    /// The observer is not called for the initial state.
    ///
    /// 使用指定配置创建状态机。初始状态不会通知观察者。
    pub fn with_config<O: StateObserver>(config: Config, observer: O) -> Result<Self> {
        let runtime = Handle::try_current()?;

        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner::default()),
            observer: Box::new(observer),
            notify_policy: config.notify_policy,
        });

        trace!(connect_delay = ?config.connect_delay, "Pseudo connection created");

        Ok(Self {
            shared,
            runtime,
            config,
        })
    }

    /// The current state.
    pub fn state(&self) -> ConnectionState {
        self.shared.lock().state
    }

    /// Whether a delayed `Connecting -> Connected` transition is armed.
    /// 是否存在待触发的延迟转换。
    pub fn has_pending_transition(&self) -> bool {
        self.shared.lock().pending.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Moves to `Connecting`, notifies, and arms the delayed transition to
    /// `Connected`.
    ///
    /// Valid from every state. A transition armed by an earlier `connect()`
    /// is cancelled first, so the delay restarts and at most one transition
    /// is ever pending.
    ///
    /// 进入 `Connecting` 状态，通知观察者，并启动到 `Connected` 的延迟转换。
    /// 之前 `connect()` 启动的转换会先被取消，因此延迟重新计时，且最多只有一个待触发转换。
    pub fn connect(&self) {
        let mut inner = self.shared.lock();
        self.apply(&mut inner, ConnectionEvent::Connect);
    }

    /// Cancels any pending transition, moves to `Disconnected` and notifies.
    ///
    /// 取消任何待触发的转换，进入 `Disconnected` 状态并通知观察者。
    pub fn disconnect(&self) {
        let mut inner = self.shared.lock();
        self.apply(&mut inner, ConnectionEvent::Disconnect);
    }

    /// `connect()` when disconnected, `disconnect()` otherwise.
    ///
    /// The current state is read and acted on under a single lock.
    pub fn toggle(&self) {
        let mut inner = self.shared.lock();
        let event = inner.state.toggle_event();
        self.apply(&mut inner, event);
    }

    fn apply(&self, inner: &mut Inner, event: ConnectionEvent) {
        let Some(next) = inner.state.on_event(event) else {
            return;
        };

        inner.cancel_pending();
        self.shared.assign(inner, next);

        if event == ConnectionEvent::Connect {
            self.arm(inner);
        }
    }

    fn arm(&self, inner: &mut Inner) {
        inner.epoch = inner.epoch.wrapping_add(1);
        let epoch = inner.epoch;
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);

        inner.pending = Some(PendingTransition::schedule(
            &self.runtime,
            epoch,
            self.config.connect_delay,
            move || {
                if let Some(shared) = shared.upgrade() {
                    shared.complete_handshake(epoch);
                }
            },
        ));
    }
}

impl fmt::Debug for PseudoConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.lock();
        f.debug_struct("PseudoConnection")
            .field("state", &inner.state)
            .field("pending_transition", &inner.pending.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl Drop for PseudoConnection {
    fn drop(&mut self) {
        let mut inner = self.shared.lock();
        if inner.pending.is_some() {
            trace!(state = %inner.state, "Pseudo connection dropped with a pending transition");
        }
        inner.cancel_pending();
    }
}
