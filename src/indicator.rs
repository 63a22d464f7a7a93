//! Maps connection states onto the three-state button indicator.
//!
//! The indicator itself is drawn by the embedding UI. This module only says
//! which indicator state a connection state corresponds to and which
//! presentation commands entering that indicator state implies.
//!
//! 将连接状态映射到三态按钮指示器。绘制由嵌入方 UI 完成，本模块只给出对应的指示器状态和展示命令。

use crate::state::ConnectionState;

/// The visual state of the connect button.
/// 连接按钮的视觉状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndicatorState {
    #[default]
    Off,
    InProgress,
    On,
}

/// A presentation step the UI performs when the indicator changes.
/// 指示器变化时 UI 执行的展示步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCommand {
    /// Show and start the spinning progress ring.
    ShowProgress,
    /// Stop and hide the progress ring.
    HideProgress,
    /// Expand the background fill to cover the badge.
    AnimateOn,
    /// Shrink the background fill back behind the button.
    AnimateOff,
}

impl IndicatorState {
    pub fn for_connection(state: ConnectionState) -> Self {
        match state {
            ConnectionState::Disconnected => IndicatorState::Off,
            ConnectionState::Connecting => IndicatorState::InProgress,
            ConnectionState::Connected => IndicatorState::On,
        }
    }

    /// The commands to run, in order, when entering this state.
    /// 进入该状态时需要按顺序执行的命令。
    pub fn commands(self) -> &'static [IndicatorCommand] {
        use IndicatorCommand::*;

        match self {
            IndicatorState::On => &[HideProgress, AnimateOn],
            IndicatorState::InProgress => &[ShowProgress],
            IndicatorState::Off => &[HideProgress, AnimateOff],
        }
    }
}

impl From<ConnectionState> for IndicatorState {
    fn from(state: ConnectionState) -> Self {
        Self::for_connection(state)
    }
}
