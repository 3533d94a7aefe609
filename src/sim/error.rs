//! 仿真错误类型

use super::event_id::EventId;
use super::time::SimTime;
use crate::resource::ResourceError;
use thiserror::Error;

/// 仿真驱动与事件处理中的错误
#[derive(Debug, Error)]
pub enum SimError {
    /// 试图把事件安排在当前时刻之前
    #[error("cannot schedule event at {at}, clock is already at {now}")]
    ScheduleInPast { now: SimTime, at: SimTime },

    /// NaN 或无穷大的时间无法参与事件排序
    #[error("event time must be finite, got {0}")]
    NonFiniteTime(SimTime),

    /// 出队事件的时间早于当前时钟
    #[error("clock would move backward from {now} to {at}")]
    TimeWentBackwards { now: SimTime, at: SimTime },

    /// 队列中找不到该事件（已分派或已取消）
    #[error("event {0} is not queued")]
    UnknownEvent(EventId),

    /// 事件处理逻辑报告的错误
    #[error("handler failed: {0}")]
    Handler(String),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}
