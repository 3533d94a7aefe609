//! 标识符类型
//!
//! 定义作业、任务和 worker 的标识符，以及事件接收方（principal）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 作业标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u32);

/// 任务标识符（在所属作业内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

/// worker 标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub u32);

/// Scheduler 的保留编号
pub const SCHEDULER_PRINCIPAL: i64 = -1;

/// 事件接收方：某个作业的 Job Manager，或全局唯一的 Scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principal {
    Scheduler,
    Job(JobId),
}

impl Principal {
    /// 从整数形式解析：`-1` 为 Scheduler，非负数为作业 id
    pub fn from_raw(raw: i64) -> Option<Principal> {
        if raw == SCHEDULER_PRINCIPAL {
            return Some(Principal::Scheduler);
        }
        u32::try_from(raw).ok().map(|id| Principal::Job(JobId(id)))
    }

    /// 整数形式
    pub fn as_raw(self) -> i64 {
        match self {
            Principal::Scheduler => SCHEDULER_PRINCIPAL,
            Principal::Job(JobId(id)) => i64::from(id),
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::Scheduler => f.write_str("scheduler"),
            Principal::Job(JobId(id)) => write!(f, "job{id}"),
        }
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
