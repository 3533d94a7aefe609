//! 事件标识符
//!
//! 事件 id 由显式的序列生成器分配，生成器归队列/驱动所有，不存在进程级全局计数器。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 事件唯一标识：同一生成器内单调递增、永不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 事件 id 序列生成器
#[derive(Debug, Default)]
pub struct EventIdGen {
    next: u64,
}

impl EventIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配下一个 id
    pub fn next_id(&mut self) -> EventId {
        let id = EventId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// 已分配的 id 数量
    pub fn issued(&self) -> u64 {
        self.next
    }
}
