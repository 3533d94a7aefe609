//! 事件队列
//!
//! 按分派顺序出队的优先队列。插入和取最小是队列仅有的两个修改点；
//! 取消即移除，改期即移除后改写时间再插入。

use super::error::SimError;
use super::event::EventRecord;
use super::event_id::EventId;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use std::collections::BinaryHeap;
use tracing::trace;

/// 待分派事件队列
#[derive(Debug, Default)]
pub struct EventQueue {
    q: BinaryHeap<ScheduledEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ev: EventRecord) {
        trace!(event = %ev, "入队");
        self.q.push(ScheduledEvent(ev));
    }

    /// 取出分派顺序最小的事件
    pub fn pop(&mut self) -> Option<EventRecord> {
        self.q.pop().map(|item| item.0)
    }

    pub fn peek(&self) -> Option<&EventRecord> {
        self.q.peek().map(|item| &item.0)
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.q.iter().any(|item| item.0.id() == id)
    }

    /// 取消事件：从队列中移除并返回它
    pub fn cancel(&mut self, id: EventId) -> Option<EventRecord> {
        let mut removed = None;
        self.q.retain(|item| {
            if removed.is_none() && item.0.id() == id {
                removed = Some(item.0.clone());
                false
            } else {
                true
            }
        });
        if removed.is_some() {
            trace!(%id, "事件已取消");
        }
        removed
    }

    /// 改期：移除 -> 改写时间 -> 重新插入
    pub fn reschedule(&mut self, id: EventId, at: SimTime) -> Result<EventId, SimError> {
        if !at.is_finite() {
            return Err(SimError::NonFiniteTime(at));
        }
        let mut ev = self.cancel(id).ok_or(SimError::UnknownEvent(id))?;
        ev.set_time(at);
        self.push(ev);
        Ok(id)
    }

    /// 按分派顺序排列的快照（不修改队列）
    pub fn sorted_snapshot(&self) -> Vec<EventRecord> {
        let mut out: Vec<EventRecord> = self.q.iter().map(|item| item.0.clone()).collect();
        out.sort();
        out
    }
}
