//! 调度事件
//!
//! 把 EventRecord 包装成可放入 BinaryHeap 的元素。

use super::event::EventRecord;
use std::cmp::Ordering;

/// 队列中的事件
#[derive(Debug)]
pub(crate) struct ScheduledEvent(pub(crate) EventRecord);

// BinaryHeap 是 max-heap；我们需要分派顺序最小的先出队，因此反向比较。
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.dispatch_cmp(&other.0).reverse()
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl Eq for ScheduledEvent {}
