//! worker 资源账本

use crate::resource::ResourcePack;
use crate::sim::WorkerId;
use tracing::trace;

/// worker：总容量与当前可用容量。
///
/// 账本只归 Scheduler 所有；放置算法通过只读引用查看，需求以值拷贝的方式扣减/归还。
#[derive(Debug, Clone)]
pub struct Worker {
    id: WorkerId,
    capacity: ResourcePack,
    available: ResourcePack,
}

impl Worker {
    pub fn new(id: WorkerId, capacity: ResourcePack) -> Self {
        Self {
            id,
            capacity,
            available: capacity,
        }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    pub fn capacity(&self) -> &ResourcePack {
        &self.capacity
    }

    pub fn available(&self) -> &ResourcePack {
        &self.available
    }

    /// 已被占用的资源
    pub fn used(&self) -> ResourcePack {
        self.capacity.subtract(&self.available)
    }

    /// 扣减需求；超卖时可用容量可以为负
    pub fn allocate(&mut self, demand: &ResourcePack) {
        self.available.subtract_from_me(demand);
        trace!(worker = self.id.0, available = %self.available, "分配资源");
    }

    /// 归还需求
    pub fn release(&mut self, demand: &ResourcePack) {
        self.available.add_to_me(demand);
        trace!(worker = self.id.0, available = %self.available, "释放资源");
    }
}
