//! 世界 trait
//!
//! 定义仿真世界接口：事件按 principal 分派给 Scheduler 或某个作业的 Job Manager。

use super::error::SimError;
use super::event::EventRecord;
use super::id::JobId;
use super::simulator::Simulator;

/// 仿真世界：由业务层实现（例如集群的 Job Manager 与 Scheduler）。
pub trait World {
    /// 处理发给 Scheduler 的事件
    fn on_scheduler_event(&mut self, ev: EventRecord, sim: &mut Simulator)
    -> Result<(), SimError>;

    /// 处理发给作业 `job` 的 Job Manager 的事件
    fn on_job_event(
        &mut self,
        job: JobId,
        ev: EventRecord,
        sim: &mut Simulator,
    ) -> Result<(), SimError>;

    /// 每分派一个事件后调用
    fn on_tick(&mut self, _sim: &mut Simulator) {}

    /// 全局终止条件；返回 true 时即使队列非空也停止
    fn is_done(&self) -> bool {
        false
    }
}
