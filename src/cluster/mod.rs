//! 集群调度模型
//!
//! 一个最小的 Job Manager / Scheduler 参考实现，用事件内核跑完整的作业生命周期：
//! NEW_JOB -> JOB_ADMISSION -> NEW_TASK_REQ -> PLACEMENT_DECISION -> TASK_FINISH
//! -> RESOURCE_AVAILABLE -> JOB_FINISH。

// 子模块声明
mod job_manager;
mod placement;
mod scheduler;
mod spec;
mod world;
mod worker;

// 重新导出公共接口
pub use job_manager::{JobCompletion, JobManager};
pub use placement::{BestFit, FirstFit, PlacementPolicy, WeakFit, policy_from_spec};
pub use scheduler::Scheduler;
pub use spec::{
    AlgorithmSpec, JobSpec, SpecError, TaskPlacement, TaskSpec, WorkerSpec, read_json_file,
};
pub use world::{ClusterStats, ClusterWorld, simulate};
pub use worker::Worker;

use crate::sim::{EventRecord, SimError};

/// task id 作为同一时刻同类事件的 priority
fn task_priority(task: u32) -> i32 {
    i32::try_from(task).unwrap_or(i32::MAX)
}

fn unexpected_payload(ev: &EventRecord) -> SimError {
    SimError::Handler(format!("{} carries unexpected payload {:?}", ev, ev.payload()))
}
