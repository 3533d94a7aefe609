//! 仿真核心模块
//!
//! 此模块包含离散事件仿真的核心组件：仿真时间、事件记录及其全序、事件队列、世界和仿真器。

// 子模块声明
mod error;
mod event;
mod event_id;
mod id;
mod queue;
mod scheduled_event;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use error::SimError;
pub use event::{EventKind, EventPayload, EventRecord, Role};
pub use event_id::{EventId, EventIdGen};
pub use id::{JobId, Principal, SCHEDULER_PRINCIPAL, TaskId, WorkerId};
pub use queue::EventQueue;
pub use simulator::Simulator;
pub use time::{SimTime, TIME_EPS};
pub use world::World;
