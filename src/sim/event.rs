//! 事件记录
//!
//! 定义事件类型、事件载荷以及事件记录的全序（决定仿真的确定性）。

use super::event_id::{EventId, EventIdGen};
use super::id::{JobId, Principal, TaskId, WorkerId};
use super::time::SimTime;
use crate::resource::ResourcePack;
use std::cmp::Ordering;
use std::fmt;

/// 事件类型。
///
/// 声明顺序即同一时刻多个事件的分派优先级（序号小的先分派），不能随意调整。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// SCH -> JM：运行中的 task 完成
    TaskFinish = 0,
    /// JM -> SCH：worker 上有资源被释放
    ResourceAvailable,
    /// JM -> SCH：作业进入终态
    JobFinish,
    /// SCH -> JM：作业被接纳
    JobAdmission,
    /// SCH -> JM：task 到 worker 的放置决定
    PlacementDecision,
    /// JM -> SCH：为一个 task 申请资源
    NewTaskReq,
    /// JM -> SCH：新作业到达
    NewJob,
}

/// 事件的接收角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Scheduler,
    JobManager,
}

impl EventKind {
    /// 按分派序号排列的全部类型
    pub const ALL: [EventKind; 7] = [
        EventKind::TaskFinish,
        EventKind::ResourceAvailable,
        EventKind::JobFinish,
        EventKind::JobAdmission,
        EventKind::PlacementDecision,
        EventKind::NewTaskReq,
        EventKind::NewJob,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// 该类型事件的接收方角色
    pub fn direction(self) -> Role {
        match self {
            EventKind::TaskFinish | EventKind::JobAdmission | EventKind::PlacementDecision => {
                Role::JobManager
            }
            EventKind::ResourceAvailable
            | EventKind::JobFinish
            | EventKind::NewTaskReq
            | EventKind::NewJob => Role::Scheduler,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EventKind::TaskFinish => "TASK_FINISH",
            EventKind::ResourceAvailable => "RESOURCE_AVAILABLE",
            EventKind::JobFinish => "JOB_FINISH",
            EventKind::JobAdmission => "JOB_ADMISSION",
            EventKind::PlacementDecision => "PLACEMENT_DECISION",
            EventKind::NewTaskReq => "NEW_TASK_REQ",
            EventKind::NewJob => "NEW_JOB",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 按事件类型携带的附加数据。
///
/// 作业/任务/worker 的关联放在这里而不是 EventRecord 的固定字段上，
/// 新增事件类型时不需要改动事件结构。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventPayload {
    #[default]
    None,
    /// NEW_JOB / JOB_ADMISSION / JOB_FINISH
    Job { job: JobId },
    /// NEW_TASK_REQ
    TaskRequest {
        job: JobId,
        task: TaskId,
        demand: ResourcePack,
        duration: f64,
    },
    /// PLACEMENT_DECISION / TASK_FINISH / RESOURCE_AVAILABLE
    Placement {
        job: JobId,
        task: TaskId,
        worker: WorkerId,
        demand: ResourcePack,
    },
}

/// 事件记录：带时间戳、优先级和类型，发往某个 principal 的消息
#[derive(Debug, Clone)]
pub struct EventRecord {
    kind: EventKind,
    time: SimTime,
    priority: i32,
    principal: Principal,
    id: EventId,
    payload: EventPayload,
}

impl EventRecord {
    /// 创建事件并从 `ids` 分配新的唯一 id
    pub fn new(
        ids: &mut EventIdGen,
        kind: EventKind,
        time: SimTime,
        priority: i32,
        principal: Principal,
    ) -> Self {
        Self::with_payload(ids, kind, time, priority, principal, EventPayload::None)
    }

    /// 创建携带载荷的事件
    pub fn with_payload(
        ids: &mut EventIdGen,
        kind: EventKind,
        time: SimTime,
        priority: i32,
        principal: Principal,
        payload: EventPayload,
    ) -> Self {
        Self {
            kind,
            time,
            priority,
            principal,
            id: ids.next_id(),
            payload,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn principal(&self) -> Principal {
        self.principal
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    pub fn into_payload(self) -> EventPayload {
        self.payload
    }

    /// 改写计划时间。
    ///
    /// 已经在优先队列中的事件不能原地修改，必须先移出再重新插入（见 `EventQueue::reschedule`）。
    pub fn set_time(&mut self, time: SimTime) {
        self.time = time;
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// 分派顺序：
    /// 1. 时间（差值超过 `TIME_EPS` 才区分）升序
    /// 2. 事件类型序号升序
    /// 3. priority 升序
    /// 4. id 升序（创建顺序），保证相同 (time, kind, priority) 的事件也有确定的顺序
    pub fn dispatch_cmp(&self, other: &EventRecord) -> Ordering {
        self.time
            .approx_cmp(other.time)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.priority.cmp(&other.priority))
            .then_with(|| self.id.cmp(&other.id))
    }

    /// 前三个键是否都相同（只能靠 id 区分先后）
    pub fn same_slot(&self, other: &EventRecord) -> bool {
        self.time.approx_eq(other.time)
            && self.kind == other.kind
            && self.priority == other.priority
    }
}

impl Ord for EventRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dispatch_cmp(other)
    }
}

impl PartialOrd for EventRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EventRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EventRecord {}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @{} prio={} -> {}",
            self.id, self.kind, self.time, self.priority, self.principal
        )
    }
}
