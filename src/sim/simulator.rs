//! 仿真器
//!
//! 定义事件驱动仿真器，维护当前时间、事件 id 生成器与事件队列。

use super::error::SimError;
use super::event::{EventKind, EventPayload, EventRecord};
use super::event_id::{EventId, EventIdGen};
use super::id::Principal;
use super::queue::EventQueue;
use super::time::SimTime;
use super::world::World;
use tracing::{debug, info, trace};

/// 事件驱动仿真器：单线程循环，时钟只随出队事件前进。
#[derive(Debug, Default)]
pub struct Simulator {
    now: SimTime,
    ids: EventIdGen,
    q: EventQueue,
    dispatched: u64,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 队列中待分派的事件数
    pub fn pending(&self) -> usize {
        self.q.len()
    }

    /// 累计已分派的事件数
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn queue(&self) -> &EventQueue {
        &self.q
    }

    /// 用仿真器自己的 id 生成器创建事件（不入队）
    pub fn make_event(
        &mut self,
        kind: EventKind,
        at: SimTime,
        priority: i32,
        principal: Principal,
        payload: EventPayload,
    ) -> EventRecord {
        EventRecord::with_payload(&mut self.ids, kind, at, priority, principal, payload)
    }

    /// 把已创建的事件放入队列；不允许早于当前时间
    pub fn push(&mut self, ev: EventRecord) -> Result<EventId, SimError> {
        if !ev.time().is_finite() {
            return Err(SimError::NonFiniteTime(ev.time()));
        }
        if ev.time().is_before(self.now) {
            return Err(SimError::ScheduleInPast {
                now: self.now,
                at: ev.time(),
            });
        }
        let id = ev.id();
        self.q.push(ev);
        debug!(queue_size = self.q.len(), "事件已加入队列");
        Ok(id)
    }

    /// 调度事件在指定时间分派
    #[tracing::instrument(skip(self, payload), fields(schedule_at = %at))]
    pub fn schedule(
        &mut self,
        kind: EventKind,
        at: SimTime,
        priority: i32,
        principal: Principal,
        payload: EventPayload,
    ) -> Result<EventId, SimError> {
        let ev = self.make_event(kind, at, priority, principal, payload);
        trace!(now = %self.now, id = %ev.id(), "调度事件");
        self.push(ev)
    }

    /// 调度事件在当前时刻分派
    pub fn schedule_now(
        &mut self,
        kind: EventKind,
        priority: i32,
        principal: Principal,
        payload: EventPayload,
    ) -> Result<EventId, SimError> {
        self.schedule(kind, self.now, priority, principal, payload)
    }

    /// 取消尚未分派的事件
    pub fn cancel(&mut self, id: EventId) -> Option<EventRecord> {
        self.q.cancel(id)
    }

    /// 改期尚未分派的事件
    pub fn reschedule(&mut self, id: EventId, at: SimTime) -> Result<EventId, SimError> {
        if !at.is_finite() {
            return Err(SimError::NonFiniteTime(at));
        }
        if at.is_before(self.now) {
            return Err(SimError::ScheduleInPast { now: self.now, at });
        }
        self.q.reschedule(id, at)
    }

    /// 运行直到事件队列为空或 `until` 之后的事件，然后把时钟推进到 `until`。
    ///
    /// `until` 为正无穷时等同于 `run`，时钟停在最后一个事件。
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) -> Result<u64, SimError> {
        if until.0.is_nan() {
            return Err(SimError::NonFiniteTime(until));
        }
        let mut event_count = 0;
        while let Some(top) = self.q.peek() {
            if until.is_before(top.time()) || world.is_done() {
                break;
            }
            if let Some(ev) = self.q.pop() {
                self.dispatch(ev, world)?;
                event_count += 1;
            }
        }
        if until.is_finite() {
            self.now = self.now.max(until);
        }
        Ok(event_count)
    }

    /// 运行所有事件直到队列为空或世界报告终止。
    #[tracing::instrument(skip(self, world))]
    pub fn run(&mut self, world: &mut dyn World) -> Result<u64, SimError> {
        info!("▶️  开始运行仿真");
        debug!(now = %self.now, queue_size = self.q.len(), "初始状态");

        let mut event_count = 0;
        while !world.is_done() {
            let Some(ev) = self.q.pop() else {
                break;
            };
            self.dispatch(ev, world)?;
            event_count += 1;
        }

        info!(
            total_events = event_count,
            final_time = %self.now,
            remaining_queue = self.q.len(),
            "✅ 仿真完成"
        );
        Ok(event_count)
    }

    fn dispatch(&mut self, ev: EventRecord, world: &mut dyn World) -> Result<(), SimError> {
        if ev.time().is_before(self.now) {
            return Err(SimError::TimeWentBackwards {
                now: self.now,
                at: ev.time(),
            });
        }
        self.now = self.now.max(ev.time());
        self.dispatched += 1;

        debug!(
            event_num = self.dispatched,
            now = %self.now,
            id = %ev.id(),
            kind = %ev.kind(),
            principal = %ev.principal(),
            remaining_queue = self.q.len(),
            "执行事件"
        );

        match ev.principal() {
            Principal::Scheduler => world.on_scheduler_event(ev, self)?,
            Principal::Job(job) => world.on_job_event(job, ev, self)?,
        }
        world.on_tick(self);
        Ok(())
    }
}
