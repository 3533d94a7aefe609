//! Scheduler
//!
//! 全局唯一的决策者：作业接纳、worker 资源账本、task 放置。

use super::placement::PlacementPolicy;
use super::spec::{JobSpec, SpecError, WorkerSpec};
use super::worker::Worker;
use super::{task_priority, unexpected_payload};
use crate::resource::ResourcePack;
use crate::sim::{
    EventKind, EventPayload, EventRecord, JobId, Principal, SimError, Simulator, TaskId, WorkerId,
};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info, warn};

/// 等待放置的 task 请求
#[derive(Debug, Clone)]
struct PendingTask {
    job: JobId,
    task: TaskId,
    demand: ResourcePack,
    duration: f64,
}

/// Scheduler 状态
#[derive(Debug)]
pub struct Scheduler {
    workers: Vec<Worker>,
    policy: Box<dyn PlacementPolicy>,
    job_demands: HashMap<JobId, Vec<ResourcePack>>,
    pending: VecDeque<PendingTask>,
    jobs_admitted: u64,
    jobs_rejected: u64,
    jobs_finished: u64,
    tasks_placed: u64,
}

impl Scheduler {
    /// 按 id 排序建立 worker 账本；id 必须唯一
    pub fn new(
        workers: &[WorkerSpec],
        policy: Box<dyn PlacementPolicy>,
    ) -> Result<Self, SpecError> {
        let mut workers: Vec<Worker> = workers
            .iter()
            .map(|w| Worker::new(w.id, w.resource))
            .collect();
        workers.sort_by_key(Worker::id);
        if let Some(dup) = workers.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(SpecError::DuplicateWorker(dup[0].id()));
        }
        Ok(Self {
            workers,
            policy,
            job_demands: HashMap::new(),
            pending: VecDeque::new(),
            jobs_admitted: 0,
            jobs_rejected: 0,
            jobs_finished: 0,
            tasks_placed: 0,
        })
    }

    /// 登记作业各 task 的需求（拷贝），用于接纳判定
    pub fn register_job(&mut self, job: &JobSpec) {
        let demands = job.tasks.iter().map(|t| t.resource).collect();
        self.job_demands.insert(job.id, demands);
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn pending_tasks(&self) -> usize {
        self.pending.len()
    }

    pub fn jobs_admitted(&self) -> u64 {
        self.jobs_admitted
    }

    pub fn jobs_rejected(&self) -> u64 {
        self.jobs_rejected
    }

    pub fn jobs_finished(&self) -> u64 {
        self.jobs_finished
    }

    pub fn tasks_placed(&self) -> u64 {
        self.tasks_placed
    }

    #[tracing::instrument(skip(self, ev, sim), fields(kind = %ev.kind(), now = %sim.now()))]
    pub fn on_event(&mut self, ev: EventRecord, sim: &mut Simulator) -> Result<(), SimError> {
        match (ev.kind(), ev.payload()) {
            (EventKind::NewJob, EventPayload::Job { job }) => self.admit(*job, sim),
            (
                EventKind::NewTaskReq,
                EventPayload::TaskRequest {
                    job,
                    task,
                    demand,
                    duration,
                },
            ) => {
                debug!(job = job.0, task = task.0, demand = %demand, "收到 task 请求");
                self.pending.push_back(PendingTask {
                    job: *job,
                    task: *task,
                    demand: *demand,
                    duration: *duration,
                });
                self.place_pending(sim)
            }
            (
                EventKind::ResourceAvailable,
                EventPayload::Placement { worker, demand, .. },
            ) => {
                self.worker_mut(*worker)?.release(demand);
                self.place_pending(sim)
            }
            (EventKind::JobFinish, EventPayload::Job { job }) => {
                info!(job = job.0, "作业结束");
                self.jobs_finished += 1;
                self.job_demands.remove(job);
                Ok(())
            }
            (
                EventKind::NewJob
                | EventKind::NewTaskReq
                | EventKind::ResourceAvailable
                | EventKind::JobFinish,
                _,
            ) => Err(unexpected_payload(&ev)),
            (other, _) => Err(SimError::Handler(format!("scheduler cannot handle {other}"))),
        }
    }

    /// 作业的每个 task 在当前策略下都能放入某个 worker 的总容量时接纳
    fn admit(&mut self, job: JobId, sim: &mut Simulator) -> Result<(), SimError> {
        let demands = self
            .job_demands
            .get(&job)
            .ok_or_else(|| SimError::Handler(format!("job {} was never registered", job.0)))?;
        let feasible = demands.iter().all(|d| {
            self.workers
                .iter()
                .any(|w| self.policy.feasible(d, w.capacity()))
        });
        if !feasible {
            warn!(job = job.0, "作业无法被任何 worker 容纳，拒绝");
            self.jobs_rejected += 1;
            self.job_demands.remove(&job);
            return Ok(());
        }
        self.jobs_admitted += 1;
        sim.schedule_now(
            EventKind::JobAdmission,
            0,
            Principal::Job(job),
            EventPayload::Job { job },
        )?;
        Ok(())
    }

    /// 按 FIFO 顺序尝试放置所有等待中的请求；放不下的留在队列中
    fn place_pending(&mut self, sim: &mut Simulator) -> Result<(), SimError> {
        let mut still_pending = VecDeque::with_capacity(self.pending.len());
        while let Some(req) = self.pending.pop_front() {
            let Some(worker) = self.policy.select(&req.demand, &self.workers) else {
                still_pending.push_back(req);
                continue;
            };
            self.worker_mut(worker)?.allocate(&req.demand);
            self.tasks_placed += 1;
            debug!(
                job = req.job.0,
                task = req.task.0,
                worker = worker.0,
                policy = self.policy.name(),
                "放置 task"
            );

            let priority = task_priority(req.task.0);
            let payload = EventPayload::Placement {
                job: req.job,
                task: req.task,
                worker,
                demand: req.demand,
            };
            sim.schedule_now(
                EventKind::PlacementDecision,
                priority,
                Principal::Job(req.job),
                payload.clone(),
            )?;
            sim.schedule(
                EventKind::TaskFinish,
                sim.now().after(req.duration),
                priority,
                Principal::Job(req.job),
                payload,
            )?;
        }
        self.pending = still_pending;
        Ok(())
    }

    fn worker_mut(&mut self, id: WorkerId) -> Result<&mut Worker, SimError> {
        self.workers
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| SimError::Handler(format!("unknown worker {}", id.0)))
    }
}
