//! 集群世界
//!
//! 把 Job Manager 与 Scheduler 接到仿真器上：发给 Scheduler 的事件交给 Scheduler，
//! 发给作业的事件交给 Job Manager。

use super::job_manager::{JobCompletion, JobManager};
use super::placement::policy_from_spec;
use super::scheduler::Scheduler;
use super::spec::{AlgorithmSpec, JobSpec, SpecError, WorkerSpec};
use crate::Error;
use crate::sim::{EventRecord, JobId, SimError, SimTime, Simulator, World};
use serde::Serialize;
use tracing::info;

/// 仿真结束后的汇总
#[derive(Debug, Clone, Serialize)]
pub struct ClusterStats {
    pub placement: &'static str,
    pub jobs_admitted: u64,
    pub jobs_rejected: u64,
    pub jobs_finished: u64,
    pub tasks_placed: u64,
    pub tasks_finished: u64,
    pub tasks_pending: usize,
    pub events_dispatched: u64,
    pub makespan: f64,
    pub jobs: Vec<JobCompletion>,
}

/// 集群仿真世界
#[derive(Debug)]
pub struct ClusterWorld {
    pub job_manager: JobManager,
    pub scheduler: Scheduler,
}

impl ClusterWorld {
    /// worker id 或作业 id 重复时返回 `SpecError`
    pub fn new(
        jobs: Vec<JobSpec>,
        workers: &[WorkerSpec],
        algorithm: &AlgorithmSpec,
    ) -> Result<Self, SpecError> {
        let job_manager = JobManager::new(jobs)?;
        let mut scheduler = Scheduler::new(workers, policy_from_spec(algorithm))?;
        for job in job_manager.jobs() {
            scheduler.register_job(job);
        }
        info!(
            jobs = job_manager.jobs().count(),
            workers = workers.len(),
            placement = ?algorithm.task_placement,
            alpha = algorithm.alpha,
            "集群初始化"
        );
        Ok(Self {
            job_manager,
            scheduler,
        })
    }

    /// 注入初始事件（每个作业一个 NEW_JOB）
    pub fn seed(&self, sim: &mut Simulator) -> Result<(), SimError> {
        self.job_manager.submit_all(sim)
    }

    pub fn stats(&self, sim: &Simulator) -> ClusterStats {
        let jobs = self.job_manager.completions().to_vec();
        let makespan = jobs.iter().map(|j| j.finish_time).fold(0.0, f64::max);
        ClusterStats {
            placement: self.scheduler.policy_name(),
            jobs_admitted: self.scheduler.jobs_admitted(),
            jobs_rejected: self.scheduler.jobs_rejected(),
            jobs_finished: self.scheduler.jobs_finished(),
            tasks_placed: self.scheduler.tasks_placed(),
            tasks_finished: self.job_manager.tasks_finished(),
            tasks_pending: self.scheduler.pending_tasks(),
            events_dispatched: sim.dispatched(),
            makespan,
            jobs,
        }
    }
}

impl World for ClusterWorld {
    fn on_scheduler_event(
        &mut self,
        ev: EventRecord,
        sim: &mut Simulator,
    ) -> Result<(), SimError> {
        self.scheduler.on_event(ev, sim)
    }

    fn on_job_event(
        &mut self,
        job: JobId,
        ev: EventRecord,
        sim: &mut Simulator,
    ) -> Result<(), SimError> {
        self.job_manager.on_event(job, ev, sim)
    }
}

/// 构建集群世界、注入初始事件并运行；`until` 为 None 时运行到队列为空。
pub fn simulate(
    jobs: Vec<JobSpec>,
    workers: &[WorkerSpec],
    algorithm: &AlgorithmSpec,
    until: Option<SimTime>,
) -> Result<ClusterStats, Error> {
    let mut sim = Simulator::default();
    let mut world = ClusterWorld::new(jobs, workers, algorithm)?;
    world.seed(&mut sim)?;

    match until {
        Some(until) => sim.run_until(until, &mut world)?,
        None => sim.run(&mut world)?,
    };

    Ok(world.stats(&sim))
}
