//! Job Manager
//!
//! 维护作业与 task 的生命周期：收到接纳后提交 task 请求，task 完成后归还资源，
//! 最后一个 task 完成时通知 Scheduler 作业结束。

use super::spec::{JobSpec, SpecError};
use super::{task_priority, unexpected_payload};
use crate::sim::{
    EventKind, EventPayload, EventRecord, JobId, Principal, SimError, SimTime, Simulator,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// 作业完成记录
#[derive(Debug, Clone, Serialize)]
pub struct JobCompletion {
    pub job: JobId,
    pub submit_time: f64,
    pub finish_time: f64,
    pub jct: f64,
}

#[derive(Debug)]
struct JobState {
    spec: JobSpec,
    admitted: bool,
    finished: usize,
}

/// Job Manager：每个作业一份状态，事件按作业 id 路由到这里
#[derive(Debug, Default)]
pub struct JobManager {
    jobs: BTreeMap<JobId, JobState>,
    tasks_finished: u64,
    completions: Vec<JobCompletion>,
}

impl JobManager {
    /// 作业 id 必须唯一
    pub fn new(specs: Vec<JobSpec>) -> Result<Self, SpecError> {
        let mut jobs = BTreeMap::new();
        for spec in specs {
            let id = spec.id;
            let state = JobState {
                spec,
                admitted: false,
                finished: 0,
            };
            if jobs.insert(id, state).is_some() {
                return Err(SpecError::DuplicateJob(id));
            }
        }
        Ok(Self {
            jobs,
            ..Self::default()
        })
    }

    pub fn jobs(&self) -> impl Iterator<Item = &JobSpec> {
        self.jobs.values().map(|s| &s.spec)
    }

    pub fn tasks_finished(&self) -> u64 {
        self.tasks_finished
    }

    pub fn completions(&self) -> &[JobCompletion] {
        &self.completions
    }

    /// 为每个作业在提交时刻调度 NEW_JOB
    pub fn submit_all(&self, sim: &mut Simulator) -> Result<(), SimError> {
        for state in self.jobs.values() {
            let job = state.spec.id;
            sim.schedule(
                EventKind::NewJob,
                SimTime(state.spec.submit_time),
                0,
                Principal::Scheduler,
                EventPayload::Job { job },
            )?;
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, ev, sim), fields(kind = %ev.kind(), now = %sim.now()))]
    pub fn on_event(
        &mut self,
        job: JobId,
        ev: EventRecord,
        sim: &mut Simulator,
    ) -> Result<(), SimError> {
        let state = self
            .jobs
            .get_mut(&job)
            .ok_or_else(|| SimError::Handler(format!("unknown job {}", job.0)))?;

        match ev.kind() {
            EventKind::JobAdmission => {
                info!("📥 作业被接纳，提交 task 请求");
                state.admitted = true;
                for task in &state.spec.tasks {
                    sim.schedule_now(
                        EventKind::NewTaskReq,
                        task_priority(task.id.0),
                        Principal::Scheduler,
                        EventPayload::TaskRequest {
                            job,
                            task: task.id,
                            demand: task.resource,
                            duration: task.duration,
                        },
                    )?;
                }
                if state.spec.tasks.is_empty() {
                    Self::finish_job(state, &mut self.completions, sim)?;
                }
            }
            EventKind::PlacementDecision => {
                let EventPayload::Placement { task, worker, .. } = ev.payload() else {
                    return Err(unexpected_payload(&ev));
                };
                if !state.admitted {
                    return Err(SimError::Handler(format!(
                        "task {} of job {} placed before admission",
                        task.0, job.0
                    )));
                }
                debug!(task = task.0, worker = worker.0, "task 开始运行");
            }
            EventKind::TaskFinish => {
                let EventPayload::Placement { task, .. } = ev.payload() else {
                    return Err(unexpected_payload(&ev));
                };
                debug!(task = task.0, "task 完成，归还资源");
                let priority = task_priority(task.0);
                state.finished += 1;
                self.tasks_finished += 1;
                sim.schedule_now(
                    EventKind::ResourceAvailable,
                    priority,
                    Principal::Scheduler,
                    ev.into_payload(),
                )?;
                if state.finished == state.spec.tasks.len() {
                    Self::finish_job(state, &mut self.completions, sim)?;
                }
            }
            other => {
                return Err(SimError::Handler(format!(
                    "job manager cannot handle {other}"
                )));
            }
        }
        Ok(())
    }

    fn finish_job(
        state: &JobState,
        completions: &mut Vec<JobCompletion>,
        sim: &mut Simulator,
    ) -> Result<(), SimError> {
        let job = state.spec.id;
        let finish_time = sim.now().0;
        info!(job = job.0, finish_time, "🏁 作业完成");
        completions.push(JobCompletion {
            job,
            submit_time: state.spec.submit_time,
            finish_time,
            jct: finish_time - state.spec.submit_time,
        });
        sim.schedule_now(
            EventKind::JobFinish,
            0,
            Principal::Scheduler,
            EventPayload::Job { job },
        )?;
        Ok(())
    }
}
