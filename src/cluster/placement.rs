//! task 放置策略
//!
//! 根据需求与各 worker 的可用容量选择一个 worker。

use super::spec::{AlgorithmSpec, TaskPlacement};
use super::worker::Worker;
use crate::resource::ResourcePack;
use crate::sim::WorkerId;

/// 放置策略抽象
pub trait PlacementPolicy: std::fmt::Debug {
    /// 为 `demand` 选择 worker；没有可行的 worker 时返回 None
    fn select(&self, demand: &ResourcePack, workers: &[Worker]) -> Option<WorkerId>;

    /// `demand` 能否放入 `capacity`；接纳判定与 `select` 使用同一标准
    fn feasible(&self, demand: &ResourcePack, capacity: &ResourcePack) -> bool {
        demand.fit_in(capacity)
    }

    fn name(&self) -> &'static str;
}

/// 第一个放得下的 worker
#[derive(Debug, Default)]
pub struct FirstFit;

impl PlacementPolicy for FirstFit {
    fn select(&self, demand: &ResourcePack, workers: &[Worker]) -> Option<WorkerId> {
        workers
            .iter()
            .find(|w| self.feasible(demand, w.available()))
            .map(Worker::id)
    }

    fn name(&self) -> &'static str {
        "first_fit"
    }
}

/// 放得下的 worker 中，`demand · available` 最大的；得分相同取靠前的
#[derive(Debug, Default)]
pub struct BestFit;

impl PlacementPolicy for BestFit {
    fn select(&self, demand: &ResourcePack, workers: &[Worker]) -> Option<WorkerId> {
        let mut best: Option<(f64, WorkerId)> = None;
        for w in workers.iter().filter(|w| self.feasible(demand, w.available())) {
            let score = demand.dot_product(w.available());
            match best {
                Some((s, _)) if s >= score => {}
                _ => best = Some((score, w.id())),
            }
        }
        best.map(|(_, id)| id)
    }

    fn name(&self) -> &'static str {
        "best_fit"
    }
}

/// 允许非 Memory 维度按 `alpha` 超卖
#[derive(Debug)]
pub struct WeakFit {
    pub alpha: f64,
}

impl PlacementPolicy for WeakFit {
    fn select(&self, demand: &ResourcePack, workers: &[Worker]) -> Option<WorkerId> {
        workers
            .iter()
            .find(|w| self.feasible(demand, w.available()))
            .map(Worker::id)
    }

    fn feasible(&self, demand: &ResourcePack, capacity: &ResourcePack) -> bool {
        demand.weak_fit_in(capacity, self.alpha)
    }

    fn name(&self) -> &'static str {
        "weak_fit"
    }
}

/// 根据算法选择构造策略
pub fn policy_from_spec(spec: &AlgorithmSpec) -> Box<dyn PlacementPolicy> {
    match spec.task_placement {
        TaskPlacement::FirstFit => Box::new(FirstFit),
        TaskPlacement::BestFit => Box::new(BestFit),
        TaskPlacement::WeakFit => Box::new(WeakFit { alpha: spec.alpha }),
    }
}
