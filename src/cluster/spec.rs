//! 输入数据格式
//!
//! 作业集合、worker 集合与算法选择三个 JSON 文件的结构。

use crate::resource::ResourcePack;
use crate::sim::{JobId, TaskId, WorkerId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 读取输入文件时的错误
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("cannot open json file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate worker id {0}")]
    DuplicateWorker(WorkerId),
    #[error("duplicate job id {0}")]
    DuplicateJob(JobId),
}

/// 读取并解析一个 JSON 文件
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, SpecError> {
    let raw = fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SpecError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// worker 及其总容量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSpec {
    pub id: WorkerId,
    pub resource: ResourcePack,
}

/// 作业中的一个 task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: TaskId,
    pub resource: ResourcePack,
    pub duration: f64,
}

/// 作业
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    pub id: JobId,
    #[serde(default)]
    pub submit_time: f64,
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

/// task 放置策略
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskPlacement {
    /// 按 worker id 顺序，第一个放得下的
    FirstFit,
    /// 放得下的 worker 中，需求与剩余容量内积最大的
    BestFit,
    /// 按 worker id 顺序，第一个在超卖系数下放得下的
    WeakFit,
}

fn default_alpha() -> f64 {
    1.0
}

/// 算法选择
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmSpec {
    #[serde(rename = "TaskPlacement")]
    pub task_placement: TaskPlacement,
    /// WeakFit 的超卖系数
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for AlgorithmSpec {
    fn default() -> Self {
        Self {
            task_placement: TaskPlacement::FirstFit,
            alpha: default_alpha(),
        }
    }
}
