//! 顶层错误类型
//!
//! 汇总各模块的错误，供命令行入口统一报告。

use crate::cluster::SpecError;
use crate::resource::ResourceError;
use crate::sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
