//! 资源模块
//!
//! 定义多维资源向量（CPU / Memory / Disk / Network）及其算术与可行性判定。

// 子模块声明
mod error;
mod kind;
mod pack;

// 重新导出公共接口
pub use error::ResourceError;
pub use kind::{NUM_RESOURCE_TYPES, ResourceType};
pub use pack::{MemoryPolicy, ResourcePack};
