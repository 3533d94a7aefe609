//! 资源维度
//!
//! 维度的位置顺序固定：CPU、Memory、Disk、Network。

use std::fmt;

/// 资源维度数。同一次仿真中所有 ResourcePack 的维度数必须一致。
pub const NUM_RESOURCE_TYPES: usize = 4;

/// 资源维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Cpu = 0,
    Memory = 1,
    Disk = 2,
    Network = 3,
}

impl ResourceType {
    /// 按位置顺序排列的全部维度
    pub const ALL: [ResourceType; NUM_RESOURCE_TYPES] = [
        ResourceType::Cpu,
        ResourceType::Memory,
        ResourceType::Disk,
        ResourceType::Network,
    ];

    /// 维度在向量中的下标
    pub fn index(self) -> usize {
        self as usize
    }

    /// JSON 字段名
    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Cpu => "cpu",
            ResourceType::Memory => "memory",
            ResourceType::Disk => "disk",
            ResourceType::Network => "network",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
