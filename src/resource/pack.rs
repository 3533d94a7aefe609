//! 资源向量
//!
//! ResourcePack 是纯值类型：既可以表示 worker 的容量账本，也可以表示 task 的需求。
//! 值可以在减法后变为负数（表示缺口），不会被截断到 0。

use super::error::ResourceError;
use super::kind::{NUM_RESOURCE_TYPES, ResourceType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{AddAssign, Index, IndexMut, SubAssign};

/// 减法时 Memory 维度的处理策略。
///
/// Memory 预留不会像 CPU/Disk/Network 那样被弹性回收，
/// 所以部分账本操作需要在减法时保持 Memory 不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryPolicy {
    /// 所有维度一起相减
    #[default]
    Reclaim,
    /// Memory 维度保持接收者原值，其余维度相减
    Retain,
}

/// 固定四维的资源向量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ResourceSpec", into = "ResourceSpec")]
pub struct ResourcePack {
    resource: [f64; NUM_RESOURCE_TYPES],
}

/// JSON 形式：`{"cpu": .., "memory": .., "disk": .., "network": ..}`，四个字段都必须存在。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ResourceSpec {
    cpu: f64,
    memory: f64,
    disk: f64,
    network: f64,
}

impl From<ResourceSpec> for ResourcePack {
    fn from(spec: ResourceSpec) -> Self {
        ResourcePack::new(spec.cpu, spec.memory, spec.disk, spec.network)
    }
}

impl From<ResourcePack> for ResourceSpec {
    fn from(pack: ResourcePack) -> Self {
        ResourceSpec {
            cpu: pack.cpu(),
            memory: pack.memory(),
            disk: pack.disk(),
            network: pack.network(),
        }
    }
}

impl ResourcePack {
    /// 按维度给出各分量
    pub fn new(cpu: f64, memory: f64, disk: f64, network: f64) -> Self {
        Self {
            resource: [cpu, memory, disk, network],
        }
    }

    /// 全零向量
    pub fn zero() -> Self {
        Self::default()
    }

    /// 从切片构造；长度必须等于维度数
    pub fn from_slice(values: &[f64]) -> Result<Self, ResourceError> {
        let resource: [f64; NUM_RESOURCE_TYPES] =
            values
                .try_into()
                .map_err(|_| ResourceError::InvalidDimension {
                    expected: NUM_RESOURCE_TYPES,
                    got: values.len(),
                })?;
        Ok(Self { resource })
    }

    /// 解析 JSON 文本
    pub fn from_json_str(raw: &str) -> Result<Self, ResourceError> {
        serde_json::from_str(raw).map_err(|e| ResourceError::Schema(e.to_string()))
    }

    /// 从已解析的 JSON 值构造
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, ResourceError> {
        Self::deserialize(value).map_err(|e| ResourceError::Schema(e.to_string()))
    }

    pub fn cpu(&self) -> f64 {
        self.resource[ResourceType::Cpu.index()]
    }

    pub fn memory(&self) -> f64 {
        self.resource[ResourceType::Memory.index()]
    }

    pub fn disk(&self) -> f64 {
        self.resource[ResourceType::Disk.index()]
    }

    pub fn network(&self) -> f64 {
        self.resource[ResourceType::Network.index()]
    }

    pub fn set_cpu(&mut self, cpu: f64) {
        self.set(ResourceType::Cpu, cpu);
    }

    pub fn set_memory(&mut self, memory: f64) {
        self.set(ResourceType::Memory, memory);
    }

    pub fn set_disk(&mut self, disk: f64) {
        self.set(ResourceType::Disk, disk);
    }

    pub fn set_network(&mut self, network: f64) {
        self.set(ResourceType::Network, network);
    }

    /// 按维度读取
    pub fn get(&self, ty: ResourceType) -> f64 {
        self.resource[ty.index()]
    }

    /// 按维度写入
    pub fn set(&mut self, ty: ResourceType, value: f64) {
        self.resource[ty.index()] = value;
    }

    /// 按下标读取；下标必须在 `[0, NUM_RESOURCE_TYPES)` 内
    pub fn by_index(&self, index: usize) -> Result<f64, ResourceError> {
        self.resource
            .get(index)
            .copied()
            .ok_or(ResourceError::IndexOutOfRange {
                index,
                len: NUM_RESOURCE_TYPES,
            })
    }

    /// 按下标写入
    pub fn set_by_index(&mut self, index: usize, value: f64) -> Result<(), ResourceError> {
        let slot = self
            .resource
            .get_mut(index)
            .ok_or(ResourceError::IndexOutOfRange {
                index,
                len: NUM_RESOURCE_TYPES,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.resource
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.resource.to_vec()
    }

    /// 逐维相加，返回新向量
    pub fn add(&self, rhs: &ResourcePack) -> ResourcePack {
        let mut out = *self;
        out.add_to_me(rhs);
        out
    }

    /// 逐维相加（原地）
    pub fn add_to_me(&mut self, rhs: &ResourcePack) {
        for (lhs, r) in self.resource.iter_mut().zip(rhs.resource) {
            *lhs += r;
        }
    }

    /// 按 Memory 策略逐维相减，返回新向量
    pub fn subtract_with(&self, rhs: &ResourcePack, policy: MemoryPolicy) -> ResourcePack {
        let mut out = *self;
        out.subtract_from_me_with(rhs, policy);
        out
    }

    /// 按 Memory 策略逐维相减（原地）
    pub fn subtract_from_me_with(&mut self, rhs: &ResourcePack, policy: MemoryPolicy) {
        for ty in ResourceType::ALL {
            if ty == ResourceType::Memory && policy == MemoryPolicy::Retain {
                continue;
            }
            self.resource[ty.index()] -= rhs.get(ty);
        }
    }

    pub fn subtract(&self, rhs: &ResourcePack) -> ResourcePack {
        self.subtract_with(rhs, MemoryPolicy::Reclaim)
    }

    pub fn subtract_without_memory(&self, rhs: &ResourcePack) -> ResourcePack {
        self.subtract_with(rhs, MemoryPolicy::Retain)
    }

    pub fn subtract_from_me(&mut self, rhs: &ResourcePack) {
        self.subtract_from_me_with(rhs, MemoryPolicy::Reclaim);
    }

    pub fn subtract_from_me_without_memory(&mut self, rhs: &ResourcePack) {
        self.subtract_from_me_with(rhs, MemoryPolicy::Retain);
    }

    /// 内积：放置算法用作加权匹配得分
    pub fn dot_product(&self, rhs: &ResourcePack) -> f64 {
        self.resource
            .iter()
            .zip(rhs.resource)
            .map(|(l, r)| l * r)
            .sum()
    }

    /// 需求能否放入容量：每一维都满足 `capacity >= demand`（含相等）
    pub fn fit_in(&self, capacity: &ResourcePack) -> bool {
        ResourceType::ALL
            .iter()
            .all(|&ty| capacity.get(ty) >= self.get(ty))
    }

    /// 带超卖系数的可行性判定。
    ///
    /// Memory 仍要求 `capacity >= demand`；其余维度要求 `capacity >= demand * alpha`。
    /// `alpha < 1` 放宽检查，允许容量小于原始需求。
    pub fn weak_fit_in(&self, capacity: &ResourcePack, alpha: f64) -> bool {
        ResourceType::ALL.iter().all(|&ty| {
            let demand = if ty == ResourceType::Memory {
                self.get(ty)
            } else {
                self.get(ty) * alpha
            };
            capacity.get(ty) >= demand
        })
    }

    /// 所有维度都非负（账本没有透支）
    pub fn is_non_negative(&self) -> bool {
        self.resource.iter().all(|v| *v >= 0.0)
    }
}

impl TryFrom<Vec<f64>> for ResourcePack {
    type Error = ResourceError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl Index<ResourceType> for ResourcePack {
    type Output = f64;

    fn index(&self, ty: ResourceType) -> &f64 {
        &self.resource[ty.index()]
    }
}

impl IndexMut<ResourceType> for ResourcePack {
    fn index_mut(&mut self, ty: ResourceType) -> &mut f64 {
        &mut self.resource[ty.index()]
    }
}

impl AddAssign for ResourcePack {
    fn add_assign(&mut self, rhs: ResourcePack) {
        self.add_to_me(&rhs);
    }
}

impl SubAssign for ResourcePack {
    fn sub_assign(&mut self, rhs: ResourcePack) {
        self.subtract_from_me(&rhs);
    }
}

impl fmt::Display for ResourcePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cpu={} memory={} disk={} network={}",
            self.cpu(),
            self.memory(),
            self.disk(),
            self.network()
        )
    }
}
