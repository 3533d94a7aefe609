//! 仿真时间类型
//!
//! 仿真时钟是实数（单位由输入数据决定，一般为秒），比较时带绝对误差容忍。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 时间比较的绝对误差：差值不超过它的两个时刻视为同一时刻。
pub const TIME_EPS: f64 = 1e-6;

/// 仿真时间。
///
/// `==` 与 `approx_eq` 一致（误差内相等）；没有 `PartialOrd`，排序一律用 `approx_cmp`。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// 带误差容忍的比较：`|a - b| <= TIME_EPS` 时返回 `Equal`
    pub fn approx_cmp(self, other: SimTime) -> Ordering {
        if (self.0 - other.0).abs() > TIME_EPS {
            self.0.total_cmp(&other.0)
        } else {
            Ordering::Equal
        }
    }

    /// 是否与 `other` 在误差范围内相等
    pub fn approx_eq(self, other: SimTime) -> bool {
        self.approx_cmp(other) == Ordering::Equal
    }

    /// 是否严格早于 `other`（超出误差）
    pub fn is_before(self, other: SimTime) -> bool {
        self.approx_cmp(other) == Ordering::Less
    }

    /// 有限值才能进入事件队列
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// 当前时刻之后 `delay` 的时刻
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }

    pub fn max(self, other: SimTime) -> SimTime {
        if other.0 > self.0 { other } else { self }
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl From<f64> for SimTime {
    fn from(t: f64) -> Self {
        SimTime(t)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
