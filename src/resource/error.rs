//! 资源错误类型

use thiserror::Error;

/// ResourcePack 构造、访问与反序列化时的错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceError {
    /// 输入向量长度与资源维度数不一致
    #[error("invalid resource vector: expected {expected} dimensions, got {got}")]
    InvalidDimension { expected: usize, got: usize },

    /// 按下标访问时越界
    #[error("resource index {index} out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// 反序列化失败：缺少字段或字段不是数字
    #[error("invalid resource spec: {0}")]
    Schema(String),
}
