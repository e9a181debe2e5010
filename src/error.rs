use thiserror::Error;
use std::io;

/// 存储层自定义错误类型。
///
/// 布尔返回值的操作用 `Ok(false)` 表示"无事可做"（插入时记录已存在、
/// 删除/更新时记录不存在）；错误只用于表示真正的异常情况。
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO 错误包装（打开/读取/写入/重命名/删除失败）。
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// 按 ID 查询时记录不存在。
    #[error("Student not found: {0}")]
    NotFound(u32),

    /// 记录内容损坏（例如：字段数不足 3，或 ID 字段不是合法整数）。
    #[error("Invalid student data: {0}")]
    InvalidData(String),
}

/// StoreError 的 Result 类型别名。
pub type Result<T> = std::result::Result<T, StoreError>;
