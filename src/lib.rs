/// 数据模型和记录格式定义。
pub mod models;

/// 底层存储管理（记录文件 I/O）。
pub mod storage;

/// 学生记录的 CRUD 操作（Insert, Fetch, Delete, Update）。
pub mod db;

/// 错误类型。
pub mod error;
