use std::io;
use std::path::PathBuf;
use log::{error, info, warn};
use crate::error::{Result, StoreError};
use crate::models::{StoreConfig, Student};
use crate::storage;

/// 学生记录存储。
///
/// 每条记录对应存储目录下的一个文本文件 `student<id>.txt`，
/// 文件是否存在即记录是否存在，没有额外索引。
/// 所有操作都是同步阻塞的一次性文件事务：不加锁、不缓存、无回滚，
/// 并发访问同一 ID 的安全性由调用方保证。
pub struct StudentStore {
    config: StoreConfig,
}

impl StudentStore {
    /// 打开指定目录上的存储（目录末尾需自带路径分隔符）。
    pub fn open(storage_dir: impl Into<String>) -> Self {
        Self::open_with_config(StoreConfig::new(storage_dir))
    }

    /// 使用自定义配置打开存储。
    ///
    /// 目录为空字符串时仅记录错误日志并继续运行，
    /// 此时记录路径会相对进程工作目录解析。
    pub fn open_with_config(config: StoreConfig) -> Self {
        if config.storage_dir.is_empty() {
            error!("Storage directory is not configured, record paths will resolve against the working directory");
        } else {
            info!("Student store opened: storage_dir={}", config.storage_dir);
        }
        Self { config }
    }

    fn record_path(&self, id: u32) -> PathBuf {
        storage::record_path(&self.config.storage_dir, id)
    }

    /// 插入一条新的学生记录。
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 写入成功。
    /// * `Ok(false)` - 该 ID 的记录文件已存在，不覆盖（正常结果，非错误）。
    ///
    /// # 错误
    ///
    /// * `StoreError::Io` - 文件写入失败；不做半成品文件清理。
    pub fn insert(&self, student: &Student) -> Result<bool> {
        let path = self.record_path(student.id);

        if path.exists() {
            info!("Insert skipped: student {} already exists", student.id);
            return Ok(false);
        }

        storage::write_record(&path, &student.encode())?;
        info!("Student inserted: id={}", student.id);
        Ok(true)
    }

    /// 按 ID 读取学生记录。
    ///
    /// 只读取记录文件的第一行；第三个字段之后的内容和后续行都被忽略。
    ///
    /// # 错误
    ///
    /// * `StoreError::NotFound` - 该 ID 没有记录文件。
    /// * `StoreError::InvalidData` - 记录行字段数不足 3，或 ID 字段不是合法整数。
    /// * `StoreError::Io` - 文件读取失败。
    pub fn fetch(&self, id: u32) -> Result<Student> {
        let path = self.record_path(id);

        if !path.exists() {
            warn!("Fetch failed: student {} not found", id);
            return Err(StoreError::NotFound(id));
        }

        // 空文件解码出的字段数不足 3，与截断记录一样按 InvalidData 处理
        let line = storage::read_first_line(&path)?.unwrap_or_default();
        let student = Student::decode(&line)?;
        info!("Student fetched: id={}", id);
        Ok(student)
    }

    /// 按 ID 删除学生记录。
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 记录文件已删除。
    /// * `Ok(false)` - 该 ID 没有记录文件，无事可做（正常结果，非错误）。
    ///
    /// # 错误
    ///
    /// * `StoreError::Io` - 文件存在但删除失败。
    pub fn delete(&self, id: u32) -> Result<bool> {
        let path = self.record_path(id);

        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&path)?;
        info!("Student deleted: id={}", id);
        Ok(true)
    }

    /// 更新学生的名。记录不存在时返回 `Ok(false)`，不创建文件。
    pub fn update_first_name(&self, id: u32, new_first_name: &str) -> Result<bool> {
        let updated = self.update_record(id, |mut student| {
            student.first_name = new_first_name.to_string();
            student
        })?;
        if updated {
            info!("Student first name updated: id={}", id);
        }
        Ok(updated)
    }

    /// 更新学生的姓。记录不存在时返回 `Ok(false)`，不创建文件。
    pub fn update_last_name(&self, id: u32, new_last_name: &str) -> Result<bool> {
        let updated = self.update_record(id, |mut student| {
            student.last_name = new_last_name.to_string();
            student
        })?;
        if updated {
            info!("Student last name updated: id={}", id);
        }
        Ok(updated)
    }

    /// 读取-修改-替换的共用更新路径。
    ///
    /// 替换通过临时文件加原子重命名完成，写入失败不会丢失原记录。
    fn update_record<F>(&self, id: u32, apply: F) -> Result<bool>
    where
        F: FnOnce(Student) -> Student,
    {
        let path = self.record_path(id);

        if !path.exists() {
            warn!("Update skipped: student {} not found", id);
            return Ok(false);
        }

        let line = storage::read_first_line(&path)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("student record file is empty: id={}", id),
            )
        })?;
        let current = Student::decode(&line)?;

        let updated = apply(current);
        storage::replace_record(&path, &updated.encode())?;
        Ok(true)
    }
}
