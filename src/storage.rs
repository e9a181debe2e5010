use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::models::{FILE_EXT, FILE_PREFIX};

/// 构造指定 ID 的记录文件路径。
///
/// 目录字符串与文件名直接拼接，不插入路径分隔符，
/// 与既有数据文件布局保持兼容；调用方需保证目录末尾自带分隔符。
pub fn record_path(storage_dir: &str, id: u32) -> PathBuf {
    PathBuf::from(format!("{}{}{}{}", storage_dir, FILE_PREFIX, id, FILE_EXT))
}

/// 读取记录文件的第一行。
///
/// 行尾的换行符被剥离；空文件返回 `None`。第一行之后的内容不读取。
/// 文件句柄只在本次读取期间持有，返回时无条件释放。
pub fn read_first_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// 将记录内容写入新文件。
///
/// 目标文件已存在时会被截断覆盖，是否允许覆盖由调用方判断。
pub fn write_record(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// 原子替换已有记录文件的内容。
///
/// 先写同目录下的临时文件，落盘后重命名覆盖目标文件，
/// 任一步骤失败都不影响原有记录；失败时清理临时文件。
pub fn replace_record(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    let result = (|| -> std::io::Result<()> {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;
        Ok(())
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}
