use serde::{Deserialize, Serialize};
use crate::error::{Result, StoreError};

/// 记录文件名前缀，完整文件名为 `student<id>.txt`。
pub const FILE_PREFIX: &str = "student";

/// 记录文件扩展名。
pub const FILE_EXT: &str = ".txt";

/// 记录行的字段分隔符。
pub const FIELD_SEPARATOR: char = ',';

/// 学生实体。
///
/// `id` 是外部身份键，判等只看 `id`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// 学号（非负整数，唯一标识）。
    pub id: u32,
    /// 名。
    pub first_name: String,
    /// 姓。
    pub last_name: String,
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Student {
    /// 创建一个学生实体。
    pub fn new(id: u32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// 将记录编码为单行文本：`id,firstName,lastName`。
    ///
    /// 末尾不带换行符。姓名中嵌入的逗号不做转义，
    /// 读回时会导致字段错位（已知的格式限制，保持磁盘格式兼容）。
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.id, FIELD_SEPARATOR, self.first_name, FIELD_SEPARATOR, self.last_name
        )
    }

    /// 从单行文本解码记录。
    ///
    /// 字段数不足 3 或 ID 字段不是合法整数时返回 `InvalidData`；
    /// 第三个字段之后的内容被忽略。
    pub fn decode(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 3 {
            return Err(StoreError::InvalidData(format!(
                "incomplete record: expected at least 3 fields, got {}",
                fields.len()
            )));
        }

        let id: u32 = fields[0].parse().map_err(|_| {
            StoreError::InvalidData(format!("invalid student id: {:?}", fields[0]))
        })?;

        Ok(Self {
            id,
            first_name: fields[1].to_string(),
            last_name: fields[2].to_string(),
        })
    }
}

/// 存储配置。
///
/// 配置在构造时一次性解析并随存储实例传递，不使用进程级全局状态。
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// 记录文件所在目录。路径由目录字符串与文件名直接拼接，
    /// 不插入分隔符，因此目录末尾需要自带路径分隔符。
    pub storage_dir: String,
}

/// 存储目录的环境变量名。
pub const STORAGE_DIR_ENV: &str = "STUDENT_DATA_PATH";

impl StoreConfig {
    /// 创建指定目录的配置。
    pub fn new(storage_dir: impl Into<String>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    /// 从环境变量 `STUDENT_DATA_PATH` 解析存储目录。
    ///
    /// 变量未设置时记录错误日志并回退为空字符串，
    /// 此时记录路径会相对进程工作目录解析。
    pub fn from_env() -> Self {
        match std::env::var(STORAGE_DIR_ENV) {
            Ok(dir) => {
                log::info!("Store configured from env: storage_dir={}", dir);
                Self::new(dir)
            }
            Err(_) => {
                log::error!(
                    "Environment variable {} is not set, falling back to empty storage dir",
                    STORAGE_DIR_ENV
                );
                Self::new("")
            }
        }
    }
}
