/// 演示如何通过显式配置和环境变量配置存储目录
use studentdb::db::StudentStore;
use studentdb::models::{StoreConfig, Student, STORAGE_DIR_ENV};
use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data_dir = "./data_custom/";

    // 1. 清理旧数据，从干净状态开始
    if Path::new(data_dir).exists() {
        println!("Cleaning up old data directory...");
        fs::remove_dir_all(data_dir)?;
    }
    fs::create_dir_all(data_dir)?;

    // 2. 创建显式配置并打开存储
    println!("Opening store with explicit config...");
    let config = StoreConfig::new(data_dir);
    let store = StudentStore::open_with_config(config);

    // 3. 插入一批记录
    println!("Inserting 100 students...");
    for i in 0..100 {
        let student = Student::new(i, format!("First{}", i), format!("Last{}", i));
        store.insert(&student)?;
    }

    // 4. 更新其中一部分
    println!("Updating 20 students...");
    for i in 0..20 {
        store.update_last_name(i, "Updated")?;
    }

    // 5. 删除一部分
    println!("Deleting 10 students...");
    for i in 40..50 {
        store.delete(i)?;
    }

    // 6. 演示持久化：重新打开存储，记录仍在磁盘上
    println!("Reopening store to verify persistence...");
    drop(store);

    let store = StudentStore::open(data_dir);
    let student = store.fetch(5)?;
    println!("Verified student 5 exists: {} {}", student.first_name, student.last_name);
    println!("Deleted student 45 is gone: fetch fails = {}", store.fetch(45).is_err());

    // 7. 从环境变量解析配置
    if std::env::var_os(STORAGE_DIR_ENV).is_none() {
        std::env::set_var(STORAGE_DIR_ENV, data_dir);
    }
    let store = StudentStore::open_with_config(StoreConfig::from_env());
    let student = store.fetch(10)?;
    println!("Env-configured store sees student 10: {} {}", student.first_name, student.last_name);

    // 清理
    fs::remove_dir_all(data_dir)?;
    println!("Example completed successfully.");

    Ok(())
}
