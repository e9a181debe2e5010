use studentdb::db::StudentStore;
use studentdb::models::Student;
use std::path::Path;

/// 学生记录存储的使用示例。
fn main() -> anyhow::Result<()> {
    let data_dir = "./data/";
    // 清理上次运行留下的数据
    if Path::new(data_dir).exists() {
        std::fs::remove_dir_all(data_dir)?;
    }
    std::fs::create_dir_all(data_dir)?;

    let store = StudentStore::open(data_dir);
    println!("Store opened at {:?}", data_dir);

    // 插入数据
    let inserted = store.insert(&Student::new(1, "Ann", "Lee"))?;
    println!("Inserted student 1: {}", inserted);

    // 重复插入同一 ID 不覆盖
    let inserted_again = store.insert(&Student::new(1, "Bea", "Kim"))?;
    println!("Inserted student 1 again: {}", inserted_again);

    // 读取
    let student = store.fetch(1)?;
    println!("Fetched: {}", serde_json::to_string(&student)?);

    // 更新姓
    store.update_last_name(1, "Kim")?;
    let student = store.fetch(1)?;
    println!("After update: {}", serde_json::to_string(&student)?);

    // 删除
    let deleted = store.delete(1)?;
    println!("Deleted student 1: {}", deleted);

    // 再次读取应失败
    match store.fetch(1) {
        Ok(_) => println!("Unexpected: student 1 still present"),
        Err(e) => println!("Fetch after delete failed as expected: {}", e),
    }

    Ok(())
}
