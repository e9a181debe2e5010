use studentdb::db::StudentStore;
use studentdb::models::Student;

fn main() -> anyhow::Result<()> {
    // 演示从空目录开始，先清理旧数据
    let data_dir = "./data_simple/";
    if std::path::Path::new(data_dir).exists() {
        std::fs::remove_dir_all(data_dir)?;
    }
    std::fs::create_dir_all(data_dir)?;

    // 打开存储（目录末尾自带路径分隔符）
    let store = StudentStore::open(data_dir);

    // 插入数据
    store.insert(&Student::new(1, "Ann", "Lee"))?;
    store.insert(&Student::new(2, "Bob", "Ray"))?;

    // 读取
    let student = store.fetch(1)?;
    println!("Found: {} {} (id {})", student.first_name, student.last_name, student.id);

    // 更新名
    store.update_first_name(2, "Robert")?;
    let student = store.fetch(2)?;
    println!("Updated: {} {} (id {})", student.first_name, student.last_name, student.id);

    // 删除
    store.delete(1)?;
    println!("Deleted student 1: fetch now fails = {}", store.fetch(1).is_err());

    // 清理演示数据
    std::fs::remove_dir_all(data_dir)?;

    Ok(())
}
