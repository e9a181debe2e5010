use std::fs;
use std::path::PathBuf;
use studentdb::db::StudentStore;
use studentdb::error::StoreError;
use studentdb::models::Student;
use tempfile::TempDir;

fn setup_store() -> (StudentStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut storage_dir = dir.path().to_str().unwrap().to_string();
    storage_dir.push(std::path::MAIN_SEPARATOR);
    (StudentStore::open(storage_dir), dir)
}

fn record_file(dir: &TempDir, id: u32) -> PathBuf {
    dir.path().join(format!("student{}.txt", id))
}

#[test]
fn test_insert_then_fetch() {
    let (store, _dir) = setup_store();

    assert!(store.insert(&Student::new(1, "Ann", "Lee")).unwrap());

    let student = store.fetch(1).unwrap();
    assert_eq!(student.id, 1);
    assert_eq!(student.first_name, "Ann");
    assert_eq!(student.last_name, "Lee");
}

#[test]
fn test_insert_duplicate_keeps_original() {
    let (store, _dir) = setup_store();

    assert!(store.insert(&Student::new(1, "Ann", "Lee")).unwrap());
    assert!(!store.insert(&Student::new(1, "Bea", "Kim")).unwrap());

    let student = store.fetch(1).unwrap();
    assert_eq!(student.first_name, "Ann");
    assert_eq!(student.last_name, "Lee");
}

#[test]
fn test_record_file_is_single_csv_line() {
    let (store, dir) = setup_store();

    store.insert(&Student::new(1, "Ann", "Lee")).unwrap();

    // 磁盘格式：单行、逗号分隔、无行尾换行
    let content = fs::read_to_string(record_file(&dir, 1)).unwrap();
    assert_eq!(content, "1,Ann,Lee");
}

#[test]
fn test_fetch_missing_is_not_found() {
    let (store, _dir) = setup_store();

    let err = store.fetch(9).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(9)));
}

#[test]
fn test_fetch_incomplete_record_is_invalid_data() {
    let (store, dir) = setup_store();
    fs::write(record_file(&dir, 7), "7,OnlyFirst").unwrap();

    let err = store.fetch(7).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn test_fetch_non_numeric_id_is_invalid_data() {
    let (store, dir) = setup_store();
    fs::write(record_file(&dir, 7), "seven,Ann,Lee").unwrap();

    let err = store.fetch(7).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn test_fetch_empty_file_is_invalid_data() {
    let (store, dir) = setup_store();
    fs::write(record_file(&dir, 7), "").unwrap();

    let err = store.fetch(7).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn test_fetch_ignores_extra_fields_and_lines() {
    let (store, dir) = setup_store();
    fs::write(record_file(&dir, 2), "2,Ann,Lee,extra\nsecond line").unwrap();

    let student = store.fetch(2).unwrap();
    assert_eq!(student.id, 2);
    assert_eq!(student.first_name, "Ann");
    assert_eq!(student.last_name, "Lee");
}

#[test]
fn test_delete_then_fetch_not_found() {
    let (store, dir) = setup_store();
    store.insert(&Student::new(1, "Ann", "Lee")).unwrap();

    assert!(store.delete(1).unwrap());
    assert!(!record_file(&dir, 1).exists());
    assert!(matches!(store.fetch(1), Err(StoreError::NotFound(1))));
}

#[test]
fn test_delete_missing_returns_false() {
    let (store, _dir) = setup_store();

    assert!(!store.delete(9).unwrap());
}

#[test]
fn test_update_first_name_keeps_last_name() {
    let (store, _dir) = setup_store();
    store.insert(&Student::new(1, "Ann", "Lee")).unwrap();

    assert!(store.update_first_name(1, "Anna").unwrap());

    let student = store.fetch(1).unwrap();
    assert_eq!(student.first_name, "Anna");
    assert_eq!(student.last_name, "Lee");
}

#[test]
fn test_update_last_name_keeps_first_name() {
    let (store, _dir) = setup_store();
    store.insert(&Student::new(1, "Ann", "Lee")).unwrap();

    assert!(store.update_last_name(1, "Kim").unwrap());

    let student = store.fetch(1).unwrap();
    assert_eq!(student.first_name, "Ann");
    assert_eq!(student.last_name, "Kim");
}

#[test]
fn test_update_missing_returns_false_without_creating_file() {
    let (store, dir) = setup_store();

    assert!(!store.update_last_name(9, "Kim").unwrap());
    assert!(!record_file(&dir, 9).exists());
}

#[test]
fn test_update_on_empty_file_is_io_error() {
    let (store, dir) = setup_store();
    fs::write(record_file(&dir, 5), "").unwrap();

    let err = store.update_first_name(5, "Anna").unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn test_embedded_comma_shifts_fields() {
    let (store, _dir) = setup_store();

    // 姓名中的逗号不转义：读回时字段错位，多出的尾部被忽略
    store.insert(&Student::new(1, "Ann,Marie", "Lee")).unwrap();

    let student = store.fetch(1).unwrap();
    assert_eq!(student.first_name, "Ann");
    assert_eq!(student.last_name, "Marie");
}

#[test]
fn test_full_lifecycle() {
    let (store, _dir) = setup_store();

    assert!(store.insert(&Student::new(1, "Ann", "Lee")).unwrap());

    let student = store.fetch(1).unwrap();
    assert_eq!((student.id, student.first_name.as_str(), student.last_name.as_str()), (1, "Ann", "Lee"));

    assert!(store.update_last_name(1, "Kim").unwrap());
    let student = store.fetch(1).unwrap();
    assert_eq!((student.id, student.first_name.as_str(), student.last_name.as_str()), (1, "Ann", "Kim"));

    assert!(store.delete(1).unwrap());
    assert!(matches!(store.fetch(1), Err(StoreError::NotFound(1))));
}
