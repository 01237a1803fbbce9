//! Student store property tests.
//!
//! Exercises the upsert/find/delete contract of the in-memory store.

use roster_api::domain::Student;
use roster_api::infra::{InMemoryStudentStore, StudentRepository};

#[tokio::test]
async fn find_by_id_returns_saved_record() {
    let store = InMemoryStudentStore::new();
    let student = Student::new(10, "赵六", 19);

    store.save_or_update(student.clone()).await.unwrap();
    let found = store.find_by_id(10).await.unwrap();

    assert_eq!(found, Some(student));
}

#[tokio::test]
async fn delete_then_find_is_not_found() {
    let store = InMemoryStudentStore::new();
    store
        .save_or_update(Student::new(5, "张三", 20))
        .await
        .unwrap();

    store.delete_by_id(5).await.unwrap();

    assert_eq!(store.find_by_id(5).await.unwrap(), None);
}

#[tokio::test]
async fn delete_of_absent_id_is_no_op() {
    let store = InMemoryStudentStore::new();

    // Must not error regardless of the id
    store.delete_by_id(12345).await.unwrap();
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn second_upsert_fully_replaces_first() {
    let store = InMemoryStudentStore::new();

    store
        .save_or_update(Student::new(1, "张三", 20))
        .await
        .unwrap();
    store
        .save_or_update(Student::new(1, "李四", 31))
        .await
        .unwrap();

    // Last write wins, no field merge
    let found = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found, Student::new(1, "李四", 31));
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn seeded_store_delete_leaves_remaining_records() {
    let store = InMemoryStudentStore::with_seed_data();

    store.delete_by_id(2).await.unwrap();

    let mut ids: Vec<i64> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    ids.sort_unstable();

    assert_eq!(ids, vec![1, 3]);
    assert_eq!(
        store.find_by_id(1).await.unwrap(),
        Some(Student::new(1, "张三", 20))
    );
    assert_eq!(
        store.find_by_id(3).await.unwrap(),
        Some(Student::new(3, "王五", 22))
    );
}

#[tokio::test]
async fn find_all_returns_every_record() {
    let store = InMemoryStudentStore::with_seed_data();

    let all = store.find_all().await.unwrap();

    assert_eq!(all.len(), 3);
    assert!(all.contains(&Student::new(2, "李四", 21)));
}
