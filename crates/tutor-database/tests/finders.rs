//! Natural-key finders against the in-memory back-end.

use std::sync::Arc;

use tutor_core::traits::Repository;
use tutor_database::MemoryDatabase;
use tutor_database::repositories::{RoomRepositoryExt, StudentRepositoryExt, TeacherRepositoryExt};
use tutor_entity::{Room, Student, Teacher};

#[tokio::test]
async fn test_teacher_finders() {
    let db = MemoryDatabase::new();
    let repo: Arc<dyn Repository<Teacher>> = Arc::new(db.repository::<Teacher>());
    repo.insert(Teacher::new("T1", "Tran Van An")).await.expect("insert");
    repo.insert(Teacher::new("T2", "Le Thi Binh")).await.expect("insert");
    repo.insert(Teacher::new("T3", "Nguyen Anh")).await.expect("insert");

    let found = repo.find_by_code("T2").await.expect("find");
    assert_eq!(found.map(|t| t.full_name), Some("Le Thi Binh".to_string()));
    assert!(repo.find_by_code("t2").await.expect("find").is_none());

    let names: Vec<String> = repo
        .find_by_full_name_containing("AN")
        .await
        .expect("find")
        .into_iter()
        .map(|t| t.code)
        .collect();
    assert_eq!(names, vec!["T1", "T3"]);
}

#[tokio::test]
async fn test_student_and_room_finders() {
    let db = MemoryDatabase::new();
    let students = db.repository::<Student>();
    let rooms = db.repository::<Room>();
    students
        .insert(Student::new("S1", "Ann").email("ann@example.com"))
        .await
        .expect("insert");
    rooms
        .insert(Room::new("R101", "Main hall").capacity(40))
        .await
        .expect("insert");

    let student = students.find_by_code("S1").await.expect("find").expect("student");
    assert_eq!(student.email.as_deref(), Some("ann@example.com"));
    let room = rooms.find_by_code("R101").await.expect("find").expect("room");
    assert_eq!(room.capacity, Some(40));
    assert!(rooms.find_by_code("R102").await.expect("find").is_none());
}
