//! Service behavior against the in-memory back-end.

use std::sync::Arc;

use tutor_core::error::ErrorKind;
use tutor_core::traits::Repository;
use tutor_core::types::{PageRequest, SortField};
use tutor_database::MemoryDatabase;
use tutor_entity::{Lesson, Like, LikeKind, Question, Rating, Student, Teacher};
use tutor_service::like::{LikeCriteria, LikeQueryService};
use tutor_service::rating::{
    RatingCriteria, RatingDto, RatingQueryService, RatingQuestionService, RatingService,
};
use tutor_service::student::{StudentDto, StudentService};
use tutor_service::{Criteria, IdRef, RequestContext};

struct Fixture {
    db: MemoryDatabase,
    ratings: Arc<dyn Repository<Rating>>,
    questions: Arc<dyn Repository<Question>>,
}

/// Two students, one lesson, ratings scored 1..=5 (ids 1..=5), and three
/// questions: 1 and 2 on rating 1, 3 unlinked.
async fn fixture() -> Fixture {
    let db = MemoryDatabase::new();
    let students = db.repository::<Student>();
    students.insert(Student::new("S1", "An")).await.expect("insert");
    students.insert(Student::new("S2", "Binh")).await.expect("insert");
    db.repository::<Teacher>()
        .insert(Teacher::new("T1", "Chi"))
        .await
        .expect("insert");
    db.repository::<Lesson>()
        .insert(Lesson::new("L1", "Algebra").teacher(1))
        .await
        .expect("insert");

    let ratings: Arc<dyn Repository<Rating>> = Arc::new(db.repository::<Rating>());
    for score in 1..=5 {
        let student = if score % 2 == 1 { 1 } else { 2 };
        let mut rating = Rating::new().score(score).student(student).lesson(1);
        if score != 2 {
            rating = rating.comment(format!("score {score}"));
        }
        ratings.insert(rating).await.expect("insert");
    }

    let questions: Arc<dyn Repository<Question>> = Arc::new(db.repository::<Question>());
    questions
        .insert(Question::new("why?").rating(1).student(1))
        .await
        .expect("insert");
    questions
        .insert(Question::new("how?").rating(1).student(1))
        .await
        .expect("insert");
    questions
        .insert(Question::new("when?").student(2))
        .await
        .expect("insert");

    Fixture {
        db,
        ratings,
        questions,
    }
}

fn criteria(pairs: &[(&str, &str)]) -> RatingCriteria {
    RatingCriteria::from_pairs(pairs.iter().copied()).expect("valid criteria")
}

fn scores(rows: &[RatingDto]) -> Vec<i32> {
    rows.iter().filter_map(|r| r.score).collect()
}

#[tokio::test]
async fn test_score_range_returns_only_scores_in_range() {
    let fx = fixture().await;
    let query = RatingQueryService::new(fx.ratings.clone());
    let range = criteria(&[("score.greaterThanOrEqual", "3"), ("score.lessThanOrEqual", "5")]);

    let rows = query.find_by_criteria(&range).await.expect("list");
    assert_eq!(scores(&rows), vec![3, 4, 5]);
    assert_eq!(query.count_by_criteria(&range).await.expect("count"), 3);

    let page = query
        .find_by_criteria_page(&range, &PageRequest::new(1, 2).with_sort(SortField::desc("score")))
        .await
        .expect("page");
    assert_eq!(scores(&page.items), vec![5, 4]);
    assert_eq!(page.total_items, 3);
    assert!(page.has_next);
}

#[tokio::test]
async fn test_list_page_and_count_agree() {
    let fx = fixture().await;
    let query = RatingQueryService::new(fx.ratings.clone());
    let cases: Vec<Vec<(&str, &str)>> = vec![
        vec![],
        vec![("studentId.equals", "1")],
        vec![("comment.specified", "false")],
        vec![("score.in", "1,5"), ("comment.contains", "SCORE")],
        vec![("questionsId.specified", "true")],
        vec![("questionsId.specified", "true"), ("distinct", "true")],
        vec![("score.notEquals", "3"), ("lessonId.equals", "1")],
    ];

    for pairs in cases {
        let c = criteria(&pairs);
        let list = query.find_by_criteria(&c).await.expect("list");
        let count = query.count_by_criteria(&c).await.expect("count");
        let page = query
            .find_by_criteria_page(&c, &PageRequest::new(1, 100))
            .await
            .expect("page");
        assert_eq!(list.len() as u64, count, "list vs count for {pairs:?}");
        assert_eq!(page.total_items, count, "page vs count for {pairs:?}");
        assert_eq!(page.items.len() as u64, count, "page items for {pairs:?}");
    }
}

#[tokio::test]
async fn test_absent_criteria_match_every_row() {
    let fx = fixture().await;
    let query = RatingQueryService::new(fx.ratings.clone());
    let all = RatingCriteria::default();
    assert_eq!(query.find_by_criteria(&all).await.expect("list").len(), 5);
    assert_eq!(
        query.count_by_criteria(&all).await.expect("count"),
        fx.ratings.count().await.expect("count")
    );
}

#[tokio::test]
async fn test_distinct_never_increases_results() {
    let fx = fixture().await;
    let query = RatingQueryService::new(fx.ratings.clone());

    let joined = criteria(&[("questionsId.specified", "true")]);
    let plain = query.count_by_criteria(&joined).await.expect("count");
    let mut distinct = joined.clone();
    distinct.set_distinct(true);
    let collapsed = query.count_by_criteria(&distinct).await.expect("count");

    assert_eq!(plain, 2);
    assert_eq!(collapsed, 1);

    let unjoined = criteria(&[("score.greaterThan", "1")]);
    let mut unjoined_distinct = unjoined.clone();
    unjoined_distinct.set_distinct(true);
    assert_eq!(
        query.count_by_criteria(&unjoined).await.expect("count"),
        query.count_by_criteria(&unjoined_distinct).await.expect("count"),
    );
}

#[tokio::test]
async fn test_like_kind_membership_excludes_null_kind() {
    let db = MemoryDatabase::new();
    let likes = db.repository::<Like>();
    likes.insert(Like::new().kind(LikeKind::Like)).await.expect("insert");
    likes.insert(Like::new().kind(LikeKind::Dislike)).await.expect("insert");
    likes.insert(Like::new()).await.expect("insert");
    let query = LikeQueryService::new(Arc::new(likes));

    let count = |pairs: [(&'static str, &'static str); 1]| {
        let criteria = LikeCriteria::from_pairs(pairs).expect("valid");
        let query = query.clone();
        async move { query.count_by_criteria(&criteria).await.expect("count") }
    };
    assert_eq!(count([("kind.in", "LIKE")]).await, 1);
    assert_eq!(count([("kind.in", "LIKE,DISLIKE")]).await, 2);
    assert_eq!(count([("kind.notIn", "LIKE")]).await, 1);
    assert_eq!(count([("kind.specified", "false")]).await, 1);

    let err = LikeCriteria::from_pairs([("kind.in", "LIKE,meh")]).expect_err("unknown kind");
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_like_by_student_includes_rows_with_null_fields() {
    let db = MemoryDatabase::new();
    let students = db.repository::<Student>();
    for n in 1..=7 {
        students
            .insert(Student::new(format!("S{n}"), format!("Student {n}")))
            .await
            .expect("insert");
    }
    let likes = db.repository::<Like>();
    likes.insert(Like::new().student(7)).await.expect("insert");
    likes
        .insert(Like::new().student(7).kind(LikeKind::Dislike))
        .await
        .expect("insert");
    likes
        .insert(Like::new().student(3).kind(LikeKind::Like))
        .await
        .expect("insert");

    let query = LikeQueryService::new(Arc::new(likes));
    let by_student = LikeCriteria::from_pairs([("studentId.equals", "7")]).expect("valid");
    let rows = query.find_by_criteria(&by_student).await.expect("list");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|l| l.student == Some(IdRef { id: 7 })));
    assert!(rows.iter().any(|l| l.kind.is_none() && l.liked_at.is_none()));
}

#[tokio::test]
async fn test_partial_update_of_missing_id_writes_nothing() {
    let fx = fixture().await;
    let service = RatingService::new(fx.ratings.clone());
    let ctx = RequestContext::new("alice");
    let before = fx.ratings.find_all(&PageRequest::new(1, 100)).await.expect("all");

    let patch = RatingDto {
        score: Some(1),
        ..Default::default()
    };
    let result = service.partial_update(&ctx, 99, patch).await.expect("no error");
    assert!(result.is_none());

    let after = fx.ratings.find_all(&PageRequest::new(1, 100)).await.expect("all");
    assert_eq!(before.total_items, after.total_items);
    let before_scores: Vec<i32> = before.items.iter().map(|r| r.score).collect();
    let after_scores: Vec<i32> = after.items.iter().map(|r| r.score).collect();
    assert_eq!(before_scores, after_scores);
}

#[tokio::test]
async fn test_partial_update_merges_present_fields() {
    let fx = fixture().await;
    let service = RatingService::new(fx.ratings.clone());
    let ctx = RequestContext::new("bob");

    let patch = RatingDto {
        id: Some(3),
        comment: Some("revised".to_string()),
        ..Default::default()
    };
    let updated = service
        .partial_update(&ctx, 3, patch)
        .await
        .expect("update")
        .expect("exists");
    assert_eq!(updated.score, Some(3));
    assert_eq!(updated.comment.as_deref(), Some("revised"));
    assert_eq!(updated.student, Some(IdRef { id: 1 }));

    let stored = fx.ratings.find_by_id(3).await.expect("find").expect("exists");
    assert_eq!(stored.audit.last_modified_by.as_deref(), Some("bob"));
}

#[tokio::test]
async fn test_partial_update_rejects_invalid_merged_state() {
    let fx = fixture().await;
    let service = RatingService::new(fx.ratings.clone());
    let patch = RatingDto {
        score: Some(9),
        ..Default::default()
    };
    let err = service
        .partial_update(&RequestContext::system(), 2, patch)
        .await
        .expect_err("score 9");
    assert_eq!(err.kind, ErrorKind::Validation);

    let stored = fx.ratings.find_by_id(2).await.expect("find").expect("exists");
    assert_eq!(stored.score, 2);
    assert!(stored.audit.last_modified_by.is_none());
}

#[tokio::test]
async fn test_save_and_update_stamp_audit_columns() {
    let db = MemoryDatabase::new();
    let repo: Arc<dyn Repository<Student>> = Arc::new(db.repository::<Student>());
    let service = StudentService::new(repo.clone());

    let created = service
        .save(
            &RequestContext::new("alice"),
            StudentDto {
                code: Some("S1".to_string()),
                full_name: Some("An".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("save");
    let id = created.id.expect("assigned id");

    let stored = repo.find_by_id(id).await.expect("find").expect("exists");
    assert_eq!(stored.audit.created_by.as_deref(), Some("alice"));
    assert_eq!(stored.audit.last_modified_by.as_deref(), Some("alice"));
    let created_date = stored.audit.created_date;
    assert!(created_date.is_some());

    let mut replacement = created.clone();
    replacement.full_name = Some("An Nguyen".to_string());
    let updated = service
        .update(&RequestContext::new("bob"), id, replacement)
        .await
        .expect("update")
        .expect("exists");
    assert_eq!(updated.full_name.as_deref(), Some("An Nguyen"));

    let stored = repo.find_by_id(id).await.expect("find").expect("exists");
    assert_eq!(stored.audit.created_by.as_deref(), Some("alice"));
    assert_eq!(stored.audit.created_date, created_date);
    assert_eq!(stored.audit.last_modified_by.as_deref(), Some("bob"));
}

#[tokio::test]
async fn test_write_preconditions() {
    let fx = fixture().await;
    let service = RatingService::new(fx.ratings.clone());
    let ctx = RequestContext::system();

    let err = service
        .save(
            &ctx,
            RatingDto {
                score: Some(6),
                ..Default::default()
            },
        )
        .await
        .expect_err("score 6");
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = service
        .save(
            &ctx,
            RatingDto {
                id: Some(1),
                score: Some(4),
                ..Default::default()
            },
        )
        .await
        .expect_err("id on create");
    assert_eq!(err.kind, ErrorKind::Conflict);

    let err = service
        .update(
            &ctx,
            2,
            RatingDto {
                id: Some(3),
                score: Some(4),
                ..Default::default()
            },
        )
        .await
        .expect_err("id mismatch");
    assert_eq!(err.kind, ErrorKind::Validation);

    assert_eq!(fx.ratings.count().await.expect("count"), 5);
}

#[tokio::test]
async fn test_update_and_delete_of_missing_id() {
    let fx = fixture().await;
    let service = RatingService::new(fx.ratings.clone());
    let ctx = RequestContext::system();

    let replacement = RatingDto {
        id: Some(42),
        score: Some(3),
        ..Default::default()
    };
    assert!(service.update(&ctx, 42, replacement).await.expect("update").is_none());
    assert!(!service.delete(&ctx, 42).await.expect("delete"));
    assert!(service.find_one(42).await.expect("find").is_none());
}

#[tokio::test]
async fn test_replace_questions_detaches_and_attaches() {
    let fx = fixture().await;
    let service = RatingQuestionService::new(fx.ratings.clone(), fx.questions.clone());
    let ctx = RequestContext::new("carol");

    let linked = service
        .replace_questions(&ctx, 1, &[2, 3])
        .await
        .expect("replace")
        .expect("rating exists");
    let ids: Vec<Option<i64>> = linked.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![Some(2), Some(3)]);
    assert!(linked.iter().all(|q| q.rating == Some(IdRef { id: 1 })));

    let detached = fx.questions.find_by_id(1).await.expect("find").expect("exists");
    assert_eq!(detached.rating_id, None);
    assert_eq!(detached.audit.last_modified_by.as_deref(), Some("carol"));

    let current = service.questions_of(1).await.expect("questions");
    assert_eq!(current.len(), 2);
}

#[tokio::test]
async fn test_replace_questions_error_cases() {
    let fx = fixture().await;
    let service = RatingQuestionService::new(fx.ratings.clone(), fx.questions.clone());
    let ctx = RequestContext::system();

    assert!(service
        .replace_questions(&ctx, 99, &[1])
        .await
        .expect("no error")
        .is_none());

    let err = service
        .replace_questions(&ctx, 1, &[3, 77])
        .await
        .expect_err("unknown question");
    assert_eq!(err.kind, ErrorKind::NotFound);

    let unchanged = fx.questions.find_by_id(3).await.expect("find").expect("exists");
    assert_eq!(unchanged.rating_id, None);
    assert_eq!(service.questions_of(1).await.expect("questions").len(), 2);
}

#[tokio::test]
async fn test_direct_memory_database_is_shared_between_repositories() {
    let fx = fixture().await;
    let again = fx.db.repository::<Rating>();
    assert_eq!(again.count().await.expect("count"), 5);
}
