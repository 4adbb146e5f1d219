//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tutor_core::config::AppConfig;
use tutor_core::traits::Repository;
use tutor_database::Database;
use tutor_entity::{
    Answer, Lesson, LessonTime, Like, Question, Rating, Room, Schedule, Student, Teacher,
};
use tutor_service::answer::AnswerMapper;
use tutor_service::lesson::LessonMapper;
use tutor_service::lesson_time::LessonTimeMapper;
use tutor_service::like::LikeMapper;
use tutor_service::question::QuestionMapper;
use tutor_service::rating::RatingMapper;
use tutor_service::room::RoomMapper;
use tutor_service::schedule::ScheduleMapper;
use tutor_service::student::StudentMapper;
use tutor_service::teacher::TeacherMapper;
use tutor_service::{EntityMapper, EntityService, QueryService, RatingQuestionService};

/// CRUD and criteria services of one entity, sharing a repository.
pub struct EntityServices<M: EntityMapper> {
    /// Writes and lookups by id.
    pub crud: EntityService<M>,
    /// Criteria list, page, and count.
    pub query: QueryService<M>,
}

impl<M: EntityMapper> EntityServices<M> {
    /// Build both services over `repo`.
    pub fn new(repo: Arc<dyn Repository<M::Entity>>) -> Self {
        Self {
            crud: EntityService::new(Arc::clone(&repo)),
            query: QueryService::new(repo),
        }
    }
}

impl<M: EntityMapper> Clone for EntityServices<M> {
    fn clone(&self) -> Self {
        Self {
            crud: self.crud.clone(),
            query: self.query.clone(),
        }
    }
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Cloning is cheap:
/// every service holds its repository behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Persistence back-end
    pub database: Database,

    pub students: EntityServices<StudentMapper>,
    pub teachers: EntityServices<TeacherMapper>,
    pub rooms: EntityServices<RoomMapper>,
    pub lesson_times: EntityServices<LessonTimeMapper>,
    pub lessons: EntityServices<LessonMapper>,
    pub schedules: EntityServices<ScheduleMapper>,
    pub ratings: EntityServices<RatingMapper>,
    pub questions: EntityServices<QuestionMapper>,
    pub answers: EntityServices<AnswerMapper>,
    pub likes: EntityServices<LikeMapper>,

    /// Teacher repository for natural-key lookups
    pub teacher_repo: Arc<dyn Repository<Teacher>>,
    /// Question set maintenance of ratings
    pub rating_questions: RatingQuestionService,
}

impl AppState {
    /// Wire every repository and service over `database`.
    pub fn new(config: AppConfig, database: Database) -> Self {
        let teacher_repo = database.repository::<Teacher>();
        let rating_repo = database.repository::<Rating>();
        let question_repo = database.repository::<Question>();

        Self {
            config: Arc::new(config),
            students: EntityServices::new(database.repository::<Student>()),
            teachers: EntityServices::new(Arc::clone(&teacher_repo)),
            rooms: EntityServices::new(database.repository::<Room>()),
            lesson_times: EntityServices::new(database.repository::<LessonTime>()),
            lessons: EntityServices::new(database.repository::<Lesson>()),
            schedules: EntityServices::new(database.repository::<Schedule>()),
            ratings: EntityServices::new(Arc::clone(&rating_repo)),
            questions: EntityServices::new(Arc::clone(&question_repo)),
            answers: EntityServices::new(database.repository::<Answer>()),
            likes: EntityServices::new(database.repository::<Like>()),
            teacher_repo,
            rating_questions: RatingQuestionService::new(rating_repo, question_repo),
            database,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}
