//! Generic CRUD and criteria handlers shared by every entity resource.

use axum::extract::{Path, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use tutor_core::error::AppError;
use tutor_core::traits::Entity;
use tutor_service::answer::{AnswerCriteria, AnswerMapper};
use tutor_service::lesson::{LessonCriteria, LessonMapper};
use tutor_service::lesson_time::{LessonTimeCriteria, LessonTimeMapper};
use tutor_service::like::{LikeCriteria, LikeMapper};
use tutor_service::question::{QuestionCriteria, QuestionMapper};
use tutor_service::rating::{RatingCriteria, RatingMapper};
use tutor_service::room::{RoomCriteria, RoomMapper};
use tutor_service::schedule::{ScheduleCriteria, ScheduleMapper};
use tutor_service::student::{StudentCriteria, StudentMapper};
use tutor_service::teacher::{TeacherCriteria, TeacherMapper};
use tutor_service::{Criteria, EntityMapper};

use crate::error::ApiError;
use crate::extractors::{Actor, CriteriaQuery};
use crate::state::{AppState, EntityServices};

/// Total number of matching rows, sent with every list page.
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// An entity exposed under `/api/{PATH}`.
pub trait Resource: Send + Sync + 'static {
    /// DTO mapping of the entity.
    type Mapper: EntityMapper;
    /// Search criteria over the entity.
    type Criteria: Criteria<Entity = <Self::Mapper as EntityMapper>::Entity>;
    /// Collection path segment.
    const PATH: &'static str;

    /// The entity's services inside the shared state.
    fn services(state: &AppState) -> &EntityServices<Self::Mapper>;
}

type DtoOf<R> = <<R as Resource>::Mapper as EntityMapper>::Dto;

fn entity_name<R: Resource>() -> &'static str {
    <<R::Mapper as EntityMapper>::Entity as Entity>::META.name
}

fn not_found<R: Resource>(id: i64) -> ApiError {
    AppError::not_found(format!("{} {id} not found", entity_name::<R>())).into()
}

/// Routes of one resource.
pub fn routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::PATH);
    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&format!("{collection}/count"), get(count::<R>))
        .route(
            &format!("{collection}/{{id}}"),
            get(get_one::<R>)
                .put(update::<R>)
                .patch(partial_update::<R>)
                .delete(delete::<R>),
        )
}

/// GET /api/{resource}
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    query: CriteriaQuery<R::Criteria>,
) -> Result<Response, ApiError> {
    let page = R::services(&state)
        .query
        .find_by_criteria_page(&query.criteria, &query.page)
        .await?;
    Ok((
        [(TOTAL_COUNT_HEADER, page.total_items.to_string())],
        Json(page.items),
    )
        .into_response())
}

/// GET /api/{resource}/count
pub async fn count<R: Resource>(
    State(state): State<AppState>,
    query: CriteriaQuery<R::Criteria>,
) -> Result<Json<u64>, ApiError> {
    let count = R::services(&state)
        .query
        .count_by_criteria(&query.criteria)
        .await?;
    Ok(Json(count))
}

/// GET /api/{resource}/{id}
pub async fn get_one<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DtoOf<R>>, ApiError> {
    R::services(&state)
        .crud
        .find_one(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<R>(id))
}

/// POST /api/{resource}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<DtoOf<R>>,
) -> Result<Response, ApiError> {
    let created = R::services(&state).crud.save(&actor, dto).await?;
    let id = <R::Mapper as EntityMapper>::dto_id(&created).unwrap_or_default();
    let location = format!("/api/{}/{id}", R::PATH);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// PUT /api/{resource}/{id}
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i64>,
    Json(dto): Json<DtoOf<R>>,
) -> Result<Json<DtoOf<R>>, ApiError> {
    R::services(&state)
        .crud
        .update(&actor, id, dto)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<R>(id))
}

/// PATCH /api/{resource}/{id}
pub async fn partial_update<R: Resource>(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i64>,
    Json(patch): Json<DtoOf<R>>,
) -> Result<Json<DtoOf<R>>, ApiError> {
    R::services(&state)
        .crud
        .partial_update(&actor, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<R>(id))
}

/// DELETE /api/{resource}/{id}
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if R::services(&state).crud.delete(&actor, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<R>(id))
    }
}

macro_rules! resource {
    ($name:ident, $path:literal, $field:ident, $mapper:ty, $criteria:ty) => {
        #[doc = concat!("`/api/", $path, "`")]
        pub struct $name;

        impl Resource for $name {
            type Mapper = $mapper;
            type Criteria = $criteria;
            const PATH: &'static str = $path;

            fn services(state: &AppState) -> &EntityServices<$mapper> {
                &state.$field
            }
        }
    };
}

resource!(Students, "students", students, StudentMapper, StudentCriteria);
resource!(Teachers, "teachers", teachers, TeacherMapper, TeacherCriteria);
resource!(Rooms, "rooms", rooms, RoomMapper, RoomCriteria);
resource!(LessonTimes, "lesson-times", lesson_times, LessonTimeMapper, LessonTimeCriteria);
resource!(Lessons, "lessons", lessons, LessonMapper, LessonCriteria);
resource!(Schedules, "schedules", schedules, ScheduleMapper, ScheduleCriteria);
resource!(Ratings, "ratings", ratings, RatingMapper, RatingCriteria);
resource!(Questions, "questions", questions, QuestionMapper, QuestionCriteria);
resource!(Answers, "answers", answers, AnswerMapper, AnswerCriteria);
resource!(Likes, "likes", likes, LikeMapper, LikeCriteria);
