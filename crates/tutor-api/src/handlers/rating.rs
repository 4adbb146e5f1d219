//! Question set of a rating.

use axum::Json;
use axum::extract::{Path, State};

use tutor_core::error::AppError;
use tutor_service::question::QuestionDto;

use crate::error::ApiError;
use crate::extractors::Actor;
use crate::state::AppState;

/// GET /api/ratings/{id}/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<QuestionDto>>, ApiError> {
    if state.ratings.crud.find_one(id).await?.is_none() {
        return Err(AppError::not_found(format!("Rating {id} not found")).into());
    }
    Ok(Json(state.rating_questions.questions_of(id).await?))
}

/// PUT /api/ratings/{id}/questions
///
/// The body is the complete list of question ids to link.
pub async fn replace_questions(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<i64>,
    Json(question_ids): Json<Vec<i64>>,
) -> Result<Json<Vec<QuestionDto>>, ApiError> {
    state
        .rating_questions
        .replace_questions(&actor, id, &question_ids)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Rating {id} not found")).into())
}
