//! Teacher lookups beyond the generic resource routes.

use axum::Json;
use axum::extract::{Path, State};

use tutor_core::error::AppError;
use tutor_database::repositories::TeacherRepositoryExt;
use tutor_service::EntityMapper;
use tutor_service::teacher::{TeacherDto, TeacherMapper};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/teachers/by-code/{code}
pub async fn find_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<TeacherDto>, ApiError> {
    let teacher = state
        .teacher_repo
        .find_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Teacher with code '{code}' not found")))?;
    Ok(Json(TeacherMapper::to_dto(&teacher)))
}
