use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::extract::Payload;
use crate::models::{CreateExercise, ExerciseResponse, LogParams, LogQuery, LogResponse, User};
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct ExercisesState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

impl ExercisesState {
    async fn require_user(&self, id: &str) -> Result<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }
}

pub async fn create(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    Payload(form): Payload<CreateExercise>,
) -> Result<Json<ExerciseResponse>> {
    let user = state.require_user(&user_id).await?;
    let new = form.validate(Utc::now().date_naive())?;

    let exercise = state.exercise_repo.create(&user.id, new).await?;
    tracing::info!(
        user_id = %user.id,
        exercise_id = %exercise.id,
        date = %exercise.date,
        "Exercise logged"
    );

    Ok(Json(ExerciseResponse::new(&user, &exercise)))
}

pub async fn log(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    params: std::result::Result<Query<LogParams>, QueryRejection>,
) -> Result<Json<LogResponse>> {
    let user = state.require_user(&user_id).await?;
    let Query(params) = params.map_err(|e| AppError::Validation(e.body_text()))?;
    let query = LogQuery::try_from(&params)?;

    let exercises = state.exercise_repo.find_log(&user.id, query).await?;
    tracing::debug!(user_id = %user.id, ?query, count = exercises.len(), "Log fetched");

    Ok(Json(LogResponse::new(user, exercises)))
}
