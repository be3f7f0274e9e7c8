use axum::{extract::State, Json};

use crate::error::Result;
use crate::extract::Payload;
use crate::models::{CreateUser, UserResponse};
use crate::repositories::UserRepository;
use crate::validation::require_text;

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
}

/// `POST /api/users`. An existing username returns the stored user unchanged.
pub async fn create(
    State(state): State<UsersState>,
    Payload(form): Payload<CreateUser>,
) -> Result<Json<UserResponse>> {
    let username = require_text("username", form.username.as_deref())?;

    let user = state.user_repo.find_or_create(&username).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User ready");

    Ok(Json(user.into()))
}

pub async fn list(State(state): State<UsersState>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
