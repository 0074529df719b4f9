use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::get_favourites::favourite_ids;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::FavouriteId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn add_favourite<S: UserServicePort>(
    State(state): State<AppState<S>>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<String>>, ApiError> {
    let favourite = FavouriteId::new(id).map_err(UserError::from)?;

    state
        .user_service
        .add_favourite(&auth_user.user_id, favourite)
        .await
        .map_err(ApiError::from)
        .map(|favourites| ApiSuccess::new(StatusCode::OK, favourite_ids(favourites)))
}
