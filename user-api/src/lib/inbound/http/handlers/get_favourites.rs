use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::FavouriteId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_favourites<S: UserServicePort>(
    State(state): State<AppState<S>>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<String>>, ApiError> {
    state
        .user_service
        .get_favourites(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|favourites| ApiSuccess::new(StatusCode::OK, favourite_ids(favourites)))
}

/// Favourites as rendered in every favourites response: a JSON array of item ids.
pub(super) fn favourite_ids(favourites: Vec<FavouriteId>) -> Vec<String> {
    favourites
        .into_iter()
        .map(|favourite| favourite.as_str().to_string())
        .collect()
}
