use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login<S: UserServicePort>(
    State(state): State<AppState<S>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;
    let credentials = body.try_into_credentials()?;

    let user = state.user_service.check_user(credentials).await?;

    let token = state
        .authenticator
        .issue_token(&user.identity())
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, user_name = %user.user_name, "Login successful");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "login successful".to_string(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    user_name: String,
    password: String,
}

impl LoginRequest {
    fn try_into_credentials(self) -> Result<Credentials, UserError> {
        let user_name = UserName::new(self.user_name)?;
        Ok(Credentials {
            user_name,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
