use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register_user<S: UserServicePort>(
    State(state): State<AppState<S>>,
    body: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = body?;

    state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|user| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData {
                    message: format!("User {} successfully registered", user.user_name),
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    user_name: String,
    password: String,
    password2: Option<String>,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, UserError> {
        let user_name = UserName::new(self.user_name)?;
        Ok(RegisterUserCommand::new(
            user_name,
            self.password,
            self.password2,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_field_names() {
        let request: RegisterUserRequest = serde_json::from_value(serde_json::json!({
            "userName": "alice",
            "password": "p",
            "password2": "p",
            "fullName": "ignored"
        }))
        .unwrap();

        let command = request.try_into_command().unwrap();
        assert_eq!(command.user_name.as_str(), "alice");
        assert_eq!(command.password_confirmation.as_deref(), Some("p"));
    }

    #[test]
    fn test_request_blank_user_name() {
        let request: RegisterUserRequest = serde_json::from_value(serde_json::json!({
            "userName": " ",
            "password": "p"
        }))
        .unwrap();

        assert!(matches!(
            request.try_into_command(),
            Err(UserError::InvalidUserName(_))
        ));
    }
}
