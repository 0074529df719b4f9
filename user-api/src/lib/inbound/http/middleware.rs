use std::sync::Arc;

use auth::AuthenticationError;
use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub user_name: String,
}

/// Middleware that validates `Authorization: jwt <token>` and adds the identity to
/// request extensions. Rejected requests never reach the handler.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let authenticated_user = authenticated_user(&authenticator, &req).map_err(|e| {
        tracing::warn!(
            method = %req.method(),
            uri = %req.uri(),
            reason = %e,
            "Authentication rejected"
        );
        rejection(&e).into_response()
    })?;

    req.extensions_mut().insert(authenticated_user);

    Ok(next.run(req).await)
}

fn authenticated_user(
    authenticator: &Authenticator,
    req: &Request,
) -> Result<AuthenticatedUser, AuthenticationError> {
    // A header that is not visible ASCII cannot carry a token
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = authenticator.authenticate(authorization)?;

    let user_id = UserId::from_string(&identity.id).map_err(|e| {
        AuthenticationError::InvalidCredential(auth::JwtError::DecodingFailed(e.to_string()))
    })?;

    Ok(AuthenticatedUser {
        user_id,
        user_name: identity.user_name,
    })
}

fn rejection(err: &AuthenticationError) -> ApiError {
    match err {
        AuthenticationError::MissingCredential => ApiError::Unauthorized(
            "Missing credential: expected Authorization header 'jwt <token>'".to_string(),
        ),
        AuthenticationError::InvalidCredential(_) => {
            ApiError::Unauthorized("Invalid credential".to_string())
        }
    }
}
