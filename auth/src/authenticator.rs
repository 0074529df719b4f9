use crate::credential::token_from_header;
use crate::credential::JWT_SCHEME;
use crate::identity::Identity;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Token issuer and request authentication gate.
///
/// Holds the signing key for the lifetime of the process. Verification is stateless:
/// a token is accepted purely on its signature (and `exp`, when one was issued).
pub struct Authenticator {
    jwt_handler: JwtHandler,
    expiration_hours: Option<i64>,
}

/// Reason a request was not authenticated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Missing credential")]
    MissingCredential,

    #[error("Invalid credential: {0}")]
    InvalidCredential(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator issuing tokens that never expire.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            jwt_handler: JwtHandler::new(jwt_secret),
            expiration_hours: None,
        }
    }

    /// Write an `exp` claim this many hours after issuance.
    pub fn with_expiration_hours(mut self, expiration_hours: Option<i64>) -> Self {
        self.expiration_hours = expiration_hours;
        self
    }

    /// Issue a signed token for a verified identity.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, identity: &Identity) -> Result<String, JwtError> {
        let claims = Claims::for_identity(identity, self.expiration_hours);
        self.jwt_handler.encode(&claims)
    }

    /// Verify a token and rebuild the identity from its payload.
    ///
    /// # Errors
    /// * `InvalidCredential` - Bad signature, malformed payload or expired token
    pub fn verify_token(&self, token: &str) -> Result<Identity, AuthenticationError> {
        let claims: Claims = self.jwt_handler.decode(token)?;
        Ok(claims.identity())
    }

    /// Authenticate a request from its `Authorization` header value.
    ///
    /// # Arguments
    /// * `authorization` - Raw header value, `None` if the header is absent
    ///
    /// # Errors
    /// * `MissingCredential` - No header, or not of the form `jwt <token>`
    /// * `InvalidCredential` - Token failed verification
    pub fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<Identity, AuthenticationError> {
        let token = authorization
            .and_then(|header| token_from_header(header, JWT_SCHEME))
            .ok_or(AuthenticationError::MissingCredential)?;

        self.verify_token(token)
    }
}
