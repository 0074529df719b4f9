use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::FavouriteIdError;
use crate::user::errors::UserIdError;
use crate::user::errors::UserNameError;

/// User aggregate entity.
///
/// Represents a registered user and the items they marked as favourites.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub user_name: UserName,
    pub password_hash: String,
    pub favourites: Vec<FavouriteId>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Identity to embed in an issued token.
    pub fn identity(&self) -> auth::Identity {
        auth::Identity::new(self.id, self.user_name.as_str())
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User name value type
///
/// Any non-blank name up to 64 characters; uniqueness is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid user name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or only whitespace
    /// * `TooLong` - Name longer than 64 characters
    pub fn new(user_name: String) -> Result<Self, UserNameError> {
        let length = user_name.chars().count();
        if user_name.trim().is_empty() {
            Err(UserNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(UserNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(user_name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque identifier of a favourited item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FavouriteId(String);

impl FavouriteId {
    const MAX_LENGTH: usize = 128;

    /// Create a new favourite id.
    ///
    /// # Errors
    /// * `Empty` - Id is empty or only whitespace
    /// * `TooLong` - Id longer than 128 characters
    pub fn new(id: String) -> Result<Self, FavouriteIdError> {
        let length = id.chars().count();
        if id.trim().is_empty() {
            Err(FavouriteIdError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(FavouriteIdError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FavouriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub user_name: UserName,
    pub password: String,
    /// Repeated password, checked against `password` when supplied
    pub password_confirmation: Option<String>,
}

impl RegisterUserCommand {
    pub fn new(
        user_name: UserName,
        password: String,
        password_confirmation: Option<String>,
    ) -> Self {
        Self {
            user_name,
            password,
            password_confirmation,
        }
    }
}

/// Login credentials
#[derive(Debug)]
pub struct Credentials {
    pub user_name: UserName,
    pub password: String,
}
