use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for UserName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserNameError {
    #[error("User name must not be empty")]
    Empty,

    #[error("User name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for FavouriteId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FavouriteIdError {
    #[error("Favourite id must not be empty")]
    Empty,

    #[error("Favourite id too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user name: {0}")]
    InvalidUserName(#[from] UserNameError),

    #[error("Invalid favourite id: {0}")]
    InvalidFavouriteId(#[from] FavouriteIdError),

    // Registration errors
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("User Name already taken")]
    UserNameTaken(String),

    // Login errors
    #[error("Unable to find user {0}")]
    UnknownUser(String),

    #[error("Incorrect password for user {0}")]
    IncorrectPassword(String),

    // Favourites errors
    #[error("Unable to get favourites for user with id: {0}")]
    NotFound(UserId),

    #[error("Unable to update favourites for user with id: {0}")]
    FavouritesNotUpdated(UserId),

    #[error("Unable to update favourites for user with id: {id}")]
    FavouritesLimitReached { id: UserId, limit: usize },

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
