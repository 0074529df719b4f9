use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::FavouriteId;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - User name, password and optional password confirmation
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `PasswordMismatch` - Confirmation supplied and different from password
    /// * `UserNameTaken` - User name is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify login credentials.
    ///
    /// # Returns
    /// User entity whose password matched
    ///
    /// # Errors
    /// * `UnknownUser` - No user with this name
    /// * `IncorrectPassword` - Password does not match
    /// * `DatabaseError` - Database operation failed
    async fn check_user(&self, credentials: Credentials) -> Result<User, UserError>;

    /// List a user's favourites in insertion order.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_favourites(&self, id: &UserId) -> Result<Vec<FavouriteId>, UserError>;

    /// Add an item to a user's favourites. Adding an item already present is a no-op.
    ///
    /// # Returns
    /// Updated favourites
    ///
    /// # Errors
    /// * `FavouritesNotUpdated` - User does not exist
    /// * `FavouritesLimitReached` - User already holds the maximum number of favourites
    /// * `DatabaseError` - Database operation failed
    async fn add_favourite(
        &self,
        id: &UserId,
        favourite: FavouriteId,
    ) -> Result<Vec<FavouriteId>, UserError>;

    /// Remove an item from a user's favourites. Removing an absent item is a no-op.
    ///
    /// # Returns
    /// Updated favourites
    ///
    /// # Errors
    /// * `FavouritesNotUpdated` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn remove_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
    ) -> Result<Vec<FavouriteId>, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UserNameTaken` - User name is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user, with favourites, by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user, with favourites, by user name.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<User>, UserError>;

    /// Insert a favourite unless already present, keeping the user at or under `limit`.
    ///
    /// The limit check and the insert are atomic with respect to other writers for the
    /// same user.
    ///
    /// # Returns
    /// Favourites after the insert
    ///
    /// # Errors
    /// * `FavouritesNotUpdated` - User does not exist
    /// * `FavouritesLimitReached` - Item is new and the user already holds `limit` items
    /// * `DatabaseError` - Database operation failed
    async fn add_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
        limit: usize,
    ) -> Result<Vec<FavouriteId>, UserError>;

    /// Delete a favourite if present.
    ///
    /// # Returns
    /// Favourites after the delete
    ///
    /// # Errors
    /// * `FavouritesNotUpdated` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn remove_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
    ) -> Result<Vec<FavouriteId>, UserError>;
}
