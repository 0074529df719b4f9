use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordError;
use chrono::Utc;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::FavouriteId;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
    favourites_limit: usize,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub const DEFAULT_FAVOURITES_LIMIT: usize = 50;

    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
            favourites_limit: Self::DEFAULT_FAVOURITES_LIMIT,
        }
    }

    /// Maximum number of favourites a single user may hold.
    pub fn with_favourites_limit(mut self, favourites_limit: usize) -> Self {
        self.favourites_limit = favourites_limit;
        self
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if command
            .password_confirmation
            .as_ref()
            .is_some_and(|confirmation| *confirmation != command.password)
        {
            return Err(UserError::PasswordMismatch);
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| match e {
                PasswordError::Empty => UserError::EmptyPassword,
                other => UserError::PasswordHashing(other.to_string()),
            })?;

        let user = User {
            id: UserId::new(),
            user_name: command.user_name,
            password_hash,
            favourites: Vec::new(),
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            user_name = %created_user.user_name,
            "User registered"
        );

        Ok(created_user)
    }

    async fn check_user(&self, credentials: Credentials) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_user_name(&credentials.user_name)
            .await?
            .ok_or_else(|| UserError::UnknownUser(credentials.user_name.to_string()))?;

        let is_valid = self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        if !is_valid {
            return Err(UserError::IncorrectPassword(user.user_name.to_string()));
        }

        Ok(user)
    }

    async fn get_favourites(&self, id: &UserId) -> Result<Vec<FavouriteId>, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|user| user.favourites)
            .ok_or(UserError::NotFound(*id))
    }

    async fn add_favourite(
        &self,
        id: &UserId,
        favourite: FavouriteId,
    ) -> Result<Vec<FavouriteId>, UserError> {
        self.repository
            .add_favourite(id, &favourite, self.favourites_limit)
            .await
    }

    async fn remove_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
    ) -> Result<Vec<FavouriteId>, UserError> {
        self.repository.remove_favourite(id, favourite).await
    }
}
