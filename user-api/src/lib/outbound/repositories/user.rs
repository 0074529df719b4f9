use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgExecutor;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::user::models::FavouriteId;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_NAME_CONSTRAINT: &str = "users_user_name_key";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_favourites(&self, row: Option<PgRow>) -> Result<Option<User>, UserError> {
        let Some(row) = row else {
            return Ok(None);
        };

        let id: Uuid = row.try_get("id").map_err(database_error)?;
        let user_name: String = row.try_get("user_name").map_err(database_error)?;
        let password_hash: String = row.try_get("password_hash").map_err(database_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(database_error)?;

        let id = UserId(id);
        let favourites = list_favourites(&self.pool, &id).await?;

        Ok(Some(User {
            id,
            user_name: UserName::new(user_name)?,
            password_hash,
            favourites,
            created_at,
        }))
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

async fn list_favourites<'e, E>(executor: E, id: &UserId) -> Result<Vec<FavouriteId>, UserError>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT item_id
        FROM favourites
        WHERE user_id = $1
        ORDER BY position
        "#,
    )
    .bind(id.0)
    .fetch_all(executor)
    .await
    .map_err(database_error)?;

    rows.iter()
        .map(|row| {
            let item_id: String = row.try_get("item_id").map_err(database_error)?;
            Ok(FavouriteId::new(item_id)?)
        })
        .collect()
}

/// Takes a row lock on the user so favourite updates for one user are serialised.
async fn lock_user<'e, E>(executor: E, id: &UserId) -> Result<bool, UserError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        SELECT id
        FROM users
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id.0)
    .fetch_optional(executor)
    .await
    .map_err(database_error)?;

    Ok(row.is_some())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, user_name, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(user.user_name.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(USER_NAME_CONSTRAINT)
                {
                    return UserError::UserNameTaken(user.user_name.to_string());
                }
            }
            database_error(e)
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_name, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        self.with_favourites(row).await
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_name, password_hash, created_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        self.with_favourites(row).await
    }

    async fn add_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
        limit: usize,
    ) -> Result<Vec<FavouriteId>, UserError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        if !lock_user(&mut *tx, id).await? {
            return Err(UserError::FavouritesNotUpdated(*id));
        }

        let mut favourites = list_favourites(&mut *tx, id).await?;
        if favourites.contains(favourite) {
            return Ok(favourites);
        }
        if favourites.len() >= limit {
            return Err(UserError::FavouritesLimitReached { id: *id, limit });
        }

        sqlx::query(
            r#"
            INSERT INTO favourites (user_id, item_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, item_id) DO NOTHING
            "#,
        )
        .bind(id.0)
        .bind(favourite.as_str())
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        favourites.push(favourite.clone());
        Ok(favourites)
    }

    async fn remove_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
    ) -> Result<Vec<FavouriteId>, UserError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        if !lock_user(&mut *tx, id).await? {
            return Err(UserError::FavouritesNotUpdated(*id));
        }

        sqlx::query(
            r#"
            DELETE FROM favourites
            WHERE user_id = $1 AND item_id = $2
            "#,
        )
        .bind(id.0)
        .bind(favourite.as_str())
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        let favourites = list_favourites(&mut *tx, id).await?;
        tx.commit().await.map_err(database_error)?;

        Ok(favourites)
    }
}
