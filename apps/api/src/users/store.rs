//! Persistence gateway for the `users` table.
//!
//! Every operation issues exactly one parameterized statement. Connections come
//! from the pool per statement and go back on every exit path.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::user::{NewUser, User};

/// Any fault raised while talking to the database.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct DataAccessError(#[from] pub sqlx::Error);

/// Carried in `AppState` as `Arc<dyn UserStore>`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DataAccessError>;

    async fn insert(&self, user: &NewUser) -> Result<User, DataAccessError>;

    async fn find(&self, id: i32) -> Result<Option<User>, DataAccessError>;

    /// Overwrites all three fields. `None` when no row has `id`.
    async fn update(&self, id: i32, user: &NewUser) -> Result<Option<User>, DataAccessError>;

    /// Returns the row as it was before deletion.
    async fn delete(&self, id: i32) -> Result<Option<User>, DataAccessError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, DataAccessError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert(&self, user: &NewUser) -> Result<User, DataAccessError> {
        Ok(sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, birthDate) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.birth_date)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn find(&self, id: i32) -> Result<Option<User>, DataAccessError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update(&self, id: i32, user: &NewUser) -> Result<Option<User>, DataAccessError> {
        Ok(sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, email = $2, birthDate = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.birth_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, DataAccessError> {
        Ok(
            sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
