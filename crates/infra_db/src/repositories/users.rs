//! Users repository
//!
//! Storage glue for the registration/login endpoints and the bearer-token
//! middleware. Soft-deleted accounts are invisible to every query here.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::UserId;

use crate::error::DatabaseError;

/// Database row for a user account
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub activated: bool,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
}

/// Repository for user accounts
#[derive(Debug, Clone)]
pub struct UsersRepository {
    pool: PgPool,
}

impl UsersRepository {
    /// Creates a new UsersRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a user account
    ///
    /// Accounts start deactivated; activation is provisioned out-of-band.
    /// A live account with the same email or phone number surfaces as
    /// `DatabaseError::DuplicateEntry`.
    pub async fn create(&self, user: NewUser) -> Result<UserRow, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, phone_number, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone_number, activated, password_hash, created_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Finds a live account by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, phone_number, activated, password_hash, created_at
            FROM users
            WHERE email = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Finds a live, activated account by id
    ///
    /// Used by the bearer-token middleware to confirm a token's subject
    /// is still authorized.
    pub async fn find_active_by_id(&self, id: UserId) -> Result<Option<UserRow>, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, phone_number, activated, password_hash, created_at
            FROM users
            WHERE id = $1 AND activated = TRUE AND deleted_at IS NULL
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
