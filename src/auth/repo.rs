use sqlx::PgPool;

use crate::auth::repo_types::User;
use crate::error::ApiError;

impl User {
    /// Exact-match lookup through the unique email index.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, password_hash, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user. The unique index on email arbitrates concurrent
    /// registrations: the losing insert surfaces as `DuplicateEmail`.
    pub async fn create(
        db: &PgPool,
        firstname: &str,
        lastname: &str,
        email: &str,
        password_hash: &str,
        is_active: bool,
    ) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email, password_hash, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, firstname, lastname, email, password_hash, is_active
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(password_hash)
        .bind(is_active)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return ApiError::DuplicateEmail;
                }
            }
            ApiError::from(e)
        })?;
        Ok(user)
    }

    /// Replace the stored hash in place, leaving every other column untouched.
    pub async fn update_password_hash(
        db: &PgPool,
        id: i64,
        new_hash: &str,
    ) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_hash = $2
            WHERE id = $1
            RETURNING id, firstname, lastname, email, password_hash, is_active
            "#,
        )
        .bind(id)
        .bind(new_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
