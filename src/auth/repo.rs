use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::{Session, User};

impl User {
    /// Find a user by login identifier.
    pub async fn find_by_identifier(db: &PgPool, identifier: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, identifier, password_hash, is_admin, created_at
            FROM users
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, identifier, password_hash, is_admin, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with an already hashed password.
    pub async fn create(db: &PgPool, identifier: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (identifier, password_hash)
            VALUES ($1, $2)
            RETURNING id, identifier, password_hash, is_admin, created_at
            "#,
        )
        .bind(identifier)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}

impl Session {
    /// Create a session with a freshly generated opaque token.
    pub async fn create(db: &PgPool, user_id: Uuid) -> anyhow::Result<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, token)
            VALUES ($1, $2)
            RETURNING user_id, token, created_at
            "#,
        )
        .bind(user_id)
        .bind(Uuid::new_v4())
        .fetch_one(db)
        .await?;
        Ok(session)
    }

    /// Look up a session by its token.
    pub async fn find_by_token(db: &PgPool, token: Uuid) -> anyhow::Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT user_id, token, created_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await?;
        Ok(session)
    }
}
