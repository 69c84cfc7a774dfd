use sqlx::PgPool;
use uuid::Uuid;

use crate::projects::repo_types::Project;

impl Project {
    /// Create a project owned by `owner_user_id`.
    pub async fn create(
        db: &PgPool,
        name: &str,
        description: &str,
        github_url: Option<&str>,
        owner_user_id: Uuid,
    ) -> anyhow::Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, github_url, owner_user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, github_url, owner_user_id, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(github_url)
        .bind(owner_user_id)
        .fetch_one(db)
        .await?;
        Ok(project)
    }

    /// List every project; projects are public once created.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, github_url, owner_user_id, created_at
            FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(projects)
    }

    /// Find a project by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, github_url, owner_user_id, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(project)
    }

    /// Replace name, description and GitHub URL. Ownership is not touched.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        name: &str,
        description: &str,
        github_url: Option<&str>,
    ) -> anyhow::Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = $1, description = $2, github_url = $3
            WHERE id = $4
            RETURNING id, name, description, github_url, owner_user_id, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(github_url)
        .bind(id)
        .fetch_one(db)
        .await?;
        Ok(project)
    }
}
