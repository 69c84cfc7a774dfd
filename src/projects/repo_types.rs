use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Project record in the database.
///
/// `owner_user_id` is written once at creation and never changes; ownership
/// does not transfer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub github_url: Option<String>,
    pub owner_user_id: Uuid,
    pub created_at: OffsetDateTime,
}
