use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub identifier: String, // login identifier: email or username
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 PHC string, not exposed in JSON
    pub is_admin: bool,
    pub created_at: OffsetDateTime,
}

/// Session record; the opaque token is the lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub user_id: Uuid,
    pub token: Uuid,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            identifier: "dev@example.com".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$secret".into(),
            is_admin: false,
            created_at: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("dev@example.com"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
