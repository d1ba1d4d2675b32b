use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Audience a chat is registered as. Stored as plain text in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Visitor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Visitor => "visitor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "visitor" => Some(Role::Visitor),
            _ => None,
        }
    }

    /// Russian label used in administrative replies.
    pub fn name_ru(self) -> &'static str {
        match self {
            Role::Student => "студент",
            Role::Teacher => "преподаватель",
            Role::Visitor => "посетитель",
        }
    }

    /// Students and teachers confirm a whitelisted email before registration
    /// completes; visitors register immediately.
    pub fn requires_email(self) -> bool {
        !matches!(self, Role::Visitor)
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BotUser {
    pub telegram_id: i64,
    pub role: String,
    pub email: Option<String>,
    pub registered_at: String,
}

impl BotUser {
    /// Registers the account, replacing any previous registration wholesale.
    pub async fn upsert(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
        role: Role,
        email: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        let registered_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT OR REPLACE INTO users (telegram_id, role, email, registered_at) VALUES (?, ?, ?, ?)"
        )
        .bind(telegram_id)
        .bind(role.as_str())
        .bind(email)
        .bind(&registered_at)
        .execute(pool)
        .await?;

        Ok(BotUser {
            telegram_id,
            role: role.as_str().to_string(),
            email: email.map(str::to_string),
            registered_at,
        })
    }

    pub async fn find(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, BotUser>(
            "SELECT telegram_id, role, email, registered_at FROM users WHERE telegram_id = ?"
        )
        .bind(telegram_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM users WHERE telegram_id = ?")
            .bind(telegram_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// None when the stored role text is not one we recognise.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}
