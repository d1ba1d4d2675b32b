use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::user::Role;

/// An email cleared for registration under a given role.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WhitelistEmail {
    pub id: i64,
    pub role: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

impl WhitelistEmail {
    /// Inserts the pair. The UNIQUE(role, email) constraint decides the
    /// outcome, so two concurrent inserts of the same pair cannot both
    /// report `Added`.
    pub async fn add(
        pool: &sqlx::SqlitePool,
        role: Role,
        email: &str,
    ) -> Result<AddOutcome, sqlx::Error> {
        let created_at = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO role_emails (role, email, created_at) VALUES (?, ?, ?)"
        )
        .bind(role.as_str())
        .bind(email)
        .bind(&created_at)
        .execute(pool)
        .await;

        match result {
            Ok(_) => Ok(AddOutcome::Added),
            Err(sqlx::Error::Database(db_err))
                if db_err.message().contains("UNIQUE constraint failed") =>
            {
                Ok(AddOutcome::Duplicate)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn remove(
        pool: &sqlx::SqlitePool,
        role: Role,
        email: &str,
    ) -> Result<RemoveOutcome, sqlx::Error> {
        let result = sqlx::query("DELETE FROM role_emails WHERE role = ? AND email = ?")
            .bind(role.as_str())
            .bind(email)
            .execute(pool)
            .await?;

        if result.rows_affected() > 0 {
            Ok(RemoveOutcome::Removed)
        } else {
            Ok(RemoveOutcome::NotFound)
        }
    }

    pub async fn exists(
        pool: &sqlx::SqlitePool,
        role: Role,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM role_emails WHERE role = ? AND email = ?"
        )
        .bind(role.as_str())
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(count > 0)
    }
}
