use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A captured reminder slot. `month` keeps the Russian month name the user
/// picked; `time` is the validated `HH:MM` string.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub user_id: i64,
    pub year: i64,
    pub month: String,
    pub day: i64,
    pub time: String,
    pub reminder_text: Option<String>,
    pub created_at: String,
}

impl Reminder {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        user_id: i64,
        year: i64,
        month: String,
        day: i64,
        time: String,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO reminders (id, user_id, year, month, day, time, reminder_text, created_at) VALUES (?, ?, ?, ?, ?, ?, NULL, ?)"
        )
        .bind(&id)
        .bind(user_id)
        .bind(year)
        .bind(&month)
        .bind(day)
        .bind(&time)
        .bind(&created_at)
        .execute(pool)
        .await?;

        Ok(Reminder {
            id,
            user_id,
            year,
            month,
            day,
            time,
            reminder_text: None,
            created_at,
        })
    }

    pub async fn find_by_user(
        pool: &sqlx::SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Reminder>(
            "SELECT id, user_id, year, month, day, time, reminder_text, created_at FROM reminders WHERE user_id = ? ORDER BY created_at"
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
