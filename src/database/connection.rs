use anyhow::Result;
use sqlx::{SqlitePool, migrate::MigrateDatabase, Sqlite};
use tracing::info;

#[derive(Clone)]
pub struct DatabaseManager {
    pub pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            info!("Creating database {}", database_url);
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePool::connect(database_url).await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        info!("Setting up database schema");
        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

/// Idempotent schema. Statements run one at a time because SQLite
/// connections execute a single statement per query.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS role_emails (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        role TEXT NOT NULL,
        email TEXT NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE(role, email)
    )",
    "CREATE TABLE IF NOT EXISTS users (
        telegram_id INTEGER PRIMARY KEY,
        role TEXT NOT NULL,
        email TEXT,
        registered_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS reminders (
        id TEXT PRIMARY KEY,
        user_id INTEGER NOT NULL,
        year INTEGER NOT NULL,
        month TEXT NOT NULL,
        day INTEGER NOT NULL,
        time TEXT NOT NULL,
        reminder_text TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_role_emails_lookup ON role_emails(role, email)",
    "CREATE INDEX IF NOT EXISTS idx_reminders_user ON reminders(user_id)",
];
