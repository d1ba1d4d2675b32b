use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    /// Channel the schedule posts live in, `@username` or numeric chat id.
    pub schedule_channel: String,
    pub schedule_tomorrow_message_id: i32,
    pub schedule_term_message_id: i32,
    pub schedule_section_message_ids: Vec<i32>,
    pub admission_dates_message_id: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/college.db".to_string());
        let database_url = if database_url.trim().is_empty() {
            "sqlite:./data/college.db".to_string()
        } else {
            database_url
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let schedule_channel = env::var("SCHEDULE_CHANNEL")
            .map_err(|_| anyhow!("SCHEDULE_CHANNEL must be set"))?;

        if schedule_channel.trim().is_empty() {
            return Err(anyhow!("SCHEDULE_CHANNEL must be set"));
        }

        let schedule_tomorrow_message_id =
            parse_message_id("SCHEDULE_TOMORROW_MESSAGE_ID", 3)?;
        let schedule_term_message_id =
            parse_message_id("SCHEDULE_TERM_MESSAGE_ID", 2)?;
        let admission_dates_message_id =
            parse_message_id("ADMISSION_DATES_MESSAGE_ID", 8)?;

        let sections_str = env::var("SCHEDULE_SECTION_MESSAGE_IDS")
            .unwrap_or_else(|_| "4,5,6,7".to_string());
        let schedule_section_message_ids = sections_str
            .split(',')
            .map(|part| {
                part.trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid SCHEDULE_SECTION_MESSAGE_IDS"))
            })
            .collect::<Result<Vec<i32>>>()?;

        if schedule_section_message_ids.is_empty() {
            return Err(anyhow!("SCHEDULE_SECTION_MESSAGE_IDS must not be empty"));
        }

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            schedule_channel,
            schedule_tomorrow_message_id,
            schedule_term_message_id,
            schedule_section_message_ids,
            admission_dates_message_id,
        })
    }
}

fn parse_message_id(var: &str, default: i32) -> Result<i32> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid {var}")),
        Err(_) => Ok(default),
    }
}
