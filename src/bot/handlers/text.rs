use teloxide::prelude::*;

use crate::bot::chat::TrackedChat;
use crate::bot::content;
use crate::bot::session::{ReminderFlow, SessionStore};
use crate::bot::views::{self, View};
use crate::database::connection::DatabaseManager;
use crate::database::models::{BotUser, Reminder, Role, WhitelistEmail};
use crate::utils::calendar::Month;
use crate::utils::validation::validate_reminder_time;

/// Routes plain text. The navigation buttons win over any pending input so
/// that a user can always escape a stuck flow; after them come the email
/// and reminder-time captures, and anything left gets the fallback reply.
pub async fn text_handler(
    bot: Bot,
    msg: Message,
    db: DatabaseManager,
    sessions: SessionStore,
) -> ResponseResult<()> {
    // Channel posts carry no sender.
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let text = text.trim();

    let chat = TrackedChat::new(bot, msg.chat.id, user.id, sessions);

    if text == views::NAV_TO_REGISTRATION {
        return super::show_registration(&chat, &db).await;
    }
    if text == views::NAV_TO_MAIN_MENU {
        return show_main_menu(&chat, &db).await;
    }
    if text == views::NAV_PROBLEM {
        chat.send_text(content::PROBLEM_ACK).await?;
        return Ok(());
    }

    let session = chat.sessions().get(chat.user_id());

    if let Some(role) = session.awaiting_email {
        return capture_email(&chat, &db, role, text).await;
    }

    if let Some(ReminderFlow::PickTime { year, month, day }) = session.reminder {
        return capture_reminder_time(&chat, &db, year, month, day, text).await;
    }

    chat.send_text(content::FALLBACK).await?;
    Ok(())
}

async fn show_main_menu(chat: &TrackedChat, db: &DatabaseManager) -> ResponseResult<()> {
    let user_id = chat.user_id();
    match BotUser::find(&db.pool, user_id.0 as i64).await {
        Ok(Some(user)) => match user.role() {
            Some(role) => chat.show(View::Home(role)).await?,
            None => {
                tracing::error!("User {} has unrecognised role '{}'", user_id, user.role);
                chat.send_text(content::ROLE_UNDEFINED).await?;
            }
        },
        Ok(None) => {
            chat.send_text(content::NOT_REGISTERED).await?;
        }
        Err(err) => {
            tracing::error!("Failed to look up user {}: {}", user_id, err);
            chat.send_text(content::INTERNAL_ERROR).await?;
        }
    }
    Ok(())
}

/// Checks the email against the whitelist for the chosen role. A miss keeps
/// the capture armed so the user can retry without starting over.
async fn capture_email(
    chat: &TrackedChat,
    db: &DatabaseManager,
    role: Role,
    email: &str,
) -> ResponseResult<()> {
    let user_id = chat.user_id();

    let listed = match WhitelistEmail::exists(&db.pool, role, email).await {
        Ok(listed) => listed,
        Err(err) => {
            tracing::error!("Whitelist lookup failed for user {}: {}", user_id, err);
            chat.send_text(content::INTERNAL_ERROR).await?;
            return Ok(());
        }
    };

    if !listed {
        chat.send_text(content::EMAIL_NOT_LISTED).await?;
        return Ok(());
    }

    match BotUser::upsert(&db.pool, user_id.0 as i64, role, Some(email)).await {
        Ok(_) => {
            chat.sessions()
                .update(user_id, |session| session.awaiting_email = None);
            tracing::info!("Registered user {} as {}", user_id, role.as_str());
            chat.show(View::Home(role)).await?;
        }
        Err(err) => {
            tracing::error!("Failed to register user {}: {}", user_id, err);
            chat.send_text(content::INTERNAL_ERROR).await?;
        }
    }
    Ok(())
}

async fn capture_reminder_time(
    chat: &TrackedChat,
    db: &DatabaseManager,
    year: i32,
    month: Month,
    day: u8,
    input: &str,
) -> ResponseResult<()> {
    let time = match validate_reminder_time(input) {
        Ok(time) => time,
        Err(_) => {
            chat.send_text(content::REMINDER_TIME_INVALID).await?;
            return Ok(());
        }
    };

    let user_id = chat.user_id();
    let created = Reminder::create(
        &db.pool,
        user_id.0 as i64,
        i64::from(year),
        month.name_ru().to_string(),
        i64::from(day),
        time.clone(),
    )
    .await;

    match created {
        Ok(_) => {
            chat.sessions()
                .update(user_id, |session| session.reminder = None);
            tracing::info!("Stored reminder for user {}", user_id);
            chat.send_text(&format!(
                "Напоминание установлено на {day} {} {year} в {time}.",
                month.name_ru()
            ))
            .await?;
        }
        Err(err) => {
            tracing::error!("Failed to store reminder for user {}: {}", user_id, err);
            chat.send_text(content::INTERNAL_ERROR).await?;
        }
    }
    Ok(())
}
