use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::chat::TrackedChat;
use crate::bot::commands::{whitelist, Command};
use crate::bot::content;
use crate::bot::session::{ReminderFlow, SessionStore};
use crate::bot::views;
use crate::database::connection::DatabaseManager;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: DatabaseManager,
    sessions: SessionStore,
) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        // Channel posts carry no sender; commands make no sense there.
        return Ok(());
    };
    let chat = TrackedChat::new(bot, msg.chat.id, user.id, sessions);

    match cmd {
        Command::Help => {
            chat.send_text(&Command::descriptions().to_string()).await?;
        }
        Command::Start | Command::MenuRegistration => {
            super::show_registration(&chat, &db).await?;
        }
        Command::Reminder => {
            start_reminder(&chat).await?;
        }
        Command::AddMail(args) => {
            whitelist::handle_add_mail(&chat, &db, &args).await?;
        }
        Command::DeleteMail(args) => {
            whitelist::handle_delete_mail(&chat, &db, &args).await?;
        }
    }
    Ok(())
}

/// `/reminder` always restarts the wizard from the year picker, dropping
/// whatever was picked before.
async fn start_reminder(chat: &TrackedChat) -> ResponseResult<()> {
    chat.sessions().update(chat.user_id(), |session| {
        session.reset_flows();
        session.reminder = Some(ReminderFlow::PickYear);
    });

    chat.send_menu(content::REMINDER_INTRO, views::year_keyboard())
        .await?;
    Ok(())
}
