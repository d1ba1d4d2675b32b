use teloxide::prelude::*;

use crate::bot::chat::TrackedChat;
use crate::bot::content;
use crate::database::connection::DatabaseManager;
use crate::database::models::{AddOutcome, RemoveOutcome, WhitelistEmail};
use crate::utils::validation::parse_whitelist_args;

/// `/add_mail <роль> <email>` — whitelist an address for a role.
pub async fn handle_add_mail(
    chat: &TrackedChat,
    db: &DatabaseManager,
    args: &str,
) -> ResponseResult<()> {
    let parsed = match parse_whitelist_args("/add_mail", args) {
        Ok(parsed) => parsed,
        Err(err) => {
            chat.send_text(&err.to_string()).await?;
            return Ok(());
        }
    };

    tracing::info!(
        "Whitelisting {} as {}",
        parsed.email,
        parsed.role.as_str()
    );

    let reply = match WhitelistEmail::add(&db.pool, parsed.role, &parsed.email).await {
        Ok(AddOutcome::Added) => format!(
            "Email {} успешно добавлен в список {}.",
            parsed.email,
            parsed.role.name_ru()
        ),
        Ok(AddOutcome::Duplicate) => format!(
            "Email {} уже существует в списке {}.",
            parsed.email,
            parsed.role.name_ru()
        ),
        Err(err) => {
            tracing::error!(
                "Failed to whitelist {} for role {}: {}",
                parsed.email,
                parsed.role.as_str(),
                err
            );
            content::INTERNAL_ERROR.to_string()
        }
    };

    chat.send_text(&reply).await?;
    Ok(())
}

/// `/delete_mail <роль> <email>` — drop an address from a role's whitelist.
pub async fn handle_delete_mail(
    chat: &TrackedChat,
    db: &DatabaseManager,
    args: &str,
) -> ResponseResult<()> {
    let parsed = match parse_whitelist_args("/delete_mail", args) {
        Ok(parsed) => parsed,
        Err(err) => {
            chat.send_text(&err.to_string()).await?;
            return Ok(());
        }
    };

    let reply = match WhitelistEmail::remove(&db.pool, parsed.role, &parsed.email).await {
        Ok(RemoveOutcome::Removed) => format!(
            "Email {} успешно удален из списка {}.",
            parsed.email,
            parsed.role.name_ru()
        ),
        Ok(RemoveOutcome::NotFound) => format!(
            "Email {} не найден в списке {}.",
            parsed.email,
            parsed.role.name_ru()
        ),
        Err(err) => {
            tracing::error!(
                "Failed to remove {} from the {} whitelist: {}",
                parsed.email,
                parsed.role.as_str(),
                err
            );
            content::INTERNAL_ERROR.to_string()
        }
    };

    chat.send_text(&reply).await?;
    Ok(())
}
