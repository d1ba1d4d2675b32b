use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, Recipient};

use super::content;
use super::session::SessionStore;
use super::views::{self, render, View};

/// A bot/chat pair that remembers what it sent. Every outgoing message id
/// lands in the session's tracked list, and rendering a new screen first
/// deletes everything previously tracked, so the chat never piles up stale
/// menus.
pub struct TrackedChat {
    bot: Bot,
    chat_id: ChatId,
    user_id: UserId,
    sessions: SessionStore,
}

impl TrackedChat {
    pub fn new(bot: Bot, chat_id: ChatId, user_id: UserId, sessions: SessionStore) -> Self {
        Self {
            bot,
            chat_id,
            user_id,
            sessions,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Deletes every tracked message and empties the list. A failed delete
    /// means the message is already gone.
    pub async fn clear_tracked(&self) {
        let mut tracked = Vec::new();
        self.sessions.update(self.user_id, |session| {
            tracked = std::mem::take(&mut session.tracked_messages);
        });

        for message_id in tracked {
            let _ = self.bot.delete_message(self.chat_id, message_id).await;
        }
    }

    /// Renders a screen: sweep tracked messages, send the new one, and for
    /// home menus follow up with the persistent navigation keyboard.
    pub async fn show(&self, view: View) -> ResponseResult<()> {
        let rendered = render(view);
        self.clear_tracked().await;

        let mut request = self.bot.send_message(self.chat_id, rendered.text);
        if let Some(keyboard) = rendered.keyboard {
            request = request.reply_markup(keyboard);
        }
        if let Some(mode) = rendered.parse_mode {
            request = request.parse_mode(mode);
        }
        if rendered.disable_preview {
            request = request.disable_web_page_preview(true);
        }
        let message = request.await?;
        self.track(message.id);

        if rendered.with_nav_keyboard {
            let hint = self
                .bot
                .send_message(self.chat_id, content::NAV_KEYBOARD_HINT)
                .reply_markup(views::nav_keyboard())
                .await?;
            self.track(hint.id);
        }

        Ok(())
    }

    /// Plain tracked send, for prompts, denials and confirmations that the
    /// next screen render should sweep away.
    pub async fn send_text(&self, text: &str) -> ResponseResult<Message> {
        let message = self.bot.send_message(self.chat_id, text).await?;
        self.track(message.id);
        Ok(message)
    }

    /// Sweeps the chat and sends a message with an inline keyboard, like
    /// `show` but for screens built at runtime (the reminder wizard entry).
    pub async fn send_menu(
        &self,
        text: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> ResponseResult<Message> {
        self.clear_tracked().await;
        let message = self
            .bot
            .send_message(self.chat_id, text)
            .reply_markup(keyboard)
            .await?;
        self.track(message.id);
        Ok(message)
    }

    /// Forwards a channel post into this chat, tracked like any other send.
    pub async fn forward_from(
        &self,
        from: Recipient,
        message_id: MessageId,
    ) -> ResponseResult<Message> {
        let message = self
            .bot
            .forward_message(self.chat_id, from, message_id)
            .await?;
        self.track(message.id);
        Ok(message)
    }

    fn track(&self, message_id: MessageId) {
        self.sessions.update(self.user_id, |session| {
            session.tracked_messages.push(message_id);
        });
    }
}
