pub mod callback;
pub mod message;
pub mod text;

use teloxide::{dispatching::UpdateHandler, dptree, prelude::*};

use crate::bot::chat::TrackedChat;
use crate::bot::session::SessionStore;
use crate::bot::views::View;
use crate::database::connection::DatabaseManager;
use crate::database::models::BotUser;
use crate::services::relay::MediaRelay;

pub struct BotHandler {
    pub db: DatabaseManager,
    pub sessions: SessionStore,
    pub relay: MediaRelay,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, relay: MediaRelay) -> Self {
        Self {
            db,
            sessions: SessionStore::new(),
            relay,
        }
    }

    /// Commands first, then inline buttons, then plain text. A message that
    /// parses as no command falls through to the text branch.
    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let command_db = self.db.clone();
        let command_sessions = self.sessions.clone();
        let callback_db = self.db.clone();
        let callback_sessions = self.sessions.clone();
        let callback_relay = self.relay.clone();
        let text_db = self.db.clone();
        let text_sessions = self.sessions.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: crate::bot::commands::Command| {
                        let db = command_db.clone();
                        let sessions = command_sessions.clone();
                        async move { message::command_handler(bot, msg, cmd, db, sessions).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(
                move |bot: Bot, q: CallbackQuery| {
                    let db = callback_db.clone();
                    let sessions = callback_sessions.clone();
                    let relay = callback_relay.clone();
                    async move { callback::callback_handler(bot, q, db, sessions, relay).await }
                },
            ))
            .branch(Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let db = text_db.clone();
                let sessions = text_sessions.clone();
                async move { text::text_handler(bot, msg, db, sessions).await }
            }))
    }
}

/// Registration entry, shared by `/start`, `/menu_registration` and the
/// "В меню регистрации" reply button. Shows the role picker, forgets the
/// persisted registration and abandons any in-flight prompt or wizard.
pub(crate) async fn show_registration(
    chat: &TrackedChat,
    db: &DatabaseManager,
) -> ResponseResult<()> {
    chat.show(View::Registration).await?;

    let user_id = chat.user_id();
    if let Err(err) = BotUser::delete(&db.pool, user_id.0 as i64).await {
        tracing::error!("Failed to clear registration for user {}: {}", user_id, err);
    }
    chat.sessions().update(user_id, |session| session.reset_flows());

    Ok(())
}
