use anyhow::{anyhow, Result};
use teloxide::prelude::*;
use teloxide::types::{MessageId, Recipient};

use crate::bot::chat::TrackedChat;
use crate::config::Config;

/// What the relay can fetch from the schedule channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayKind {
    ScheduleTomorrow,
    ScheduleTerm,
    ScheduleSections,
    AdmissionDates,
}

impl RelayKind {
    pub fn caption(self) -> &'static str {
        match self {
            RelayKind::ScheduleTomorrow => crate::bot::content::SCHEDULE_TOMORROW_CAPTION,
            RelayKind::ScheduleTerm => crate::bot::content::SCHEDULE_TERM_CAPTION,
            RelayKind::ScheduleSections => crate::bot::content::SCHEDULE_SECTIONS_CAPTION,
            RelayKind::AdmissionDates => crate::bot::content::ADMISSION_DATES_CAPTION,
        }
    }

    fn error_prefix(self) -> &'static str {
        match self {
            RelayKind::AdmissionDates => "Произошла ошибка при пересылке: ",
            _ => "Ошибка при пересылке: ",
        }
    }
}

/// Forwards pinned posts (schedule images, the term PDF, admission dates)
/// from the college channel into a user's chat. The channel curates those
/// posts; the bot only knows their message ids.
#[derive(Clone)]
pub struct MediaRelay {
    channel: Recipient,
    tomorrow_id: MessageId,
    term_id: MessageId,
    section_ids: Vec<MessageId>,
    admission_dates_id: MessageId,
}

impl MediaRelay {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            channel: parse_channel(&config.schedule_channel)?,
            tomorrow_id: MessageId(config.schedule_tomorrow_message_id),
            term_id: MessageId(config.schedule_term_message_id),
            section_ids: config
                .schedule_section_message_ids
                .iter()
                .map(|&id| MessageId(id))
                .collect(),
            admission_dates_id: MessageId(config.admission_dates_message_id),
        })
    }

    pub fn message_ids(&self, kind: RelayKind) -> Vec<MessageId> {
        match kind {
            RelayKind::ScheduleTomorrow => vec![self.tomorrow_id],
            RelayKind::ScheduleTerm => vec![self.term_id],
            RelayKind::ScheduleSections => self.section_ids.clone(),
            RelayKind::AdmissionDates => vec![self.admission_dates_id],
        }
    }

    /// Forwards every post of the kind, then the caption. A failure turns
    /// into a user-visible relay error instead of bubbling up.
    pub async fn deliver(&self, chat: &TrackedChat, kind: RelayKind) -> ResponseResult<()> {
        if let Err(err) = self.forward_all(chat, kind).await {
            tracing::error!("Relay of {:?} failed: {}", kind, err);
            chat.send_text(&format!("{}{}", kind.error_prefix(), err))
                .await?;
        }
        Ok(())
    }

    async fn forward_all(&self, chat: &TrackedChat, kind: RelayKind) -> ResponseResult<()> {
        for message_id in self.message_ids(kind) {
            chat.forward_from(self.channel.clone(), message_id).await?;
        }
        chat.send_text(kind.caption()).await?;
        Ok(())
    }
}

/// `@username` or a raw numeric chat id.
pub fn parse_channel(raw: &str) -> Result<Recipient> {
    let raw = raw.trim();
    if let Some(username) = raw.strip_prefix('@') {
        if username.is_empty() {
            return Err(anyhow!("SCHEDULE_CHANNEL username must not be empty"));
        }
        return Ok(Recipient::ChannelUsername(raw.to_string()));
    }

    let id: i64 = raw
        .parse()
        .map_err(|_| anyhow!("SCHEDULE_CHANNEL must be @username or a numeric chat id"))?;
    Ok(Recipient::Id(ChatId(id)))
}
