use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use teloxide::types::{MessageId, UserId};

use crate::database::models::Role;
use crate::utils::calendar::Month;

/// Where a user is in the reminder wizard. Each stage owns every value
/// picked so far, so a day without its month and year is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderFlow {
    PickYear,
    PickMonth { year: i32 },
    PickDay { year: i32, month: Month },
    PickTime { year: i32, month: Month, day: u8 },
}

/// Per-user conversational state, held only for the process lifetime.
/// Role membership itself lives in the database, not here.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Set after the user picks a role that needs email confirmation.
    pub awaiting_email: Option<Role>,
    /// Ids of bot messages in this chat, oldest first. Swept before the
    /// next menu render.
    pub tracked_messages: Vec<MessageId>,
    pub reminder: Option<ReminderFlow>,
}

impl Session {
    /// Abandons any in-progress prompt or wizard. Tracked message ids are
    /// kept so the next render can still clean the chat.
    pub fn reset_flows(&mut self) {
        self.awaiting_email = None;
        self.reminder = None;
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<UserId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the user's session; a fresh default before first contact.
    pub fn get(&self, user: UserId) -> Session {
        self.lock().get(&user).cloned().unwrap_or_default()
    }

    /// Single mutation entry point, creating the session on demand.
    pub fn update<F>(&self, user: UserId, mutate: F)
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = self.lock();
        mutate(sessions.entry(user).or_default());
    }

    pub fn clear(&self, user: UserId) {
        self.lock().remove(&user);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, Session>> {
        // Session data stays consistent even if a holder panicked mid-update.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: UserId = UserId(42);

    #[test]
    fn test_fresh_session_is_empty() {
        let store = SessionStore::new();
        let session = store.get(USER);
        assert!(session.awaiting_email.is_none());
        assert!(session.tracked_messages.is_empty());
        assert!(session.reminder.is_none());
    }

    #[test]
    fn test_update_creates_and_persists() {
        let store = SessionStore::new();
        store.update(USER, |session| {
            session.awaiting_email = Some(Role::Student);
            session.tracked_messages.push(MessageId(7));
        });

        let session = store.get(USER);
        assert_eq!(session.awaiting_email, Some(Role::Student));
        assert_eq!(session.tracked_messages, vec![MessageId(7)]);
    }

    #[test]
    fn test_sessions_are_isolated_per_user() {
        let store = SessionStore::new();
        store.update(USER, |session| {
            session.reminder = Some(ReminderFlow::PickYear);
        });

        assert!(store.get(UserId(99)).reminder.is_none());
    }

    #[test]
    fn test_clear_drops_entry() {
        let store = SessionStore::new();
        store.update(USER, |session| {
            session.tracked_messages.push(MessageId(1));
        });
        store.clear(USER);
        assert!(store.get(USER).tracked_messages.is_empty());
    }

    #[test]
    fn test_reset_flows_keeps_tracked_messages() {
        let mut session = Session {
            awaiting_email: Some(Role::Teacher),
            tracked_messages: vec![MessageId(1), MessageId(2)],
            reminder: Some(ReminderFlow::PickMonth { year: 2025 }),
        };

        session.reset_flows();

        assert!(session.awaiting_email.is_none());
        assert!(session.reminder.is_none());
        assert_eq!(session.tracked_messages.len(), 2);
    }

    #[test]
    fn test_wizard_stage_carries_prior_picks() {
        let flow = ReminderFlow::PickTime {
            year: 2026,
            month: Month::February,
            day: 28,
        };

        match flow {
            ReminderFlow::PickTime { year, month, day } => {
                assert_eq!(year, 2026);
                assert_eq!(month, Month::February);
                assert_eq!(day, 28);
            }
            _ => panic!("wrong stage"),
        }
    }
}
