use teloxide::prelude::*;

use crate::bot::actions::{CallbackAction, Section};
use crate::bot::chat::TrackedChat;
use crate::bot::content;
use crate::bot::session::{ReminderFlow, SessionStore};
use crate::bot::views::{self, View};
use crate::database::connection::DatabaseManager;
use crate::database::models::{BotUser, Role};
use crate::services::relay::{MediaRelay, RelayKind};
use crate::utils::calendar::Month;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    db: DatabaseManager,
    sessions: SessionStore,
    relay: MediaRelay,
) -> ResponseResult<()> {
    // Stop the button spinner right away, whatever we do with the data.
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(message) = q.message else {
        tracing::debug!(
            "Callback from user {} without an accessible message",
            q.from.id
        );
        return Ok(());
    };
    let Some(data) = q.data.as_deref() else {
        tracing::debug!("Callback from user {} without data", q.from.id);
        return Ok(());
    };

    tracing::info!(
        "Callback '{}' from user {} in chat {}",
        data,
        q.from.id,
        message.chat.id
    );

    let Some(action) = CallbackAction::parse(data) else {
        tracing::warn!(
            "Ignoring unknown callback data '{}' from user {}",
            data,
            q.from.id
        );
        return Ok(());
    };

    let chat = TrackedChat::new(bot.clone(), message.chat.id, q.from.id, sessions.clone());

    match action {
        CallbackAction::Role(role) => pick_role(&chat, &db, role).await,
        CallbackAction::Open(section) => open_section(&chat, &relay, section).await,
        CallbackAction::Specialty(specialty) => chat.show(View::Specialty(specialty)).await,
        CallbackAction::BackToSpecialties => chat.show(View::SpecialtiesList).await,
        CallbackAction::Year(year) => {
            pick_year(&bot, &sessions, &message, q.from.id, year).await
        }
        CallbackAction::Month(month) => {
            pick_month(&bot, &sessions, &message, q.from.id, month).await
        }
        CallbackAction::Day(day) => pick_day(&bot, &sessions, &message, q.from.id, day).await,
    }
}

/// Students and teachers get the email prompt; visitors are registered on
/// the spot.
async fn pick_role(chat: &TrackedChat, db: &DatabaseManager, role: Role) -> ResponseResult<()> {
    let user_id = chat.user_id();

    if role.requires_email() {
        chat.send_text(content::EMAIL_PROMPT).await?;
        chat.sessions()
            .update(user_id, |session| session.awaiting_email = Some(role));
        return Ok(());
    }

    match BotUser::upsert(&db.pool, user_id.0 as i64, role, None).await {
        Ok(_) => chat.show(View::Home(role)).await?,
        Err(err) => {
            tracing::error!("Failed to register visitor {}: {}", user_id, err);
            chat.send_text(content::INTERNAL_ERROR).await?;
        }
    }
    Ok(())
}

async fn open_section(
    chat: &TrackedChat,
    relay: &MediaRelay,
    section: Section,
) -> ResponseResult<()> {
    match section {
        Section::About => chat.show(View::About).await,
        Section::Schedule => chat.show(View::ScheduleMenu).await,
        Section::ScheduleTomorrow => relay.deliver(chat, RelayKind::ScheduleTomorrow).await,
        Section::ScheduleTerm => relay.deliver(chat, RelayKind::ScheduleTerm).await,
        Section::ScheduleSections => relay.deliver(chat, RelayKind::ScheduleSections).await,
        Section::News | Section::StudentNews => chat.show(View::News).await,
        Section::Info | Section::StudentInfo => chat.show(View::InfoMenu).await,
        Section::Contacts | Section::ContactsStaff => chat.show(View::Contacts).await,
        Section::EventCalendar => chat.show(View::EventCalendar).await,
        Section::Socials => chat.show(View::Socials).await,
        Section::Faq => chat.show(View::Faq).await,
        Section::Admissions => chat.show(View::Admissions).await,
        Section::Applicants => chat.show(View::ApplicantsMenu).await,
        Section::ExtraMaterial => chat.show(View::ExtraMaterial).await,
        Section::CollegeRules => chat.show(View::CollegeRules).await,
        Section::AdmissionDates => relay.deliver(chat, RelayKind::AdmissionDates).await,
        Section::Specialties => chat.show(View::SpecialtiesList).await,
    }
}

// The wizard steps below edit the picker message in place. A callback that
// does not match the current stage comes from a stale keyboard and is
// dropped; the top-level answer already cleared the spinner.

async fn pick_year(
    bot: &Bot,
    sessions: &SessionStore,
    message: &Message,
    user_id: UserId,
    year: i32,
) -> ResponseResult<()> {
    let Some(ReminderFlow::PickYear) = sessions.get(user_id).reminder else {
        tracing::debug!("Stale year callback from user {}", user_id);
        return Ok(());
    };

    sessions.update(user_id, |session| {
        session.reminder = Some(ReminderFlow::PickMonth { year });
    });

    bot.edit_message_text(
        message.chat.id,
        message.id,
        format!("Вы выбрали {year}. Теперь выберите месяц."),
    )
    .reply_markup(views::month_keyboard())
    .await?;
    Ok(())
}

async fn pick_month(
    bot: &Bot,
    sessions: &SessionStore,
    message: &Message,
    user_id: UserId,
    month: Month,
) -> ResponseResult<()> {
    let Some(ReminderFlow::PickMonth { year }) = sessions.get(user_id).reminder else {
        tracing::debug!("Stale month callback from user {}", user_id);
        return Ok(());
    };

    sessions.update(user_id, |session| {
        session.reminder = Some(ReminderFlow::PickDay { year, month });
    });

    bot.edit_message_text(
        message.chat.id,
        message.id,
        format!("Вы выбрали {}. Теперь выберите день.", month.name_ru()),
    )
    .reply_markup(views::day_keyboard(month))
    .await?;
    Ok(())
}

async fn pick_day(
    bot: &Bot,
    sessions: &SessionStore,
    message: &Message,
    user_id: UserId,
    day: u8,
) -> ResponseResult<()> {
    let Some(ReminderFlow::PickDay { year, month }) = sessions.get(user_id).reminder else {
        tracing::debug!("Stale day callback from user {}", user_id);
        return Ok(());
    };

    // Buttons only go up to the month's day count; anything else is forged.
    if !(1..=month.day_count()).contains(&day) {
        tracing::warn!(
            "Day {} out of range for {} from user {}",
            day,
            month.name_ru(),
            user_id
        );
        return Ok(());
    }

    sessions.update(user_id, |session| {
        session.reminder = Some(ReminderFlow::PickTime { year, month, day });
    });

    bot.edit_message_text(
        message.chat.id,
        message.id,
        format!(
            "Вы выбрали {day} {} {year}. Теперь укажите время для напоминания (формат HH:MM).",
            month.name_ru()
        ),
    )
    .await?;
    Ok(())
}
