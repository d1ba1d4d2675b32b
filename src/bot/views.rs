use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ParseMode,
};

use super::actions::{CallbackAction, Section, Specialty};
use super::content;
use crate::database::models::Role;
use crate::utils::calendar::{picker_years, Month};

/// Labels on the persistent reply keyboard. The text handler matches
/// incoming messages against these exact strings.
pub const NAV_TO_REGISTRATION: &str = "В меню регистрации";
pub const NAV_TO_MAIN_MENU: &str = "В главное меню";
pub const NAV_PROBLEM: &str = "Проблема с ботом?";

/// Every screen the bot can show. Rendering is pure; sending happens in the
/// handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Registration,
    Home(Role),
    ScheduleMenu,
    InfoMenu,
    ApplicantsMenu,
    SpecialtiesList,
    Specialty(Specialty),
    About,
    News,
    Contacts,
    EventCalendar,
    Socials,
    Faq,
    Admissions,
    ExtraMaterial,
    CollegeRules,
}

/// What a rendered view consists of.
pub struct MenuView {
    pub text: &'static str,
    pub keyboard: Option<InlineKeyboardMarkup>,
    pub parse_mode: Option<ParseMode>,
    pub disable_preview: bool,
    /// Home menus are accompanied by a second message carrying the
    /// persistent navigation keyboard.
    pub with_nav_keyboard: bool,
}

impl MenuView {
    fn plain(text: &'static str) -> Self {
        MenuView {
            text,
            keyboard: None,
            parse_mode: None,
            disable_preview: false,
            with_nav_keyboard: false,
        }
    }

    fn markdown(text: &'static str) -> Self {
        MenuView {
            parse_mode: Some(ParseMode::Markdown),
            ..Self::plain(text)
        }
    }

    fn with_keyboard(mut self, keyboard: InlineKeyboardMarkup) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    fn without_preview(mut self) -> Self {
        self.disable_preview = true;
        self
    }
}

pub fn render(view: View) -> MenuView {
    match view {
        View::Registration => MenuView::plain(content::REGISTRATION_PROMPT)
            .with_keyboard(registration_keyboard()),
        View::Home(role) => {
            let mut rendered = MenuView::plain(home_text(role)).with_keyboard(home_keyboard(role));
            rendered.with_nav_keyboard = true;
            rendered
        }
        View::ScheduleMenu => {
            MenuView::plain(content::SCHEDULE_MENU).with_keyboard(schedule_keyboard())
        }
        View::InfoMenu => MenuView::plain(content::INFO_MENU).with_keyboard(info_keyboard()),
        View::ApplicantsMenu => {
            MenuView::plain(content::APPLICANTS_MENU).with_keyboard(applicants_keyboard())
        }
        View::SpecialtiesList => {
            MenuView::plain(content::SPECIALTIES_MENU).with_keyboard(specialties_keyboard())
        }
        View::Specialty(specialty) => MenuView::markdown(specialty_text(specialty))
            .with_keyboard(back_keyboard()),
        View::About => MenuView::markdown(content::ABOUT).without_preview(),
        View::News => MenuView::plain(content::NEWS_PLACEHOLDER),
        View::Contacts => MenuView::plain(content::CONTACTS),
        View::EventCalendar => MenuView::plain(content::EVENT_CALENDAR_PLACEHOLDER),
        View::Socials => MenuView::markdown(content::SOCIALS).without_preview(),
        View::Faq => MenuView::markdown(content::FAQ),
        View::Admissions => MenuView::plain(content::ADMISSIONS),
        View::ExtraMaterial => MenuView::plain(content::EXTRA_MATERIAL_PLACEHOLDER),
        View::CollegeRules => MenuView::markdown(content::COLLEGE_RULES),
    }
}

fn home_text(role: Role) -> &'static str {
    match role {
        Role::Student => content::STUDENT_HOME,
        Role::Teacher => content::TEACHER_HOME,
        Role::Visitor => content::VISITOR_HOME,
    }
}

/// The reply keyboard pinned under the message input.
pub fn nav_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(NAV_TO_REGISTRATION),
        KeyboardButton::new(NAV_TO_MAIN_MENU),
        KeyboardButton::new(NAV_PROBLEM),
    ]])
    .resize_keyboard(true)
}

fn button(label: &str, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, action.encode())
}

fn registration_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        button("Студент", CallbackAction::Role(Role::Student)),
        button("Преподаватель", CallbackAction::Role(Role::Teacher)),
        button("Посетитель", CallbackAction::Role(Role::Visitor)),
    ]])
}

fn home_keyboard(role: Role) -> InlineKeyboardMarkup {
    let open = |section| CallbackAction::Open(section);
    match role {
        Role::Student => InlineKeyboardMarkup::new(vec![
            vec![
                button("О колледже", open(Section::About)),
                button("Расписание", open(Section::Schedule)),
            ],
            vec![
                button("Новости", open(Section::StudentNews)),
                button("Справочная информация", open(Section::StudentInfo)),
            ],
            vec![button(
                "Контакты преподавателей и администрации",
                open(Section::ContactsStaff),
            )],
            vec![
                button("Соц. сети колледжа", open(Section::Socials)),
                button("FAQ", open(Section::Faq)),
            ],
        ]),
        Role::Teacher => InlineKeyboardMarkup::new(vec![
            vec![
                button("О колледже", open(Section::About)),
                button("Расписание", open(Section::Schedule)),
            ],
            vec![
                button("Новости", open(Section::StudentNews)),
                button("Календарь событий", open(Section::EventCalendar)),
            ],
            vec![
                button("Справочная информация", open(Section::StudentInfo)),
                button("Соц. сети колледжа", open(Section::Socials)),
                button("FAQ", open(Section::Faq)),
            ],
        ]),
        Role::Visitor => InlineKeyboardMarkup::new(vec![
            vec![
                button("О колледже", open(Section::About)),
                button("Новости", open(Section::News)),
            ],
            vec![
                button("Для абитуриентов", open(Section::Applicants)),
                button("Справочная информация", open(Section::Info)),
            ],
            vec![
                button("Контакты", open(Section::Contacts)),
                button("Соц. Сети колледжа", open(Section::Socials)),
            ],
            vec![button("FAQ", open(Section::Faq))],
        ]),
    }
}

fn schedule_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button(
            "Расписание на завтра",
            CallbackAction::Open(Section::ScheduleTomorrow),
        )],
        vec![button(
            "Расписание на семестр",
            CallbackAction::Open(Section::ScheduleTerm),
        )],
        vec![button(
            "Расписание секций",
            CallbackAction::Open(Section::ScheduleSections),
        )],
    ])
}

fn info_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button(
            "Дополнительный материал",
            CallbackAction::Open(Section::ExtraMaterial),
        )],
        vec![button(
            "Правила колледжа",
            CallbackAction::Open(Section::CollegeRules),
        )],
    ])
}

fn applicants_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button(
            "Специальности",
            CallbackAction::Open(Section::Specialties),
        )],
        vec![button(
            "Приемная комиссия и требуемые документы",
            CallbackAction::Open(Section::Admissions),
        )],
        vec![button(
            "Сроки проведения приемной кампании",
            CallbackAction::Open(Section::AdmissionDates),
        )],
    ])
}

fn specialties_keyboard() -> InlineKeyboardMarkup {
    let rows = Specialty::ALL
        .into_iter()
        .map(|specialty| vec![button(specialty_label(specialty), CallbackAction::Specialty(specialty))])
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

fn back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![button(
        "Назад",
        CallbackAction::BackToSpecialties,
    )]])
}

fn specialty_label(specialty: Specialty) -> &'static str {
    match specialty {
        Specialty::Metals => "Производство и переработка металлов",
        Specialty::Emergency => "Предупреждение и ликвидация чрезвычайных ситуаций",
        Specialty::MobileProgramming => "Программирование мобильных устройств",
        Specialty::EconomicPlanning => "Планово-экономическая и аналитическая деятельность",
        Specialty::SoftwareDevelopment => {
            "Разработка и сопровождение программного обеспечения информационных систем"
        }
        Specialty::Robotics => {
            "Техническое обслуживание технологического оборудования и средств робототехники в автоматизированном производстве"
        }
        Specialty::Machining => "Технологическое обеспечение машиностроительного производства",
        Specialty::Transport => {
            "Техническое обслуживание электронных систем транспортных средств"
        }
    }
}

fn specialty_text(specialty: Specialty) -> &'static str {
    match specialty {
        Specialty::Metals => content::SPECIALTY_METALS,
        Specialty::Emergency => content::SPECIALTY_EMERGENCY,
        Specialty::MobileProgramming => content::SPECIALTY_MOBILE_PROGRAMMING,
        Specialty::EconomicPlanning => content::SPECIALTY_ECONOMIC_PLANNING,
        Specialty::SoftwareDevelopment => content::SPECIALTY_SOFTWARE_DEVELOPMENT,
        Specialty::Robotics => content::SPECIALTY_ROBOTICS,
        Specialty::Machining => content::SPECIALTY_MACHINING,
        Specialty::Transport => content::SPECIALTY_TRANSPORT,
    }
}

// --- Reminder wizard keyboards ---

pub fn year_keyboard() -> InlineKeyboardMarkup {
    let row = picker_years()
        .map(|year| button(&year.to_string(), CallbackAction::Year(year)))
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(vec![row])
}

/// Twelve months, three rows of four. Telegram caps a row at eight buttons,
/// so a single row is not an option here.
pub fn month_keyboard() -> InlineKeyboardMarkup {
    let rows = Month::ALL
        .chunks(4)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&month| button(month.name_ru(), CallbackAction::Month(month)))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

/// One button per day of the picked month, seven per row.
pub fn day_keyboard(month: Month) -> InlineKeyboardMarkup {
    let buttons = (1..=month.day_count())
        .map(|day| button(&day.to_string(), CallbackAction::Day(day)))
        .collect::<Vec<_>>();
    let rows = buttons
        .chunks(7)
        .map(<[InlineKeyboardButton]>::to_vec)
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn token(btn: &InlineKeyboardButton) -> &str {
        match &btn.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            _ => panic!("expected a callback button"),
        }
    }

    fn all_tokens(markup: &InlineKeyboardMarkup) -> Vec<&str> {
        markup
            .inline_keyboard
            .iter()
            .flatten()
            .map(token)
            .collect()
    }

    #[test]
    fn test_registration_offers_three_roles() {
        let view = render(View::Registration);
        let keyboard = view.keyboard.unwrap();
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(
            all_tokens(&keyboard),
            vec!["student", "teacher", "visitor"]
        );
        assert!(!view.with_nav_keyboard);
    }

    #[test]
    fn test_student_home_layout() {
        let view = render(View::Home(Role::Student));
        assert_eq!(view.text, content::STUDENT_HOME);
        assert!(view.with_nav_keyboard);

        let keyboard = view.keyboard.unwrap();
        let widths: Vec<usize> = keyboard.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![2, 2, 1, 2]);
        assert_eq!(
            all_tokens(&keyboard),
            vec![
                "about",
                "schedule",
                "student_news",
                "student_info",
                "contacts_staff",
                "socials",
                "faq"
            ]
        );
    }

    #[test]
    fn test_teacher_home_layout() {
        let view = render(View::Home(Role::Teacher));
        assert_eq!(view.text, content::TEACHER_HOME);

        let keyboard = view.keyboard.unwrap();
        let widths: Vec<usize> = keyboard.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![2, 2, 3]);
        assert!(all_tokens(&keyboard).contains(&"event_calendar"));
    }

    #[test]
    fn test_visitor_home_layout() {
        let view = render(View::Home(Role::Visitor));
        assert_eq!(view.text, content::VISITOR_HOME);

        let keyboard = view.keyboard.unwrap();
        let widths: Vec<usize> = keyboard.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![2, 2, 2, 1]);
        assert_eq!(
            all_tokens(&keyboard),
            vec![
                "about",
                "news",
                "applicants",
                "info",
                "contacts",
                "socials",
                "faq"
            ]
        );
    }

    #[test]
    fn test_specialties_list_has_eight_rows() {
        let view = render(View::SpecialtiesList);
        let keyboard = view.keyboard.unwrap();
        assert_eq!(keyboard.inline_keyboard.len(), 8);
        assert!(keyboard.inline_keyboard.iter().all(|row| row.len() == 1));
        assert_eq!(all_tokens(&keyboard)[2], "specialty_3");
    }

    #[test]
    fn test_specialty_page_has_back_button() {
        let view = render(View::Specialty(Specialty::MobileProgramming));
        assert_eq!(view.parse_mode, Some(ParseMode::Markdown));
        let keyboard = view.keyboard.unwrap();
        assert_eq!(all_tokens(&keyboard), vec!["back"]);
    }

    #[test]
    fn test_markdown_pages() {
        let about = render(View::About);
        assert_eq!(about.parse_mode, Some(ParseMode::Markdown));
        assert!(about.disable_preview);

        let socials = render(View::Socials);
        assert_eq!(socials.parse_mode, Some(ParseMode::Markdown));
        assert!(socials.disable_preview);

        let contacts = render(View::Contacts);
        assert_eq!(contacts.parse_mode, None);

        let admissions = render(View::Admissions);
        assert_eq!(admissions.parse_mode, None);
    }

    #[test]
    fn test_schedule_menu_buttons() {
        let view = render(View::ScheduleMenu);
        let keyboard = view.keyboard.unwrap();
        assert_eq!(
            all_tokens(&keyboard),
            vec!["schedule_tom", "schedule_year", "schedule_section"]
        );
    }

    #[test]
    fn test_applicants_menu_buttons() {
        let view = render(View::ApplicantsMenu);
        let keyboard = view.keyboard.unwrap();
        assert_eq!(
            all_tokens(&keyboard),
            vec!["specialties", "admissions", "admission_dates"]
        );
    }

    #[test]
    fn test_year_keyboard_is_single_row() {
        let keyboard = year_keyboard();
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(
            all_tokens(&keyboard),
            vec!["year:2024", "year:2025", "year:2026", "year:2027"]
        );
    }

    #[test]
    fn test_month_keyboard_fits_telegram_row_limit() {
        let keyboard = month_keyboard();
        let total: usize = keyboard.inline_keyboard.iter().map(Vec::len).sum();
        assert_eq!(total, 12);
        assert!(keyboard.inline_keyboard.iter().all(|row| row.len() <= 8));
    }

    #[test]
    fn test_day_keyboard_button_counts() {
        for (month, expected) in [
            (Month::February, 28),
            (Month::April, 30),
            (Month::January, 31),
        ] {
            let keyboard = day_keyboard(month);
            let total: usize = keyboard.inline_keyboard.iter().map(Vec::len).sum();
            assert_eq!(total, expected);
        }
    }

    #[test]
    fn test_every_view_renders() {
        let mut views = vec![
            View::Registration,
            View::Home(Role::Student),
            View::Home(Role::Teacher),
            View::Home(Role::Visitor),
            View::ScheduleMenu,
            View::InfoMenu,
            View::ApplicantsMenu,
            View::SpecialtiesList,
            View::About,
            View::News,
            View::Contacts,
            View::EventCalendar,
            View::Socials,
            View::Faq,
            View::Admissions,
            View::ExtraMaterial,
            View::CollegeRules,
        ];
        for specialty in Specialty::ALL {
            views.push(View::Specialty(specialty));
        }

        for view in views {
            assert!(!render(view).text.is_empty());
        }
    }
}
