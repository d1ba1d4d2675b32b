use crate::database::models::Role;
use crate::utils::calendar::Month;

/// Everything an inline button can ask for. Wire tokens stay stable because
/// buttons already delivered to chats keep firing with the old data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Role(Role),
    Open(Section),
    Specialty(Specialty),
    /// The "Назад" button under a specialty description.
    BackToSpecialties,
    Year(i32),
    Month(Month),
    Day(u8),
}

/// Menu sections reachable by a single button press. Token pairs like
/// `news`/`student_news` come from different home menus but open the same
/// screen; they stay separate so every token encodes back to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Schedule,
    ScheduleTomorrow,
    ScheduleTerm,
    ScheduleSections,
    News,
    StudentNews,
    Info,
    StudentInfo,
    Contacts,
    ContactsStaff,
    EventCalendar,
    Socials,
    Faq,
    Admissions,
    Applicants,
    ExtraMaterial,
    CollegeRules,
    AdmissionDates,
    Specialties,
}

impl Section {
    pub fn token(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Schedule => "schedule",
            Section::ScheduleTomorrow => "schedule_tom",
            Section::ScheduleTerm => "schedule_year",
            Section::ScheduleSections => "schedule_section",
            Section::News => "news",
            Section::StudentNews => "student_news",
            Section::Info => "info",
            Section::StudentInfo => "student_info",
            Section::Contacts => "contacts",
            Section::ContactsStaff => "contacts_staff",
            Section::EventCalendar => "event_calendar",
            Section::Socials => "socials",
            Section::Faq => "faq",
            Section::Admissions => "admissions",
            Section::Applicants => "applicants",
            Section::ExtraMaterial => "extra_material",
            Section::CollegeRules => "college_rules",
            Section::AdmissionDates => "admission_dates",
            Section::Specialties => "specialties",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "about" => Some(Section::About),
            "schedule" => Some(Section::Schedule),
            "schedule_tom" => Some(Section::ScheduleTomorrow),
            "schedule_year" => Some(Section::ScheduleTerm),
            "schedule_section" => Some(Section::ScheduleSections),
            "news" => Some(Section::News),
            "student_news" => Some(Section::StudentNews),
            "info" => Some(Section::Info),
            "student_info" => Some(Section::StudentInfo),
            "contacts" => Some(Section::Contacts),
            "contacts_staff" => Some(Section::ContactsStaff),
            "event_calendar" => Some(Section::EventCalendar),
            "socials" => Some(Section::Socials),
            "faq" => Some(Section::Faq),
            "admissions" => Some(Section::Admissions),
            "applicants" => Some(Section::Applicants),
            "extra_material" => Some(Section::ExtraMaterial),
            "college_rules" => Some(Section::CollegeRules),
            "admission_dates" => Some(Section::AdmissionDates),
            "specialties" => Some(Section::Specialties),
            _ => None,
        }
    }
}

/// The eight specialties offered on the applicants screen, numbered as in
/// the `specialty_<n>` wire tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialty {
    Metals,
    Emergency,
    MobileProgramming,
    EconomicPlanning,
    SoftwareDevelopment,
    Robotics,
    Machining,
    Transport,
}

impl Specialty {
    pub const ALL: [Specialty; 8] = [
        Specialty::Metals,
        Specialty::Emergency,
        Specialty::MobileProgramming,
        Specialty::EconomicPlanning,
        Specialty::SoftwareDevelopment,
        Specialty::Robotics,
        Specialty::Machining,
        Specialty::Transport,
    ];

    pub fn number(self) -> u8 {
        match self {
            Specialty::Metals => 1,
            Specialty::Emergency => 2,
            Specialty::MobileProgramming => 3,
            Specialty::EconomicPlanning => 4,
            Specialty::SoftwareDevelopment => 5,
            Specialty::Robotics => 6,
            Specialty::Machining => 7,
            Specialty::Transport => 8,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Specialty::Metals),
            2 => Some(Specialty::Emergency),
            3 => Some(Specialty::MobileProgramming),
            4 => Some(Specialty::EconomicPlanning),
            5 => Some(Specialty::SoftwareDevelopment),
            6 => Some(Specialty::Robotics),
            7 => Some(Specialty::Machining),
            8 => Some(Specialty::Transport),
            _ => None,
        }
    }
}

impl CallbackAction {
    /// Total parser over callback data. Unknown data yields `None`; callers
    /// log and drop it rather than guessing.
    pub fn parse(data: &str) -> Option<Self> {
        if let Some(rest) = data.strip_prefix("year:") {
            return rest.parse().ok().map(CallbackAction::Year);
        }
        if let Some(rest) = data.strip_prefix("month:") {
            return rest
                .parse()
                .ok()
                .and_then(Month::from_number)
                .map(CallbackAction::Month);
        }
        if let Some(rest) = data.strip_prefix("day:") {
            return rest.parse().ok().map(CallbackAction::Day);
        }
        if let Some(rest) = data.strip_prefix("specialty_") {
            return rest
                .parse()
                .ok()
                .and_then(Specialty::from_number)
                .map(CallbackAction::Specialty);
        }

        match data {
            "student" => Some(CallbackAction::Role(Role::Student)),
            "teacher" => Some(CallbackAction::Role(Role::Teacher)),
            "visitor" => Some(CallbackAction::Role(Role::Visitor)),
            "back" => Some(CallbackAction::BackToSpecialties),
            other => Section::parse(other).map(CallbackAction::Open),
        }
    }

    pub fn encode(self) -> String {
        match self {
            CallbackAction::Role(role) => role.as_str().to_string(),
            CallbackAction::Open(section) => section.token().to_string(),
            CallbackAction::Specialty(specialty) => {
                format!("specialty_{}", specialty.number())
            }
            CallbackAction::BackToSpecialties => "back".to_string(),
            CallbackAction::Year(year) => format!("year:{year}"),
            CallbackAction::Month(month) => format!("month:{}", month.number()),
            CallbackAction::Day(day) => format!("day:{day}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tokens() {
        assert_eq!(
            CallbackAction::parse("student"),
            Some(CallbackAction::Role(Role::Student))
        );
        assert_eq!(
            CallbackAction::parse("teacher"),
            Some(CallbackAction::Role(Role::Teacher))
        );
        assert_eq!(
            CallbackAction::parse("visitor"),
            Some(CallbackAction::Role(Role::Visitor))
        );
    }

    #[test]
    fn test_specialty_tokens() {
        assert_eq!(
            CallbackAction::parse("specialty_3"),
            Some(CallbackAction::Specialty(Specialty::MobileProgramming))
        );
        assert_eq!(
            CallbackAction::Specialty(Specialty::MobileProgramming).encode(),
            "specialty_3"
        );
        assert_eq!(CallbackAction::parse("specialty_0"), None);
        assert_eq!(CallbackAction::parse("specialty_9"), None);
        assert_eq!(CallbackAction::parse("specialty_"), None);
    }

    #[test]
    fn test_back_token() {
        assert_eq!(
            CallbackAction::parse("back"),
            Some(CallbackAction::BackToSpecialties)
        );
        assert_eq!(CallbackAction::BackToSpecialties.encode(), "back");
    }

    #[test]
    fn test_wizard_tokens() {
        assert_eq!(
            CallbackAction::parse("year:2025"),
            Some(CallbackAction::Year(2025))
        );
        assert_eq!(
            CallbackAction::parse("month:2"),
            Some(CallbackAction::Month(Month::February))
        );
        assert_eq!(CallbackAction::parse("day:28"), Some(CallbackAction::Day(28)));

        assert_eq!(CallbackAction::parse("year:abc"), None);
        assert_eq!(CallbackAction::parse("month:13"), None);
        assert_eq!(CallbackAction::parse("day:"), None);
    }

    #[test]
    fn test_every_action_round_trips() {
        let mut actions = vec![
            CallbackAction::Role(Role::Student),
            CallbackAction::Role(Role::Teacher),
            CallbackAction::Role(Role::Visitor),
            CallbackAction::BackToSpecialties,
            CallbackAction::Year(2024),
            CallbackAction::Day(1),
            CallbackAction::Day(31),
        ];
        for month in Month::ALL {
            actions.push(CallbackAction::Month(month));
        }
        for specialty in Specialty::ALL {
            actions.push(CallbackAction::Specialty(specialty));
        }
        for section in [
            Section::About,
            Section::Schedule,
            Section::ScheduleTomorrow,
            Section::ScheduleTerm,
            Section::ScheduleSections,
            Section::News,
            Section::StudentNews,
            Section::Info,
            Section::StudentInfo,
            Section::Contacts,
            Section::ContactsStaff,
            Section::EventCalendar,
            Section::Socials,
            Section::Faq,
            Section::Admissions,
            Section::Applicants,
            Section::ExtraMaterial,
            Section::CollegeRules,
            Section::AdmissionDates,
            Section::Specialties,
        ] {
            actions.push(CallbackAction::Open(section));
        }

        for action in actions {
            assert_eq!(CallbackAction::parse(&action.encode()), Some(action));
        }
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(CallbackAction::parse(""), None);
        assert_eq!(CallbackAction::parse("drop_tables"), None);
        assert_eq!(CallbackAction::parse("Студент"), None);
    }
}
