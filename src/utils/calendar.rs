/// First year offered by the reminder year picker.
pub const BASE_YEAR: i32 = 2024;
/// How many consecutive years the picker offers.
pub const YEAR_SPAN: i32 = 4;

/// Calendar month. The bot speaks Russian, so the display name is the
/// Russian one and doubles as the value stored with a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    pub fn name_ru(self) -> &'static str {
        match self {
            Month::January => "Январь",
            Month::February => "Февраль",
            Month::March => "Март",
            Month::April => "Апрель",
            Month::May => "Май",
            Month::June => "Июнь",
            Month::July => "Июль",
            Month::August => "Август",
            Month::September => "Сентябрь",
            Month::October => "Октябрь",
            Month::November => "Ноябрь",
            Month::December => "Декабрь",
        }
    }

    /// Number of day buttons shown in the picker. Fixed rule, no leap
    /// years: February always gets 28.
    pub fn day_count(self) -> u8 {
        match self {
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }
}

/// The years offered by the picker, `BASE_YEAR` onwards.
pub fn picker_years() -> impl Iterator<Item = i32> {
    BASE_YEAR..BASE_YEAR + YEAR_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_february_has_28_days() {
        assert_eq!(Month::February.day_count(), 28);
    }

    #[test]
    fn test_thirty_day_months() {
        assert_eq!(Month::April.day_count(), 30);
        assert_eq!(Month::June.day_count(), 30);
        assert_eq!(Month::September.day_count(), 30);
        assert_eq!(Month::November.day_count(), 30);
    }

    #[test]
    fn test_thirty_one_day_months() {
        assert_eq!(Month::January.day_count(), 31);
        assert_eq!(Month::March.day_count(), 31);
        assert_eq!(Month::July.day_count(), 31);
        assert_eq!(Month::December.day_count(), 31);
    }

    #[test]
    fn test_russian_names() {
        assert_eq!(Month::January.name_ru(), "Январь");
        assert_eq!(Month::December.name_ru(), "Декабрь");
    }

    #[test]
    fn test_picker_years_span() {
        let years: Vec<i32> = picker_years().collect();
        assert_eq!(years, vec![2024, 2025, 2026, 2027]);
    }
}
