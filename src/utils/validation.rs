use anyhow::{anyhow, Result};

use crate::database::models::Role;

/// Parsed arguments of `/add_mail` and `/delete_mail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistArgs {
    pub role: Role,
    pub email: String,
}

/// Parses `<роль> <email>` after a whitelist command. The error message is
/// the exact reply the bot sends back, so `command` names the command the
/// user typed.
pub fn parse_whitelist_args(command: &str, args: &str) -> Result<WhitelistArgs> {
    let parts: Vec<&str> = args.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(anyhow!(
            "Используйте формат: {command} <роль> <email>\nРоль должна быть 'студент' или 'преподаватель'."
        ));
    }

    let role = match parts[0].trim().to_lowercase().as_str() {
        "студент" => Role::Student,
        "преподаватель" => Role::Teacher,
        _ => {
            return Err(anyhow!(
                "Некорректная роль. Используйте 'студент' или 'преподаватель'."
            ))
        }
    };

    Ok(WhitelistArgs {
        role,
        email: parts[1].trim().to_string(),
    })
}

/// Validates a reminder time as strict `HH:MM`, zero-padded, 24-hour clock.
/// Returns the trimmed canonical string.
pub fn validate_reminder_time(input: &str) -> Result<String> {
    let input = input.trim();
    let bytes = input.as_bytes();

    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();

    if !well_formed {
        return Err(anyhow!("Invalid time format"));
    }

    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');

    if hours > 23 || minutes > 59 {
        return Err(anyhow!("Invalid time format"));
    }

    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitelist_args_student() {
        let args = parse_whitelist_args("/add_mail", "студент ivanov@college.by").unwrap();
        assert_eq!(args.role, Role::Student);
        assert_eq!(args.email, "ivanov@college.by");
    }

    #[test]
    fn test_parse_whitelist_args_teacher_case_folded() {
        let args = parse_whitelist_args("/delete_mail", "ПРЕПОДАВАТЕЛЬ petrov@college.by").unwrap();
        assert_eq!(args.role, Role::Teacher);
        assert_eq!(args.email, "petrov@college.by");
    }

    #[test]
    fn test_parse_whitelist_args_extra_whitespace() {
        let args = parse_whitelist_args("/add_mail", "  студент   box@college.by  ").unwrap();
        assert_eq!(args.role, Role::Student);
        assert_eq!(args.email, "box@college.by");
    }

    #[test]
    fn test_parse_whitelist_args_wrong_arity() {
        let err = parse_whitelist_args("/add_mail", "студент").unwrap_err();
        assert!(err.to_string().contains("Используйте формат: /add_mail"));

        let err = parse_whitelist_args("/delete_mail", "").unwrap_err();
        assert!(err.to_string().contains("Используйте формат: /delete_mail"));

        assert!(parse_whitelist_args("/add_mail", "студент a@b.c extra").is_err());
    }

    #[test]
    fn test_parse_whitelist_args_unknown_role() {
        let err = parse_whitelist_args("/add_mail", "директор a@b.c").unwrap_err();
        assert!(err.to_string().contains("Некорректная роль"));

        // Visitors are never whitelisted
        assert!(parse_whitelist_args("/add_mail", "посетитель a@b.c").is_err());
    }

    #[test]
    fn test_validate_reminder_time_valid() {
        assert_eq!(validate_reminder_time("09:30").unwrap(), "09:30");
        assert_eq!(validate_reminder_time("00:00").unwrap(), "00:00");
        assert_eq!(validate_reminder_time("23:59").unwrap(), "23:59");
        assert_eq!(validate_reminder_time("  12:05  ").unwrap(), "12:05");
    }

    #[test]
    fn test_validate_reminder_time_out_of_range() {
        assert!(validate_reminder_time("24:00").is_err());
        assert!(validate_reminder_time("12:60").is_err());
        assert!(validate_reminder_time("99:99").is_err());
    }

    #[test]
    fn test_validate_reminder_time_malformed() {
        assert!(validate_reminder_time("").is_err());
        assert!(validate_reminder_time("9:30").is_err());
        assert!(validate_reminder_time("09.30").is_err());
        assert!(validate_reminder_time("09:3").is_err());
        assert!(validate_reminder_time("ab:cd").is_err());
        assert!(validate_reminder_time("09:30:00").is_err());
    }
}
