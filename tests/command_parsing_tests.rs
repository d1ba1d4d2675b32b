use college_info_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[test]
fn test_help_command_parsing() {
    let result = Command::parse("/help", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::Help));
}

#[test]
fn test_start_command_parsing() {
    let result = Command::parse("/start", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::Start));
}

#[test]
fn test_menu_registration_command_parsing() {
    let result = Command::parse("/menu_registration", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::MenuRegistration));
}

#[test]
fn test_reminder_command_parsing() {
    let result = Command::parse("/reminder", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::Reminder));
}

#[test]
fn test_add_mail_command_keeps_raw_arguments() {
    let result = Command::parse("/add_mail студент ivanov@college.by", "testbot");
    assert!(result.is_ok());
    match result.unwrap() {
        Command::AddMail(args) => assert_eq!(args, "студент ivanov@college.by"),
        other => panic!("expected AddMail, got {:?}", std::mem::discriminant(&other)),
    }
}

#[test]
fn test_delete_mail_command_keeps_raw_arguments() {
    let result = Command::parse("/delete_mail преподаватель petrov@college.by", "testbot");
    assert!(result.is_ok());
    match result.unwrap() {
        Command::DeleteMail(args) => assert_eq!(args, "преподаватель petrov@college.by"),
        other => panic!(
            "expected DeleteMail, got {:?}",
            std::mem::discriminant(&other)
        ),
    }
}

#[test]
fn test_add_mail_without_arguments_still_parses() {
    // Arity is checked by the handler so it can reply with a usage message
    let result = Command::parse("/add_mail", "testbot");
    assert!(result.is_ok());
    match result.unwrap() {
        Command::AddMail(args) => assert!(args.is_empty()),
        other => panic!("expected AddMail, got {:?}", std::mem::discriminant(&other)),
    }
}

#[test]
fn test_command_with_bot_mention() {
    let result = Command::parse("/start@testbot", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::Start));
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Command::parse("/unknown", "testbot").is_err());
    assert!(Command::parse("not a command", "testbot").is_err());
}

#[test]
fn test_descriptions_mention_every_command() {
    let descriptions = Command::descriptions().to_string();
    for name in [
        "/help",
        "/start",
        "/menu_registration",
        "/reminder",
        "/add_mail",
        "/delete_mail",
    ] {
        assert!(descriptions.contains(name), "missing {name}");
    }
}
