use college_info_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_config_env() {
    for var in [
        "TELEGRAM_BOT_TOKEN",
        "DATABASE_URL",
        "HTTP_PORT",
        "SCHEDULE_CHANNEL",
        "SCHEDULE_TOMORROW_MESSAGE_ID",
        "SCHEDULE_TERM_MESSAGE_ID",
        "SCHEDULE_SECTION_MESSAGE_IDS",
        "ADMISSION_DATES_MESSAGE_ID",
    ] {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("SCHEDULE_CHANNEL", "@college_channel");
    env::set_var("SCHEDULE_TOMORROW_MESSAGE_ID", "13");
    env::set_var("SCHEDULE_TERM_MESSAGE_ID", "12");
    env::set_var("SCHEDULE_SECTION_MESSAGE_IDS", "20, 21, 22");
    env::set_var("ADMISSION_DATES_MESSAGE_ID", "30");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.schedule_channel, "@college_channel");
    assert_eq!(config.schedule_tomorrow_message_id, 13);
    assert_eq!(config.schedule_term_message_id, 12);
    assert_eq!(config.schedule_section_message_ids, vec![20, 21, 22]);
    assert_eq!(config.admission_dates_message_id, 30);

    clear_config_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    // Only set the required values, let the rest use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("SCHEDULE_CHANNEL", "@college_channel");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.database_url, "sqlite:./data/college.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.schedule_tomorrow_message_id, 3);
    assert_eq!(config.schedule_term_message_id, 2);
    assert_eq!(config.schedule_section_message_ids, vec![4, 5, 6, 7]);
    assert_eq!(config.admission_dates_message_id, 8);

    clear_config_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("SCHEDULE_CHANNEL", "@college_channel");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    clear_config_env();
}

#[test]
fn test_config_empty_token_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    env::set_var("SCHEDULE_CHANNEL", "@college_channel");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_config_env();
}

#[test]
fn test_config_missing_schedule_channel() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("SCHEDULE_CHANNEL must be set"));

    clear_config_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("SCHEDULE_CHANNEL", "@college_channel");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_config_env();
}

#[test]
fn test_config_invalid_message_id() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("SCHEDULE_CHANNEL", "@college_channel");
    env::set_var("SCHEDULE_TOMORROW_MESSAGE_ID", "not_a_number");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid SCHEDULE_TOMORROW_MESSAGE_ID"));

    clear_config_env();
}

#[test]
fn test_config_invalid_section_id_list() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("SCHEDULE_CHANNEL", "@college_channel");
    env::set_var("SCHEDULE_SECTION_MESSAGE_IDS", "4,five,6");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid SCHEDULE_SECTION_MESSAGE_IDS"));

    clear_config_env();
}

#[test]
fn test_config_empty_database_url_falls_back() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("SCHEDULE_CHANNEL", "@college_channel");
    env::set_var("DATABASE_URL", "");

    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./data/college.db");

    clear_config_env();
}

#[test]
fn test_config_numeric_channel_id_accepted() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_config_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("SCHEDULE_CHANNEL", "-1001234567890");

    let config = Config::from_env().unwrap();
    assert_eq!(config.schedule_channel, "-1001234567890");

    clear_config_env();
}
