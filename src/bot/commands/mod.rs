pub mod whitelist;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case", description = "Команды бота:")]
pub enum Command {
    #[command(description = "показать эту справку")]
    Help,
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "открыть меню регистрации")]
    MenuRegistration,
    #[command(description = "создать напоминание")]
    Reminder,
    #[command(description = "добавить почту в список: /add_mail <роль> <email>")]
    AddMail(String),
    #[command(description = "удалить почту из списка: /delete_mail <роль> <email>")]
    DeleteMail(String),
}
