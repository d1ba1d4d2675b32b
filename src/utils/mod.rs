/// Month names and the day-count rule for the reminder picker
pub mod calendar;
/// Input validation for commands and free-text replies
pub mod validation;
