use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::bot::handlers::callback::GET_WEEK_CALLBACK;
use crate::store::BirthdayStore;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_success, log_validation_error};
use crate::utils::validation::is_date_shaped;

/// Caption of the inline button attached to the save confirmation.
pub const GET_WEEK_BUTTON_LABEL: &str = "Get Week Number";

/// Handles plain text messages: date-shaped text is a birth date
/// submission, anything else gets at most a gentle hint.
pub async fn text_handler(bot: Bot, msg: Message, store: BirthdayStore) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;
    let user = msg.from().and_then(|u| u.username.as_deref()).unwrap_or("unknown");
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    if is_date_shaped(text) {
        match store.record(chat_id.0, text) {
            Ok(date) => {
                log_command_success(
                    "record_birthday",
                    user,
                    user_id,
                    chat_id.0,
                    Some(&date.to_string()),
                );
                let keyboard = InlineKeyboardMarkup::new(vec![vec![
                    InlineKeyboardButton::callback(GET_WEEK_BUTTON_LABEL, GET_WEEK_CALLBACK),
                ]]);
                bot.send_message(
                    chat_id,
                    "Your birth date has been saved! Press the button to get your week number.",
                )
                .reply_markup(keyboard)
                .await?;
            }
            Err(e) => {
                log_validation_error(
                    "record_birthday",
                    "birth_date",
                    text,
                    &e.to_string(),
                    user,
                    user_id,
                    chat_id.0,
                );
                CommandFeedback::new(bot, chat_id)
                    .error("Invalid date format. Please use YYYY-MM-DD.")
                    .await?;
            }
        }
    } else if text.starts_with('/') {
        let feedback = CommandFeedback::new(bot, chat_id);
        let error_msg = format!(
            "Unknown command: {}",
            text.split_whitespace().next().unwrap_or(text)
        );
        feedback
            .validation_error(&error_msg, "Use /help to see all available commands.")
            .await?;
    } else {
        let lowered = text.to_lowercase();
        if lowered.contains("birth") || lowered.contains("week") {
            CommandFeedback::new(bot, chat_id)
                .info("Send your birth date as YYYY-MM-DD and I'll track your week number.")
                .await?;
        }
        // For other messages, we don't respond to avoid spam
    }

    Ok(())
}
