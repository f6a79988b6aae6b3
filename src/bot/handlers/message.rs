use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::utils::logging::log_command_start;

/// Prompt sent on `/start`, before any birth date is known.
pub const ONBOARDING_PROMPT: &str =
    "Welcome! Please enter your birth date in YYYY-MM-DD format to start.";

pub async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    let user = msg.from().and_then(|u| u.username.as_deref()).unwrap_or("unknown");
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    match cmd {
        Command::Help => {
            log_command_start("/help", user, user_id, msg.chat.id.0, None);
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            log_command_start("/start", user, user_id, msg.chat.id.0, None);
            bot.send_message(msg.chat.id, ONBOARDING_PROMPT).await?;
        }
    }
    Ok(())
}
