use chrono::Utc;
use teloxide::prelude::*;

use crate::store::BirthdayStore;
use crate::utils::weeks::weeks_since;

/// Payload carried by the "Get Week Number" inline button.
pub const GET_WEEK_CALLBACK: &str = "get_week";

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    store: BirthdayStore,
) -> ResponseResult<()> {
    let user_id = q.from.id.0;
    let username = q.from.username.as_deref().unwrap_or("unknown");

    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    // Button presses on messages the bot can no longer see carry no
    // chat to reply into; acknowledge and move on.
    let Some(message) = q.message.as_ref() else {
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };
    let chat_id = message.chat.id;

    tracing::info!(
        "Callback received: '{}' from user {} ({}) in chat {}",
        data, username, user_id, chat_id.0
    );

    if data == GET_WEEK_CALLBACK {
        bot.answer_callback_query(q.id.clone()).await?;
        match store.lookup(chat_id.0) {
            Some(birth) => {
                let week = weeks_since(birth, Utc::now());
                bot.send_message(chat_id, format!("You are in week {week} of your life."))
                    .await?;
            }
            None => {
                // Stale button from before a restart; not an error.
                bot.send_message(chat_id, "Please enter your birth date first (YYYY-MM-DD).")
                    .await?;
            }
        }
    } else {
        bot.answer_callback_query(q.id.clone())
            .text("Unknown action")
            .await?;
    }

    Ok(())
}
