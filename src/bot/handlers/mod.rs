pub mod callback;
pub mod message;
pub mod text;

use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
};

use crate::store::BirthdayStore;

/// Wires the birthday store into the dptree update handler.
pub struct BotHandler {
    pub store: BirthdayStore,
}

impl BotHandler {
    pub fn new(store: BirthdayStore) -> Self {
        Self { store }
    }

    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let store_text = self.store.clone();
        let store_callback = self.store.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(|bot, msg, cmd| async move {
                        message::command_handler(bot, msg, cmd).await
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot, msg| {
                let store = store_text.clone();
                async move { text::text_handler(bot, msg, store).await }
            }))
            .branch(Update::filter_callback_query().endpoint(move |bot, q| {
                let store = store_callback.clone();
                async move { callback::callback_handler(bot, q, store).await }
            }))
    }
}
