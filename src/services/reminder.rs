use chrono::{DateTime, Utc};
use chrono_tz::Europe::Prague;
use teloxide::prelude::*;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::store::BirthdayStore;
use crate::utils::logging::log_system_event;
use crate::utils::weeks::{weeks_since, AVERAGE_LIFETIME_WEEKS};

/// Cron expression for the daily broadcast, evaluated in Europe/Prague.
const DAILY_BROADCAST_CRON: &str = "0 0 9 * * *";

/// Sends every registered user their current week count once a day.
pub struct ReminderService {
    bot: Bot,
    store: BirthdayStore,
    scheduler: JobScheduler,
}

impl ReminderService {
    pub async fn new(
        bot: Bot,
        store: BirthdayStore,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            store,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let store = self.store.clone();

        let broadcast_job = Job::new_async_tz(DAILY_BROADCAST_CRON, Prague, move |_uuid, _l| {
            let bot = bot.clone();
            let store = store.clone();
            Box::pin(async move {
                send_daily_reminders(bot, store).await;
            })
        })?;

        self.scheduler.add(broadcast_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Reminder service started - broadcasting daily at 09:00 Europe/Prague");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn broadcast_now(&self) {
        send_daily_reminders(self.bot.clone(), self.store.clone()).await;
    }
}

/// Builds the reminder message for every registered chat without sending.
///
/// Split out from delivery so the broadcast content is testable.
pub fn pending_reminders(store: &BirthdayStore, now: DateTime<Utc>) -> Vec<(ChatId, String)> {
    store
        .snapshot()
        .into_iter()
        .map(|(chat_id, birth)| {
            let week = weeks_since(birth, now);
            let text = format!(
                "Good morning! You are in week {week} of your life. \
                 The average human lifespan is around {AVERAGE_LIFETIME_WEEKS} weeks."
            );
            (ChatId(chat_id), text)
        })
        .collect()
}

/// Fire-and-forget delivery: a failed send is logged and the broadcast
/// continues with the remaining chats.
async fn send_daily_reminders(bot: Bot, store: BirthdayStore) {
    let reminders = pending_reminders(&store, Utc::now());
    log_system_event(
        "daily_broadcast",
        Some(&format!("{} recipients", reminders.len())),
    );

    for (chat_id, text) in reminders {
        if let Err(e) = bot.send_message(chat_id, text).await {
            tracing::error!("Failed to send reminder to chat {}: {}", chat_id.0, e);
        }
    }
}
