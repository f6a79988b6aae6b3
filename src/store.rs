use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::utils::validation::{parse_birth_date, InvalidFormat};

/// Shared, in-memory mapping from chat id to recorded birth date.
///
/// At most one date per chat, last write wins, nothing survives a
/// restart. Clones are cheap and all point at the same map. The bot
/// handlers run on a multi-threaded runtime, so the map sits behind an
/// `RwLock`; the lock is never held across an await point.
#[derive(Clone, Default)]
pub struct BirthdayStore {
    birthdays: Arc<RwLock<HashMap<i64, NaiveDate>>>,
}

impl BirthdayStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `raw` strictly as `YYYY-MM-DD` and records it for `chat_id`.
    ///
    /// A later submission overwrites the earlier one. On a parse failure
    /// any previously stored date is left untouched.
    pub fn record(&self, chat_id: i64, raw: &str) -> Result<NaiveDate, InvalidFormat> {
        let date = parse_birth_date(raw)?;
        let mut map = self.birthdays.write().unwrap_or_else(|e| e.into_inner());
        map.insert(chat_id, date);
        Ok(date)
    }

    /// Returns the stored birth date for `chat_id`, if any.
    pub fn lookup(&self, chat_id: i64) -> Option<NaiveDate> {
        let map = self.birthdays.read().unwrap_or_else(|e| e.into_inner());
        map.get(&chat_id).copied()
    }

    /// Snapshot of every registered chat and its birth date.
    ///
    /// Taken under the read lock so the daily broadcast can iterate
    /// without holding the lock while sending.
    pub fn snapshot(&self) -> Vec<(i64, NaiveDate)> {
        let map = self.birthdays.read().unwrap_or_else(|e| e.into_inner());
        map.iter().map(|(chat_id, date)| (*chat_id, *date)).collect()
    }

    /// Number of chats with a recorded birth date.
    pub fn len(&self) -> usize {
        let map = self.birthdays.read().unwrap_or_else(|e| e.into_inner());
        map.len()
    }

    /// Returns true if no birth date has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
