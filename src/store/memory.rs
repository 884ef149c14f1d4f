use chrono::NaiveDate;
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};
use tokio::sync::Mutex;

use crate::models::journal::JournalEntry;
use crate::models::schedule::DayPlan;
use crate::models::support::CheckIn;

/// In-memory state for single-instance deployments. Everything is lost on
/// restart; swap this for a real persistence layer behind the same methods.
///
/// The three maps share the user-id key space but are independent: writing
/// to one never touches the others.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    journals: HashMap<String, BTreeMap<NaiveDate, JournalEntry>>,
    schedules: HashMap<String, HashMap<NaiveDate, DayPlan>>,
    check_ins: HashMap<String, Vec<CheckIn>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the entry under (user, entry.date), replacing any entry already
    /// written for that day.
    pub async fn save_journal_entry(&self, user_id: &str, entry: JournalEntry) -> JournalEntry {
        let mut inner = self.inner.lock().await;
        inner
            .journals
            .entry(user_id.to_string())
            .or_default()
            .insert(entry.date, entry.clone());
        entry
    }

    /// All of a user's entries keyed by date, oldest first. Unknown users
    /// get an empty map, not an error.
    pub async fn list_journal_entries(&self, user_id: &str) -> BTreeMap<NaiveDate, JournalEntry> {
        let inner = self.inner.lock().await;
        inner.journals.get(user_id).cloned().unwrap_or_default()
    }

    /// Replace the user's plan for `plan.date`.
    pub async fn save_schedule(&self, user_id: &str, plan: DayPlan) -> DayPlan {
        let mut inner = self.inner.lock().await;
        inner
            .schedules
            .entry(user_id.to_string())
            .or_default()
            .insert(plan.date, plan.clone());
        plan
    }

    pub async fn get_schedule(&self, user_id: &str, date: NaiveDate) -> Option<DayPlan> {
        let inner = self.inner.lock().await;
        inner
            .schedules
            .get(user_id)
            .and_then(|by_date| by_date.get(&date))
            .cloned()
    }

    /// Check-in history grows without bound; nothing is ever pruned.
    pub async fn append_check_in(&self, user_id: &str, record: CheckIn) {
        let mut inner = self.inner.lock().await;
        inner
            .check_ins
            .entry(user_id.to_string())
            .or_default()
            .push(record);
    }

    /// History in insertion order. Unknown users get an empty list.
    pub async fn list_check_ins(&self, user_id: &str) -> Vec<CheckIn> {
        let inner = self.inner.lock().await;
        inner.check_ins.get(user_id).cloned().unwrap_or_default()
    }
}
