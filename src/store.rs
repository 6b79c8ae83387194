use crate::date::CalendarDate;
use crate::models::{CheckInRecord, DataSnapshot, Settings, UserStats};
use crate::stats::build_stats_at;
use crate::storage::{KeyValueStore, StorageError};
use tracing::debug;

pub const CHECK_IN_KEY: &str = "daily-ritual.check-ins";
pub const SETTINGS_KEY: &str = "daily-ritual.settings";
pub const STATS_KEY: &str = "daily-ritual.stats";

/// Check-in records, their derived stats and the user's settings.
///
/// The store is the only reader and writer of its backend.
#[derive(Debug, Default)]
pub struct RecordStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn list_records(&self) -> Vec<CheckInRecord> {
        self.backend.get_or(CHECK_IN_KEY, Vec::new())
    }

    /// Replaces the record with the same date or appends a new one, then
    /// rewrites the stats slot.
    pub fn upsert_at(
        &mut self,
        today: CalendarDate,
        record: CheckInRecord,
    ) -> Result<UserStats, StorageError> {
        let mut records = self.list_records();
        match records.iter_mut().find(|existing| existing.date == record.date) {
            Some(existing) => {
                debug!(date = %record.date, "replacing check-in");
                *existing = record;
            }
            None => records.push(record),
        }

        let stats = build_stats_at(today, &records);
        self.backend.set(CHECK_IN_KEY, &records)?;
        self.backend.set(STATS_KEY, &stats)?;
        Ok(stats)
    }

    pub fn has_checked_in(&self, date: CalendarDate) -> bool {
        self.list_records().iter().any(|record| record.date == date)
    }

    pub fn get_check_in(&self, date: CalendarDate) -> Option<CheckInRecord> {
        self.list_records()
            .into_iter()
            .find(|record| record.date == date)
    }

    pub fn today_check_in(&self) -> Option<CheckInRecord> {
        self.get_check_in(CalendarDate::today())
    }

    pub fn get_stats(&self) -> UserStats {
        self.backend.get_or(STATS_KEY, UserStats::default())
    }

    pub fn get_settings(&self) -> Settings {
        self.backend.get_or(SETTINGS_KEY, Settings::default())
    }

    pub fn update_settings(&mut self, settings: &Settings) -> Result<(), StorageError> {
        self.backend.set(SETTINGS_KEY, settings)
    }

    pub fn snapshot(&self, today: CalendarDate) -> DataSnapshot {
        let records = self.list_records();
        let has_checked_in_today = records.iter().any(|record| record.date == today);
        DataSnapshot {
            records,
            stats: self.get_stats(),
            today,
            has_checked_in_today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KvData, load_data, persist_data};

    fn day(offset: i64) -> CalendarDate {
        CalendarDate::from_ymd(2024, 1, 15).unwrap().add_days(offset)
    }

    fn record(offset: i64, mood: &str, note: &str) -> CheckInRecord {
        CheckInRecord {
            date: day(offset),
            mood: mood.to_string(),
            note: note.to_string(),
            timestamp: 1_700_000_000_000 + offset,
        }
    }

    #[test]
    fn fresh_store_has_defaults() {
        let store = RecordStore::new(KvData::default());
        assert!(store.list_records().is_empty());
        assert_eq!(store.get_stats(), UserStats::default());
        assert_eq!(store.get_settings(), Settings::default());
        assert!(!store.has_checked_in(day(0)));
        assert!(store.get_check_in(day(0)).is_none());
    }

    #[test]
    fn upsert_same_date_is_last_write_wins() {
        let mut store = RecordStore::new(KvData::default());
        store.upsert_at(day(0), record(0, "😊", "first")).unwrap();
        let stats = store.upsert_at(day(0), record(0, "😔", "second")).unwrap();

        let records = store.list_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mood, "😔");
        assert_eq!(records[0].note, "second");
        assert_eq!(stats.total_check_ins, 1);
    }

    #[test]
    fn upsert_persists_stats_alongside_records() {
        let mut store = RecordStore::new(KvData::default());
        for offset in 0..3 {
            store.upsert_at(day(2), record(offset, "😌", "")).unwrap();
        }

        let stats = store.get_stats();
        assert_eq!(stats.total_check_ins, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.last_check_in_date, day(2).to_string());
    }

    #[test]
    fn store_accepts_any_mood_and_empty_note() {
        let mut store = RecordStore::new(KvData::default());
        store.upsert_at(day(0), record(0, "whatever", "")).unwrap();
        let found = store.get_check_in(day(0)).unwrap();
        assert_eq!(found.mood, "whatever");
        assert!(store.has_checked_in(day(0)));
        assert!(!store.has_checked_in(day(1)));
    }

    #[test]
    fn settings_are_independent_of_records() {
        let mut store = RecordStore::new(KvData::default());
        let settings = Settings {
            enable_notifications: false,
            theme: "dark".to_string(),
        };
        store.update_settings(&settings).unwrap();
        store.upsert_at(day(0), record(0, "😊", "")).unwrap();
        assert_eq!(store.get_settings(), settings);
    }

    #[test]
    fn snapshot_reports_today() {
        let mut store = RecordStore::new(KvData::default());
        store.upsert_at(day(0), record(0, "🤩", "shipped")).unwrap();

        let snap = store.snapshot(day(0));
        assert!(snap.has_checked_in_today);
        assert_eq!(snap.records.len(), 1);
        assert_eq!(snap.today, day(0));

        assert!(!store.snapshot(day(1)).has_checked_in_today);
    }

    #[test]
    fn slots_use_the_ritual_keys() {
        let mut store = RecordStore::new(KvData::default());
        store.upsert_at(day(0), record(0, "😊", "")).unwrap();
        store.update_settings(&Settings::default()).unwrap();

        let stored = serde_json::to_value(store.backend()).unwrap();
        let keys: Vec<&str> = stored
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec![
                "daily-ritual.check-ins",
                "daily-ritual.settings",
                "daily-ritual.stats"
            ]
        );
        assert_eq!(stored["daily-ritual.check-ins"][0]["date"], "2024-01-15");
        assert_eq!(stored["daily-ritual.stats"]["totalCheckIns"], 1);
        assert_eq!(stored["daily-ritual.settings"]["theme"], "default");
    }

    #[tokio::test]
    async fn check_ins_survive_a_reload() {
        let mut path = std::env::temp_dir();
        path.push(format!("daily_ritual_store_{}.json", std::process::id()));

        let mut store = RecordStore::new(KvData::default());
        store.upsert_at(day(1), record(0, "😊", "day one")).unwrap();
        store.upsert_at(day(1), record(1, "🤩", "day two")).unwrap();
        store
            .update_settings(&Settings {
                enable_notifications: false,
                theme: "dark".to_string(),
            })
            .unwrap();
        persist_data(&path, store.backend()).await.unwrap();

        let reloaded = RecordStore::new(load_data(&path).await);
        let _ = std::fs::remove_file(&path);

        assert_eq!(reloaded.list_records(), store.list_records());
        assert_eq!(reloaded.get_stats(), store.get_stats());
        assert_eq!(reloaded.get_stats().current_streak, 2);
        assert_eq!(reloaded.get_settings(), store.get_settings());
        assert_eq!(reloaded.get_check_in(day(1)).unwrap().note, "day two");
    }
}
