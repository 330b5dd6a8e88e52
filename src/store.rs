use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CycleProfile, MoodEntry, UserId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no cycle data found for user")]
    NotFound,
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persistence surface the core computes against. Keyed by opaque user
/// id; what sits behind it (memory, Firebase, SQL) is the host's business.
pub trait CycleStore {
    fn get_profile(&self, user: &UserId) -> Result<CycleProfile, StoreError>;
    fn put_profile(&mut self, user: &UserId, profile: CycleProfile) -> Result<(), StoreError>;

    /// All mood entries logged for a user, oldest first. Unknown users have
    /// an empty log, not an error.
    fn moods(&self, user: &UserId) -> Result<Vec<MoodEntry>, StoreError>;
    fn log_mood(&mut self, user: &UserId, entry: MoodEntry) -> Result<(), StoreError>;
}

/// In-memory reference store, used in tests and as the dev-server backend.
#[derive(Debug, Default, Serialize)]
pub struct MemoryStore {
    profiles: HashMap<UserId, CycleProfile>,
    moods: HashMap<UserId, Vec<MoodEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the demo user, returned alongside its id.
    pub fn seeded() -> (Self, UserId) {
        let demo = UserId::from("demo-user-001");
        let mut store = Self::new();

        store.profiles.insert(
            demo.clone(),
            CycleProfile::new(
                NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid seed date"),
                None,
                None,
            ),
        );

        let seed_moods = [
            ("2026-02-18", "Low Energy", vec!["Cramps", "Fatigue"]),
            ("2026-02-19", "Stable", vec!["Headache"]),
            ("2026-02-20", "Low Energy", vec!["Cramps", "Irritation"]),
            ("2026-02-21", "Slightly Low", vec!["Fatigue"]),
        ];
        store.moods.insert(
            demo.clone(),
            seed_moods
                .into_iter()
                .map(|(date, mood, symptoms)| MoodEntry {
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid seed date"),
                    mood: mood.to_string(),
                    symptoms: symptoms.into_iter().map(String::from).collect(),
                })
                .collect(),
        );

        (store, demo)
    }

    /// Pretty-JSON dump of everything held, for export/backup.
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl CycleStore for MemoryStore {
    fn get_profile(&self, user: &UserId) -> Result<CycleProfile, StoreError> {
        self.profiles.get(user).cloned().ok_or(StoreError::NotFound)
    }

    fn put_profile(&mut self, user: &UserId, profile: CycleProfile) -> Result<(), StoreError> {
        self.profiles.insert(user.clone(), profile);
        Ok(())
    }

    fn moods(&self, user: &UserId) -> Result<Vec<MoodEntry>, StoreError> {
        Ok(self.moods.get(user).cloned().unwrap_or_default())
    }

    fn log_mood(&mut self, user: &UserId, entry: MoodEntry) -> Result<(), StoreError> {
        self.moods.entry(user.clone()).or_default().push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn profile_roundtrip() {
        let mut store = MemoryStore::new();
        let user = UserId::generate();
        let profile = CycleProfile::new(date("2026-02-01"), Some(30), Some(6));

        assert!(matches!(
            store.get_profile(&user),
            Err(StoreError::NotFound)
        ));
        store.put_profile(&user, profile.clone()).unwrap();
        assert_eq!(store.get_profile(&user).unwrap(), profile);
    }

    #[test]
    fn put_overwrites_existing_profile() {
        let mut store = MemoryStore::new();
        let user = UserId::generate();
        store
            .put_profile(&user, CycleProfile::new(date("2026-01-01"), None, None))
            .unwrap();
        store
            .put_profile(&user, CycleProfile::new(date("2026-02-01"), Some(30), None))
            .unwrap();
        assert_eq!(store.get_profile(&user).unwrap().cycle_length_days, 30);
    }

    #[test]
    fn moods_append_in_order() {
        let mut store = MemoryStore::new();
        let user = UserId::generate();
        assert!(store.moods(&user).unwrap().is_empty());

        for (day, mood) in [("2026-02-18", "Low Energy"), ("2026-02-19", "Stable")] {
            store
                .log_mood(
                    &user,
                    MoodEntry {
                        date: date(day),
                        mood: mood.to_string(),
                        symptoms: vec![],
                    },
                )
                .unwrap();
        }

        let moods = store.moods(&user).unwrap();
        assert_eq!(moods.len(), 2);
        assert_eq!(moods[0].mood, "Low Energy");
        assert_eq!(moods[1].mood, "Stable");
    }

    #[test]
    fn seeded_store_has_demo_data() {
        let (store, demo) = MemoryStore::seeded();
        let profile = store.get_profile(&demo).unwrap();
        assert_eq!(profile.last_period_start, date("2026-02-01"));
        assert_eq!(profile.cycle_length_days, 28);
        assert_eq!(store.moods(&demo).unwrap().len(), 4);
    }

    #[test]
    fn export_contains_seeded_profile() {
        let (store, _) = MemoryStore::seeded();
        let json = store.export_json().unwrap();
        assert!(json.contains("demo-user-001"));
        assert!(json.contains("2026-02-01"));
    }
}
