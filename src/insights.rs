use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::MoodEntry;

/// Aggregated view of a user's mood log for the insights screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoodSummary {
    pub total_entries: usize,
    pub mood_distribution: BTreeMap<String, u32>,
    pub symptom_frequency: BTreeMap<String, u32>,
}

impl MoodSummary {
    /// The symptom reported most often, if any were reported at all.
    /// Ties go to the alphabetically first symptom.
    pub fn top_symptom(&self) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (symptom, &count) in &self.symptom_frequency {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((symptom, count));
            }
        }
        best.map(|(symptom, _)| symptom)
    }
}

/// Tally moods and symptoms across a log. Entries with an empty mood string
/// still count their symptoms.
pub fn summarize_moods(entries: &[MoodEntry]) -> MoodSummary {
    let mut summary = MoodSummary {
        total_entries: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        if !entry.mood.is_empty() {
            *summary.mood_distribution.entry(entry.mood.clone()).or_insert(0) += 1;
        }
        for symptom in &entry.symptoms {
            *summary
                .symptom_frequency
                .entry(symptom.clone())
                .or_insert(0) += 1;
        }
    }

    summary
}
