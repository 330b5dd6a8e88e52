use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prediction::PredictionError;

/// Cycle length assumed when the user hasn't provided one.
pub const DEFAULT_CYCLE_LENGTH: i64 = 28;
/// Period length assumed when the user hasn't provided one.
pub const DEFAULT_PERIOD_LENGTH: i64 = 5;

/// Opaque identifier for a user, as handed out by the account layer.
/// The core never inspects it beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coarse classification of where in the cycle a date falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Menstrual => "Menstrual",
            Phase::Follicular => "Follicular",
            Phase::Ovulation => "Ovulation",
            Phase::Luteal => "Luteal",
        }
    }

    /// What's happening in the body during this phase.
    pub fn description(self) -> &'static str {
        match self {
            Phase::Menstrual => {
                "Your body is shedding the uterine lining. Rest, hydrate, and be gentle with yourself."
            }
            Phase::Follicular => {
                "Estrogen is rising! You may feel more energetic and optimistic during this phase."
            }
            Phase::Ovulation => "Peak fertility window. You may feel more confident and social.",
            Phase::Luteal => {
                "Progesterone rises then drops. Energy may decrease as your period approaches."
            }
        }
    }

    /// Short self-care suggestion shown alongside the phase.
    pub fn mood_tip(self) -> &'static str {
        match self {
            Phase::Menstrual => {
                "It's normal to feel lower energy. Warm drinks and light movement can help."
            }
            Phase::Follicular => "Great time for new projects and social activities.",
            Phase::Ovulation => "Energy is at its highest. Channel it into meaningful activities.",
            Phase::Luteal => {
                "Hydrate and rest. Be gentle with yourself — this phase asks for self-care."
            }
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user's stored cycle parameters, fetched fresh from the store per request.
///
/// `last_period_start` is expected to be today or in the past; a future date
/// makes day-of-cycle and phase ill-defined, and keeping it sane is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleProfile {
    pub last_period_start: NaiveDate,
    pub cycle_length_days: i64,
    pub period_length_days: i64,
}

impl CycleProfile {
    /// Build a profile, falling back to the standard 28/5 defaults for
    /// lengths the user didn't supply.
    pub fn new(
        last_period_start: NaiveDate,
        cycle_length_days: Option<i64>,
        period_length_days: Option<i64>,
    ) -> Self {
        Self {
            last_period_start,
            cycle_length_days: cycle_length_days.unwrap_or(DEFAULT_CYCLE_LENGTH),
            period_length_days: period_length_days.unwrap_or(DEFAULT_PERIOD_LENGTH),
        }
    }

    /// Parse user-entered cycle data at the string boundary. The date must be
    /// ISO-8601 (`YYYY-MM-DD`); anything else is rejected rather than guessed.
    pub fn parse(
        last_period_start: &str,
        cycle_length_days: Option<i64>,
        period_length_days: Option<i64>,
    ) -> Result<Self, PredictionError> {
        let date = NaiveDate::parse_from_str(last_period_start, "%Y-%m-%d")
            .map_err(|_| PredictionError::InvalidDate(last_period_start.to_string()))?;
        Ok(Self::new(date, cycle_length_days, period_length_days))
    }
}

/// Projection of upcoming cycle events. Derived on demand and discarded —
/// never written back to the store, hence no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CyclePrediction {
    pub next_period_date: NaiveDate,
    pub ovulation_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    pub days_until_next_period: i64,
    pub current_phase: Phase,
    /// 1-indexed, always within `[1, cycle_length_days]`.
    pub day_of_cycle: i64,
    pub cycle_length_days: i64,
    pub period_length_days: i64,
    pub phase_description: &'static str,
    pub mood_tip: &'static str,
}

/// One day's mood log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: String,
    pub symptoms: Vec<String>,
}
