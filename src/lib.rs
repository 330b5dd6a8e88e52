//! Core logic for Cycora, a personal period-tracking backend.
//!
//! Two stateless pieces do the actual computing: the cycle predictor
//! ([`prediction::predict`]) projects upcoming cycle events from a
//! [`models::CycleProfile`], and the chat selector ([`chat::select`]) picks a
//! canned supportive response by keyword. [`chat::respond`] composes the two,
//! appending a phase-aware personalization line when cycle data is available.
//!
//! Everything is a pure function of its inputs plus an explicit `today`, so
//! calls are idempotent and safe from any number of threads. Persistence sits
//! behind the [`store::CycleStore`] trait; the HTTP layer, auth, and rendering
//! live in the host application.
//!
//! Known gap, kept on purpose: a non-positive `period_length_days` is not
//! rejected. It shrinks the menstrual window to nothing and the profile
//! otherwise predicts normally.

pub mod chat;
pub mod insights;
pub mod models;
pub mod prediction;
pub mod responses;
pub mod store;

pub use chat::{respond, respond_for_user, select, ChatReply};
pub use models::{CycleProfile, CyclePrediction, MoodEntry, Phase, UserId};
pub use prediction::{predict, PredictionError};
pub use responses::{KeywordEntry, FALLBACK, RESPONSES};
pub use store::{CycleStore, MemoryStore, StoreError};
