use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::{CycleProfile, CyclePrediction, UserId};
use crate::prediction;
use crate::responses::{KeywordEntry, FALLBACK, RESPONSES};
use crate::store::{CycleStore, StoreError};

/// A composed chat answer ready to hand back to the requester.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub emoji: &'static str,
}

/// Pick the best canned response for a message.
///
/// Case-insensitive substring scan over the table; the longest matching
/// keyword wins, and on equal lengths the earlier table entry wins. Messages
/// that match nothing get the fallback entry, so this never fails.
pub fn select<'a>(message: &str, table: &'a [KeywordEntry]) -> &'a KeywordEntry {
    let normalized = message.to_lowercase();
    let normalized = normalized.trim();

    let mut best: Option<&'a KeywordEntry> = None;
    let mut best_len = 0;
    for entry in table {
        if normalized.contains(entry.keyword) && entry.keyword.len() > best_len {
            best = Some(entry);
            best_len = entry.keyword.len();
        }
    }

    match best {
        Some(entry) => {
            debug!(keyword = entry.keyword, "matched chat keyword");
            entry
        }
        None => {
            debug!("no chat keyword matched, using fallback");
            &FALLBACK
        }
    }
}

/// The suffix appended to a reply when the requester has usable cycle data.
pub fn personalization(prediction: &CyclePrediction) -> String {
    format!(
        "\n\n📅 *Based on your cycle data, you are in your {} phase (day {} of {}). {}*",
        prediction.current_phase, prediction.day_of_cycle, prediction.cycle_length_days,
        prediction.mood_tip
    )
}

/// Answer a chat message, personalizing with the profile when one is given.
///
/// A profile the predictor rejects just means no personalization; the base
/// reply always goes out.
pub fn respond(message: &str, profile: Option<&CycleProfile>, today: NaiveDate) -> ChatReply {
    let entry = select(message, RESPONSES);
    let mut response = entry.response.to_string();

    if let Some(profile) = profile {
        match prediction::predict(profile, today) {
            Ok(pred) => response.push_str(&personalization(&pred)),
            Err(err) => debug!(%err, "skipping chat personalization"),
        }
    }

    ChatReply {
        response,
        emoji: entry.emoji,
    }
}

/// Store-backed variant of [`respond`]: looks up the requester's profile when
/// the requester is known. An absent profile means an unpersonalized reply,
/// not an error.
pub fn respond_for_user<S: CycleStore>(
    store: &S,
    user: Option<&UserId>,
    message: &str,
    today: NaiveDate,
) -> Result<ChatReply, StoreError> {
    let profile = match user {
        Some(user) => match store.get_profile(user) {
            Ok(profile) => Some(profile),
            Err(StoreError::NotFound) => None,
            Err(err) => return Err(err),
        },
        None => None,
    };
    Ok(respond(message, profile.as_ref(), today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn longest_keyword_wins() {
        // "headache" (8) beats "cramp" (5).
        let entry = select("I have really bad cramps and a headache", RESPONSES);
        assert_eq!(entry.keyword, "headache");
    }

    #[test]
    fn equal_length_tie_goes_to_earlier_entry() {
        // "cramp" and "tired" are both 5 chars; "cramp" comes first in the table.
        let entry = select("so tired and crampy today", RESPONSES);
        assert_eq!(entry.keyword, "cramp");
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let entry = select("  WHY do I get CRAMPS?  ", RESPONSES);
        assert_eq!(entry.keyword, "cramp");
    }

    #[test]
    fn unrecognized_message_gets_fallback() {
        let entry = select("xyzabc123", RESPONSES);
        assert_eq!(entry, &FALLBACK);
        assert!(entry.response.contains("here are some things I can help with"));
    }

    #[test]
    fn reply_without_profile_is_unpersonalized() {
        let reply = respond("how do I handle cramps", None, date("2026-02-20"));
        assert!(!reply.response.contains("Based on your cycle data"));
        assert_eq!(reply.emoji, "💪");
    }

    #[test]
    fn reply_personalized_from_profile() {
        // Day 20 of 28 puts the user in the luteal phase.
        let profile = CycleProfile::parse("2026-02-01", None, None).unwrap();
        let reply = respond("feeling tired", Some(&profile), date("2026-02-20"));
        assert!(reply.response.contains("Luteal phase"));
        assert!(reply.response.contains("day 20 of 28"));
        assert!(reply.response.contains(crate::models::Phase::Luteal.mood_tip()));
    }

    #[test]
    fn rejected_profile_skips_personalization() {
        let profile = CycleProfile::new(date("2026-02-01"), Some(0), None);
        let reply = respond("feeling tired", Some(&profile), date("2026-02-20"));
        assert!(reply.response.contains("tired"));
        assert!(!reply.response.contains("Based on your cycle data"));
    }

    #[test]
    fn store_backed_reply_for_known_and_unknown_users() {
        let (store, demo) = MemoryStore::seeded();
        let today = date("2026-02-20");

        let reply = respond_for_user(&store, Some(&demo), "hello", today).unwrap();
        assert!(reply.response.contains("Based on your cycle data"));

        let stranger = UserId::from("nobody");
        let reply = respond_for_user(&store, Some(&stranger), "hello", today).unwrap();
        assert!(!reply.response.contains("Based on your cycle data"));

        let reply = respond_for_user(&store, None, "hello", today).unwrap();
        assert!(!reply.response.contains("Based on your cycle data"));
    }
}
