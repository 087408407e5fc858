//! The validator gate between an inbound submission and the record store.
//!
//! Checks run in a fixed order and the first failure wins. Validation also
//! parses: a successful run yields the typed [`ActivityRecord`] that gets
//! appended, so malformed dates or moods can never reach the store.
//!
//! Out-of-range scores are rejected here rather than clamped. Clamping as
//! the student types is a form nicety; at the data-integrity boundary a
//! value outside the configured bounds is an error the caller has to
//! correct.

use crate::libs::activity::{ActivityRecord, ActivityRequest, Mood};
use crate::libs::settings::Settings;
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

/// Maximum memo length, in characters.
pub const MEMO_MAX_CHARS: usize = 200;

/// Why a submission was rejected. Recoverable by resubmitting a corrected
/// form; never retried automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("\"{0}\" is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("study time must not be negative (got {0} seconds)")]
    NegativeDuration(i64),
    #[error("score {score} is outside the allowed range {min}-{max}")]
    ScoreOutOfRange { score: i64, min: i64, max: i64 },
    #[error("\"{0}\" is not a known mood")]
    InvalidMood(String),
    #[error("memo is {0} characters long, the limit is {MEMO_MAX_CHARS}")]
    MemoTooLong(usize),
}

/// Validates a submission against the deployment settings.
///
/// Check order: date, duration, score (only when scores are recorded and one
/// was sent), mood (only when moods are recorded and one was sent), memo
/// length. A record may omit any optional field; omission is never an error.
pub fn validate(request: &ActivityRequest, settings: &Settings) -> Result<ActivityRecord, ValidationError> {
    let activity_date = NaiveDate::parse_from_str(request.activity_date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(request.activity_date.clone()))?;

    if request.duration < 0 {
        return Err(ValidationError::NegativeDuration(request.duration));
    }

    let score = if settings.show_score {
        if let Some(score) = request.score {
            if score < settings.score_min || score > settings.score_max {
                return Err(ValidationError::ScoreOutOfRange {
                    score,
                    min: settings.score_min,
                    max: settings.score_max,
                });
            }
            Some(score)
        } else {
            None
        }
    } else {
        None
    };

    let mood = if settings.show_mood {
        match &request.mood {
            Some(raw) => Some(Mood::from_str(raw.trim()).map_err(|_| ValidationError::InvalidMood(raw.clone()))?),
            None => None,
        }
    } else {
        None
    };

    if let Some(memo) = &request.memo {
        let len = memo.chars().count();
        if len > MEMO_MAX_CHARS {
            return Err(ValidationError::MemoTooLong(len));
        }
    }

    Ok(ActivityRecord {
        user_id: request.user_id.clone(),
        activity_date,
        duration: request.duration,
        score,
        mood,
        memo: request.memo.clone().filter(|m| !m.is_empty()),
        activity_type: request.activity_type.clone(),
    })
}
