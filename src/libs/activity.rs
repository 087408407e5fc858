//! Core learning-activity types shared across the application.
//!
//! A study session is submitted as an [`ActivityRequest`] (raw strings from
//! the form or CLI), passes through the validator, and lives on as an
//! [`ActivityRecord`] with parsed fields. Records are append-only; there is
//! no edit or delete path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the session felt, from the student's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Normal,
    Tired,
    Hard,
}

/// Display metadata for a mood, used by the console views.
pub struct MoodOption {
    pub value: Mood,
    pub emoji: &'static str,
    pub label: &'static str,
}

pub const MOOD_OPTIONS: [MoodOption; 4] = [
    MoodOption { value: Mood::Happy, emoji: "😄", label: "It was fun!" },
    MoodOption { value: Mood::Normal, emoji: "😊", label: "Okay" },
    MoodOption { value: Mood::Tired, emoji: "😓", label: "Tiring" },
    MoodOption { value: Mood::Hard, emoji: "🤔", label: "Difficult" },
];

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Normal => "normal",
            Mood::Tired => "tired",
            Mood::Hard => "hard",
        }
    }

    pub fn emoji(&self) -> &'static str {
        MOOD_OPTIONS.iter().find(|o| o.value == *self).map(|o| o.emoji).unwrap_or("")
    }

    pub fn label(&self) -> &'static str {
        MOOD_OPTIONS.iter().find(|o| o.value == *self).map(|o| o.label).unwrap_or("")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "normal" => Ok(Mood::Normal),
            "tired" => Ok(Mood::Tired),
            "hard" => Ok(Mood::Hard),
            _ => Err(()),
        }
    }
}

/// One logged study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub user_id: String,
    pub activity_date: NaiveDate,
    /// Seconds spent on the session.
    pub duration: i64,
    pub score: Option<i64>,
    pub mood: Option<Mood>,
    pub memo: Option<String>,
    pub activity_type: Vec<String>,
}

/// An inbound submission before validation.
///
/// Fields arrive as loosely-typed values from the caller; the validator is
/// the only gate between this shape and the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    pub user_id: String,
    pub activity_date: String,
    pub duration: i64,
    pub score: Option<i64>,
    pub mood: Option<String>,
    pub memo: Option<String>,
    pub activity_type: Vec<String>,
}

/// An item a deployment offers in the "what did you work on" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub name: String,
    pub color: String,
}
