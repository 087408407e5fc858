//! Deployment settings: which optional fields are collected and displayed.
//!
//! Settings live in the settings sheet as loosely-typed `item,value` rows and
//! are normalized here into one typed [`Settings`] value. Every function that
//! depends on settings takes the value as a parameter; nothing reads ambient
//! state, so the whole rule layer stays testable in isolation.
//!
//! Parsing overlays the sheet rows onto the deployment defaults (the same
//! defaults `manabi init` seeds the sheet with). Any row the parser cannot
//! make sense of is a configuration error, fatal to the request that needed
//! the settings.

use crate::libs::activity::ActivityItem;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A raw `item,value` row from the settings sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingRow {
    pub item: String,
    pub value: String,
}

impl SettingRow {
    pub fn new(item: impl Into<String>, value: impl Into<String>) -> Self {
        Self { item: item.into(), value: value.into() }
    }
}

/// Every key the settings sheet may carry.
///
/// Adding a setting means adding a variant here; the exhaustive match in
/// [`Settings::parse`] will not compile until the new key is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    ShowScore,
    ScoreMin,
    ScoreMax,
    ShowStudyTime,
    ShowSecond,
    ShowMood,
    ShowMemo,
    ShowActivity,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::ShowScore => "show_score",
            SettingKey::ScoreMin => "score_min",
            SettingKey::ScoreMax => "score_max",
            SettingKey::ShowStudyTime => "show_study_time",
            SettingKey::ShowSecond => "show_second",
            SettingKey::ShowMood => "show_mood",
            SettingKey::ShowMemo => "show_memo",
            SettingKey::ShowActivity => "show_activity",
        }
    }
}

impl FromStr for SettingKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show_score" => Ok(SettingKey::ShowScore),
            "score_min" => Ok(SettingKey::ScoreMin),
            "score_max" => Ok(SettingKey::ScoreMax),
            "show_study_time" => Ok(SettingKey::ShowStudyTime),
            "show_second" => Ok(SettingKey::ShowSecond),
            "show_mood" => Ok(SettingKey::ShowMood),
            "show_memo" => Ok(SettingKey::ShowMemo),
            "show_activity" => Ok(SettingKey::ShowActivity),
            _ => Err(()),
        }
    }
}

/// A malformed settings source. Fatal to any request needing settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("unknown settings key \"{0}\"")]
    UnknownKey(String),
    #[error("settings key \"{key}\" expects TRUE or FALSE, got \"{value}\"")]
    ExpectedBool { key: &'static str, value: String },
    #[error("settings key \"{key}\" expects a number, got \"{value}\"")]
    ExpectedNumber { key: &'static str, value: String },
    #[error("score_min ({min}) is greater than score_max ({max})")]
    ScoreBoundsInverted { min: i64, max: i64 },
    #[error("duplicate activity item \"{0}\"")]
    DuplicateActivityItem(String),
}

/// Typed application settings, one per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub score_min: i64,
    pub score_max: i64,
    pub show_score: bool,
    pub show_mood: bool,
    pub show_memo: bool,
    pub show_study_time: bool,
    pub show_second: bool,
    pub show_activity: bool,
    /// Populated only when `show_activity` is true.
    pub activity_items: Vec<ActivityItem>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            score_min: 0,
            score_max: 100,
            show_score: true,
            show_mood: true,
            show_memo: true,
            show_study_time: true,
            show_second: false,
            show_activity: false,
            activity_items: Vec::new(),
        }
    }
}

impl Settings {
    /// Normalizes raw settings rows into a typed `Settings` value.
    ///
    /// Rows overlay the deployment defaults. Booleans accept the sheet
    /// spellings `TRUE`/`FALSE` in any case; numbers must parse as integers.
    /// `show_second` is meaningless without `show_study_time` and is forced
    /// to false when study time is off.
    pub fn parse(rows: &[SettingRow]) -> Result<Settings, SettingsError> {
        let mut settings = Settings::default();

        for row in rows {
            let key = SettingKey::from_str(row.item.trim())
                .map_err(|_| SettingsError::UnknownKey(row.item.trim().to_string()))?;

            match key {
                SettingKey::ShowScore => settings.show_score = parse_bool(key, &row.value)?,
                SettingKey::ScoreMin => settings.score_min = parse_number(key, &row.value)?,
                SettingKey::ScoreMax => settings.score_max = parse_number(key, &row.value)?,
                SettingKey::ShowStudyTime => settings.show_study_time = parse_bool(key, &row.value)?,
                SettingKey::ShowSecond => settings.show_second = parse_bool(key, &row.value)?,
                SettingKey::ShowMood => settings.show_mood = parse_bool(key, &row.value)?,
                SettingKey::ShowMemo => settings.show_memo = parse_bool(key, &row.value)?,
                SettingKey::ShowActivity => settings.show_activity = parse_bool(key, &row.value)?,
            }
        }

        if settings.score_min > settings.score_max {
            return Err(SettingsError::ScoreBoundsInverted {
                min: settings.score_min,
                max: settings.score_max,
            });
        }

        // Dependent-field invariant: seconds only make sense with study time.
        if !settings.show_study_time {
            settings.show_second = false;
        }

        Ok(settings)
    }

    /// Attaches the activity item list, enforcing name uniqueness.
    ///
    /// The list is dropped entirely when `show_activity` is off, so callers
    /// can always pass whatever the items sheet holds.
    pub fn with_activity_items(mut self, items: Vec<ActivityItem>) -> Result<Settings, SettingsError> {
        if !self.show_activity {
            self.activity_items = Vec::new();
            return Ok(self);
        }

        let mut seen: Vec<&str> = Vec::new();
        for item in &items {
            if seen.contains(&item.name.as_str()) {
                return Err(SettingsError::DuplicateActivityItem(item.name.clone()));
            }
            seen.push(&item.name);
        }

        self.activity_items = items;
        Ok(self)
    }
}

fn parse_bool(key: SettingKey, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SettingsError::ExpectedBool {
            key: key.as_str(),
            value: value.to_string(),
        }),
    }
}

fn parse_number(key: SettingKey, value: &str) -> Result<i64, SettingsError> {
    value.trim().parse::<i64>().map_err(|_| SettingsError::ExpectedNumber {
        key: key.as_str(),
        value: value.to_string(),
    })
}
