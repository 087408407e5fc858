//! Column and field visibility rules, driven by deployment settings.
//!
//! The table layout is declarative: [`ACTIVITY_COLUMNS`] fixes the order
//! (date, score, duration, mood, activity type, actions) and settings only
//! ever filter it, never reorder it. A field with no setting key is always
//! visible. Adding a column means adding an entry to the table; nothing
//! else needs to change.

use crate::libs::settings::{SettingKey, Settings};

/// Every field an activity can surface in a table or detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ActivityDate,
    Score,
    Duration,
    Mood,
    ActivityType,
    Memo,
    Actions,
}

/// One column of the learning-log table.
pub struct Column {
    pub field: Field,
    pub label: &'static str,
    /// Setting that gates the column; `None` means always visible.
    pub setting_key: Option<SettingKey>,
}

/// The learning-log table, in display order.
pub const ACTIVITY_COLUMNS: [Column; 6] = [
    // The date column is always shown (no setting key).
    Column { field: Field::ActivityDate, label: "Date", setting_key: None },
    Column { field: Field::Score, label: "Score", setting_key: Some(SettingKey::ShowScore) },
    Column { field: Field::Duration, label: "Study time", setting_key: Some(SettingKey::ShowStudyTime) },
    Column { field: Field::Mood, label: "Mood", setting_key: Some(SettingKey::ShowMood) },
    Column { field: Field::ActivityType, label: "Worked on", setting_key: Some(SettingKey::ShowActivity) },
    // The row-action column is always shown.
    Column { field: Field::Actions, label: "", setting_key: None },
];

fn setting_value(key: SettingKey, settings: &Settings) -> bool {
    match key {
        SettingKey::ShowScore => settings.show_score,
        SettingKey::ShowStudyTime => settings.show_study_time,
        SettingKey::ShowSecond => settings.show_second,
        SettingKey::ShowMood => settings.show_mood,
        SettingKey::ShowMemo => settings.show_memo,
        SettingKey::ShowActivity => settings.show_activity,
        // Numeric keys never gate visibility.
        SettingKey::ScoreMin | SettingKey::ScoreMax => true,
    }
}

/// Whether a single field is visible under the given settings.
///
/// Total and deterministic: fields without a setting key are always visible,
/// the rest follow their boolean toggle.
pub fn is_field_visible(field: Field, settings: &Settings) -> bool {
    let key = match field {
        Field::ActivityDate | Field::Actions => None,
        Field::Score => Some(SettingKey::ShowScore),
        Field::Duration => Some(SettingKey::ShowStudyTime),
        Field::Mood => Some(SettingKey::ShowMood),
        Field::ActivityType => Some(SettingKey::ShowActivity),
        Field::Memo => Some(SettingKey::ShowMemo),
    };
    match key {
        Some(key) => setting_value(key, settings),
        None => true,
    }
}

/// The visible columns of the learning-log table, in fixed order.
pub fn visible_columns(settings: &Settings) -> Vec<&'static Column> {
    ACTIVITY_COLUMNS
        .iter()
        .filter(|column| match column.setting_key {
            Some(key) => setting_value(key, settings),
            None => true,
        })
        .collect()
}
