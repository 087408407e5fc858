use crate::db::sheet::{Sheet, SheetDef, StoreError};
use crate::db::workbook::Workbook;
use crate::libs::settings::SettingRow;

pub const SETTINGS_SHEET: SheetDef = SheetDef {
    name: "settings",
    file: "settings.csv",
    headers: &["item", "value", "description"],
};

/// The rows `manabi init` seeds the settings sheet with. The description
/// column is for the administrator editing the sheet, the application only
/// reads `item` and `value`.
pub const DEFAULT_SETTINGS: [(&str, &str, &str); 8] = [
    ("show_score", "TRUE", "Record a score per session (when FALSE, score_min/score_max are ignored)"),
    ("score_min", "0", "Lowest score the form accepts"),
    ("score_max", "100", "Highest score the form accepts"),
    ("show_study_time", "TRUE", "Record study time (when FALSE, show_second is ignored)"),
    ("show_second", "FALSE", "Ask for seconds as well as minutes"),
    ("show_mood", "TRUE", "Ask how the session felt"),
    ("show_memo", "TRUE", "Offer a free-text memo"),
    ("show_activity", "FALSE", "Offer the activity_items sheet as a pick list"),
];

/// Repository for the settings sheet. Returns raw rows; typing and
/// validation happen in `libs::settings`.
pub struct SettingsSheet {
    sheet: Sheet,
}

impl SettingsSheet {
    pub fn new() -> Result<Self, StoreError> {
        Ok(SettingsSheet {
            sheet: Workbook::new()?.sheet(&SETTINGS_SHEET),
        })
    }

    /// Creates the sheet and seeds the default rows when absent.
    pub fn init(&self) -> Result<bool, StoreError> {
        let created = self.sheet.ensure()?;
        if created {
            for (item, value, desc) in DEFAULT_SETTINGS {
                self.sheet.append_row(&[item.to_string(), value.to_string(), desc.to_string()])?;
            }
        }
        Ok(created)
    }

    pub fn verify(&self) -> Result<(), StoreError> {
        self.sheet.verify_headers()
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn fetch(&self) -> Result<Vec<SettingRow>, StoreError> {
        Ok(self
            .sheet
            .read_rows()?
            .iter()
            .map(|row| SettingRow::new(row.get(0).unwrap_or_default(), row.get(1).unwrap_or_default()))
            .collect())
    }
}
