use crate::db::sheet::{Sheet, SheetDef, StoreError};
use crate::db::workbook::{append_guard, Workbook};
use crate::libs::activity::{ActivityRecord, Mood};
use chrono::{Local, NaiveDate};
use std::str::FromStr;

pub const ACTIVITY_SHEET: SheetDef = SheetDef {
    name: "activity_log",
    file: "activity_log.csv",
    headers: &["timestamp", "user_id", "activity_date", "score", "duration", "mood", "activity_type", "memo"],
};

/// Repository for the activity log sheet. Append-only: records are never
/// updated or deleted once written.
pub struct Activities {
    sheet: Sheet,
}

impl Activities {
    pub fn new() -> Result<Self, StoreError> {
        Ok(Activities {
            sheet: Workbook::new()?.sheet(&ACTIVITY_SHEET),
        })
    }

    pub fn init(&self) -> Result<bool, StoreError> {
        self.sheet.ensure()
    }

    pub fn verify(&self) -> Result<(), StoreError> {
        self.sheet.verify_headers()
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Appends one validated record under the workbook lock, stamping the
    /// submission time.
    pub fn append(&self, record: &ActivityRecord) -> Result<(), StoreError> {
        let _guard = append_guard()?;

        if !self.sheet.exists() {
            return Err(StoreError::MissingSheet(self.sheet.name().to_string()));
        }

        self.sheet.append_row(&[
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            record.user_id.clone(),
            record.activity_date.format("%Y-%m-%d").to_string(),
            record.score.map(|s| s.to_string()).unwrap_or_default(),
            record.duration.to_string(),
            record.mood.map(|m| m.as_str().to_string()).unwrap_or_default(),
            record.activity_type.join(", "),
            record.memo.clone().unwrap_or_default(),
        ])
    }

    pub fn fetch_all(&self) -> Result<Vec<ActivityRecord>, StoreError> {
        let mut records = Vec::new();
        for (i, row) in self.sheet.read_rows()?.iter().enumerate() {
            let date_cell = row.get(2).unwrap_or_default().trim().to_string();
            let activity_date = NaiveDate::parse_from_str(&date_cell, "%Y-%m-%d")
                .map_err(|_| self.sheet.bad_row(i, format!("invalid date \"{}\"", date_cell)))?;

            let score_cell = row.get(3).unwrap_or_default().trim();
            let score = if score_cell.is_empty() {
                None
            } else {
                Some(
                    score_cell
                        .parse::<i64>()
                        .map_err(|_| self.sheet.bad_row(i, format!("invalid score \"{}\"", score_cell)))?,
                )
            };

            let duration_cell = row.get(4).unwrap_or_default().trim();
            let duration = duration_cell
                .parse::<i64>()
                .map_err(|_| self.sheet.bad_row(i, format!("invalid duration \"{}\"", duration_cell)))?;

            // A mood this build does not know is read as "none recorded"
            // rather than poisoning the whole log.
            let mood = Mood::from_str(row.get(5).unwrap_or_default().trim()).ok();

            let activity_type: Vec<String> = row
                .get(6)
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

            let memo_cell = row.get(7).unwrap_or_default().to_string();
            let memo = if memo_cell.is_empty() { None } else { Some(memo_cell) };

            records.push(ActivityRecord {
                user_id: row.get(1).unwrap_or_default().trim().to_string(),
                activity_date,
                duration,
                score,
                mood,
                memo,
                activity_type,
            });
        }
        Ok(records)
    }

    pub fn fetch_by_user(&self, user_id: &str) -> Result<Vec<ActivityRecord>, StoreError> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|r| r.user_id == user_id.trim())
            .collect())
    }
}
