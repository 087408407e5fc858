//! Console rendering for dashboards and summaries.
//!
//! The activity table is built from the declarative column set in
//! `libs::columns`, so what gets printed is exactly what the deployment
//! settings make visible.

use crate::libs::activity::ActivityRecord;
use crate::libs::columns::{visible_columns, Field};
use crate::libs::settings::Settings;
use crate::libs::stats::Stats;
use crate::libs::user::User;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Renders the learning log with the columns the settings enable.
    pub fn activities(records: &[ActivityRecord], settings: &Settings) {
        let columns = visible_columns(settings);

        let mut table = Table::new();
        table.add_row(Row::new(columns.iter().map(|c| Cell::new(c.label)).collect()));

        for record in records {
            let cells = columns
                .iter()
                .map(|column| Cell::new(&activity_cell(record, column.field, settings)))
                .collect();
            table.add_row(Row::new(cells));
        }

        table.printstd();
    }

    /// Renders the stat cards for one student.
    pub fn stats(stats: &Stats, settings: &Settings) {
        let mut table = Table::new();

        table.add_row(row!["Sessions", stats.total_sessions]);
        table.add_row(row!["Study days", stats.study_days]);
        table.add_row(row!["Current streak", format!("{} day(s)", stats.current_streak)]);
        table.add_row(row!["Best streak", format!("{} day(s)", stats.max_streak)]);
        table.add_row(row!["This week", stats.this_week_sessions]);

        if settings.show_study_time {
            table.add_row(row!["Total time", format_duration(stats.total_duration, settings.show_second)]);
            table.add_row(row!["Average time", format_duration(stats.average_duration, settings.show_second)]);
        }

        if let Some(best) = stats.best_score {
            table.add_row(row!["Best score", best]);
        }
        if let Some(average) = stats.average_score {
            table.add_row(row!["Average score", average]);
        }
        if let Some(perfect) = stats.perfect_scores {
            table.add_row(row!["Perfect scores", perfect]);
        }

        table.printstd();
    }

    /// Renders the teacher's per-student summary table.
    pub fn students(rows: &[(User, Option<Stats>)], settings: &Settings) {
        let mut table = Table::new();

        let mut header = row!["NAME", "BELONGING", "SESSIONS", "STUDY DAYS", "STREAK"];
        if settings.show_study_time {
            header.add_cell(Cell::new("TOTAL TIME"));
        }
        if settings.show_score {
            header.add_cell(Cell::new("AVG SCORE"));
        }
        table.add_row(header);

        for (user, stats) in rows {
            let mut data_row = match stats {
                Some(stats) => {
                    let mut r = row![
                        user.name,
                        user.belonging,
                        stats.total_sessions,
                        stats.study_days,
                        format!("{} day(s)", stats.current_streak)
                    ];
                    if settings.show_study_time {
                        r.add_cell(Cell::new(&format_duration(stats.total_duration, settings.show_second)));
                    }
                    if settings.show_score {
                        r.add_cell(Cell::new(
                            &stats.average_score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
                        ));
                    }
                    r
                }
                None => row![user.name, user.belonging, 0, 0, "-"],
            };
            while data_row.len() < table.get_row(0).map(|r| r.len()).unwrap_or(5) {
                data_row.add_cell(Cell::new("-"));
            }
            table.add_row(data_row);
        }

        table.printstd();
    }
}

fn activity_cell(record: &ActivityRecord, field: Field, settings: &Settings) -> String {
    match field {
        Field::ActivityDate => record.activity_date.format("%Y-%m-%d").to_string(),
        Field::Score => record.score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
        Field::Duration => format_duration(record.duration, settings.show_second),
        Field::Mood => record
            .mood
            .map(|m| format!("{} {}", m.emoji(), m.label()))
            .unwrap_or_else(|| "-".to_string()),
        Field::ActivityType => {
            if record.activity_type.is_empty() {
                "-".to_string()
            } else {
                record.activity_type.join(", ")
            }
        }
        Field::Memo => record.memo.clone().unwrap_or_default(),
        Field::Actions => {
            if record.memo.is_some() {
                "📝".to_string()
            } else {
                String::new()
            }
        }
    }
}

/// Formats a duration in seconds as `1h 23m` (plus seconds when enabled).
pub fn format_duration(seconds: i64, show_second: bool) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    parts.push(format!("{}m", minutes));
    if show_second {
        parts.push(format!("{}s", secs));
    }
    parts.join(" ")
}
