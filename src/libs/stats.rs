//! Statistics over a student's study sessions.
//!
//! Everything here is a pure computation over already-fetched records; the
//! current date is a parameter, so the same input always produces the same
//! output. Zero records yield `None` and callers render an empty state, not
//! an error.
//!
//! Records without a score are excluded from every score aggregate, both
//! numerator and denominator; a missing score is never treated as zero.

use crate::libs::activity::ActivityRecord;
use crate::libs::settings::Settings;
use chrono::{Datelike, Duration, NaiveDate};

/// Derived per-student metrics for the dashboard and teacher views.
///
/// The score fields are populated only when the deployment records scores
/// and at least one record carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub best_score: Option<i64>,
    pub average_score: Option<i64>,
    pub total_sessions: usize,
    /// Seconds across all sessions.
    pub total_duration: i64,
    /// Rounded mean session length in seconds.
    pub average_duration: i64,
    /// Distinct calendar days with at least one session.
    pub study_days: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Sessions scoring exactly `score_max`.
    pub perfect_scores: Option<usize>,
    /// Sessions whose date falls in the calendar week of `today`
    /// (weeks start on Sunday).
    pub this_week_sessions: usize,
}

/// Computes the full metric set for one student's records.
pub fn compute_stats(records: &[ActivityRecord], settings: &Settings, today: NaiveDate) -> Option<Stats> {
    if records.is_empty() {
        return None;
    }

    let total_sessions = records.len();
    let total_duration: i64 = records.iter().map(|r| r.duration).sum();
    let average_duration = (total_duration as f64 / total_sessions as f64).round() as i64;

    let scores: Vec<i64> = records.iter().filter_map(|r| r.score).collect();
    let (best_score, average_score, perfect_scores) = if settings.show_score && !scores.is_empty() {
        let best = scores.iter().copied().max();
        let average = (scores.iter().sum::<i64>() as f64 / scores.len() as f64).round() as i64;
        let perfect = scores.iter().filter(|&&s| s == settings.score_max).count();
        (best, Some(average), Some(perfect))
    } else {
        (None, None, None)
    };

    let dates = distinct_dates_desc(records);
    let study_days = dates.len();
    let (current_streak, max_streak) = streaks(&dates);

    let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    let week_end = week_start + Duration::days(7);
    let this_week_sessions = records
        .iter()
        .filter(|r| r.activity_date >= week_start && r.activity_date < week_end)
        .count();

    Some(Stats {
        best_score,
        average_score,
        total_sessions,
        total_duration,
        average_duration,
        study_days,
        current_streak,
        max_streak,
        perfect_scores,
        this_week_sessions,
    })
}

/// Distinct activity dates, newest first.
fn distinct_dates_desc(records: &[ActivityRecord]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.activity_date).collect();
    dates.sort_unstable();
    dates.dedup();
    dates.reverse();
    dates
}

/// Walks the date list (newest first) splitting it into runs of exactly
/// consecutive calendar days. The run containing the most recent date is the
/// current streak; the longest run anywhere is the max streak. A gap of two
/// or more days ends a run.
fn streaks(dates: &[NaiveDate]) -> (usize, usize) {
    if dates.is_empty() {
        return (0, 0);
    }

    let mut runs: Vec<usize> = Vec::new();
    let mut run = 1;
    for pair in dates.windows(2) {
        if pair[0] - pair[1] == Duration::days(1) {
            run += 1;
        } else {
            runs.push(run);
            run = 1;
        }
    }
    runs.push(run);

    let current = runs[0];
    let max = runs.iter().copied().max().unwrap_or(current);
    (current, max)
}
