//! Assembly of the per-student dashboard payload.

use crate::libs::activity::ActivityRecord;
use crate::libs::settings::Settings;
use crate::libs::stats::{compute_stats, Stats};
use crate::libs::user::User;
use chrono::NaiveDate;

/// Everything the student dashboard renders: the user, their raw records
/// (newest first) and the derived statistics. `stats` is `None` when there
/// is nothing logged yet.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub user: User,
    pub activities: Vec<ActivityRecord>,
    pub stats: Option<Stats>,
}

/// Composes the dashboard payload from already-fetched records.
///
/// Sorting is presentation order only; the statistics are computed over the
/// unordered record set and do not depend on it.
pub fn assemble(user: User, mut activities: Vec<ActivityRecord>, settings: &Settings, today: NaiveDate) -> DashboardData {
    let stats = compute_stats(&activities, settings, today);
    activities.sort_by(|a, b| b.activity_date.cmp(&a.activity_date));
    DashboardData { user, activities, stats }
}
