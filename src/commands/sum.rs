//! The teacher view: one summary row per student across the whole class.

use crate::commands::load_settings;
use crate::db::activities::Activities;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::libs::stats::compute_stats;
use crate::libs::user::Role;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {}

pub fn cmd(_sum_args: SumArgs) -> Result<()> {
    let students: Vec<_> = Users::new()?
        .fetch_all()?
        .into_iter()
        .filter(|u| u.role == Role::Student)
        .collect();

    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(());
    }

    let settings = load_settings()?;
    let activities = Activities::new()?.fetch_all()?;
    let today = Local::now().date_naive();

    let rows: Vec<_> = students
        .into_iter()
        .map(|user| {
            let records: Vec<_> = activities.iter().filter(|r| r.user_id == user.id).cloned().collect();
            let stats = compute_stats(&records, &settings, today);
            (user, stats)
        })
        .collect();

    msg_print!(Message::SummaryHeader, true);
    View::students(&rows, &settings);

    Ok(())
}
