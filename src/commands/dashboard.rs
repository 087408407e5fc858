//! The student dashboard: stats plus the learning log.

use crate::commands::load_settings;
use crate::db::activities::Activities;
use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::dashboard;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Show the dashboard for this account instead of the configured one
    #[arg(long)]
    user: Option<String>,
}

pub fn cmd(dashboard_args: DashboardArgs) -> Result<()> {
    let config = Config::read()?;
    let user_id = match dashboard_args.user.or(config.user_id) {
        Some(id) => id,
        None => msg_bail_anyhow!(Message::NoUserConfigured),
    };

    let user = match Users::new()?.fetch_by_id(&user_id)? {
        Some(user) => user,
        None => msg_bail_anyhow!(Message::UserNotFound(user_id)),
    };

    let settings = load_settings()?;
    let activities = Activities::new()?.fetch_by_user(&user.id)?;
    let data = dashboard::assemble(user, activities, &settings, Local::now().date_naive());

    msg_print!(Message::DashboardHeader(data.user.name.clone(), data.user.belonging.clone()), true);

    match &data.stats {
        Some(stats) => {
            View::stats(stats, &settings);
            msg_print!(Message::ActivitiesTitle(data.user.name.clone()), true);
            View::activities(&data.activities, &settings);
        }
        None => msg_info!(Message::NoActivitiesYet),
    }

    Ok(())
}
