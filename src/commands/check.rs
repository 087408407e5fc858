//! The workbook health check.
//!
//! Verifies every sheet's header row against its expected schema. A teacher
//! editing the workbook by hand can break a header; that must fail loudly
//! at startup rather than corrupt reads later, so any mismatch is fatal and
//! nothing degrades gracefully.

use crate::db::activities::Activities;
use crate::db::activity_items::ActivityItems;
use crate::db::settings::SettingsSheet;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckArgs {}

pub fn cmd(_check_args: CheckArgs) -> Result<()> {
    let results = [
        ("users", Users::new()?.verify()),
        ("activity_log", Activities::new()?.verify()),
        ("settings", SettingsSheet::new()?.verify()),
        ("activity_items", ActivityItems::new()?.verify()),
    ];

    let mut failures = 0;
    for (name, result) in results {
        match result {
            Ok(()) => msg_print!(Message::SheetOk(name.to_string())),
            Err(e) => {
                failures += 1;
                msg_error!(Message::SheetMismatch(e.to_string()));
            }
        }
    }

    if failures > 0 {
        msg_bail_anyhow!(Message::HealthCheckFailed(failures));
    }

    msg_success!(Message::HealthCheckPassed);
    Ok(())
}
