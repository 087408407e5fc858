//! Configuration setup and workbook initialization.
//!
//! First-run wizard: prompts for the account id and workbook location, then
//! creates every sheet with its header row and default values. Re-running is
//! safe; existing sheets are left untouched.

use crate::db::activities::Activities;
use crate::db::activity_items::ActivityItems;
use crate::db::settings::SettingsSheet;
use crate::db::users::Users;
use crate::db::workbook::Workbook;
use crate::libs::{config::Config, messages::Message};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    let workbook = Workbook::new()?;

    if Users::new()?.init()? {
        msg_info!(Message::SheetCreated("users".to_string()));
    }
    if Activities::new()?.init()? {
        msg_info!(Message::SheetCreated("activity_log".to_string()));
    }
    if SettingsSheet::new()?.init()? {
        msg_info!(Message::SheetCreated("settings".to_string()));
    }
    if ActivityItems::new()?.init()? {
        msg_info!(Message::SheetCreated("activity_items".to_string()));
    }

    msg_success!(Message::WorkbookInitialized(workbook.dir().display().to_string()));
    Ok(())
}
