pub mod check;
pub mod dashboard;
pub mod init;
pub mod log;
pub mod sum;

use crate::db::activity_items::ActivityItems;
use crate::db::settings::SettingsSheet;
use crate::db::sheet::StoreError;
use crate::libs::messages::Message;
use crate::libs::settings::Settings;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration setup and workbook initialization")]
    Init(init::InitArgs),
    #[command(about = "Verify every sheet against its expected header row")]
    Check(check::CheckArgs),
    #[command(about = "Record a study session")]
    Log(log::LogArgs),
    #[command(about = "Show the student dashboard")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Show the per-student class summary")]
    Sum(sum::SumArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Check(args) => check::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
        }
    }
}

/// Loads and types the deployment settings for a request.
///
/// A malformed settings sheet is a configuration error, fatal to whatever
/// command needed the settings. The activity items sheet is optional; when
/// it is absent the pick list is simply empty.
pub(crate) fn load_settings() -> Result<Settings> {
    let rows = SettingsSheet::new()?.fetch()?;

    let items = match ActivityItems::new()?.fetch() {
        Ok(items) => items,
        Err(StoreError::MissingSheet(_)) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    let settings = Settings::parse(&rows)
        .and_then(|s| s.with_activity_items(items))
        .map_err(|e| msg_error_anyhow!(Message::SettingsLoadFailed(e.to_string())))?;

    Ok(settings)
}
