//! Display implementation for manabi application messages.
//!
//! All user-facing text lives here, keyed by the `Message` enum. Commands
//! never format strings inline; they pick a variant and let this impl turn
//! it into terminal output.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found. Run `manabi init` first.".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),

            // === WORKBOOK MESSAGES ===
            Message::WorkbookInitialized(dir) => format!("Workbook initialized at {}", dir),
            Message::SheetCreated(name) => format!("Sheet \"{}\" is ready", name),
            Message::HealthCheckPassed => "All sheets look good".to_string(),
            Message::HealthCheckFailed(count) => format!("Health check failed: {} sheet(s) with problems", count),
            Message::SheetOk(name) => format!("Sheet \"{}\": ok", name),
            Message::SheetMismatch(detail) => format!("Sheet problem: {}", detail),
            Message::LockTimeout => "Could not get the write lock. Please try again.".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::ActivityLogged(date) => format!("Study session for {} recorded", date),
            Message::ActivitySaveFailed(detail) => format!("Failed to save the study session: {}", detail),
            Message::ActivityRejected(detail) => format!("The submission was rejected: {}", detail),
            Message::NoActivitiesYet => "No study sessions recorded yet".to_string(),
            Message::ActivitiesTitle(name) => format!("Study sessions for {}", name),
            Message::StudyTimeNotRecorded => "Study time is not recorded here; ignoring --minutes/--seconds".to_string(),

            // === USER MESSAGES ===
            Message::NoUserConfigured => "No user id configured. Run `manabi init` or pass --user.".to_string(),
            Message::UserNotFound(id) => format!("User \"{}\" is not registered in the users sheet", id),
            Message::NoStudentsFound => "No students registered yet".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsLoadFailed(detail) => format!("Configuration error in the settings sheet: {}", detail),

            // === DASHBOARD / SUMMARY MESSAGES ===
            Message::DashboardHeader(name, belonging) => format!("📚 Dashboard for {} ({})", name, belonging),
            Message::SummaryHeader => "📊 Class summary".to_string(),

            // === PROMPTS ===
            Message::PromptDataDir => "Workbook directory (empty for the default)".to_string(),
            Message::PromptUserId => "Your account id".to_string(),
            Message::PromptActivityDate => "Study date (YYYY-MM-DD)".to_string(),
            Message::PromptDurationMinutes => "Time spent (minutes)".to_string(),
            Message::PromptDurationSeconds => "Time spent (seconds)".to_string(),
            Message::PromptScore(min, max) => format!("Score ({}-{})", min, max),
            Message::PromptMood => "How did it feel?".to_string(),
            Message::PromptMemo => "Memo (optional)".to_string(),
            Message::PromptActivityTypes => "What did you work on?".to_string(),
        };
        write!(f, "{}", text)
    }
}
