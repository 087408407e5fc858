#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigSaveError,
    ConfigDeleted,

    // === WORKBOOK MESSAGES ===
    WorkbookInitialized(String), // directory
    SheetCreated(String),        // sheet name
    HealthCheckPassed,
    HealthCheckFailed(usize), // failing sheet count
    SheetOk(String),          // sheet name
    SheetMismatch(String),    // detail
    LockTimeout,

    // === ACTIVITY MESSAGES ===
    ActivityLogged(String),     // date
    ActivitySaveFailed(String), // error detail
    ActivityRejected(String),   // validation detail
    NoActivitiesYet,
    ActivitiesTitle(String), // user name
    StudyTimeNotRecorded,

    // === USER MESSAGES ===
    NoUserConfigured,
    UserNotFound(String), // user id
    NoStudentsFound,

    // === SETTINGS MESSAGES ===
    SettingsLoadFailed(String), // error detail

    // === DASHBOARD / SUMMARY MESSAGES ===
    DashboardHeader(String, String), // name, belonging
    SummaryHeader,

    // === PROMPTS ===
    PromptDataDir,
    PromptUserId,
    PromptActivityDate,
    PromptDurationMinutes,
    PromptDurationSeconds,
    PromptScore(i64, i64), // min, max
    PromptMood,
    PromptMemo,
    PromptActivityTypes,
}
