//! Central catalog of user-facing messages.
//!
//! Every string the CLI prints lives here as a `Message` variant so the
//! wording stays in one place. Violation texts are deliberately NOT part of
//! this enum: they are engine data, attached to day records and consumed by
//! the views and exports as-is.

#[derive(Debug, Clone)]
pub enum Message {
    // === ROSTER MESSAGES ===
    RosterNotFound(String),
    RosterParseFailed(String),
    RosterSaveFailed(String),
    RosterLoaded(String),
    InvalidMonth(String),
    InvalidDate(String),
    NoRecordForDate(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    RosterPathNotConfigured,
    PromptRosterPath,
    PromptAircraftCategory,

    // === REPORT MESSAGES ===
    ReportHeader(String),         // month
    MonthlySummaryHeader(String), // month
    BreakdownHeader(String),      // date
    ViolationsFound(usize),
    NoViolationsFound,

    // === EXPORT MESSAGES ===
    ExportSuccess(String), // path

    // === DAY-OFF TOGGLE MESSAGES ===
    DayOffSet(String),     // date
    DayOffCleared(String), // date
}
