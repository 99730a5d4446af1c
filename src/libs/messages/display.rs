//! Display implementation converting `Message` variants into terminal text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === ROSTER MESSAGES ===
            Message::RosterNotFound(path) => format!("Roster file not found: {}", path),
            Message::RosterParseFailed(path) => format!("Failed to parse roster file: {}", path),
            Message::RosterSaveFailed(path) => format!("Failed to save roster file: {}", path),
            Message::RosterLoaded(path) => format!("Roster loaded from {}", path),
            Message::InvalidMonth(month) => {
                format!("Invalid month '{}', expected YYYY-MM", month)
            }
            Message::InvalidDate(date) => {
                format!("Invalid date '{}', expected YYYY-MM-DD", date)
            }
            Message::NoRecordForDate(date) => format!("No duty record for {}", date),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::RosterPathNotConfigured => {
                "No roster path configured; pass --roster or run 'ftlcheck init'".to_string()
            }
            Message::PromptRosterPath => "Path to the roster JSON file".to_string(),
            Message::PromptAircraftCategory => "Default aircraft category".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(month) => format!("FTL compliance report for {}", month),
            Message::MonthlySummaryHeader(month) => format!("Monthly summary for {}", month),
            Message::BreakdownHeader(date) => format!("Compliance breakdown for {}", date),
            Message::ViolationsFound(count) => {
                format!("{} day(s) with violations this month", count)
            }
            Message::NoViolationsFound => "No violations found this month".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Report exported successfully to: {}", path),

            // === DAY-OFF TOGGLE MESSAGES ===
            Message::DayOffSet(date) => format!("{} marked as a day off", date),
            Message::DayOffCleared(date) => format!("Day off cleared for {}", date),
        };
        write!(f, "{}", text)
    }
}
