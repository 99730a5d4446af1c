//! # ftlcheck - Flight Duty Time Limitation compliance checker
//!
//! A command-line utility for validating a pilot's monthly duty roster
//! against an FTL rule set and producing a fully-explained per-day
//! compliance breakdown.
//!
//! ## Features
//!
//! - **FDP Limits**: Maximum FDP and flight time by start-time bracket,
//!   crew composition, aircraft category and sector count
//! - **Split Duty**: FDP extensions earned from on-ground breaks
//! - **Rest Validation**: Dynamic minimum rest tracking the prior duty length
//! - **Disruptive Duties**: WOCL detection with consecutive and 7-day caps
//! - **Standby**: Duration caps, call-out bracket selection, 50% duty credit
//! - **Rolling Totals**: Trailing 3/7/14/28/90/365-day cumulative windows
//! - **Days-Off Quotas**: Single-day, consecutive-block and multi-week rules
//! - **Reports and Export**: Console tables, per-day audit view, CSV/JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ftlcheck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
