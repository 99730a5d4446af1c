//! Centralized user-facing message catalog and printing macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
