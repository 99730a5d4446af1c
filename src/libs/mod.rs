//! Core library modules for the ftlcheck application.
//!
//! The compliance engine itself is the set of pure modules (`clock`, `fdp`,
//! `split_duty`, `rest`, `disruptive`, `standby`, `rolling`, `days_off`,
//! `recalc`); the rest is the infrastructure around it: roster loading,
//! configuration, console rendering, export and messaging.

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod days_off;
pub mod disruptive;
pub mod duty;
pub mod export;
pub mod fdp;
pub mod messages;
pub mod monthly;
pub mod recalc;
pub mod rest;
pub mod rolling;
pub mod roster;
pub mod split_duty;
pub mod standby;
pub mod summary;
pub mod view;
