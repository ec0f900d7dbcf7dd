//! A terminal tracker for a fixed daily study and work schedule.
//!
//! The schedule itself is compiled in ([`catalog`]). Progress for the current
//! day lives in a single [`day::DayRecord`], owned by a [`planner::Planner`]
//! and stored as JSON in a small `SQLite` key-value table ([`store`]). A new
//! calendar day discards the previous record.

pub mod catalog;
pub mod config;
pub mod day;
pub mod planner;
pub mod store;
pub mod tui;
