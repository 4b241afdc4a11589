//! Background Tasks Module
//!
//! Contains background tasks that run alongside the command driver.

pub mod reporter;

pub use reporter::spawn_stats_reporter;
