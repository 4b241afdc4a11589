//! Session Module
//!
//! Applies driver commands to a shared cache.
//!
//! # Commands
//! - `PUT <key> <value>` - Store a key-value pair
//! - `GET <key>` - Retrieve a value, refreshing its recency
//! - `PEEK <key>` - Retrieve a value without refreshing it
//! - `STATS` - Report cache statistics
//! - `KEYS` - List keys from least to most recently used

pub mod driver;
pub mod handlers;

pub use driver::run_session;
pub use handlers::{execute, StringCache};
