//! Command and Reply models for the cache driver
//!
//! This module defines the line commands read from input and the JSON
//! documents written back for each of them.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::Command;
pub use responses::Reply;
