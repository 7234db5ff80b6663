//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - analyze: Batch analysis from a file, stdin or scenario
//! - serve: API server
//! - info: Information display (scenarios, config, single-text scores)

pub mod analyze;
pub mod info;
pub mod serve;

// Re-export all public handlers
pub use analyze::*;
pub use info::*;
pub use serve::*;
