//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Session setup (config, transaction loading) and shared utilities
//! - `analyze` - Full analysis report
//! - `reports` - Single-stage reports (patterns, anomalies, recurring, forecast)
//! - `status` - Transaction file summary

pub mod analyze;
pub mod core;
pub mod reports;
pub mod status;

// Re-export command functions for main.rs
pub use analyze::*;
pub use core::*;
pub use reports::*;
pub use status::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
