//! # Application Layer
//!
//! Contains the profile pipeline: the fetchers, the aggregator that runs them
//! and the renderer that writes the document.

pub mod activity;
pub mod aggregator;
pub mod cosmetic;
pub mod learning;
pub mod projects;
pub mod renderer;
pub mod stack;
pub mod stats;
pub mod tally;

#[cfg(test)]
pub mod fake;

/// Month and day, e.g. `Mar 05`
pub const SHORT_DATE: &str = "%b %d";
