//! # Default Paths
//!
//! Centralized definitions for the files the binary reads and writes.

pub const DEFAULT_CONFIG: &str = "data/config.yaml";
pub const DEFAULT_TEMPLATE: &str = "README.md";
pub const LOG_FILE: &str = "profile-readme.log";
