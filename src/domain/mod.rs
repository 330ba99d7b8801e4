//! # Domain Layer
//!
//! Core definitions, types, and traits that define the profile pipeline.
//! Independent of the HTTP stack, serving as the contract for other layers.

pub mod config;
pub mod paths;
pub mod traits;
pub mod types;
