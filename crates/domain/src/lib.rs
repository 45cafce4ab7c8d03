//! # Calldash Domain
//!
//! Business domain types and models for calldash.
//!
//! This crate contains:
//! - Call and request data types mirroring the backend wire formats
//! - Domain error types and Result definitions
//! - Provider payload defaults and other domain constants
//!
//! ## Architecture
//! - No dependencies on other calldash crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
