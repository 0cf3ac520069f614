//! Lendsqr Core - Shared domain types for the back-office admin.
//!
//! This crate provides the types used across all workspace components:
//! - `admin` - Back-office panel (user repository, views, JSON API)
//! - `cli` - Command-line tools for generating and querying datasets
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no shared state,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Record types, type-safe IDs, closed enums, tier and email wrappers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
