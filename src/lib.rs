//! `VerseLink` - scripture citation matching, validation and deep linking.
//!
//! This crate recognizes scripture references in free text, validates them
//! against the canon, and rewrites them as JW Library deep links or fetched
//! citation blocks.

// Re-export public modules for use in integration tests and as a library
pub mod canon;
pub mod config;
pub mod error;
pub mod fetch;
pub mod ident;
pub mod matcher;
pub mod reference;
pub mod render;
