//! Cardview Library
//!
//! This crate provides the headless data-view engine for the test-card
//! back-office console: searchable, sortable, paginated tables over
//! schemaless rows, with server-side delegation and masked-field
//! decryption for sensitive card data.

pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod utils;
pub mod view;
