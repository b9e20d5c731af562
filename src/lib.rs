//! Swatchlab - colour palette accessibility server
//!
//! HTTP and CLI wiring around the `colour_engine` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
