//! `starport-console` library crate.
//!
//! A line-driven front end over [`starport_core::Session`]. Re-exports
//! internal modules for integration testing; the binary entrypoint lives
//! in `main.rs`.

pub mod app;
pub mod commands;
pub mod config;
pub mod redirect;
pub mod routes;
pub mod views;
