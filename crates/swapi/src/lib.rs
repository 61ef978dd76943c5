//! `starport-swapi` -- client for the external planet / starship catalog.
//!
//! Read-only. Results are shown to the user but never merged into the
//! session's assignment state.

pub mod client;
pub mod config;
pub mod fetch;
pub mod models;

pub use client::{SwapiClient, SwapiError};
pub use config::SwapiConfig;
pub use fetch::FetchState;
pub use models::{PlanetDetail, StarshipDetail};
