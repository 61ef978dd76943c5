//! Display state for a finished detail fetch.

use crate::client::SwapiError;

/// Outcome of one detail request, as a view shows it.
///
/// Both states are terminal. A new request produces a new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loaded(T),
    /// The failure message, ready for display.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, SwapiError>> for FetchState<T> {
    fn from(result: Result<T, SwapiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
