/// Failures raised by the session store.
///
/// None of these are fatal: every operation that returns one leaves the
/// session untouched, so the caller can surface the message and let the
/// user try again.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A dispatch or stationing request would break an assignment invariant.
    #[error("Invalid dispatch: {0}")]
    InvalidDispatch(String),

    /// A required form field is missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

impl CoreError {
    pub(crate) fn invalid_dispatch(msg: impl Into<String>) -> Self {
        Self::InvalidDispatch(msg.into())
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
