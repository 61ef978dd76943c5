//! `starport-core` -- session state for the starport fleet manager.
//!
//! Pure, synchronous domain logic with no I/O: the built-in catalog, the
//! planet → craft assignment store, the decommission registry, custom
//! crafts and mission requests, all owned by a single [`session::Session`].

pub mod assignment;
pub mod catalog;
pub mod decommission;
pub mod error;
pub mod fleet;
pub mod mission;
pub mod session;
pub mod types;

pub use error::CoreError;
pub use session::Session;
