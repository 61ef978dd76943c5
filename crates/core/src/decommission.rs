//! Registry of retired spacecraft.
//!
//! Decommissioning is monotonic: once a craft is retired it stays retired
//! for the rest of the session. The registry does not move crafts; a
//! retired craft keeps whatever station it had.

use std::collections::HashSet;

use crate::types::CraftId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecommissionRegistry {
    retired: HashSet<CraftId>,
}

impl DecommissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire a craft. Returns `true` if it was not already retired.
    ///
    /// Retiring an already-retired craft is a no-op.
    pub fn decommission(&mut self, craft: CraftId) -> bool {
        self.retired.insert(craft)
    }

    pub fn is_decommissioned(&self, craft: &CraftId) -> bool {
        self.retired.contains(craft)
    }

    pub fn len(&self) -> usize {
        self.retired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retired.is_empty()
    }
}
