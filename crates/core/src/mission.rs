//! Mission transport requests.
//!
//! A mission is a display-only record: submitting one does not move any
//! craft. The session keeps the latest mission so the confirmation can be
//! shown again.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{CraftId, PlanetId, Timestamp};

/// Guidance shown above the planet selectors.
pub const PLANET_NOTICE: &str = "The transport missions are carried out by drone. \
    It is your responsibility to ensure the planet is suitable for your passengers.";

/// Guidance shown above the spacecraft selector.
pub const CRAFT_NOTICE: &str = "It is your responsibility to choose the craft capable of \
    carrying the appropriate number of passengers, the desired speed and atmospheric entry method.";

/// Raw values from the mission control form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MissionForm {
    pub from: String,
    pub to: String,
    pub craft: String,
    pub passengers: u32,
    pub main_contact: String,
}

impl Default for MissionForm {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            craft: String::new(),
            passengers: 1,
            main_contact: String::new(),
        }
    }
}

/// Required-field check result, ids still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MissionFields<'a> {
    pub from: PlanetId,
    pub to: PlanetId,
    pub craft: CraftId,
    pub passengers: u32,
    pub main_contact: &'a str,
}

impl MissionForm {
    /// Form pre-filled with a craft, as when a freshly built craft is sent
    /// straight to mission control.
    pub fn for_craft(craft: &CraftId) -> Self {
        Self {
            craft: craft.to_string(),
            ..Self::default()
        }
    }

    /// Whether every required field has a value. Mirrors the enabled state
    /// of the submit button.
    pub fn is_complete(&self) -> bool {
        self.required_fields().is_ok()
    }

    pub(crate) fn required_fields(&self) -> Result<MissionFields<'_>, CoreError> {
        let field = |name: &str, value: &str| -> Result<String, CoreError> {
            let value = value.trim();
            if value.is_empty() {
                Err(CoreError::validation(format!("{name} is required")))
            } else {
                Ok(value.to_string())
            }
        };

        let from = field("Departure planet", &self.from)?;
        let to = field("Destination planet", &self.to)?;
        let craft = field("Spacecraft", &self.craft)?;
        if self.passengers < 1 {
            return Err(CoreError::validation("Passengers must be at least 1"));
        }
        let main_contact = self.main_contact.trim();
        if main_contact.is_empty() {
            return Err(CoreError::validation("Main contact is required"));
        }

        Ok(MissionFields {
            from: from.into(),
            to: to.into(),
            craft: craft.into(),
            passengers: self.passengers,
            main_contact,
        })
    }
}

/// A submitted transport request, with names resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mission {
    pub from: PlanetId,
    pub from_name: String,
    pub to: PlanetId,
    pub to_name: String,
    pub craft: CraftId,
    pub craft_name: String,
    pub passengers: u32,
    pub main_contact: String,
    pub submitted_at: Timestamp,
}

impl Mission {
    /// One-line confirmation text.
    pub fn summary(&self) -> String {
        format!(
            "{} passenger(s) from {} to {} aboard {}. Main Contact: {}",
            self.passengers, self.from_name, self.to_name, self.craft_name, self.main_contact
        )
    }
}
