//! User-designed spacecraft.
//!
//! Custom crafts are built from a [`CustomCraftForm`], validated, and
//! appended to the session's [`CustomFleet`]. They are never removed.

use serde::{Deserialize, Serialize};

use crate::catalog::{CraftKind, CraftRecord};
use crate::error::CoreError;
use crate::types::CraftId;

/// Prefix for custom craft ids.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Prefix for custom craft display names.
pub const CUSTOM_NAME_PREFIX: &str = "Custom - ";

// ---------------------------------------------------------------------------
// Option lists
// ---------------------------------------------------------------------------

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Parse a form value. Matches labels exactly.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.label() == label)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum!(
    Propulsion {
        IonDrive => "Ion Drive",
        FusionDrive => "Fusion Drive",
        ChemicalRocket => "Chemical Rocket",
        SolarSail => "Solar Sail",
        Antimatter => "Antimatter",
    }
);

labelled_enum!(
    /// Atmospheric entry / departure method.
    EntryMethod {
        HeatShield => "Heat Shield",
        Aerobrake => "Aerobrake",
        DirectEntry => "Direct Entry",
        Parachute => "Parachute",
    }
);

labelled_enum!(
    OrbitMethod {
        LowOrbit => "Low Orbit",
        SurfaceLanding => "Surface Landing",
    }
);

// ---------------------------------------------------------------------------
// Spec and form
// ---------------------------------------------------------------------------

/// Validated design of a custom craft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomCraftSpec {
    /// Name as typed by the user, without the display prefix.
    pub base_name: String,
    pub cargo_capacity_tons: u64,
    pub passenger_capacity: u32,
    pub propulsion: Propulsion,
    pub entry: EntryMethod,
    pub orbit: OrbitMethod,
}

/// Raw values submitted by the "create your own" form.
///
/// Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomCraftForm {
    pub name: String,
    pub cargo: String,
    pub passengers: String,
    pub propulsion: String,
    pub entry: String,
    pub orbit: String,
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

fn option<T>(
    field: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, CoreError> {
    let value = required(field, value)?;
    parse(value)
        .ok_or_else(|| CoreError::validation(format!("{field} \"{value}\" is not a known option")))
}

impl CustomCraftForm {
    /// Check required fields and parse them into a [`CustomCraftSpec`].
    ///
    /// Rules:
    /// - All fields must be non-empty.
    /// - Cargo capacity is a whole number of tons, zero allowed.
    /// - Passenger capacity is a whole number, at least 1.
    /// - Propulsion, entry and orbit must be one of their option labels.
    pub fn validate(&self) -> Result<CustomCraftSpec, CoreError> {
        let base_name = required("Craft name", &self.name)?.to_string();

        let cargo = required("Cargo capacity", &self.cargo)?;
        let cargo_capacity_tons: u64 = cargo
            .parse()
            .map_err(|_| CoreError::validation("Cargo capacity must be a whole number of tons"))?;

        let passengers = required("Passenger capacity", &self.passengers)?;
        let passenger_capacity: u32 = passengers
            .parse()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| CoreError::validation("Passenger capacity must be at least 1"))?;

        Ok(CustomCraftSpec {
            base_name,
            cargo_capacity_tons,
            passenger_capacity,
            propulsion: option("Propulsion type", &self.propulsion, Propulsion::from_label)?,
            entry: option("Entry/departure method", &self.entry, EntryMethod::from_label)?,
            orbit: option("Orbit/landing method", &self.orbit, OrbitMethod::from_label)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Fleet
// ---------------------------------------------------------------------------

/// Session-scoped collection of custom crafts, in creation order.
#[derive(Debug, Clone, Default)]
pub struct CustomFleet {
    crafts: Vec<CraftRecord>,
    next_seq: u64,
}

impl CustomFleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `form` and append the resulting craft. Returns its id.
    ///
    /// Nothing is appended when validation fails.
    pub fn add(&mut self, form: &CustomCraftForm) -> Result<CraftId, CoreError> {
        let spec = form.validate()?;

        self.next_seq += 1;
        let id = CraftId::new(format!("{CUSTOM_ID_PREFIX}{}", self.next_seq));
        let name = format!("{CUSTOM_NAME_PREFIX}{}", spec.base_name);

        tracing::info!(craft = %id, name = %name, "Custom craft created");

        self.crafts.push(CraftRecord {
            id: id.clone(),
            name,
            kind: CraftKind::Custom(spec),
        });
        Ok(id)
    }

    pub fn crafts(&self) -> &[CraftRecord] {
        &self.crafts
    }

    pub fn get(&self, id: &CraftId) -> Option<&CraftRecord> {
        self.crafts.iter().find(|c| &c.id == id)
    }
}
