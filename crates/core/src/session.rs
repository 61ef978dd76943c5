//! Session-wide store.
//!
//! [`Session`] owns every piece of mutable state for one user session:
//! the craft assignments, the decommission registry, the custom fleet and
//! the latest mission. Views borrow it immutably to render and call the
//! `&mut self` methods in response to user actions. Each method either
//! applies its whole change or returns an error with nothing changed.

use rand::Rng;

use crate::assignment::AssignmentStore;
use crate::catalog::{Catalog, CraftRecord, PlanetRecord};
use crate::decommission::DecommissionRegistry;
use crate::error::CoreError;
use crate::fleet::{CustomCraftForm, CustomFleet};
use crate::mission::{Mission, MissionForm};
use crate::types::{CraftId, PlanetId};

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    assignments: AssignmentStore,
    retired: DecommissionRegistry,
    fleet: CustomFleet,
    last_mission: Option<Mission>,
}

impl Session {
    /// Start a session, seeding assignments from `rng`.
    pub fn new<R: Rng + ?Sized>(catalog: Catalog, rng: &mut R) -> Self {
        let assignments = AssignmentStore::seed(catalog.planets(), catalog.spacecraft(), rng);
        Self {
            catalog,
            assignments,
            retired: DecommissionRegistry::new(),
            fleet: CustomFleet::new(),
            last_mission: None,
        }
    }

    // -- reads ----------------------------------------------------------------

    pub fn planets(&self) -> &[PlanetRecord] {
        self.catalog.planets()
    }

    pub fn planet(&self, id: &PlanetId) -> Option<&PlanetRecord> {
        self.catalog.planet(id)
    }

    /// All crafts known to the session: custom crafts first, then catalog.
    pub fn spacecraft(&self) -> impl Iterator<Item = &CraftRecord> {
        self.fleet
            .crafts()
            .iter()
            .chain(self.catalog.spacecraft())
    }

    pub fn catalog_spacecraft(&self) -> &[CraftRecord] {
        self.catalog.spacecraft()
    }

    pub fn custom_spacecraft(&self) -> &[CraftRecord] {
        self.fleet.crafts()
    }

    pub fn craft(&self, id: &CraftId) -> Option<&CraftRecord> {
        self.fleet.get(id).or_else(|| self.catalog.craft(id))
    }

    pub fn crafts_at(&self, planet: &PlanetId) -> &[CraftId] {
        self.assignments.crafts_at(planet)
    }

    pub fn location_of(&self, craft: &CraftId) -> Option<&PlanetId> {
        self.assignments.location_of(craft)
    }

    pub fn is_decommissioned(&self, craft: &CraftId) -> bool {
        self.retired.is_decommissioned(craft)
    }

    /// Crafts eligible for a mission: every non-decommissioned craft,
    /// custom crafts first.
    pub fn mission_candidates(&self) -> Vec<&CraftRecord> {
        self.spacecraft()
            .filter(|c| !self.retired.is_decommissioned(&c.id))
            .collect()
    }

    /// Crafts that may be dispatched away from `planet`.
    pub fn dispatch_candidates(&self, planet: &PlanetId) -> Vec<&CraftId> {
        self.crafts_at(planet)
            .iter()
            .filter(|c| !self.retired.is_decommissioned(c))
            .collect()
    }

    pub fn last_mission(&self) -> Option<&Mission> {
        self.last_mission.as_ref()
    }

    // -- mutations --------------------------------------------------------------

    pub fn dispatch(
        &mut self,
        from: &PlanetId,
        to: &PlanetId,
        craft: &CraftId,
    ) -> Result<(), CoreError> {
        self.assignments
            .dispatch(from, to, craft, &self.retired)
            .inspect_err(|e| tracing::warn!(error = %e, "Dispatch rejected"))
    }

    /// Retire a craft. Unknown crafts are rejected; retiring twice is a
    /// no-op.
    pub fn decommission(&mut self, craft: &CraftId) -> Result<(), CoreError> {
        if self.craft(craft).is_none() {
            return Err(CoreError::NotFound {
                entity: "spacecraft",
                id: craft.to_string(),
            });
        }
        if self.retired.decommission(craft.clone()) {
            tracing::info!(craft = %craft, "Craft decommissioned");
        }
        Ok(())
    }

    pub fn add_custom_craft(&mut self, form: &CustomCraftForm) -> Result<CraftId, CoreError> {
        self.fleet
            .add(form)
            .inspect_err(|e| tracing::warn!(error = %e, "Custom craft rejected"))
    }

    /// Station a custom craft that has no planet yet.
    pub fn station_custom_craft(
        &mut self,
        craft: &CraftId,
        planet: &PlanetId,
    ) -> Result<(), CoreError> {
        if self.fleet.get(craft).is_none() {
            return Err(CoreError::NotFound {
                entity: "custom spacecraft",
                id: craft.to_string(),
            });
        }
        self.assignments.station(planet, craft.clone(), &self.retired)
    }

    /// Validate and record a mission request.
    ///
    /// Missing fields fail with [`CoreError::Validation`]; unknown planets
    /// or crafts with [`CoreError::NotFound`]; a decommissioned craft with
    /// [`CoreError::InvalidDispatch`].
    pub fn submit_mission(&mut self, form: &MissionForm) -> Result<&Mission, CoreError> {
        let fields = form.required_fields()?;

        let from = self.planet_named(&fields.from)?;
        let to = self.planet_named(&fields.to)?;
        let craft = self.craft(&fields.craft).ok_or_else(|| CoreError::NotFound {
            entity: "spacecraft",
            id: fields.craft.to_string(),
        })?;
        if self.retired.is_decommissioned(&craft.id) {
            tracing::warn!(craft = %craft.id, "Mission rejected: craft decommissioned");
            return Err(CoreError::invalid_dispatch(format!(
                "Craft {} is decommissioned",
                craft.name
            )));
        }

        let mission = Mission {
            from: fields.from.clone(),
            from_name: from,
            to: fields.to.clone(),
            to_name: to,
            craft: craft.id.clone(),
            craft_name: craft.name.clone(),
            passengers: fields.passengers,
            main_contact: fields.main_contact.to_string(),
            submitted_at: chrono::Utc::now(),
        };

        tracing::info!(
            from = %mission.from,
            to = %mission.to,
            craft = %mission.craft,
            passengers = mission.passengers,
            "Mission submitted",
        );

        Ok(self.last_mission.insert(mission))
    }

    fn planet_named(&self, id: &PlanetId) -> Result<String, CoreError> {
        self.planet(id)
            .map(|p| p.name.clone())
            .ok_or_else(|| CoreError::NotFound {
                entity: "planet",
                id: id.to_string(),
            })
    }
}
