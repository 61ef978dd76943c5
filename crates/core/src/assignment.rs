//! Planet → stationed-craft mapping and the operations that mutate it.
//!
//! Invariants held by [`AssignmentStore`]:
//!
//! - Every planet the store was seeded with has an entry, possibly empty.
//! - A craft id appears in at most one planet's list at a time.
//! - A failed mutation leaves the store exactly as it was.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{CraftRecord, PlanetRecord};
use crate::decommission::DecommissionRegistry;
use crate::error::CoreError;
use crate::types::{CraftId, PlanetId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentStore {
    stations: HashMap<PlanetId, Vec<CraftId>>,
}

impl AssignmentStore {
    /// A store with an empty entry for every planet.
    pub fn empty(planets: &[PlanetRecord]) -> Self {
        let stations = planets
            .iter()
            .map(|p| (p.id.clone(), Vec::new()))
            .collect();
        Self { stations }
    }

    /// Randomly station crafts across `planets`.
    ///
    /// Planets are visited in order. Each one draws a count `k` uniformly
    /// from `1..=max` and takes `k` distinct crafts from the pool of crafts
    /// not yet stationed, where `max` leaves at least one craft for every
    /// planet still to come. With fewer crafts than planets each planet gets
    /// a single craft until the pool runs dry, and the rest stay empty.
    ///
    /// Repeated planet or craft ids are seeded once, at their first
    /// occurrence.
    ///
    /// The result depends only on the inputs and the state of `rng`.
    pub fn seed<R: Rng + ?Sized>(
        planets: &[PlanetRecord],
        crafts: &[CraftRecord],
        rng: &mut R,
    ) -> Self {
        let mut store = Self::empty(planets);
        let planet_ids = unique(planets.iter().map(|p| &p.id));
        let mut pool = unique(crafts.iter().map(|c| &c.id));

        for (idx, planet) in planet_ids.iter().enumerate() {
            if pool.is_empty() {
                break;
            }
            let planets_after = planet_ids.len() - idx - 1;
            let max = pool.len().saturating_sub(planets_after).max(1);
            let count = rng.random_range(1..=max);

            pool.shuffle(rng);
            let chosen: Vec<CraftId> = pool.drain(..count).collect();
            store.stations.insert(planet.clone(), chosen);
        }

        tracing::debug!(
            planets = planets.len(),
            crafts = crafts.len(),
            unstationed = pool.len(),
            "Seeded craft assignments",
        );

        store
    }

    /// Crafts stationed at `planet`, in arrival order.
    ///
    /// Unknown planets yield an empty slice.
    pub fn crafts_at(&self, planet: &PlanetId) -> &[CraftId] {
        self.stations.get(planet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_known_planet(&self, planet: &PlanetId) -> bool {
        self.stations.contains_key(planet)
    }

    /// The planet a craft is currently stationed at, if any.
    pub fn location_of(&self, craft: &CraftId) -> Option<&PlanetId> {
        self.stations
            .iter()
            .find(|(_, crafts)| crafts.contains(craft))
            .map(|(planet, _)| planet)
    }

    /// Move `craft` from `from` to the end of `to`'s list.
    pub fn dispatch(
        &mut self,
        from: &PlanetId,
        to: &PlanetId,
        craft: &CraftId,
        retired: &DecommissionRegistry,
    ) -> Result<(), CoreError> {
        if from == to {
            return Err(CoreError::invalid_dispatch(format!(
                "Craft {craft} cannot be dispatched from planet {from} to itself"
            )));
        }
        if retired.is_decommissioned(craft) {
            return Err(CoreError::invalid_dispatch(format!(
                "Craft {craft} is decommissioned"
            )));
        }
        if !self.is_known_planet(to) {
            return Err(CoreError::invalid_dispatch(format!(
                "Unknown destination planet {to}"
            )));
        }
        let origin = self.stations.get_mut(from).ok_or_else(|| {
            CoreError::invalid_dispatch(format!("Unknown departure planet {from}"))
        })?;
        let pos = origin.iter().position(|c| c == craft).ok_or_else(|| {
            CoreError::invalid_dispatch(format!("Craft {craft} is not stationed at planet {from}"))
        })?;

        let moved = origin.remove(pos);
        // Destination was checked above.
        if let Some(dest) = self.stations.get_mut(to) {
            dest.push(moved);
        }

        tracing::info!(craft = %craft, from = %from, to = %to, "Craft dispatched");
        Ok(())
    }

    /// Station a craft that currently has no planet (e.g. a freshly built
    /// custom craft).
    pub fn station(
        &mut self,
        planet: &PlanetId,
        craft: CraftId,
        retired: &DecommissionRegistry,
    ) -> Result<(), CoreError> {
        if retired.is_decommissioned(&craft) {
            return Err(CoreError::invalid_dispatch(format!(
                "Craft {craft} is decommissioned"
            )));
        }
        if let Some(current) = self.location_of(&craft) {
            return Err(CoreError::invalid_dispatch(format!(
                "Craft {craft} is already stationed at planet {current}"
            )));
        }
        let dest = self.stations.get_mut(planet).ok_or_else(|| {
            CoreError::invalid_dispatch(format!("Unknown destination planet {planet}"))
        })?;

        tracing::info!(craft = %craft, planet = %planet, "Craft stationed");
        dest.push(craft);
        Ok(())
    }
}

fn unique<'a, T>(ids: impl Iterator<Item = &'a T>) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash + 'a,
{
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).cloned().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
