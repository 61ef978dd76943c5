//! Built-in planet and spacecraft reference data.
//!
//! The catalog is fixed for the lifetime of the process. Ids for built-in
//! records match the remote catalog API so that detail lookups by id land
//! on the same planet or starship.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::fleet::CustomCraftSpec;
use crate::types::{CraftId, PlanetId};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetRecord {
    pub id: PlanetId,
    pub name: String,
}

impl PlanetRecord {
    pub fn new(id: impl Into<PlanetId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Where a craft came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CraftKind {
    /// Built-in starship, details available from the remote catalog.
    Catalog,
    /// Designed by the user during this session.
    Custom(CustomCraftSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CraftRecord {
    pub id: CraftId,
    pub name: String,
    #[serde(flatten)]
    pub kind: CraftKind,
}

impl CraftRecord {
    /// Build a catalog (non-custom) craft record.
    pub fn catalog(id: impl Into<CraftId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: CraftKind::Catalog,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, CraftKind::Custom(_))
    }

    pub fn custom_spec(&self) -> Option<&CustomCraftSpec> {
        match &self.kind {
            CraftKind::Custom(spec) => Some(spec),
            CraftKind::Catalog => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

const BUILTIN_PLANETS: &[(&str, &str)] = &[
    ("1", "Tatooine"),
    ("2", "Alderaan"),
    ("3", "Yavin IV"),
    ("4", "Hoth"),
    ("5", "Dagobah"),
    ("6", "Bespin"),
    ("7", "Endor"),
    ("8", "Naboo"),
    ("9", "Coruscant"),
    ("10", "Kamino"),
    ("11", "Geonosis"),
    ("12", "Utapau"),
    ("13", "Mustafar"),
    ("14", "Kashyyyk"),
    ("15", "Polis Massa"),
    ("16", "Mygeeto"),
    ("17", "Felucia"),
    ("18", "Cato Neimoidia"),
    ("19", "Saleucami"),
    ("20", "Stewjon"),
];

const BUILTIN_STARSHIPS: &[(&str, &str)] = &[
    ("2", "CR90 corvette"),
    ("3", "Star Destroyer"),
    ("5", "Sentinel-class landing craft"),
    ("9", "Death Star"),
    ("10", "Millennium Falcon"),
    ("11", "Y-wing"),
    ("12", "X-wing"),
    ("13", "TIE Advanced x1"),
    ("15", "Executor"),
    ("17", "Rebel transport"),
    ("21", "Slave 1"),
    ("22", "Imperial shuttle"),
    ("23", "EF76 Nebulon-B escort frigate"),
    ("27", "Calamari Cruiser"),
    ("28", "A-wing"),
    ("29", "B-wing"),
    ("31", "Republic Cruiser"),
    ("32", "Droid control ship"),
    ("39", "Naboo fighter"),
    ("40", "Naboo Royal Starship"),
    ("41", "Scimitar"),
    ("43", "J-type diplomatic barge"),
    ("47", "AA-9 Coruscant freighter"),
    ("48", "Jedi starfighter"),
    ("49", "H-type Nubian yacht"),
    ("52", "Republic Assault ship"),
    ("58", "Solar Sailer"),
    ("59", "Trade Federation cruiser"),
    ("61", "Theta-class T-2c shuttle"),
    ("63", "Republic attack cruiser"),
    ("64", "Naboo star skiff"),
    ("65", "Jedi Interceptor"),
    ("66", "arc-170"),
    ("68", "Banking clan frigte"),
    ("74", "Belbullab-22 starfighter"),
];

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only planet and spacecraft lists.
#[derive(Debug, Clone)]
pub struct Catalog {
    planets: Vec<PlanetRecord>,
    spacecraft: Vec<CraftRecord>,
}

impl Catalog {
    /// Build a catalog from explicit lists. Order is preserved.
    ///
    /// Planet ids and craft ids must each be unique.
    pub fn new(
        planets: Vec<PlanetRecord>,
        spacecraft: Vec<CraftRecord>,
    ) -> Result<Self, CoreError> {
        if let Some(id) = first_duplicate(planets.iter().map(|p| p.id.as_str())) {
            return Err(CoreError::validation(format!("Duplicate planet id {id}")));
        }
        if let Some(id) = first_duplicate(spacecraft.iter().map(|c| c.id.as_str())) {
            return Err(CoreError::validation(format!("Duplicate spacecraft id {id}")));
        }
        Ok(Self {
            planets,
            spacecraft,
        })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let planets = BUILTIN_PLANETS
            .iter()
            .map(|(id, name)| PlanetRecord::new(*id, *name))
            .collect();
        let spacecraft = BUILTIN_STARSHIPS
            .iter()
            .map(|(id, name)| CraftRecord::catalog(*id, *name))
            .collect();
        Self {
            planets,
            spacecraft,
        }
    }

    pub fn planets(&self) -> &[PlanetRecord] {
        &self.planets
    }

    pub fn spacecraft(&self) -> &[CraftRecord] {
        &self.spacecraft
    }

    pub fn planet(&self, id: &PlanetId) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| &p.id == id)
    }

    pub fn craft(&self, id: &CraftId) -> Option<&CraftRecord> {
        self.spacecraft.iter().find(|c| &c.id == id)
    }
}

fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();

        let planet_ids: HashSet<_> = catalog.planets().iter().map(|p| &p.id).collect();
        assert_eq!(planet_ids.len(), catalog.planets().len());

        let craft_ids: HashSet<_> = catalog.spacecraft().iter().map(|c| &c.id).collect();
        assert_eq!(craft_ids.len(), catalog.spacecraft().len());
    }

    #[test]
    fn builtin_has_more_crafts_than_planets() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.planets().len(), 20);
        assert_eq!(catalog.spacecraft().len(), 35);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.planet(&"4".into()).unwrap().name, "Hoth");
        assert_eq!(catalog.craft(&"10".into()).unwrap().name, "Millennium Falcon");
        assert!(catalog.planet(&"99".into()).is_none());
    }

    #[test]
    fn catalog_crafts_are_not_custom() {
        let catalog = Catalog::builtin();
        assert!(catalog.spacecraft().iter().all(|c| !c.is_custom()));
    }

    #[test]
    fn new_keeps_order() {
        let catalog = Catalog::new(
            vec![
                PlanetRecord::new("P2", "Two"),
                PlanetRecord::new("P1", "One"),
            ],
            vec![CraftRecord::catalog("C1", "First")],
        )
        .unwrap();
        assert_eq!(catalog.planets()[0].id, PlanetId::from("P2"));
        assert_eq!(catalog.spacecraft().len(), 1);
    }

    #[test]
    fn new_rejects_duplicate_craft_ids() {
        let result = Catalog::new(
            vec![
                PlanetRecord::new("P1", "One"),
                PlanetRecord::new("P2", "Two"),
            ],
            vec![
                CraftRecord::catalog("C1", "First"),
                CraftRecord::catalog("C1", "Again"),
            ],
        );
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("C1"));
    }

    #[test]
    fn new_rejects_duplicate_planet_ids() {
        let result = Catalog::new(
            vec![
                PlanetRecord::new("P1", "One"),
                PlanetRecord::new("P1", "Again"),
            ],
            vec![CraftRecord::catalog("C1", "First")],
        );
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("P1"));
    }
}
