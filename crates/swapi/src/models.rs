//! Detail records returned by the catalog API.
//!
//! The API reports every field as a string (`"unknown"`, `"200000"`,
//! `"arid"`). Values are kept verbatim. Fields the API omits deserialize to
//! empty strings and fields this crate does not use are ignored.

use serde::{Deserialize, Serialize};

/// `GET /planets/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetDetail {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
    pub diameter: String,
    pub gravity: String,
    pub orbital_period: String,
    pub rotation_period: String,
    pub surface_water: String,
}

impl PlanetDetail {
    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 8] {
        [
            ("Climate", self.climate.as_str()),
            ("Terrain", self.terrain.as_str()),
            ("Population", self.population.as_str()),
            ("Diameter", self.diameter.as_str()),
            ("Gravity", self.gravity.as_str()),
            ("Orbital Period", self.orbital_period.as_str()),
            ("Rotation Period", self.rotation_period.as_str()),
            ("Surface Water", self.surface_water.as_str()),
        ]
    }
}

/// `GET /starships/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarshipDetail {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub passengers: String,
    pub crew: String,
    pub starship_class: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub cargo_capacity: String,
    pub hyperdrive_rating: String,
}

impl StarshipDetail {
    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 9] {
        [
            ("Model", self.model.as_str()),
            ("Manufacturer", self.manufacturer.as_str()),
            ("Passengers", self.passengers.as_str()),
            ("Crew", self.crew.as_str()),
            ("Starship Class", self.starship_class.as_str()),
            ("Length", self.length.as_str()),
            ("Max Atmosphering Speed", self.max_atmosphering_speed.as_str()),
            ("Cargo Capacity", self.cargo_capacity.as_str()),
            ("Hyperdrive Rating", self.hyperdrive_rating.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_ignores_unknown_fields() {
        let json = r#"{
            "name": "Hoth",
            "climate": "frozen",
            "terrain": "tundra, ice caves, mountain ranges",
            "population": "unknown",
            "diameter": "7200",
            "gravity": "1.1 standard",
            "orbital_period": "549",
            "rotation_period": "23",
            "surface_water": "100",
            "residents": [],
            "url": "https://swapi.info/api/planets/4"
        }"#;
        let planet: PlanetDetail = serde_json::from_str(json).unwrap();
        assert_eq!(planet.name, "Hoth");
        assert_eq!(planet.surface_water, "100");
        assert_eq!(planet.rows()[0], ("Climate", "frozen"));
    }

    #[test]
    fn starship_missing_fields_default_to_empty() {
        let ship: StarshipDetail =
            serde_json::from_str(r#"{"name": "X-wing", "model": "T-65 X-wing"}"#).unwrap();
        assert_eq!(ship.model, "T-65 X-wing");
        assert!(ship.hyperdrive_rating.is_empty());
        assert_eq!(ship.rows().len(), 9);
    }
}
