//! Path → view dispatch.
//!
//! Every path maps to exactly one [`Route`]; anything unrecognised becomes
//! [`Route::NotFound`], which redirects home after a delay.

use std::fmt;

use starport_core::types::{CraftId, PlanetId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/spacecrafts`
    Spacecrafts,
    /// `/spacecrafts/new`
    NewSpacecraft,
    /// `/spacecraft/{id}`
    Spacecraft(CraftId),
    /// `/planets`
    Planets,
    /// `/planet/{id}`
    Planet(PlanetId),
    /// `/mission-control`, optionally `?craft={id}` to pre-select a craft.
    MissionControl { craft: Option<CraftId> },
    /// Any other path, kept verbatim.
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let (path_part, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let segments: Vec<&str> = path_part.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["spacecrafts"] => Route::Spacecrafts,
            ["spacecrafts", "new"] => Route::NewSpacecraft,
            ["spacecraft", id] => Route::Spacecraft((*id).into()),
            ["planets"] => Route::Planets,
            ["planet", id] => Route::Planet((*id).into()),
            ["mission-control"] => Route::MissionControl {
                craft: query.and_then(craft_param),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Spacecrafts => "/spacecrafts".into(),
            Route::NewSpacecraft => "/spacecrafts/new".into(),
            Route::Spacecraft(id) => format!("/spacecraft/{id}"),
            Route::Planets => "/planets".into(),
            Route::Planet(id) => format!("/planet/{id}"),
            Route::MissionControl { craft: None } => "/mission-control".into(),
            Route::MissionControl { craft: Some(id) } => format!("/mission-control?craft={id}"),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn craft_param(query: &str) -> Option<CraftId> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == "craft" && !value.is_empty())
        .map(|(_, value)| value.into())
}
