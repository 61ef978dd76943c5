//! Plain-text renderers for each view.
//!
//! Renderers only read from the session; every change goes through
//! [`Session`]'s mutation methods before the view is drawn again.

use std::time::Duration;

use starport_core::catalog::CraftRecord;
use starport_core::fleet::{
    CustomCraftSpec, EntryMethod, OrbitMethod, Propulsion, CUSTOM_NAME_PREFIX,
};
use starport_core::mission::{Mission, MissionForm, CRAFT_NOTICE, PLANET_NOTICE};
use starport_core::types::{CraftId, PlanetId};
use starport_core::Session;
use starport_swapi::{FetchState, PlanetDetail, StarshipDetail};

const BACK_TO_DASHBOARD: &str = "<- Back to Dashboard: /";

const CONTACT_NOTICE: &str = "Please provide the main contact for this mission. \
    This person will be responsible for all communications and coordination.";

fn labels<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> String {
    all.iter().map(|v| label(*v)).collect::<Vec<_>>().join(", ")
}

fn craft_line(craft: &CraftRecord, retired: bool) -> String {
    if retired {
        format!("  {}. {} (Decommissioned)", craft.id, craft.name)
    } else {
        format!("  {}. {}", craft.id, craft.name)
    }
}

fn craft_name<'a>(session: &'a Session, id: &'a CraftId) -> &'a str {
    session.craft(id).map_or(id.as_str(), |c| c.name.as_str())
}

fn detail_rows(rows: &[(&str, &str)]) -> Vec<String> {
    rows.iter()
        .map(|(label, value)| format!("  {label}: {value}"))
        .collect()
}

pub fn home() -> String {
    [
        "Welcome to Space Travel",
        "Manage spacecrafts, explore planets, and dispatch missions.",
        "",
        "  Spacecrafts ............ /spacecrafts",
        "  Planets ................ /planets",
        "  Mission Control Center . /mission-control",
    ]
    .join("\n")
}

pub fn planet_list(session: &Session) -> String {
    let mut out = vec![BACK_TO_DASHBOARD.to_string(), "View planets:".to_string()];
    out.extend(
        session
            .planets()
            .iter()
            .map(|p| format!("  {}. {}  (/planet/{})", p.id, p.name, p.id)),
    );
    out.join("\n")
}

/// Detail view for a planet: fetched data, stationed crafts, and the
/// crafts that can still be dispatched from it.
pub fn planet_detail(
    session: &Session,
    id: &PlanetId,
    detail: &FetchState<PlanetDetail>,
) -> String {
    let planet = match detail {
        FetchState::Loaded(planet) => planet,
        FetchState::Failed(msg) => return format!("Error loading planet: {msg}"),
    };

    let mut out = vec![
        "<- Back to planet list: /planets".to_string(),
        BACK_TO_DASHBOARD.to_string(),
        planet.name.clone(),
    ];
    out.extend(detail_rows(&planet.rows()));

    let stationed = session.crafts_at(id);
    if stationed.is_empty() {
        out.push("Crafts on this planet: None".into());
    } else {
        out.push("Crafts on this planet:".into());
        for craft_id in stationed {
            let name = craft_name(session, craft_id);
            if session.is_decommissioned(craft_id) {
                out.push(format!("  - {name} (Decommissioned)"));
            } else {
                out.push(format!("  - {name}"));
            }
        }
    }

    let candidates = session.dispatch_candidates(id);
    if !candidates.is_empty() {
        out.push("Dispatchable crafts:".into());
        for craft_id in candidates {
            let name = craft_name(session, craft_id);
            out.push(format!("  dispatch {id} <to> {craft_id}  ({name})"));
        }
    }
    out.join("\n")
}

pub fn spacecraft_list(session: &Session) -> String {
    let mut out = vec![
        BACK_TO_DASHBOARD.to_string(),
        "View Spacecrafts:".to_string(),
        "  Build Your Own Craft: /spacecrafts/new".to_string(),
        "  Decommission A Craft: decommission <craft>".to_string(),
    ];
    out.extend(
        session
            .spacecraft()
            .map(|c| craft_line(c, session.is_decommissioned(&c.id))),
    );
    out.push("Visit the API endpoint: https://swapi.info/api/starships".into());
    out.join("\n")
}

/// Detail view for a craft. Catalog crafts show fetched data, custom
/// crafts show their design and pass no `detail`.
pub fn spacecraft_detail(
    session: &Session,
    id: &CraftId,
    detail: Option<&FetchState<StarshipDetail>>,
) -> String {
    let mut out = vec![
        "<- Back to spacecraft list: /spacecrafts".to_string(),
        BACK_TO_DASHBOARD.to_string(),
    ];

    if let Some(spec) = session.craft(id).and_then(CraftRecord::custom_spec) {
        out.push(format!("{CUSTOM_NAME_PREFIX}{}", spec.base_name));
        out.push(custom_spec_rows(spec));
    } else if let Some(detail) = detail {
        let ship = match detail {
            FetchState::Loaded(ship) => ship,
            FetchState::Failed(msg) => return format!("Error loading spacecraft: {msg}"),
        };
        out.push(ship.name.clone());
        out.extend(detail_rows(&ship.rows()));
    }

    if session.is_decommissioned(id) {
        out.push("Status: Decommissioned".into());
    }
    match session.location_of(id).and_then(|p| session.planet(p)) {
        Some(planet) => out.push(format!("Stationed at: {}", planet.name)),
        None => out.push("Stationed at: none".into()),
    }
    out.join("\n")
}

fn custom_spec_rows(spec: &CustomCraftSpec) -> String {
    [
        format!("  Cargo Capacity: {} tons", spec.cargo_capacity_tons),
        format!("  Passenger Capacity: {}", spec.passenger_capacity),
        format!("  Propulsion: {}", spec.propulsion),
        format!("  Entry/Departure: {}", spec.entry),
        format!("  Orbit/Landing: {}", spec.orbit),
    ]
    .join("\n")
}

pub fn new_spacecraft_form() -> String {
    let usage = "  build <name> | <cargo tons> | <passengers> | <propulsion> | <entry> | <orbit>";
    [
        "Create Your Own Spacecraft".to_string(),
        usage.to_string(),
        format!(
            "  Propulsion Type: {}",
            labels(Propulsion::ALL, Propulsion::label)
        ),
        format!(
            "  Atmospheric Entry/Departure: {}",
            labels(EntryMethod::ALL, EntryMethod::label)
        ),
        format!(
            "  Orbit/Landing: {}",
            labels(OrbitMethod::ALL, OrbitMethod::label)
        ),
        "<- Back to Spacecraft List: /spacecrafts".to_string(),
        BACK_TO_DASHBOARD.to_string(),
    ]
    .join("\n")
}

pub fn craft_created(craft: &CraftRecord) -> String {
    let mut out = vec![
        "Craft Created!".to_string(),
        format!("  Name: {}", craft.name),
    ];
    if let Some(spec) = craft.custom_spec() {
        out.push(custom_spec_rows(spec));
    }
    out.push(format!(
        "Send \"{}\" on a Mission: /mission-control?craft={}",
        craft.name, craft.id
    ));
    out.push(format!("Station it: station {} <planet>", craft.id));
    out.join("\n")
}

/// The transport request form, pre-filled from `form`.
pub fn mission_control(session: &Session, form: &MissionForm) -> String {
    let mut out = vec![
        "Mission Control Transport Request Form".to_string(),
        PLANET_NOTICE.to_string(),
        "Planets (From / To):".to_string(),
    ];
    out.extend(
        session
            .planets()
            .iter()
            .map(|p| format!("  {}. {}", p.id, p.name)),
    );

    out.push(CRAFT_NOTICE.to_string());
    out.push("Spacecraft:".into());
    let selected = form.craft.trim();
    let candidates = session.mission_candidates();
    for craft in &candidates {
        if craft.id.as_str() == selected {
            out.push(format!("  {}. {} (selected)", craft.id, craft.name));
        } else {
            out.push(format!("  {}. {}", craft.id, craft.name));
        }
    }
    if !selected.is_empty() && !candidates.iter().any(|c| c.id.as_str() == selected) {
        out.push(format!("  ({selected} is not available for missions)"));
    }

    out.push(format!("Number of Passengers (default {}):", form.passengers));
    out.push(CONTACT_NOTICE.to_string());
    let craft_arg = if selected.is_empty() {
        "<craft>"
    } else {
        selected
    };
    out.push(format!(
        "  mission <from> <to> {craft_arg} <passengers> \
         <main contact name, rank and current star system>"
    ));

    if let Some(mission) = session.last_mission() {
        out.push(String::new());
        out.push(mission_dispatched(mission));
    }
    out.push(BACK_TO_DASHBOARD.to_string());
    out.join("\n")
}

pub fn mission_dispatched(mission: &Mission) -> String {
    format!("Mission Dispatched!\n  {}", mission.summary())
}

pub fn not_found(delay: Duration) -> String {
    format!(
        "404 - Page Not Found\n\
         Sorry, the page you are looking for does not exist.\n\
         You will be redirected to the Home Page in {} second(s).",
        delay.as_secs()
    )
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use starport_core::catalog::Catalog;
    use starport_core::fleet::CustomCraftForm;

    use super::*;

    fn session() -> Session {
        Session::new(Catalog::builtin(), &mut StdRng::seed_from_u64(9))
    }

    fn serenity() -> CustomCraftForm {
        CustomCraftForm {
            name: "Serenity".into(),
            cargo: "20".into(),
            passengers: "9".into(),
            propulsion: "Fusion Drive".into(),
            entry: "Aerobrake".into(),
            orbit: "Surface Landing".into(),
        }
    }

    fn hoth() -> PlanetDetail {
        PlanetDetail {
            name: "Hoth".into(),
            climate: "frozen".into(),
            ..PlanetDetail::default()
        }
    }

    #[test]
    fn planet_list_shows_every_planet() {
        let text = planet_list(&session());
        assert!(text.contains("View planets:"));
        assert!(text.contains("1. Tatooine"));
        assert!(text.contains("20. Stewjon"));
    }

    #[test]
    fn planet_detail_lists_stationed_crafts() {
        let s = session();
        let id = PlanetId::from("4");
        let text = planet_detail(&s, &id, &FetchState::Loaded(hoth()));

        assert!(text.contains("Climate: frozen"));
        for craft in s.crafts_at(&id) {
            let name = &s.craft(craft).unwrap().name;
            assert!(text.contains(name.as_str()), "missing {name}");
        }
    }

    #[test]
    fn planet_detail_offers_only_active_crafts_for_dispatch() {
        let mut s = session();
        let id = PlanetId::from("4");
        let stationed = s.crafts_at(&id).to_vec();
        let retired = stationed[0].clone();
        s.decommission(&retired).unwrap();

        let text = planet_detail(&s, &id, &FetchState::Loaded(hoth()));
        let (_, dispatchable) = text.split_once("Dispatchable crafts:").unwrap_or_default();

        assert!(!dispatchable.contains(&format!("dispatch 4 <to> {retired} ")));
        for craft in &stationed[1..] {
            assert!(dispatchable.contains(&format!("dispatch 4 <to> {craft} ")));
        }
    }

    #[test]
    fn planet_detail_error_state() {
        let text = planet_detail(
            &session(),
            &"4".into(),
            &FetchState::Failed("HTTP request failed: boom".into()),
        );
        assert_eq!(text, "Error loading planet: HTTP request failed: boom");
    }

    #[test]
    fn spacecraft_list_marks_decommissioned() {
        let mut s = session();
        s.decommission(&"9".into()).unwrap();
        let text = spacecraft_list(&s);
        assert!(text.contains("9. Death Star (Decommissioned)"));
        assert!(text.contains("10. Millennium Falcon\n"));
    }

    #[test]
    fn mission_control_hides_decommissioned_crafts() {
        let mut s = session();
        s.decommission(&"9".into()).unwrap();
        let text = mission_control(&s, &MissionForm::default());
        assert!(!text.contains("Death Star"));
        assert!(text.contains("Millennium Falcon"));
    }

    #[test]
    fn mission_control_marks_preselected_custom_craft() {
        let mut s = session();
        let id = s.add_custom_craft(&serenity()).unwrap();
        let text = mission_control(&s, &MissionForm::for_craft(&id));
        assert!(text.contains("custom-1. Custom - Serenity (selected)"));
        assert!(text.contains("mission <from> <to> custom-1 <passengers>"));
        assert!(text.contains("Number of Passengers (default 1):"));
    }

    #[test]
    fn mission_control_flags_unavailable_preselection() {
        let mut s = session();
        s.decommission(&"9".into()).unwrap();
        let text = mission_control(&s, &MissionForm::for_craft(&"9".into()));
        assert!(text.contains("(9 is not available for missions)"));
        assert!(!text.contains("(selected)"));
    }

    #[test]
    fn custom_craft_detail_needs_no_fetch() {
        let mut s = session();
        let id = s.add_custom_craft(&serenity()).unwrap();
        let text = spacecraft_detail(&s, &id, None);
        assert!(text.contains("Custom - Serenity"));
        assert!(text.contains("Propulsion: Fusion Drive"));
        assert!(text.contains("Stationed at: none"));
    }

    #[test]
    fn not_found_mentions_redirect() {
        let text = not_found(Duration::from_secs(3));
        assert!(text.contains("404 - Page Not Found"));
        assert!(text.contains("3 second(s)"));
    }
}
