//! Line-oriented user actions.
//!
//! Each input line is either a path to navigate to (`/planets`) or one of
//! the action verbs listed in [`HELP`].

use starport_core::fleet::CustomCraftForm;
use starport_core::mission::MissionForm;
use starport_core::types::{CraftId, PlanetId};

use crate::routes::Route;

pub const HELP: &str = "\
Commands:
  /<path> | go <path>                        navigate (/, /planets, /planet/4, /spacecrafts,
                                             /spacecraft/10, /spacecrafts/new, /mission-control)
  dispatch <from-planet> <to-planet> <craft> move a stationed craft to another planet
  decommission <craft>                       retire a craft
  build <name> | <cargo tons> | <passengers> | <propulsion> | <entry> | <orbit>
                                             design a custom craft
  station <craft> <planet>                   station a custom craft
  mission <from> <to> <craft> <passengers> <main contact...>
                                             submit a transport request
  help                                       show this text
  quit                                       leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Route),
    Dispatch {
        from: PlanetId,
        to: PlanetId,
        craft: CraftId,
    },
    Decommission(CraftId),
    Build(CustomCraftForm),
    Station {
        craft: CraftId,
        planet: PlanetId,
    },
    Mission(MissionForm),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CommandError(String);

fn usage(text: &str) -> CommandError {
    CommandError(format!("Usage: {text}"))
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if line.starts_with('/') {
            return Ok(Some(Command::Go(Route::parse(line))));
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "go" => match args.as_slice() {
                [path] => Command::Go(Route::parse(path)),
                _ => return Err(usage("go <path>")),
            },
            "dispatch" => match args.as_slice() {
                [from, to, craft] => Command::Dispatch {
                    from: (*from).into(),
                    to: (*to).into(),
                    craft: (*craft).into(),
                },
                _ => return Err(usage("dispatch <from-planet> <to-planet> <craft>")),
            },
            "decommission" => match args.as_slice() {
                [craft] => Command::Decommission((*craft).into()),
                _ => return Err(usage("decommission <craft>")),
            },
            "station" => match args.as_slice() {
                [craft, planet] => Command::Station {
                    craft: (*craft).into(),
                    planet: (*planet).into(),
                },
                _ => return Err(usage("station <craft> <planet>")),
            },
            "build" => Command::Build(parse_build(rest)?),
            "mission" => Command::Mission(parse_mission(rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(CommandError(format!(
                    "Unknown command \"{other}\" (type `help`)"
                )))
            }
        };
        Ok(Some(command))
    }
}

/// Fields are pipe-separated so names and option labels may contain spaces.
/// Empty fields are passed through and rejected by form validation.
fn parse_build(rest: &str) -> Result<CustomCraftForm, CommandError> {
    let fields: Vec<String> = rest.split('|').map(|f| f.trim().to_string()).collect();
    match <[String; 6]>::try_from(fields) {
        Ok([name, cargo, passengers, propulsion, entry, orbit]) => Ok(CustomCraftForm {
            name,
            cargo,
            passengers,
            propulsion,
            entry,
            orbit,
        }),
        Err(_) => Err(usage(
            "build <name> | <cargo tons> | <passengers> | <propulsion> | <entry> | <orbit>",
        )),
    }
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    Some(s.split_once(char::is_whitespace).unwrap_or((s, "")))
}

/// The main contact is everything after the passenger count.
fn parse_mission(rest: &str) -> Result<MissionForm, CommandError> {
    const USAGE: &str = "mission <from> <to> <craft> <passengers> <main contact...>";

    let (from, rest) = next_token(rest).ok_or_else(|| usage(USAGE))?;
    let (to, rest) = next_token(rest).ok_or_else(|| usage(USAGE))?;
    let (craft, rest) = next_token(rest).ok_or_else(|| usage(USAGE))?;
    let (passengers, rest) = next_token(rest).ok_or_else(|| usage(USAGE))?;
    let passengers: u32 = passengers
        .parse()
        .map_err(|_| CommandError("Passengers must be a whole number".into()))?;

    Ok(MissionForm {
        from: from.to_string(),
        to: to.to_string(),
        craft: craft.to_string(),
        passengers,
        main_contact: rest.trim().to_string(),
    })
}
