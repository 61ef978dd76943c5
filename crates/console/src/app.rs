//! The console front end: one [`Session`], one catalog client, and the
//! route currently on screen.

use std::time::Duration;

use starport_core::mission::MissionForm;
use starport_core::types::CraftId;
use starport_core::{CoreError, Session};
use starport_swapi::{FetchState, SwapiClient};
use tokio::sync::mpsc;

use crate::commands::{Command, HELP};
use crate::redirect::{RedirectFired, ScheduledRedirect};
use crate::routes::Route;
use crate::views;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading input.
    Show(String),
    Quit,
}

pub struct Console {
    session: Session,
    client: SwapiClient,
    route: Route,
    /// Bumped on every navigation so stale redirects can be ignored.
    generation: u64,
    redirect: Option<ScheduledRedirect>,
    redirect_delay: Duration,
    redirect_tx: mpsc::UnboundedSender<RedirectFired>,
}

impl Console {
    pub fn new(
        session: Session,
        client: SwapiClient,
        redirect_delay: Duration,
        redirect_tx: mpsc::UnboundedSender<RedirectFired>,
    ) -> Self {
        Self {
            session,
            client,
            route: Route::Home,
            generation: 0,
            redirect: None,
            redirect_delay,
            redirect_tx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn has_pending_redirect(&self) -> bool {
        self.redirect.as_ref().is_some_and(|r| !r.is_cancelled())
    }

    /// Leave the current view and render `route`.
    ///
    /// Any redirect scheduled by the previous view is cancelled.
    pub async fn navigate(&mut self, route: Route) -> String {
        if let Some(redirect) = self.redirect.take() {
            redirect.cancel();
        }
        self.generation += 1;
        self.route = route;
        tracing::debug!(route = %self.route, generation = self.generation, "Navigate");

        if let Route::NotFound(path) = &self.route {
            tracing::info!(path = %path, "Unknown route, redirecting home");
            self.redirect = Some(ScheduledRedirect::schedule(
                self.redirect_delay,
                self.generation,
                Route::Home,
                self.redirect_tx.clone(),
            ));
        }

        self.render().await
    }

    /// Apply a fired redirect, unless the user has navigated since it was
    /// scheduled.
    pub async fn on_redirect(&mut self, fired: RedirectFired) -> Option<String> {
        if fired.generation != self.generation {
            tracing::debug!(
                fired = fired.generation,
                current = self.generation,
                "Ignoring stale redirect",
            );
            return None;
        }
        Some(self.navigate(fired.target).await)
    }

    pub async fn execute(&mut self, command: Command) -> Outcome {
        let text = match command {
            Command::Quit => return Outcome::Quit,
            Command::Help => HELP.to_string(),
            Command::Go(route) => self.navigate(route).await,
            Command::Dispatch { from, to, craft } => {
                match self.session.dispatch(&from, &to, &craft) {
                    Ok(()) => {
                        let name = self.craft_name(&craft);
                        let to_name = self
                            .session
                            .planet(&to)
                            .map_or(to.to_string(), |p| p.name.clone());
                        format!("{name} dispatched to {to_name}.")
                    }
                    Err(e) => error_text(&e),
                }
            }
            Command::Decommission(craft) => match self.session.decommission(&craft) {
                Ok(()) => format!("{} decommissioned.", self.craft_name(&craft)),
                Err(e) => error_text(&e),
            },
            Command::Build(form) => match self.session.add_custom_craft(&form) {
                Ok(id) => match self.session.craft(&id) {
                    Some(craft) => views::craft_created(craft),
                    None => format!("Created {id}."),
                },
                Err(e) => error_text(&e),
            },
            Command::Station { craft, planet } => {
                match self.session.station_custom_craft(&craft, &planet) {
                    Ok(()) => {
                        let name = self.craft_name(&craft);
                        format!("{name} stationed at planet {planet}.")
                    }
                    Err(e) => error_text(&e),
                }
            }
            Command::Mission(form) => match self.session.submit_mission(&form) {
                Ok(mission) => views::mission_dispatched(mission),
                Err(e) => error_text(&e),
            },
        };
        Outcome::Show(text)
    }

    async fn render(&self) -> String {
        match &self.route {
            Route::Home => views::home(),
            Route::Planets => views::planet_list(&self.session),
            Route::Planet(id) => {
                let detail: FetchState<_> = self.client.planet(id).await.into();
                views::planet_detail(&self.session, id, &detail)
            }
            Route::Spacecrafts => views::spacecraft_list(&self.session),
            Route::NewSpacecraft => views::new_spacecraft_form(),
            Route::Spacecraft(id) => {
                let custom = self.session.craft(id).is_some_and(|c| c.is_custom());
                if custom {
                    views::spacecraft_detail(&self.session, id, None)
                } else {
                    let detail: FetchState<_> = self.client.starship(id).await.into();
                    views::spacecraft_detail(&self.session, id, Some(&detail))
                }
            }
            Route::MissionControl { craft } => {
                let form = craft
                    .as_ref()
                    .map_or_else(MissionForm::default, MissionForm::for_craft);
                views::mission_control(&self.session, &form)
            }
            Route::NotFound(_) => views::not_found(self.redirect_delay),
        }
    }

    fn craft_name(&self, id: &CraftId) -> String {
        self.session
            .craft(id)
            .map_or_else(|| id.to_string(), |c| c.name.clone())
    }
}

fn error_text(error: &CoreError) -> String {
    format!("Error: {error}")
}
