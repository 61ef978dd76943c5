//! `starport` -- interactive fleet manager.
//!
//! Reads one command or path per line from stdin and prints the resulting
//! view. All state lives for the duration of the process.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default                  | Description                         |
//! |---------------------------|----------|--------------------------|-------------------------------------|
//! | `SWAPI_BASE_URL`          | no       | `https://swapi.info/api` | Catalog API root                    |
//! | `SWAPI_TIMEOUT_SECS`      | no       | `10`                     | Per-request timeout                 |
//! | `SESSION_SEED`            | no       | random                   | Seed for the initial assignments    |
//! | `NOT_FOUND_REDIRECT_SECS` | no       | `3`                      | Delay before 404 redirects home     |

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starport_console::app::{Console, Outcome};
use starport_console::commands::Command;
use starport_console::config::ConsoleConfig;
use starport_console::routes::Route;
use starport_core::catalog::Catalog;
use starport_core::Session;
use starport_swapi::SwapiClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "starport_console=info,starport_core=info,starport_swapi=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ConsoleConfig::from_env()?;
    let seed = config.session_seed.unwrap_or_else(|| rand::rng().random());

    tracing::info!(
        seed,
        swapi_base_url = %config.swapi.base_url,
        "Starting starport session",
    );

    let session = Session::new(Catalog::builtin(), &mut StdRng::seed_from_u64(seed));
    let client = SwapiClient::new(&config.swapi)?;

    let (redirect_tx, mut redirect_rx) = mpsc::unbounded_channel();
    let mut console = Console::new(session, client, config.not_found_redirect, redirect_tx);

    println!("{}", console.navigate(Route::Home).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(command)) => match console.execute(command).await {
                        Outcome::Show(text) => println!("{text}"),
                        Outcome::Quit => break,
                    },
                    Err(e) => println!("{e}"),
                }
            }
            Some(fired) = redirect_rx.recv() => {
                if let Some(text) = console.on_redirect(fired).await {
                    println!("{text}");
                }
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
