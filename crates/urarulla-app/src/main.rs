//! Urarulla headless host entry point.

use std::error::Error;
use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use urarulla_app::config::AppConfig;
use urarulla_app::console::{self, Command};
use urarulla_app::view::ConsoleView;
use urarulla_content::application::loader::load_content;
use urarulla_content::application::source::DirectoryContentSource;
use urarulla_core::clock::SystemClock;
use urarulla_core::event::EventBus;
use urarulla_core::rng::StdRandom;
use urarulla_session::application::game::GameSession;
use urarulla_session::domain::turn::LogProgression;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    // Initialize tracing subscriber. Logs go to stderr so stdout stays
    // readable as the console.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    tracing::info!(content_dir = %config.content_dir.display(), "starting Urarulla");

    // Content load is all-or-nothing; a failure ends the process.
    let mut bus = EventBus::new(Arc::new(SystemClock));
    let content = load_content(&DirectoryContentSource::new(&config.content_dir), &mut bus)?;

    let mut game = GameSession::configure(
        &config.settings,
        content,
        bus,
        Arc::new(ConsoleView::new()),
        Arc::new(LogProgression),
    )?;
    let mut rng = config.rng_seed.map_or_else(StdRandom::from_os, StdRandom::seeded);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", console::HELP)?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !console::execute(&mut game, command, &mut rng, &mut stdout)? {
                    break;
                }
            }
            Err(e) => writeln!(stdout, "{e}")?,
        }
        stdout.flush()?;
    }

    tracing::info!("Urarulla stopped");
    Ok(())
}
