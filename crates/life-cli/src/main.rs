//! Terminal Game of Life: prompt for a configuration, then animate a fixed
//! number of generations in place.

mod input;
mod render;

use anyhow::Result;
use life_core::Simulation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Pause between rendered generations
const FRAME_DELAY: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    init_logging();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let config = input::read_config(&mut stdin.lock(), &mut stdout)?;

    let mut rng = ChaCha8Rng::seed_from_u64(wall_clock_seed());
    let mut sim = Simulation::new(config, &mut rng)?;

    while !sim.is_done() {
        render::render_to(&mut stdout, sim.grid())?;
        sim.advance();
        std::thread::sleep(FRAME_DELAY);
        render::clear_screen(&mut stdout)?;
    }

    info!(generations = sim.generation(), "run complete");
    Ok(())
}

/// Logs go to stderr so stdout stays clean for frames; quiet unless
/// `RUST_LOG` says otherwise.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
