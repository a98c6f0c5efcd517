use std::time::Duration;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against the computer", long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = 500, help = "Pause before the computer moves, in milliseconds")]
    pub delay_ms: u64,
    #[arg(long, help = "Seed the computer's random moves to replay a session")]
    pub seed: Option<u64>,
}

impl Args {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
