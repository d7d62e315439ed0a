//! Command line flags.

use clap::Parser;

use keepsake_sim::ExperienceConfig;

/// A small interactive keepsake
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Seed for decoration layout and the evasive button
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn experience_config(&self) -> ExperienceConfig {
        let mut config = ExperienceConfig::default();
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}
