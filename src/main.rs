mod booster_run;
mod cards;
mod classifier;
mod errors;
mod image_resolver;
mod pack_builder;
mod pack_writer;
mod scryfall_client;
mod set_loader;
#[cfg(test)]
mod test;
mod utilities;

use std::time::Duration;

use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reqwest::Client;

use errors::BoosterError;
use scryfall_client::ScryfallClient;
use utilities::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();
    info!("Starting");

    let config = Config::new();
    config.validate()?;
    let run_started = chrono::prelude::Local::now();

    let mut rng = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(config.lookup_timeout_secs))
        .build()?;
    let scryfall = ScryfallClient::new(Some(&config.scryfall_url), client);

    match booster_run::run(&config, scryfall, &mut rng, run_started).await {
        Ok(paths) => {
            for path in paths {
                info!("Wrote {}", path.display());
            }
            Ok(())
        }
        Err(BoosterError::Lookup(e)) => {
            error!("Image lookup for card '{}' failed, no packs were saved", e.card());
            Err(e.into())
        }
        Err(e) => {
            error!("Booster generation failed: {}", e);
            Err(e.into())
        }
    }
}
