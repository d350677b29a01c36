use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::info;
use rand::Rng;

use crate::cards::pack::BoosterSet;
use crate::classifier::{RarityCounts, RarityPools};
use crate::errors::BoosterError;
use crate::image_resolver::ImageResolver;
use crate::pack_builder::{log_packs, PackBuilder, PackTemplate};
use crate::pack_writer::PackWriter;
use crate::scryfall_client::CardImageSource;
use crate::set_loader::load_set;
use crate::utilities::config::Config;

/// Loads the set, sorts it into rarity pools and draws every pack of the draft.
pub fn generate_boosters<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<Vec<BoosterSet>, BoosterError> {
    let set = load_set(&config.input_path)?;

    let pools = RarityPools::classify(&set.cards);
    pools.log_counts(config.expected_counts.map(RarityCounts).as_ref());

    let template = PackTemplate::new(config.pack_size)?;
    let builder = PackBuilder::new(&pools, template, config.mythic_odds)?;
    let boosters = builder.build_boosters(config.player_count, config.pack_count, rng)?;
    log_packs(&boosters);

    Ok(boosters)
}

/// Runs the whole pipeline. Files are only written once every image url of
/// every pack has been resolved.
pub async fn run<S, R>(
    config: &Config,
    source: S,
    rng: &mut R,
    timestamp: DateTime<Local>,
) -> Result<Vec<PathBuf>, BoosterError>
where
    S: CardImageSource,
    R: Rng + ?Sized,
{
    let start_time = Local::now();
    info!("Starting at {}", start_time);

    let boosters = generate_boosters(config, rng)?;
    info!(
        "Built {} packs for each of {} players",
        boosters.len(),
        boosters.first().map_or(0, BoosterSet::player_count)
    );

    let resolver = ImageResolver::new(source, config.lookup_concurrency, config.lookup_attempts);
    let resolved = resolver.resolve_boosters(&boosters).await?;

    let writer = PackWriter::new(&config.output_dir);
    let paths = writer.write_boosters(&resolved, timestamp)?;

    let end_time = Local::now();
    info!(
        "Booster generation started at: {}. Finished at: {}. Took: {} seconds and wrote {} files to: {}",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        paths.len(),
        config.output_dir.display()
    );
    Ok(paths)
}
