use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::{stream, StreamExt, TryStreamExt};
use log::{info, warn};
use tokio::sync::Mutex;

use crate::cards::pack::{BoosterSet, ResolvedBooster};
use crate::errors::LookupError;
use crate::scryfall_client::CardImageSource;

/// Maps drawn cards to image urls, looking every distinct name up once per run.
pub struct ImageResolver<S: CardImageSource> {
    source: S,
    cache: Arc<Mutex<HashMap<String, String>>>,
    concurrency: usize,
    attempts: usize,
}

impl<S: CardImageSource> ImageResolver<S> {
    pub fn new(source: S, concurrency: usize, attempts: usize) -> Self {
        ImageResolver {
            source,
            cache: Arc::new(Mutex::new(HashMap::new())),
            concurrency: concurrency.max(1),
            attempts: attempts.max(1),
        }
    }

    pub async fn image_url(&self, card_name: &str) -> Result<String, LookupError> {
        if let Some(url) = self.cache.lock().await.get(card_name).cloned() {
            return Ok(url);
        }

        let mut attempt = 1;
        let url = loop {
            match self.source.image_url(card_name).await {
                Ok(url) => break url,
                Err(e) if attempt < self.attempts => {
                    warn!(
                        "Lookup {} of {} failed for {}: {}",
                        attempt, self.attempts, card_name, e
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        self.cache
            .lock()
            .await
            .insert(card_name.to_string(), url.clone());
        Ok(url)
    }

    /// Resolves every booster set. Fails on the first lookup that fails, in
    /// which case no booster is returned.
    pub async fn resolve_boosters(
        &self,
        boosters: &[BoosterSet],
    ) -> Result<Vec<ResolvedBooster>, LookupError> {
        let mut seen = HashSet::new();
        let names: Vec<&str> = boosters
            .iter()
            .flat_map(|booster| booster.card_names())
            .filter(|name| seen.insert(*name))
            .collect();
        info!(
            "Resolving images for {} distinct cards with {} concurrent lookups",
            names.len(),
            self.concurrency
        );

        let urls: HashMap<&str, String> = stream::iter(names)
            .map(|name| async move { self.image_url(name).await.map(|url| (name, url)) })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(boosters
            .iter()
            .map(|booster| Self::resolve_booster(booster, &urls))
            .collect())
    }

    fn resolve_booster(booster: &BoosterSet, urls: &HashMap<&str, String>) -> ResolvedBooster {
        let slots = booster
            .packs
            .iter()
            .map(|pack| pack.cards.len())
            .max()
            .unwrap_or(0);

        let grid = (0..slots)
            .map(|slot| {
                booster
                    .packs
                    .iter()
                    .map(|pack| {
                        pack.cards
                            .get(slot)
                            .and_then(|card| urls.get(card.name.as_str()))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        ResolvedBooster { grid }
    }
}
