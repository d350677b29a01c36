use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::error;

use crate::errors::BoosterError;
use crate::utilities::constants::{
    BASIC_SLOTS, DEFAULT_OUTPUT_DIR, DEFAULT_SET_FILE, RARE_SLOTS, SCRYFALL_API_URL,
    UNCOMMON_SLOTS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub player_count: usize,
    pub pack_size: usize,
    pub pack_count: usize,
    pub mythic_odds: u32,
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub lookup_concurrency: usize,
    pub lookup_timeout_secs: u64,
    pub lookup_attempts: usize,
    pub scryfall_url: String,
    /// Known pool sizes of the set, in basic, common, uncommon, rare, mythic order.
    pub expected_counts: Option<[usize; 5]>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_count: 8,
            pack_size: 15,
            pack_count: 3,
            mythic_odds: 8,
            input_path: PathBuf::from(DEFAULT_SET_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            lookup_concurrency: 8,
            lookup_timeout_secs: 10,
            lookup_attempts: 1,
            scryfall_url: SCRYFALL_API_URL.to_string(),
            expected_counts: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        self.update_from(|key| env::var(key).ok());
    }

    fn update_from<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(players) = var("PLAYERS") {
            parse_into(&mut self.player_count, "PLAYERS", &players);
        }
        if let Some(pack_size) = var("PACK_SIZE") {
            parse_into(&mut self.pack_size, "PACK_SIZE", &pack_size);
        }
        if let Some(packs) = var("PACKS") {
            parse_into(&mut self.pack_count, "PACKS", &packs);
        }
        if let Some(mythic_odds) = var("MYTHIC_ODDS") {
            parse_into(&mut self.mythic_odds, "MYTHIC_ODDS", &mythic_odds);
        }
        if let Some(set_file) = var("SET_FILE") {
            if !set_file.is_empty() {
                self.input_path = PathBuf::from(set_file);
            }
        }
        if let Some(output_dir) = var("OUTPUT_DIR") {
            if !output_dir.is_empty() {
                self.output_dir = PathBuf::from(output_dir);
            }
        }
        if let Some(seed) = var("SEED") {
            match seed.parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => error!("Ignoring SEED '{}', it is not a number", seed),
            }
        }
        if let Some(concurrency) = var("LOOKUP_CONCURRENCY") {
            parse_into(&mut self.lookup_concurrency, "LOOKUP_CONCURRENCY", &concurrency);
        }
        if let Some(timeout) = var("LOOKUP_TIMEOUT_SECS") {
            parse_into(&mut self.lookup_timeout_secs, "LOOKUP_TIMEOUT_SECS", &timeout);
        }
        if let Some(attempts) = var("LOOKUP_ATTEMPTS") {
            parse_into(&mut self.lookup_attempts, "LOOKUP_ATTEMPTS", &attempts);
        }
        if let Some(url) = var("SCRYFALL_URL") {
            if !url.is_empty() {
                self.scryfall_url = url.trim_end_matches('/').to_string();
            }
        }
        if let Some(counts) = var("EXPECTED_COUNTS") {
            match parse_counts(&counts) {
                Some(counts) => self.expected_counts = Some(counts),
                None => error!(
                    "Ignoring EXPECTED_COUNTS '{}', expected five comma separated numbers",
                    counts
                ),
            }
        }
    }

    pub fn validate(&self) -> Result<(), BoosterError> {
        let min_pack_size = BASIC_SLOTS + UNCOMMON_SLOTS + RARE_SLOTS;
        if self.player_count == 0 {
            return Err(BoosterError::Config("PLAYERS must be at least 1".to_string()));
        }
        if self.pack_count == 0 {
            return Err(BoosterError::Config("PACKS must be at least 1".to_string()));
        }
        if self.pack_size < min_pack_size {
            return Err(BoosterError::Config(format!(
                "PACK_SIZE must be at least {}, got {}",
                min_pack_size, self.pack_size
            )));
        }
        if self.mythic_odds == 0 {
            return Err(BoosterError::Config("MYTHIC_ODDS must be at least 1".to_string()));
        }
        if self.lookup_concurrency == 0 {
            return Err(BoosterError::Config(
                "LOOKUP_CONCURRENCY must be at least 1".to_string(),
            ));
        }
        if self.lookup_attempts == 0 {
            return Err(BoosterError::Config(
                "LOOKUP_ATTEMPTS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_into<T: FromStr>(field: &mut T, key: &str, value: &str) {
    match value.trim().parse() {
        Ok(parsed) => *field = parsed,
        Err(_) => error!("Ignoring {} '{}', keeping the default", key, value),
    }
}

fn parse_counts(value: &str) -> Option<[usize; 5]> {
    let counts = value
        .split(',')
        .map(|count| count.trim().parse().ok())
        .collect::<Option<Vec<usize>>>()?;
    counts.try_into().ok()
}
