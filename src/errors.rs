use std::path::PathBuf;

use thiserror::Error;

use crate::cards::rarity::Rarity;

#[derive(Error, Debug)]
pub enum BoosterError {
    #[error("Malformed set data in '{path}': {reason}")]
    DataFormat { path: PathBuf, reason: String },

    #[error("Cannot draw a {rarity} card, the pool is empty")]
    InsufficientPool { rarity: Rarity },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Failed to write '{path}': {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Failures talking to the card image API. Every variant names the card.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Request for card '{card}' failed: {source}")]
    Request {
        card: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Bad response from API query for card '{card}', status code {status}")]
    BadStatus {
        card: String,
        status: reqwest::StatusCode,
    },

    #[error("Could not parse API response for card '{card}': {reason}")]
    MalformedResponse { card: String, reason: String },

    #[error("No png image found for card '{card}'")]
    NoImage { card: String },
}

impl LookupError {
    pub fn card(&self) -> &str {
        match self {
            LookupError::Request { card, .. }
            | LookupError::BadStatus { card, .. }
            | LookupError::MalformedResponse { card, .. }
            | LookupError::NoImage { card } => card,
        }
    }
}
