use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::rarity::Rarity;

/// One card record as it appears in the `cards` list of a set file.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct SetCard {
    pub name: String,
    pub rarity: String,
    #[serde(rename = "type")]
    pub type_line: String,
    /// Set files only carry `isPromo` on promo printings, so presence is the flag.
    #[serde(rename = "isPromo", default, deserialize_with = "present")]
    pub is_promo: bool,
    #[serde(rename = "isBuyABox", default)]
    pub is_buy_a_box: bool,
}

fn present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|_| true)
}

/// A card that made it into a rarity pool.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Card {
    pub name: String,
    pub rarity: Rarity,
    pub type_line: String,
    pub promo: bool,
}

impl Card {
    pub fn new(name: &str, rarity: Rarity, type_line: &str) -> Self {
        Card {
            name: name.to_string(),
            rarity,
            type_line: type_line.to_string(),
            promo: false,
        }
    }
}
