use serde::{Deserialize, Serialize};

use super::card::Card;

/// The cards one player opens, in slot order.
#[derive(Debug, PartialEq, Clone)]
pub struct Pack {
    pub cards: Vec<Card>,
}

/// Every player's pack for one designation, indexed by player.
#[derive(Debug, PartialEq, Clone)]
pub struct BoosterSet {
    pub packs: Vec<Pack>,
}

impl BoosterSet {
    pub fn player_count(&self) -> usize {
        self.packs.len()
    }

    pub fn card_names(&self) -> impl Iterator<Item = &str> {
        self.packs
            .iter()
            .flat_map(|pack| pack.cards.iter().map(|card| card.name.as_str()))
    }
}

/// Image urls of a booster set. Rows are card slots, columns are players.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedBooster {
    pub grid: Vec<Vec<String>>,
}
