use log::{debug, info, warn};

use crate::cards::card::{Card, SetCard};
use crate::cards::rarity::Rarity;
use crate::utilities::constants::SNOW_LAND_TYPE;

/// Boosterable cards grouped by the slot they can fill.
///
/// Pools are built once per run and only read afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RarityPools {
    pub basics: Vec<Card>,
    pub commons: Vec<Card>,
    pub uncommons: Vec<Card>,
    pub rares: Vec<Card>,
    pub mythics: Vec<Card>,
}

/// Pool sizes in basic, common, uncommon, rare, mythic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityCounts(pub [usize; 5]);

impl RarityPools {
    pub fn classify(cards: &[SetCard]) -> Self {
        let mut pools = RarityPools::default();

        for set_card in cards {
            if set_card.is_promo {
                info!("Promo, not included in boosters: {}", set_card.name);
                continue;
            }
            if set_card.is_buy_a_box {
                info!("Buy-a-box promo, not included in boosters: {}", set_card.name);
                continue;
            }

            let rarity = match set_card.rarity.parse::<Rarity>() {
                Ok(rarity) => rarity,
                Err(e) => {
                    warn!("Skipping '{}': {}", set_card.name, e);
                    continue;
                }
            };

            let card = Card::new(&set_card.name, rarity, &set_card.type_line);
            if rarity == Rarity::Common && set_card.type_line.contains(SNOW_LAND_TYPE) {
                info!("Snow land, adding to basics: {}", card.name);
                pools.basics.push(card);
                continue;
            }

            debug!("{} - {}", card.name, rarity);
            pools.pool_mut(rarity).push(card);
        }

        pools
    }

    /// The pool that fills slots of the given rarity.
    pub fn pool(&self, rarity: Rarity) -> &[Card] {
        match rarity {
            Rarity::Basic => &self.basics,
            Rarity::Common => &self.commons,
            Rarity::Uncommon => &self.uncommons,
            Rarity::Rare => &self.rares,
            Rarity::Mythic => &self.mythics,
        }
    }

    fn pool_mut(&mut self, rarity: Rarity) -> &mut Vec<Card> {
        match rarity {
            Rarity::Basic => &mut self.basics,
            Rarity::Common => &mut self.commons,
            Rarity::Uncommon => &mut self.uncommons,
            Rarity::Rare => &mut self.rares,
            Rarity::Mythic => &mut self.mythics,
        }
    }

    pub fn counts(&self) -> RarityCounts {
        RarityCounts(Rarity::ALL.map(|rarity| self.pool(rarity).len()))
    }

    /// Logs the size of every pool, next to the known set numbers when given.
    /// Returns the rarities whose counts differ from the expected ones.
    pub fn log_counts(&self, expected: Option<&RarityCounts>) -> Vec<Rarity> {
        let counted = self.counts();
        let mut mismatched = Vec::new();

        info!("Number of cards with each rarity:");
        for (index, rarity) in Rarity::ALL.iter().enumerate() {
            let count = counted.0[index];
            match expected {
                Some(expected) if expected.0[index] != count => {
                    warn!(
                        "{}: {} counted, vs. {} actual",
                        rarity, count, expected.0[index]
                    );
                    mismatched.push(*rarity);
                }
                Some(expected) => {
                    info!("{}: {} counted, vs. {} actual", rarity, count, expected.0[index])
                }
                None => info!("{}: {}", rarity, count),
            }
        }

        mismatched
    }
}
