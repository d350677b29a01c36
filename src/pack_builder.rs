use std::ops::Range;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::card::Card;
use crate::cards::pack::{BoosterSet, Pack};
use crate::cards::rarity::Rarity;
use crate::classifier::RarityPools;
use crate::errors::BoosterError;
use crate::utilities::constants::{BASIC_SLOTS, RARE_SLOTS, UNCOMMON_SLOTS};

/// Slot layout of a pack: basic land first, then commons, uncommons and the
/// rare slot last. Commons fill whatever the other slots leave over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackTemplate {
    pack_size: usize,
}

impl PackTemplate {
    pub fn new(pack_size: usize) -> Result<Self, BoosterError> {
        let fixed_slots = BASIC_SLOTS + UNCOMMON_SLOTS + RARE_SLOTS;
        if pack_size < fixed_slots {
            return Err(BoosterError::Config(format!(
                "A pack needs at least {} cards, got {}",
                fixed_slots, pack_size
            )));
        }
        Ok(PackTemplate { pack_size })
    }

    pub fn pack_size(&self) -> usize {
        self.pack_size
    }

    pub fn basic_slots(&self) -> Range<usize> {
        0..BASIC_SLOTS
    }

    pub fn common_slots(&self) -> Range<usize> {
        BASIC_SLOTS..self.pack_size - UNCOMMON_SLOTS - RARE_SLOTS
    }

    pub fn uncommon_slots(&self) -> Range<usize> {
        self.pack_size - UNCOMMON_SLOTS - RARE_SLOTS..self.pack_size - RARE_SLOTS
    }

    pub fn rare_slots(&self) -> Range<usize> {
        self.pack_size - RARE_SLOTS..self.pack_size
    }
}

/// Draws packs from the rarity pools.
///
/// Every draw is independent and with replacement, so the same card can show
/// up in several slots, packs and players. Pools are never depleted.
pub struct PackBuilder<'a> {
    pools: &'a RarityPools,
    template: PackTemplate,
    mythic_odds: u32,
}

impl<'a> PackBuilder<'a> {
    /// `mythic_odds` of 8 gives a mythic in the rare slot one time in eight.
    pub fn new(
        pools: &'a RarityPools,
        template: PackTemplate,
        mythic_odds: u32,
    ) -> Result<Self, BoosterError> {
        if mythic_odds == 0 {
            return Err(BoosterError::Config(
                "Mythic odds must be at least 1".to_string(),
            ));
        }
        Ok(PackBuilder {
            pools,
            template,
            mythic_odds,
        })
    }

    /// Builds `pack_count` booster sets, each holding one pack per player.
    pub fn build_boosters<R: Rng + ?Sized>(
        &self,
        player_count: usize,
        pack_count: usize,
        rng: &mut R,
    ) -> Result<Vec<BoosterSet>, BoosterError> {
        let mut boosters = vec![
            BoosterSet {
                packs: Vec::with_capacity(player_count)
            };
            pack_count
        ];

        for _player in 0..player_count {
            for booster in boosters.iter_mut() {
                booster.packs.push(self.build_pack(rng)?);
            }
        }

        Ok(boosters)
    }

    pub fn build_pack<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Pack, BoosterError> {
        let mut cards = Vec::with_capacity(self.template.pack_size());

        for _ in self.template.basic_slots() {
            cards.push(self.draw(Rarity::Basic, rng)?);
        }
        for _ in self.template.common_slots() {
            cards.push(self.draw(Rarity::Common, rng)?);
        }
        for _ in self.template.uncommon_slots() {
            cards.push(self.draw(Rarity::Uncommon, rng)?);
        }
        for _ in self.template.rare_slots() {
            let rarity = self.rare_slot_rarity(rng);
            cards.push(self.draw(rarity, rng)?);
        }

        Ok(Pack { cards })
    }

    fn rare_slot_rarity<R: Rng + ?Sized>(&self, rng: &mut R) -> Rarity {
        if rng.gen_range(0..self.mythic_odds) < self.mythic_odds - 1 {
            Rarity::Rare
        } else {
            Rarity::Mythic
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rarity: Rarity, rng: &mut R) -> Result<Card, BoosterError> {
        self.pools
            .pool(rarity)
            .choose(rng)
            .cloned()
            .ok_or(BoosterError::InsufficientPool { rarity })
    }
}

pub fn log_packs(boosters: &[BoosterSet]) {
    for (pack_index, booster) in boosters.iter().enumerate() {
        for (player, pack) in booster.packs.iter().enumerate() {
            for (slot, card) in pack.cards.iter().enumerate() {
                debug!(
                    "Pack: {} Player: {} Card #: {}, {} - {}",
                    pack_index + 1,
                    player + 1,
                    slot + 1,
                    card.name,
                    card.rarity
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::{card, one_pack_pools, sample_set};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn standard_template() -> PackTemplate {
        PackTemplate::new(15).unwrap()
    }

    #[test]
    fn test_standard_template_layout() {
        let template = standard_template();
        assert_eq!(template.basic_slots(), 0..1);
        assert_eq!(template.common_slots(), 1..11);
        assert_eq!(template.uncommon_slots(), 11..14);
        assert_eq!(template.rare_slots(), 14..15);
    }

    #[test]
    fn test_template_too_small() {
        assert!(matches!(PackTemplate::new(4), Err(BoosterError::Config(_))));
        let smallest = PackTemplate::new(5).unwrap();
        assert!(smallest.common_slots().is_empty());
        assert_eq!(smallest.rare_slots(), 4..5);
    }

    #[test]
    fn test_slots_come_from_their_pools() {
        let pools = RarityPools::classify(&sample_set().cards);
        let template = standard_template();
        let builder = PackBuilder::new(&pools, template, 8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..200 {
            let pack = builder.build_pack(&mut rng).unwrap();
            assert_eq!(pack.cards.len(), 15);

            for slot in template.basic_slots() {
                assert!(pools.basics.contains(&pack.cards[slot]));
            }
            for slot in template.common_slots() {
                assert!(pools.commons.contains(&pack.cards[slot]));
            }
            for slot in template.uncommon_slots() {
                assert!(pools.uncommons.contains(&pack.cards[slot]));
            }
            for slot in template.rare_slots() {
                let card = &pack.cards[slot];
                assert!(pools.rares.contains(card) || pools.mythics.contains(card));
            }
        }
    }

    #[test]
    fn test_mythic_rate_is_one_in_eight() {
        let pools = RarityPools::classify(&sample_set().cards);
        let builder = PackBuilder::new(&pools, standard_template(), 8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2019);

        let trials = 10_000;
        let mythics = (0..trials)
            .map(|_| builder.rare_slot_rarity(&mut rng))
            .filter(|rarity| *rarity == Rarity::Mythic)
            .count();

        let rate = mythics as f64 / trials as f64;
        assert!((rate - 0.125).abs() < 0.02, "mythic rate was {}", rate);
    }

    #[test]
    fn test_build_boosters_shape() {
        let pools = one_pack_pools();
        let builder = PackBuilder::new(&pools, standard_template(), 8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let boosters = builder.build_boosters(8, 3, &mut rng).unwrap();

        assert_eq!(boosters.len(), 3);
        for booster in &boosters {
            assert_eq!(booster.player_count(), 8);
            assert!(booster.packs.iter().all(|pack| pack.cards.len() == 15));
        }
        // A single basic in the set, so every player gets the same one
        assert!(boosters
            .iter()
            .flat_map(|booster| booster.packs.iter())
            .all(|pack| pack.cards[0].name == "Forest"));
    }

    #[test]
    fn test_same_seed_same_packs() {
        let pools = RarityPools::classify(&sample_set().cards);
        let builder = PackBuilder::new(&pools, standard_template(), 8).unwrap();

        let first = builder
            .build_boosters(4, 3, &mut ChaCha8Rng::seed_from_u64(99))
            .unwrap();
        let second = builder
            .build_boosters(4, 3, &mut ChaCha8Rng::seed_from_u64(99))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let pools = RarityPools {
            basics: vec![card("Forest", Rarity::Basic)],
            commons: vec![card("Mother Bear", Rarity::Common)],
            uncommons: vec![card("Goblin Matron", Rarity::Uncommon)],
            rares: vec![card("Force of Negation", Rarity::Rare)],
            mythics: Vec::new(),
        };
        // Odds of one always lands on the mythic pool
        let builder = PackBuilder::new(&pools, standard_template(), 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let result = builder.build_pack(&mut rng);

        assert!(matches!(
            result,
            Err(BoosterError::InsufficientPool {
                rarity: Rarity::Mythic
            })
        ));
    }

    #[test]
    fn test_zero_mythic_odds_is_rejected() {
        let pools = one_pack_pools();
        assert!(matches!(
            PackBuilder::new(&pools, standard_template(), 0),
            Err(BoosterError::Config(_))
        ));
    }

    #[test]
    fn test_empty_commons_fail_before_any_pack_is_returned() {
        let pools = RarityPools {
            basics: vec![card("Forest", Rarity::Basic)],
            ..RarityPools::default()
        };
        let builder = PackBuilder::new(&pools, standard_template(), 8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        assert!(matches!(
            builder.build_boosters(2, 3, &mut rng),
            Err(BoosterError::InsufficientPool {
                rarity: Rarity::Common
            })
        ));
    }
}
