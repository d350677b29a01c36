pub mod card;
pub mod pack;
pub mod rarity;
