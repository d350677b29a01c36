use std::path::Path;

use serde_json::{json, Value};

use crate::cards::card::{Card, SetCard};
use crate::cards::rarity::Rarity;
use crate::classifier::RarityPools;
use crate::set_loader::{parse_set, CardSet};

pub fn sample_set() -> CardSet {
    let document: Value = serde_json::from_str(include_str!("sample_set.json")).unwrap();
    parse_set(document, Path::new("sample_set.json")).unwrap()
}

pub fn set_card(name: &str, rarity: &str, type_line: &str, is_promo: bool) -> SetCard {
    SetCard {
        name: name.to_string(),
        rarity: rarity.to_string(),
        type_line: type_line.to_string(),
        is_promo,
        is_buy_a_box: false,
    }
}

pub fn card(name: &str, rarity: Rarity) -> Card {
    Card::new(name, rarity, "Creature")
}

/// A set with exactly one pack worth of cards: 1 basic, 10 commons,
/// 3 uncommons, 2 rares and 1 mythic.
pub fn one_pack_set_document() -> Value {
    let mut cards = vec![json!({
        "name": "Forest",
        "rarity": "basic",
        "type": "Basic Land — Forest"
    })];
    for i in 1..=10 {
        cards.push(json!({
            "name": format!("Common {}", i),
            "rarity": "common",
            "type": "Creature"
        }));
    }
    for i in 1..=3 {
        cards.push(json!({
            "name": format!("Uncommon {}", i),
            "rarity": "uncommon",
            "type": "Sorcery"
        }));
    }
    cards.push(json!({ "name": "Rare 1", "rarity": "rare", "type": "Enchantment" }));
    cards.push(json!({ "name": "Rare 2", "rarity": "rare", "type": "Artifact" }));
    cards.push(json!({ "name": "Mythic 1", "rarity": "mythic", "type": "Legendary Creature" }));

    json!({ "name": "Test Set", "cards": cards })
}

pub fn one_pack_pools() -> RarityPools {
    let set = parse_set(one_pack_set_document(), Path::new("test_set.json")).unwrap();
    RarityPools::classify(&set.cards)
}

pub fn image_url(name: &str) -> String {
    format!(
        "https://cards.scryfall.io/png/front/{}.png",
        name.to_lowercase().replace(' ', "-")
    )
}
