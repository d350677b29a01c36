use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;

use crate::cards::card::SetCard;
use crate::errors::BoosterError;
use crate::utilities::file_management::load_from_json_file;

/// The parts of a set file needed to build boosters.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSet {
    pub cards: Vec<SetCard>,
}

pub fn load_set(path: &Path) -> Result<CardSet, BoosterError> {
    info!("Loading set from {}", path.display());
    let document: Value = load_from_json_file(path).map_err(|e| data_format(path, e))?;
    let set = parse_set(document, path)?;
    info!("Loaded {} cards from {}", set.cards.len(), path.display());
    Ok(set)
}

/// Reads the `cards` list from the top level, or from inside the `data`
/// object of an MTGJSON v5 file.
pub fn parse_set(mut document: Value, path: &Path) -> Result<CardSet, BoosterError> {
    let cards = if document.get("cards").is_some() {
        document["cards"].take()
    } else if document.pointer("/data/cards").is_some() {
        debug!("Found cards inside the data envelope of {}", path.display());
        document["data"]["cards"].take()
    } else {
        return Err(data_format(path, "no 'cards' key found"));
    };

    if !cards.is_array() {
        return Err(data_format(path, "'cards' is not a list"));
    }

    let cards: Vec<SetCard> = serde_json::from_value(cards).map_err(|e| data_format(path, e))?;
    Ok(CardSet { cards })
}

fn data_format(path: &Path, reason: impl ToString) -> BoosterError {
    BoosterError::DataFormat {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_sample_set() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("MH1.json");
        fs::write(&path, include_str!("test/sample_set.json")).unwrap();

        let set = load_set(&path).unwrap();

        assert_eq!(set.cards.len(), 15);
        assert_eq!(set.cards[0].name, "Plains");
        assert_eq!(set.cards[1].type_line, "Basic Snow Land — Plains");
        let flusterstorm = set.cards.iter().find(|c| c.name == "Flusterstorm").unwrap();
        assert!(flusterstorm.is_buy_a_box);
        assert!(!flusterstorm.is_promo);
    }

    #[test]
    fn test_cards_inside_data_envelope() {
        let document = json!({
            "meta": { "version": "5.2.0" },
            "data": {
                "cards": [{ "name": "Ephemerate", "rarity": "common", "type": "Instant" }]
            }
        });

        let set = parse_set(document, Path::new("MH1.json")).unwrap();
        assert_eq!(set.cards.len(), 1);
        assert_eq!(set.cards[0].rarity, "common");
    }

    #[test]
    fn test_missing_cards_key() {
        let result = parse_set(json!({ "name": "Modern Horizons" }), Path::new("MH1.json"));
        assert!(matches!(result, Err(BoosterError::DataFormat { .. })));
    }

    #[test]
    fn test_cards_not_a_list() {
        let result = parse_set(json!({ "cards": { "name": "Ephemerate" } }), Path::new("x"));
        assert!(matches!(result, Err(BoosterError::DataFormat { .. })));
    }

    #[test]
    fn test_card_missing_rarity() {
        let result = parse_set(
            json!({ "cards": [{ "name": "Ephemerate", "type": "Instant" }] }),
            Path::new("x"),
        );
        assert!(matches!(result, Err(BoosterError::DataFormat { .. })));
    }

    #[test]
    fn test_unreadable_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_set(&path),
            Err(BoosterError::DataFormat { .. })
        ));
        assert!(matches!(
            load_set(&temp_dir.path().join("missing.json")),
            Err(BoosterError::DataFormat { .. })
        ));
    }
}
