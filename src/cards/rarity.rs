use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Rarity {
    Basic,
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Basic,
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythic,
    ];
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rarity::Basic => write!(f, "basic"),
            Rarity::Common => write!(f, "common"),
            Rarity::Uncommon => write!(f, "uncommon"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Mythic => write!(f, "mythic"),
        }
    }
}

/// Parses the lower case rarity strings used in set files.
impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Rarity::Basic),
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "mythic" => Ok(Rarity::Mythic),
            other => Err(format!("Unrecognized rarity '{}'", other)),
        }
    }
}
