pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";
pub const SCRYFALL_SEARCH_PATH: &str = "/cards/search";

pub const DEFAULT_SET_FILE: &str = "MH1.json";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const PACK_FILE_PREFIX: &str = "pack";
pub const PACK_FILE_INFIX: &str = "_img_urls_";
pub const PACK_FILE_EXTENSION: &str = "txt";
pub const PACK_FILE_DATE_FORMAT: &str = "%Y-%m-%d_%H-%M";

pub const SNOW_LAND_TYPE: &str = "Snow Land";

/// Slots that are not commons: one basic, three uncommons and the rare slot.
pub const BASIC_SLOTS: usize = 1;
pub const UNCOMMON_SLOTS: usize = 3;
pub const RARE_SLOTS: usize = 1;
