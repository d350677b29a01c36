use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;

use crate::cards::pack::ResolvedBooster;
use crate::errors::BoosterError;
use crate::utilities::constants::{PACK_FILE_EXTENSION, PACK_FILE_INFIX, PACK_FILE_PREFIX};
use crate::utilities::file_management::{load_from_json_file, save_to_file};
use crate::utilities::string_manipulators::date_time_as_string;

pub struct PackWriter {
    output_dir: PathBuf,
}

impl PackWriter {
    pub fn new(output_dir: &Path) -> Self {
        PackWriter {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// `pack{N}_img_urls_{YYYY-MM-DD_HH-MM}.txt`, N starting at 1.
    pub fn pack_file_name(pack_number: usize, timestamp: DateTime<Local>) -> String {
        format!(
            "{}{}{}{}.{}",
            PACK_FILE_PREFIX,
            pack_number,
            PACK_FILE_INFIX,
            date_time_as_string(Some(timestamp), None),
            PACK_FILE_EXTENSION
        )
    }

    /// Writes one file per booster and returns their paths in pack order.
    pub fn write_boosters(
        &self,
        boosters: &[ResolvedBooster],
        timestamp: DateTime<Local>,
    ) -> Result<Vec<PathBuf>, BoosterError> {
        boosters
            .iter()
            .enumerate()
            .map(|(index, booster)| -> Result<PathBuf, BoosterError> {
                let path = self
                    .output_dir
                    .join(Self::pack_file_name(index + 1, timestamp));
                save_to_file(&path, booster).map_err(|source| BoosterError::Persistence {
                    path: path.clone(),
                    source,
                })?;
                info!("Saved pack {} image urls to {}", index + 1, path.display());
                Ok(path)
            })
            .collect()
    }
}

pub fn read_resolved_booster(path: &Path) -> Result<ResolvedBooster, BoosterError> {
    load_from_json_file(path).map_err(|e| BoosterError::DataFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
