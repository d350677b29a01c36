use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

/// Serializes `content` as JSON and moves it into `path` in one rename, so a
/// reader never sees a half-written file.
pub fn save_to_file<T: Serialize + ?Sized>(path: &Path, content: &T) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer(&mut writer, content)?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_from_json_file<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
