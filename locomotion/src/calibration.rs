use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application folder used by [`default_data_path`]
pub const DEFAULT_APPLICATION_FOLDER: &str = "LBF_VR";
/// File name used by [`default_data_path`]
pub const DEFAULT_CALIBRATION_FILE: &str = "calibrationData.pgd";

/// Per-user tuning for the active locomotion technique.
///
/// Missing fields fall back to their defaults when loading, so records written by older builds
/// still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationRecord {
    /// Has the player been through calibration at all?
    pub calibrated: bool,
    /// Multiplier applied to forward movement
    pub speed_multiplier: f32,
    /// Multiplier applied to backward movement
    pub backward_speed_multiplier: f32,
    /// Height of the player's eyes when standing, in metres
    pub player_height: f32,
    /// Offset from the hip tracker to the player's actual hip
    pub hip_offset: Vec3,
}

impl Default for CalibrationRecord {
    fn default() -> Self {
        Self {
            calibrated: false,
            speed_multiplier: 1.0,
            backward_speed_multiplier: 1.0,
            player_height: 1.7,
            hip_offset: Vec3::ZERO,
        }
    }
}

/// Something went wrong reading or writing a calibration record
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[allow(missing_docs)]
    #[error(transparent)]
    IO(#[from] io::Error),
    /// The record could not be (de)serialized
    #[error("Unable to serialize calibration record")]
    Serialization(#[from] serde_json::Error),
}

/// Durable storage for a [`CalibrationRecord`].
pub trait CalibrationStore {
    /// Load the stored record. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<CalibrationRecord>, PersistenceError>;

    /// Replace the stored record with `record`
    fn save(&self, record: &CalibrationRecord) -> Result<(), PersistenceError>;
}

/// How a record is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationFormat {
    /// Compact JSON
    #[default]
    Json,
    /// Indented JSON, for records people are expected to look at
    PrettyJson,
}

/// Stores a calibration record in a single file.
#[derive(Debug, Clone)]
pub struct FileCalibrationStore {
    path: PathBuf,
    format: SerializationFormat,
}

impl FileCalibrationStore {
    /// Store records at `path`, in `format`
    pub fn new(path: impl Into<PathBuf>, format: SerializationFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileCalibrationStore {
    fn default() -> Self {
        Self::new(
            default_data_path(DEFAULT_APPLICATION_FOLDER, DEFAULT_CALIBRATION_FILE),
            SerializationFormat::Json,
        )
    }
}

impl CalibrationStore for FileCalibrationStore {
    fn load(&self) -> Result<Option<CalibrationRecord>, PersistenceError> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Both formats are JSON, so either reads either.
        Ok(Some(serde_json::from_slice(&contents)?))
    }

    fn save(&self, record: &CalibrationRecord) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = match self.format {
            SerializationFormat::Json => serde_json::to_vec(record)?,
            SerializationFormat::PrettyJson => serde_json::to_vec_pretty(record)?,
        };
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Load the record from `store`, or a fresh default if there isn't one or it can't be read.
pub fn load_or_default(store: &dyn CalibrationStore) -> CalibrationRecord {
    match store.load() {
        Ok(Some(record)) => {
            log::debug!("[LOCOMOTION_CALIBRATION] Loaded calibration record");
            record
        }
        Ok(None) => {
            log::info!("[LOCOMOTION_CALIBRATION] No calibration record found, using defaults");
            CalibrationRecord::default()
        }
        Err(e) => {
            log::warn!("[LOCOMOTION_CALIBRATION] Unable to load calibration record, using defaults: {e}");
            CalibrationRecord::default()
        }
    }
}

/// The per-user data path for `file_name`, under an `application` folder.
///
/// Uses `XDG_DATA_HOME`, then `~/.local/share` (or `%APPDATA%` on Windows), and falls back to the
/// temp dir if none of those are available.
pub fn default_data_path(application: &str, file_name: &str) -> PathBuf {
    data_dir().join(application).join(file_name)
}

fn data_dir() -> PathBuf {
    let non_empty = |key: &str| std::env::var_os(key).filter(|v| !v.is_empty());

    if cfg!(target_os = "windows") {
        if let Some(app_data) = non_empty("APPDATA") {
            return PathBuf::from(app_data);
        }
    } else {
        if let Some(xdg) = non_empty("XDG_DATA_HOME") {
            return PathBuf::from(xdg);
        }
        if let Some(home) = non_empty("HOME") {
            return PathBuf::from(home).join(".local").join("share");
        }
    }

    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        for (name, format) in [
            ("compact.json", SerializationFormat::Json),
            ("pretty.json", SerializationFormat::PrettyJson),
        ] {
            let store = FileCalibrationStore::new(dir.path().join(name), format);
            let record = CalibrationRecord {
                calibrated: true,
                speed_multiplier: 1.4,
                backward_speed_multiplier: 0.6,
                player_height: 1.82,
                hip_offset: Vec3::new(0.0, -0.1, 0.05),
            };

            store.save(&record).unwrap();
            assert_eq!(store.load().unwrap(), Some(record));
        }
    }

    #[test]
    fn test_load_nothing_saved() {
        let dir = TempDir::new().unwrap();
        let store =
            FileCalibrationStore::new(dir.path().join("never-saved.json"), SerializationFormat::Json);
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(load_or_default(&store), CalibrationRecord::default());
    }

    #[test]
    fn test_load_corrupt_record_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.json");
        fs::write(&path, b"{ not json").unwrap();

        let store = FileCalibrationStore::new(&path, SerializationFormat::Json);
        assert!(matches!(store.load(), Err(PersistenceError::Serialization(_))));
        assert_eq!(load_or_default(&store), CalibrationRecord::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let record: CalibrationRecord =
            serde_json::from_str(r#"{"calibrated": true, "player_height": 1.6}"#).unwrap();
        assert!(record.calibrated);
        assert_eq!(record.player_height, 1.6);
        assert_eq!(record.speed_multiplier, 1.0);
        assert_eq!(record.hip_offset, Vec3::ZERO);
    }

    #[test]
    fn test_default_data_path() {
        let path = default_data_path(DEFAULT_APPLICATION_FOLDER, DEFAULT_CALIBRATION_FILE);
        assert!(path.ends_with("LBF_VR/calibrationData.pgd"));
    }
}
