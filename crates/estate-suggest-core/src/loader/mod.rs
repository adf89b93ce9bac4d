// crates/estate-suggest-core/src/loader/mod.rs

//! # Data Loader
//!
//! The suggestion functions never touch the filesystem. This module is the
//! caller-side shell: it loads geography reference data and click history
//! before a call and persists the returned history afterwards.
//!
//! Geography files are dispatched by extension (see [`DataFormat`]):
//! source JSON (optionally gzip-compressed) or a bincode snapshot written by
//! [`Geography::save_cache`].

mod common_io;

pub use common_io::DataFormat;

#[cfg(feature = "json")]
use crate::clicks::ClickHistory;
use crate::error::{Result, SuggestError};
use crate::geo::Geography;
use std::path::{Path, PathBuf};

impl Geography {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "geography.json"
    }

    /// Loads the small sample taxonomy bundled with the crate.
    pub fn load_default() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// Loads a geography from `.json`, `.json.gz`, `.bin` or `.bin.gz`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path)?;
        let data = common_io::read_all(path, format.is_compressed())?;

        let geo = match format {
            DataFormat::Json | DataFormat::JsonGz => Self::from_json_bytes(&data)?,
            DataFormat::Bin | DataFormat::BinGz => bincode::deserialize(&data)?,
        };

        let stats = geo.stats();
        log::debug!(
            "loaded {} provinces, {} cities, {} areas from {}",
            stats.provinces,
            stats.cities,
            stats.areas,
            path.display()
        );
        Ok(geo)
    }

    /// Writes a bincode snapshot; `.bin.gz` paths are gzip-compressed.
    pub fn save_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path)?;
        if !matches!(format, DataFormat::Bin | DataFormat::BinGz) {
            return Err(SuggestError::UnsupportedFormat(format!(
                "{}: snapshots must end in .bin or .bin.gz",
                path.display()
            )));
        }
        let bytes = bincode::serialize(self)?;
        common_io::write_all(path, &bytes, format.is_compressed())?;
        log::info!("wrote geography snapshot to {}", path.display());
        Ok(())
    }

    #[cfg(feature = "json")]
    fn from_json_bytes(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    #[cfg(not(feature = "json"))]
    fn from_json_bytes(_data: &[u8]) -> Result<Self> {
        Err(SuggestError::UnsupportedFormat(
            "JSON geography requires the 'json' feature".to_string(),
        ))
    }
}

#[cfg(feature = "json")]
impl ClickHistory {
    /// Loads a history saved by [`ClickHistory::save_json`].
    ///
    /// A missing file is a fresh, empty history.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no click history at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let data = common_io::read_all(path, false)?;
        let history: Self = serde_json::from_slice(&data)?;
        log::debug!(
            "loaded {} click records from {}",
            history.len(),
            path.display()
        );
        Ok(history)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_vec_pretty(self)?;
        common_io::write_all(path, &data, false)?;
        log::debug!("saved {} click records to {}", self.len(), path.display());
        Ok(())
    }
}
