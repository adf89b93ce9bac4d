// crates/estate-suggest-core/src/loader/common_io.rs
use crate::error::{Result, SuggestError};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// On-disk encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// `*.json`
    Json,
    /// `*.json.gz`
    JsonGz,
    /// `*.bin` (bincode)
    Bin,
    /// `*.bin.gz`
    BinGz,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".json.gz") {
            Ok(Self::JsonGz)
        } else if name.ends_with(".json") {
            Ok(Self::Json)
        } else if name.ends_with(".bin.gz") {
            Ok(Self::BinGz)
        } else if name.ends_with(".bin") {
            Ok(Self::Bin)
        } else {
            Err(SuggestError::UnsupportedFormat(format!(
                "{} (expected .json, .json.gz, .bin or .bin.gz)",
                path.display()
            )))
        }
    }

    pub fn is_compressed(self) -> bool {
        matches!(self, Self::JsonGz | Self::BinGz)
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when `gzip` is set.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SuggestError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SuggestError::UnsupportedFormat(format!(
            "{}: gzip support requires the 'compact' feature",
            path.display()
        )))
    }
}

/// Reads the whole (possibly decompressed) file into memory.
pub fn read_all(path: &Path, gzip: bool) -> Result<Vec<u8>> {
    let mut stream = open_stream(path, gzip)?;
    let mut data = Vec::new();
    stream.read_to_end(&mut data)?;
    Ok(data)
}

/// Writes `bytes` to `path`, creating parent directories and compressing
/// when `gzip` is set.
pub fn write_all(path: &Path, bytes: &[u8], gzip: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);

    if gzip {
        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encoder.write_all(bytes)?;
            encoder.finish()?.flush()?;
            return Ok(());
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(SuggestError::UnsupportedFormat(format!(
                "{}: gzip support requires the 'compact' feature",
                path.display()
            )));
        }
    }

    let mut writer = writer;
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}
