use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{AssetRecord, PortfolioTable, COLUMNS};

/// Where a loaded table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    File,
    /// No file at the configured path; the table starts empty.
    Missing,
}

/// CSV-backed persistence for a single portfolio file.
#[derive(Debug, Clone)]
pub struct PortfolioStore {
    path: PathBuf,
}

impl PortfolioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PortfolioTable, AppError> {
        self.load_with_source().map(|(table, _)| table)
    }

    /// Reads the portfolio file. A missing or zero-byte file yields an empty table;
    /// a file whose header is not exactly [`COLUMNS`] is rejected.
    pub fn load_with_source(&self) -> Result<(PortfolioTable, LoadSource), AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No portfolio file at {:?}, starting empty", self.path);
                return Ok((PortfolioTable::new(), LoadSource::Missing));
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok((PortfolioTable::new(), LoadSource::File));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        if !headers.iter().eq(COLUMNS.iter().copied()) {
            return Err(AppError::MalformedFile(format!(
                "{:?}: expected columns [{}], found [{}]",
                self.path,
                COLUMNS.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        }

        let records = reader
            .deserialize::<AssetRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        info!("Loaded {} assets from {:?}", records.len(), self.path);
        Ok((PortfolioTable::from_records(records), LoadSource::File))
    }

    /// Overwrites the portfolio file with `table`. The content goes to a sibling
    /// temp file first and is then renamed into place.
    pub fn save(&self, table: &PortfolioTable) -> Result<(), AppError> {
        let bytes = encode(table)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.path)?;

        info!("Saved {} assets to {:?}", table.len(), self.path);
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn encode(table: &PortfolioTable) -> Result<Vec<u8>, AppError> {
    // Header is written by hand so an empty table still gets one.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for record in table.records() {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    debug!("Encoded {} bytes for {} assets", bytes.len(), table.len());
    Ok(bytes)
}
