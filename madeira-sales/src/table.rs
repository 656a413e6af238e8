//! Loading the sales CSV into an immutable in-memory table.
//!
//! # CSV Format
//!
//! Headers are required. Only four columns are read, in any order; every
//! other column is ignored. Each row must have exactly as many fields as the
//! header, and presentation and species cells must not be blank:
//!
//! ```text
//! APRESENTACAO_NOME,MADEIRA_NOME,VOLUME,COD_MODELO
//! Tora,Ipê,10.5,1
//! Tora,Ipê,5,2
//! ```

use crate::error::SalesError;
use crate::record::{SaleType, SalesRecord};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

pub const PRESENTATION_COLUMN: &str = "APRESENTACAO_NOME";
pub const SPECIES_COLUMN: &str = "MADEIRA_NOME";
pub const VOLUME_COLUMN: &str = "VOLUME";
pub const SALE_TYPE_COLUMN: &str = "COD_MODELO";

/// Read-only sales dataset, loaded once at startup.
///
/// Species and presentation lists are derived at construction and keep the
/// order in which each label first appears in the source rows.
#[derive(Debug, Clone)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
    species: Vec<String>,
    presentations: Vec<String>,
}

/// Column positions resolved from the header row.
struct Columns {
    presentation: usize,
    species: usize,
    volume: usize,
    sale_type: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, SalesError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
                .ok_or(SalesError::MissingColumn(name))
        };
        Ok(Self {
            presentation: find(PRESENTATION_COLUMN)?,
            species: find(SPECIES_COLUMN)?,
            volume: find(VOLUME_COLUMN)?,
            sale_type: find(SALE_TYPE_COLUMN)?,
        })
    }
}

fn parse_volume(row: usize, raw: &str) -> Result<Option<f64>, SalesError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| SalesError::InvalidVolume {
            row,
            value: trimmed.to_string(),
        })
}

/// Push `label` onto `seen` unless it is already there.
fn remember(seen: &mut Vec<String>, label: &str) {
    if !seen.iter().any(|s| s == label) {
        seen.push(label.to_string());
    }
}

impl SalesTable {
    /// Build a table from records already in memory.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let mut species = Vec::new();
        let mut presentations = Vec::new();
        for record in &records {
            remember(&mut species, &record.species);
            remember(&mut presentations, &record.presentation);
        }
        Self {
            records,
            species,
            presentations,
        }
    }

    /// Load the table from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SalesError> {
        let file = std::fs::File::open(path.as_ref())?;
        let table = Self::from_reader(file)?;
        log::info!(
            "loaded {} sales records from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Load the table from CSV text.
    pub fn from_csv_str(csv_data: &str) -> Result<Self, SalesError> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load the table from any CSV byte stream.
    ///
    /// The header row is validated before any data row is read, so a file
    /// missing a required column fails without partial work.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SalesError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?;
        let columns = Columns::resolve(headers)?;
        let expected = headers.len();

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = i + 1;
            let r = result?;
            if r.len() != expected {
                return Err(SalesError::RaggedRow {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            let cell = |idx: usize| r.get(idx).unwrap_or("").trim();
            let label = |idx: usize, column: &'static str| {
                let value = cell(idx);
                if value.is_empty() {
                    Err(SalesError::EmptyLabel { row, column })
                } else {
                    Ok(value.to_string())
                }
            };

            let raw_code = cell(columns.sale_type);
            let sale_type =
                SaleType::from_code(raw_code).ok_or_else(|| SalesError::UnknownSaleType {
                    row,
                    value: raw_code.to_string(),
                })?;

            records.push(SalesRecord {
                presentation: label(columns.presentation, PRESENTATION_COLUMN)?,
                species: label(columns.species, SPECIES_COLUMN)?,
                volume: parse_volume(row, cell(columns.volume))?,
                sale_type,
            });
        }

        if records.is_empty() {
            return Err(SalesError::Empty);
        }

        let table = Self::from_records(records);
        log::debug!(
            "sales table: {} species, {} presentations",
            table.species.len(),
            table.presentations.len()
        );
        Ok(table)
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique species in first-appearance order. A species' position in
    /// this list is its dropdown value.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Unique presentations in first-appearance order.
    pub fn presentations(&self) -> &[String] {
        &self.presentations
    }

    pub fn species_name(&self, index: usize) -> Option<&str> {
        self.species.get(index).map(String::as_str)
    }
}
