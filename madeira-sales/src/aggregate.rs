//! Pure aggregations over the sales table.
//!
//! Nothing here is cached: every call recomputes from the records.

use crate::record::SaleType;
use crate::table::SalesTable;

/// Summed volume for one presentation of one species.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationVolume {
    pub presentation: String,
    /// `None` when the species has no records in this presentation.
    pub volume: Option<f64>,
}

impl PresentationVolume {
    pub fn value_or_zero(&self) -> f64 {
        self.volume.unwrap_or(0.0)
    }
}

/// Number of records of each sale type for a (presentation, species) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleTypeCounts {
    pub service: u64,
    pub retail: u64,
}

impl SaleTypeCounts {
    pub fn get(&self, sale_type: SaleType) -> u64 {
        match sale_type {
            SaleType::Service => self.service,
            SaleType::Retail => self.retail,
        }
    }

    /// Counts in [`SaleType::ALL`] order.
    pub fn ordered(&self) -> [(SaleType, u64); 2] {
        SaleType::ALL.map(|t| (t, self.get(t)))
    }
}

impl SalesTable {
    /// Sum volume per presentation for `species`, laid out over every known
    /// presentation in first-appearance order so the axis is the same for all
    /// species.
    ///
    /// Presentations the species never appears in get `None`. Missing volumes
    /// inside a present group are skipped, so a group of only missing volumes
    /// sums to `0.0`.
    pub fn volume_by_presentation(&self, species: &str) -> Vec<PresentationVolume> {
        let mut sums: Vec<Option<f64>> = vec![None; self.presentations().len()];

        for record in self.records().iter().filter(|r| r.species == species) {
            let Some(idx) = self
                .presentations()
                .iter()
                .position(|p| *p == record.presentation)
            else {
                continue;
            };
            let slot = sums[idx].get_or_insert(0.0);
            if let Some(volume) = record.volume {
                *slot += volume;
            }
        }

        self.presentations()
            .iter()
            .zip(sums)
            .map(|(presentation, volume)| PresentationVolume {
                presentation: presentation.clone(),
                volume,
            })
            .collect()
    }

    /// Count sale types among the records matching both `presentation` and
    /// `species`. Both types are always present, zero when unseen.
    pub fn sale_type_counts(&self, presentation: &str, species: &str) -> SaleTypeCounts {
        self.records()
            .iter()
            .filter(|r| r.presentation == presentation && r.species == species)
            .fold(SaleTypeCounts::default(), |mut counts, r| {
                match r.sale_type {
                    SaleType::Service => counts.service += 1,
                    SaleType::Retail => counts.retail += 1,
                }
                counts
            })
    }
}
