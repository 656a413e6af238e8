//! Wood sales records for the Madeira dashboard.
//!
//! This crate provides:
//! - `record`: `SalesRecord` and the `SaleType` code
//! - `table`: `SalesTable`, the read-only dataset loaded from CSV
//! - `aggregate`: volume-by-presentation sums and sale-type counts

pub mod aggregate;
pub mod error;
pub mod record;
pub mod table;

pub use aggregate::{PresentationVolume, SaleTypeCounts};
pub use error::SalesError;
pub use record::{SaleType, SalesRecord};
pub use table::SalesTable;
