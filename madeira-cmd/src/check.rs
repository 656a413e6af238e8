//! Dataset validation without starting the server.

use anyhow::Context;
use log::info;
use madeira_sales::SalesTable;
use std::path::Path;

/// Load the CSV at `data` and log a summary. Fails on the same inputs the
/// server would refuse at startup.
pub fn run_check(data: &Path) -> anyhow::Result<()> {
    let table = SalesTable::from_path(data)
        .with_context(|| format!("failed to load sales data from {}", data.display()))?;

    info!(
        "{}: {} records, {} species, {} presentations",
        data.display(),
        table.len(),
        table.species().len(),
        table.presentations().len()
    );
    for (idx, species) in table.species().iter().enumerate() {
        let total: f64 = table
            .volume_by_presentation(species)
            .iter()
            .map(|v| v.value_or_zero())
            .sum();
        info!("  [{}] {} -- total volume {:.2}", idx, species, total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_bundled_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures/acordo_nbr.csv");
        assert!(run_check(&path).is_ok());
    }

    #[test]
    fn check_reports_missing_file() {
        let err = run_check(Path::new("nowhere/acordo_nbr.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to load sales data"));
    }
}
