//! A single row of the sales dataset and its sale-type code.

use std::fmt;

/// How a sale was made, from the `COD_MODELO` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SaleType {
    Service,
    Retail,
}

impl SaleType {
    /// Fixed display ordering used by every chart.
    pub const ALL: [SaleType; 2] = [SaleType::Service, SaleType::Retail];

    pub fn label(&self) -> &'static str {
        match self {
            SaleType::Service => "Prestação de Serviços",
            SaleType::Retail => "Varejo",
        }
    }

    /// Parse a raw `COD_MODELO` cell.
    ///
    /// Accepts the numeric codes (`1` service, `2` retail), their initials and
    /// the spelled-out Portuguese or English names, ignoring case and accents.
    pub fn from_code(code: &str) -> Option<SaleType> {
        let normalized: String = code
            .trim()
            .chars()
            .map(fold_accent)
            .collect::<String>()
            .to_uppercase()
            .replace('_', " ");
        match normalized.as_str() {
            "1" | "S" | "SERVICO" | "SERVICOS" | "PRESTACAO DE SERVICOS" | "SERVICE" => {
                Some(SaleType::Service)
            }
            "2" | "V" | "VAREJO" | "RETAIL" => Some(SaleType::Retail),
            _ => None,
        }
    }
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' => 'A',
        'é' | 'ê' => 'e',
        'É' | 'Ê' => 'E',
        'í' => 'i',
        'Í' => 'I',
        'ó' | 'ô' | 'õ' => 'o',
        'Ó' | 'Ô' | 'Õ' => 'O',
        'ú' => 'u',
        'Ú' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        other => other,
    }
}

/// One sale: which wood, in which presentation, how much, and how it was sold.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub presentation: String,
    pub species: String,
    /// `None` when the VOLUME cell was empty or NaN. Missing volumes are
    /// skipped when summing.
    pub volume: Option<f64>,
    pub sale_type: SaleType,
}

impl SalesRecord {
    pub fn new(
        presentation: impl Into<String>,
        species: impl Into<String>,
        volume: f64,
        sale_type: SaleType,
    ) -> Self {
        Self {
            presentation: presentation.into(),
            species: species.into(),
            volume: Some(volume),
            sale_type,
        }
    }
}
