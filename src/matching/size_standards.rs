use std::collections::BTreeMap;
use std::io::Read;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Measurement basis for a small-business size determination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMeasure {
    Revenue,
    Employees,
}

/// Threshold defining "small" for one industry classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStandard {
    pub measure: SizeMeasure,
    pub threshold: u64,
}

/// Fallback when a classification code has no table entry at any prefix length.
pub const DEFAULT_STANDARD: SizeStandard = SizeStandard {
    measure: SizeMeasure::Revenue,
    threshold: 8_500_000,
};

const TABLE_CSV: &str = include_str!("../../data/size_standards.csv");

/// Industry-code keyed lookup of small-business size thresholds.
///
/// Seeded once from the embedded dataset; the table never changes after
/// construction and `lookup` always resolves to a standard.
#[derive(Debug)]
pub struct SizeStandardTable {
    by_code: BTreeMap<String, SizeStandard>,
}

#[derive(Debug, Deserialize)]
struct SizeStandardRow {
    code: String,
    measure: String,
    threshold: u64,
}

impl SizeStandardTable {
    /// Process-wide table parsed from the embedded dataset on first use.
    pub fn shared() -> &'static SizeStandardTable {
        static TABLE: OnceLock<SizeStandardTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            SizeStandardTable::from_csv(TABLE_CSV.as_bytes())
                .expect("embedded size standard dataset parses")
        })
    }

    pub(crate) fn from_csv<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut by_code = BTreeMap::new();

        for row in csv_reader.deserialize::<SizeStandardRow>() {
            let row = row?;
            let measure = match row.measure.as_str() {
                "employees" => SizeMeasure::Employees,
                _ => SizeMeasure::Revenue,
            };
            by_code.insert(
                row.code,
                SizeStandard {
                    measure,
                    threshold: row.threshold,
                },
            );
        }

        Ok(Self { by_code })
    }

    /// Resolve a standard: exact code, then 3- and 2-digit prefixes, then the default.
    pub fn lookup(&self, code: &str) -> SizeStandard {
        let code = code.trim();
        if let Some(standard) = self.by_code.get(code) {
            return *standard;
        }

        for prefix_len in [3, 2] {
            if let Some(standard) = code.get(..prefix_len).and_then(|prefix| self.by_code.get(prefix)) {
                return *standard;
            }
        }

        DEFAULT_STANDARD
    }
}
