pub mod csv;
pub mod spreadsheet;

use crate::domain::beneficiary::BeneficiaryDraft;
use crate::error::{PaymentError, Result};
use std::fs::File;
use std::path::Path;

/// Reads beneficiary records from an import file, dispatching on extension.
///
/// `.csv` goes through the strict CSV channel, `.xlsx`/`.xls` through the
/// spreadsheet channel; anything else is an import format error.
pub fn read_beneficiaries(path: &Path) -> Result<Vec<BeneficiaryDraft>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => {
            let file = File::open(path)?;
            csv::BeneficiaryReader::new(file).read_beneficiaries()
        }
        "xlsx" | "xls" => spreadsheet::read_beneficiaries(path),
        "" => Err(PaymentError::ImportFormat(format!(
            "{} has no file extension; expected .csv, .xlsx or .xls",
            path.display()
        ))),
        other => Err(PaymentError::ImportFormat(format!(
            "unsupported file extension .{other}; expected .csv, .xlsx or .xls"
        ))),
    }
}
