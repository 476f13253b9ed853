use crate::application::normalizer::{self, RawTable};
use crate::domain::beneficiary::BeneficiaryDraft;
use crate::error::{PaymentError, Result};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Reads beneficiary rows from the first sheet of an Excel workbook.
///
/// This is the tolerant import channel: short or incomplete rows are skipped
/// individually by the normalizer rather than failing the file. Hand-typed
/// sheets are also tidied up on the way in: names and IFSC codes are
/// uppercased and interior whitespace is stripped from account numbers.
pub fn read_beneficiaries(path: &Path) -> Result<Vec<BeneficiaryDraft>> {
    let table = read_first_sheet(path)?;
    let mut drafts = normalizer::normalize(&table)?;
    for draft in &mut drafts {
        draft.name = draft.name.to_uppercase();
        draft.ifsc_code = draft.ifsc_code.to_uppercase();
        draft.account_number.retain(|c| !c.is_whitespace());
    }
    Ok(drafts)
}

fn read_first_sheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| PaymentError::ImportFormat(format!("unable to read spreadsheet: {e}")))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PaymentError::ImportFormat("spreadsheet has no sheets".to_string()))?
        .map_err(|e| PaymentError::ImportFormat(format!("unable to read first sheet: {e}")))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| PaymentError::ImportEmpty("no data found in spreadsheet".to_string()))?
        .iter()
        .map(cell_to_string)
        .collect();
    let rows: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

/// Renders a cell as text without numeric reformatting.
///
/// Account numbers are frequently stored as numeric cells; an integral float
/// must come out as its full digit string, never in exponent notation and
/// never with a fractional tail.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{f:.0}")
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}
