use crate::application::normalizer::{self, RawTable};
use crate::domain::beneficiary::BeneficiaryDraft;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads beneficiary rows from a CSV source.
///
/// This is the strict import channel: every data row must match the header's
/// column count exactly or the whole file is rejected. Fields are trimmed;
/// fully blank rows are skipped.
pub struct BeneficiaryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> BeneficiaryReader<R> {
    /// Creates a new `BeneficiaryReader` from any `Read` source (e.g. File).
    pub fn new(source: R) -> Self {
        // flexible so that the count mismatch is ours to detect and report
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads the header and all data rows into a raw table.
    pub fn read(mut self) -> Result<RawTable> {
        let headers: Vec<String> = self
            .reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (index, record) in self.reader.into_records().enumerate() {
            let record = record?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            if record.len() != headers.len() {
                return Err(PaymentError::ImportFormat(format!(
                    "invalid data in row {}: expected {} columns but got {}",
                    index + 1,
                    headers.len(),
                    record.len()
                )));
            }
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(RawTable { headers, rows })
    }

    /// Reads and normalizes in one step.
    pub fn read_beneficiaries(self) -> Result<Vec<BeneficiaryDraft>> {
        normalizer::normalize(&self.read()?)
    }
}
