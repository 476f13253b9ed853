use crate::domain::beneficiary::Beneficiary;
use crate::domain::payment::{Amount, Payment};
use crate::error::{PaymentError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Originator code stamped on every line, fixed by the bank mandate.
pub const ORIGINATOR_CODE: &str = "ABHAYAEXPORTSPVTLTD";

/// Static numeric literal in field 13 of the line layout.
const PRODUCT_CODE: &str = "90909";

/// Amounts at or above this go out over RTGS, everything below over NEFT.
/// Fixed business rule, not configurable.
const RTGS_THRESHOLD: Decimal = dec!(200000);

/// Transfer rail for a payment amount.
pub fn payment_method(amount: Amount) -> &'static str {
    if amount.value() < RTGS_THRESHOLD {
        "NEFT"
    } else {
        "RTGS"
    }
}

/// Artifact name for a generation run on the given date.
pub fn file_name(date: NaiveDate) -> String {
    format!("payment_file_{}.txt", date.format("%Y-%m-%d"))
}

/// Renders the bulk-payment payload for the bank's processor.
///
/// One `|`-delimited line per payment in list order, joined with single
/// newlines and no trailing delimiter. A payment whose beneficiary is missing
/// aborts the whole run with no partial output; an empty payment list is
/// refused rather than producing an empty file.
pub fn render(payments: &[Payment], beneficiaries: &[Beneficiary]) -> Result<String> {
    if payments.is_empty() {
        return Err(PaymentError::NothingToGenerate);
    }

    let mut lines = Vec::with_capacity(payments.len());
    for payment in payments {
        let beneficiary = beneficiaries
            .iter()
            .find(|b| b.id == payment.beneficiary_id)
            .ok_or_else(|| PaymentError::OrphanReference(payment.id.clone()))?;

        let amount = payment.amount.to_string();
        let fields: [&str; 14] = [
            payment_method(payment.amount),
            ORIGINATOR_CODE,
            &amount,
            &beneficiary.ifsc_code,
            &beneficiary.name,
            &beneficiary.account_number,
            beneficiary.account_type.code(),
            &beneficiary.place,
            &beneficiary.email,
            &beneficiary.mobile,
            "E",
            "Payment",
            PRODUCT_CODE,
            "Remarks",
        ];
        lines.push(fields.join("|"));
    }

    Ok(lines.join("\n"))
}
