use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A strictly positive monetary amount in currency units.
///
/// Wraps `rust_decimal::Decimal` so that a zero or negative payment cannot be
/// constructed, not even from a hand-edited snapshot: deserialization goes
/// through the same check as `Amount::new`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::Validation(
                "amount must be positive".to_string(),
            ))
        }
    }

    /// Parses a user-supplied decimal string, e.g. from the CLI.
    pub fn parse(raw: &str) -> Result<Self, PaymentError> {
        let value = Decimal::from_str(raw.trim())
            .map_err(|e| PaymentError::Validation(format!("invalid amount {raw:?}: {e}")))?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    /// Plain decimal rendering with trailing zeros dropped, as the bank file
    /// expects: no currency symbol, no grouping, no exponent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A pending disbursement to one beneficiary.
///
/// `beneficiary_id` is not enforced at the type level; the file generator
/// cross-checks it before emitting any output.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub beneficiary_id: String,
    pub amount: Amount,
}

/// Partial update merged into an existing payment.
#[derive(Debug, Clone, Default)]
pub struct PaymentUpdate {
    pub beneficiary_id: Option<String>,
    pub amount: Option<Amount>,
}
