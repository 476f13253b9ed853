use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Bank account type, carried as the bank's two-digit code.
///
/// Codes outside the two known rails are preserved verbatim so that whatever
/// the operator imported is what ends up in the payment file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountType {
    #[default]
    Savings,
    Current,
    Other(String),
}

impl AccountType {
    /// The code string written to snapshots and payment files.
    pub fn code(&self) -> &str {
        match self {
            Self::Savings => "10",
            Self::Current => "11",
            Self::Other(code) => code,
        }
    }

    /// Exact code mapping, used when reading stored records back.
    pub fn from_code(code: String) -> Self {
        match code.as_str() {
            "10" => Self::Savings,
            "11" => Self::Current,
            _ => Self::Other(code),
        }
    }

    /// Lenient mapping for imported cell values.
    ///
    /// Blank defaults to Savings. Values containing "sav" or equal to "10"
    /// are Savings, values containing "cur" or equal to "11" are Current
    /// (case-insensitive), anything else passes through trimmed but unchanged.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Savings;
        }
        let lower = trimmed.to_lowercase();
        if lower == "10" || lower.contains("sav") {
            Self::Savings
        } else if lower == "11" || lower.contains("cur") {
            Self::Current
        } else {
            Self::Other(trimmed.to_string())
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for AccountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(code))
    }
}

/// A payee with the bank details needed to route a transfer.
///
/// The account number is an opaque digit string and must never be coerced
/// through a numeric type anywhere between import and file generation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    /// Unique identifier assigned by the store; immutable, never reused.
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
}

/// A beneficiary record before the store has assigned it an identity.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct BeneficiaryDraft {
    pub name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub account_type: AccountType,
    pub place: String,
    pub email: String,
    pub mobile: String,
}

impl BeneficiaryDraft {
    /// Checks the required fields for manual add/edit. The import path skips
    /// this because the normalizer has already filtered invalid rows.
    pub fn validate(&self) -> crate::error::Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("accountNumber", &self.account_number),
            ("ifscCode", &self.ifsc_code),
        ] {
            if value.trim().is_empty() {
                return Err(crate::error::PaymentError::Validation(format!(
                    "{field} is required"
                )));
            }
        }
        Ok(())
    }

    pub fn into_record(self, id: String) -> Beneficiary {
        Beneficiary {
            id,
            name: self.name,
            account_number: self.account_number,
            ifsc_code: self.ifsc_code,
            account_type: self.account_type,
            place: self.place,
            email: self.email,
            mobile: self.mobile,
        }
    }
}

/// Partial update merged into an existing beneficiary.
#[derive(Debug, Clone, Default)]
pub struct BeneficiaryUpdate {
    pub name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub account_type: Option<AccountType>,
    pub place: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// Example records shown on first run, before any snapshot exists.
pub fn seed() -> Vec<Beneficiary> {
    vec![
        Beneficiary {
            id: "1".to_string(),
            name: "AMIT SHUKLA".to_string(),
            account_number: "55550103142988".to_string(),
            ifsc_code: "FDRL0005555".to_string(),
            account_type: AccountType::Savings,
            place: "MUMBAI".to_string(),
            email: "mona.abhaayexports@gmail.com".to_string(),
            mobile: "8424972444".to_string(),
        },
        Beneficiary {
            id: "2".to_string(),
            name: "RAJESH KUMAR".to_string(),
            account_number: "38651427890".to_string(),
            ifsc_code: "SBIN0001234".to_string(),
            account_type: AccountType::Savings,
            place: "DELHI".to_string(),
            email: "rajesh.kumar@example.com".to_string(),
            mobile: "9876543210".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaymentError;

    #[test]
    fn test_account_type_parse() {
        assert_eq!(AccountType::parse(""), AccountType::Savings);
        assert_eq!(AccountType::parse("  "), AccountType::Savings);
        assert_eq!(AccountType::parse("10"), AccountType::Savings);
        assert_eq!(AccountType::parse("Saving"), AccountType::Savings);
        assert_eq!(AccountType::parse("SAVINGS A/C"), AccountType::Savings);
        assert_eq!(AccountType::parse("11"), AccountType::Current);
        assert_eq!(AccountType::parse("Current A/c"), AccountType::Current);
        assert_eq!(AccountType::parse("CURR"), AccountType::Current);
        assert_eq!(
            AccountType::parse(" NRE "),
            AccountType::Other("NRE".to_string())
        );
    }

    #[test]
    fn test_account_type_serde_round_trip() {
        let json = serde_json::to_string(&AccountType::Current).unwrap();
        assert_eq!(json, "\"11\"");

        let parsed: AccountType = serde_json::from_str("\"10\"").unwrap();
        assert_eq!(parsed, AccountType::Savings);

        let other: AccountType = serde_json::from_str("\"NRO\"").unwrap();
        assert_eq!(other, AccountType::Other("NRO".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"NRO\"");
    }

    #[test]
    fn test_beneficiary_json_uses_camel_case() {
        let record = seed().remove(0);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"accountNumber\":\"55550103142988\""));
        assert!(json.contains("\"ifscCode\":\"FDRL0005555\""));
        assert!(json.contains("\"accountType\":\"10\""));
    }

    #[test]
    fn test_draft_validation() {
        let draft = BeneficiaryDraft {
            name: "JANE".to_string(),
            account_number: "123456".to_string(),
            ifsc_code: "IFSC0001".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        let blank_account = BeneficiaryDraft {
            account_number: "   ".to_string(),
            ..draft
        };
        assert!(matches!(
            blank_account.validate(),
            Err(PaymentError::Validation(_))
        ));
    }
}
