use crate::domain::beneficiary::{AccountType, BeneficiaryDraft};
use crate::error::{PaymentError, Result};

/// A tabular dataset with the header row already split off.
///
/// Cells are plain strings: the reading channel is responsible for coercing
/// every value to text before it gets here, so account numbers never pass
/// through a numeric type.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// Accepted header spellings per canonical field, in resolution order.
// Matching is case-insensitive with all whitespace removed, so "Account
// Number" and "ACCOUNT NO" both land on the account-number column. New
// aliases are additive; keep these tables data, not branches.
const NAME_ALIASES: &[&str] = &["name", "beneficiaryname", "beneficiary_name", "beneficiary"];
const ACCOUNT_NUMBER_ALIASES: &[&str] = &[
    "accountnumber",
    "account_number",
    "accountno",
    "account_no",
    "acno",
    "ac_no",
    "acctno",
];
const IFSC_CODE_ALIASES: &[&str] = &["ifsccode", "ifsc_code", "ifsc"];
const ACCOUNT_TYPE_ALIASES: &[&str] = &["accounttype", "account_type", "actype", "type"];
const PLACE_ALIASES: &[&str] = &["place", "city", "location"];
const EMAIL_ALIASES: &[&str] = &["email", "emailid", "email_id", "mail"];
const MOBILE_ALIASES: &[&str] = &[
    "mobile",
    "mobileno",
    "mobile_no",
    "phone",
    "phoneno",
    "contact",
    "contactno",
];

fn normalize_header(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Column indices resolved once per import from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    account_number: usize,
    ifsc_code: usize,
    account_type: Option<usize>,
    place: Option<usize>,
    email: Option<usize>,
    mobile: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &[String]) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| normalized.iter().position(|h| h == alias))
        };

        match (
            find(NAME_ALIASES),
            find(ACCOUNT_NUMBER_ALIASES),
            find(IFSC_CODE_ALIASES),
        ) {
            (Some(name), Some(account_number), Some(ifsc_code)) => Ok(Self {
                name,
                account_number,
                ifsc_code,
                account_type: find(ACCOUNT_TYPE_ALIASES),
                place: find(PLACE_ALIASES),
                email: find(EMAIL_ALIASES),
                mobile: find(MOBILE_ALIASES),
            }),
            (name, account_number, ifsc_code) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if account_number.is_none() {
                    missing.push("accountNumber");
                }
                if ifsc_code.is_none() {
                    missing.push("ifscCode");
                }
                Err(PaymentError::ImportFormat(format!(
                    "missing required columns: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Maps a raw table onto canonical beneficiary records.
///
/// Rows missing any of name, account number or IFSC after trimming are
/// skipped silently; row order is preserved and no deduplication happens.
/// Fails when the header lacks a required column, the table has no data rows,
/// or filtering leaves nothing to import.
pub fn normalize(table: &RawTable) -> Result<Vec<BeneficiaryDraft>> {
    if table.rows.is_empty() {
        return Err(PaymentError::ImportEmpty(
            "file contains no data rows".to_string(),
        ));
    }
    let columns = ColumnMap::resolve(&table.headers)?;

    let mut drafts = Vec::new();
    for row in &table.rows {
        let cell = |index: usize| -> String {
            row.get(index).map(|v| v.trim().to_string()).unwrap_or_default()
        };
        let optional = |index: Option<usize>| index.map(&cell).unwrap_or_default();

        let name = cell(columns.name);
        let account_number = cell(columns.account_number);
        let ifsc_code = cell(columns.ifsc_code);
        if name.is_empty() || account_number.is_empty() || ifsc_code.is_empty() {
            continue;
        }

        drafts.push(BeneficiaryDraft {
            name,
            account_number,
            ifsc_code,
            account_type: AccountType::parse(&optional(columns.account_type)),
            place: optional(columns.place),
            email: optional(columns.email),
            mobile: optional(columns.mobile),
        });
    }

    if drafts.is_empty() {
        return Err(PaymentError::ImportEmpty(
            "no valid beneficiary rows found".to_string(),
        ));
    }
    Ok(drafts)
}
