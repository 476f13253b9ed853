use payfile::application::normalizer::{self, RawTable};
use payfile::domain::beneficiary::{AccountType, BeneficiaryDraft};
use payfile::error::PaymentError;
use payfile::interfaces;
use payfile::interfaces::csv::BeneficiaryReader;
use std::io::Write;

#[test]
fn test_csv_row_yields_canonical_record() {
    let data = "name,accountnumber,ifsccode\nJane,123456,IFSC0001";
    let drafts = BeneficiaryReader::new(data.as_bytes())
        .read_beneficiaries()
        .unwrap();

    assert_eq!(
        drafts,
        vec![BeneficiaryDraft {
            name: "Jane".to_string(),
            account_number: "123456".to_string(),
            ifsc_code: "IFSC0001".to_string(),
            account_type: AccountType::Savings,
            place: String::new(),
            email: String::new(),
            mobile: String::new(),
        }]
    );
}

#[test]
fn test_csv_full_header_with_optionals() {
    let data = "name,accountnumber,ifsccode,accounttype,place,email,mobile\n\
                Jane,123456,IFSC0001,Current,PUNE,jane@example.com,9999999999";
    let drafts = BeneficiaryReader::new(data.as_bytes())
        .read_beneficiaries()
        .unwrap();

    assert_eq!(drafts[0].account_type, AccountType::Current);
    assert_eq!(drafts[0].place, "PUNE");
    assert_eq!(drafts[0].email, "jane@example.com");
    assert_eq!(drafts[0].mobile, "9999999999");
}

#[test]
fn test_csv_mismatched_row_rejects_whole_file() {
    let data = "name,accountnumber,ifsccode\nJane,123456,IFSC0001\nBob,789,IFSC0002,EXTRA";
    let err = BeneficiaryReader::new(data.as_bytes())
        .read_beneficiaries()
        .unwrap_err();
    assert!(matches!(err, PaymentError::ImportFormat(_)));
}

#[test]
fn test_csv_missing_required_column() {
    let data = "name,place\nJane,PUNE";
    let err = BeneficiaryReader::new(data.as_bytes())
        .read_beneficiaries()
        .unwrap_err();
    match err {
        PaymentError::ImportFormat(msg) => {
            assert!(msg.contains("missing required columns"));
        }
        other => panic!("expected ImportFormat, got {other:?}"),
    }
}

#[test]
fn test_csv_header_only_is_empty_result() {
    let data = "name,accountnumber,ifsccode\n";
    let err = BeneficiaryReader::new(data.as_bytes())
        .read_beneficiaries()
        .unwrap_err();
    assert!(matches!(err, PaymentError::ImportEmpty(_)));
}

#[test]
fn test_spreadsheet_style_headers_resolve() {
    // Loose header spellings as they arrive from the workbook channel
    let table = RawTable {
        headers: vec![
            "Beneficiary Name".to_string(),
            "ACCOUNT NO".to_string(),
            "IFSC_Code".to_string(),
            "Account Type".to_string(),
        ],
        rows: vec![
            vec![
                "amit shukla".to_string(),
                "55550103142988".to_string(),
                "fdrl0005555".to_string(),
                "Saving".to_string(),
            ],
            // short row, tolerated and skipped (no account number / ifsc)
            vec!["incomplete".to_string()],
        ],
    };

    let drafts = normalizer::normalize(&table).unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].account_number, "55550103142988");
    assert_eq!(drafts[0].account_type, AccountType::Savings);
}

#[test]
fn test_blank_account_type_defaults_and_current_text_maps() {
    let table = RawTable {
        headers: vec![
            "name".to_string(),
            "accountnumber".to_string(),
            "ifsccode".to_string(),
            "accounttype".to_string(),
        ],
        rows: vec![
            vec!["A".to_string(), "1".to_string(), "I1".to_string(), "".to_string()],
            vec![
                "B".to_string(),
                "2".to_string(),
                "I2".to_string(),
                "Current A/c".to_string(),
            ],
        ],
    };
    let drafts = normalizer::normalize(&table).unwrap();
    assert_eq!(drafts[0].account_type.code(), "10");
    assert_eq!(drafts[1].account_type.code(), "11");
}

#[test]
fn test_unsupported_extension_reports_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beneficiaries.txt");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"name,accountnumber,ifsccode\n")
        .unwrap();

    let err = interfaces::read_beneficiaries(&path).unwrap_err();
    assert!(matches!(err, PaymentError::ImportFormat(_)));
}

#[test]
fn test_csv_file_import_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beneficiaries.csv");
    std::fs::write(
        &path,
        "name,accountnumber,ifsccode,accounttype\nJane,000123,IFSC0001,Current\n",
    )
    .unwrap();

    let drafts = interfaces::read_beneficiaries(&path).unwrap();
    assert_eq!(drafts.len(), 1);
    // leading zeros survive the whole channel
    assert_eq!(drafts[0].account_number, "000123");
    assert_eq!(drafts[0].account_type, AccountType::Current);
}

#[test]
fn test_unreadable_csv_file() {
    let err = interfaces::read_beneficiaries(std::path::Path::new("no-such-file.csv")).unwrap_err();
    assert!(matches!(err, PaymentError::Io(_)));
}
