use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use payfile::application::generator;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn payfile(state_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("payfile"));
    cmd.arg("--state-dir").arg(state_dir);
    cmd
}

#[test]
fn test_import_list_and_generate_end_to_end() {
    let dir = tempdir().unwrap();
    let state_dir = dir.path().join("state");

    let csv_path = dir.path().join("beneficiaries.csv");
    std::fs::write(
        &csv_path,
        "name,accountnumber,ifsccode,accounttype,place,email,mobile\n\
         JANE DOE,000987654321,HDFC0001234,Current,PUNE,jane@example.com,9999999999\n",
    )
    .unwrap();

    payfile(&state_dir)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 beneficiaries"));

    payfile(&state_dir)
        .arg("list")
        .assert()
        .success()
        // seed records plus the import survive across invocations
        .stdout(predicate::str::contains("AMIT SHUKLA"))
        .stdout(predicate::str::contains("JANE DOE"))
        .stdout(predicate::str::contains("000987654321"));

    // Seeded beneficiary "1" is AMIT SHUKLA
    payfile(&state_dir)
        .arg("add-payment")
        .arg("--beneficiary-id")
        .arg("1")
        .arg("--amount")
        .arg("150000")
        .assert()
        .success()
        .stdout(predicate::str::contains("NEFT"));

    let out_dir = dir.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();
    payfile(&state_dir)
        .arg("generate")
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 payment entries"));

    let file_path = out_dir.join(generator::file_name(chrono::Local::now().date_naive()));
    let content = std::fs::read_to_string(file_path).unwrap();
    assert_eq!(
        content,
        "NEFT|ABHAYAEXPORTSPVTLTD|150000|FDRL0005555|AMIT SHUKLA|55550103142988|10|MUMBAI|mona.abhaayexports@gmail.com|8424972444|E|Payment|90909|Remarks"
    );
}

#[test]
fn test_generate_with_no_payments_fails() {
    let dir = tempdir().unwrap();
    payfile(&dir.path().join("state"))
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no payment entries"));
}

#[test]
fn test_import_rejects_bad_extension() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("beneficiaries.txt");
    std::fs::write(&bad, "name,accountnumber,ifsccode\n").unwrap();

    payfile(&dir.path().join("state"))
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file extension"));
}

#[test]
fn test_invalid_amount_is_rejected() {
    let dir = tempdir().unwrap();
    payfile(&dir.path().join("state"))
        .arg("add-payment")
        .arg("--beneficiary-id")
        .arg("1")
        .arg("--amount=-5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be positive"));
}

#[test]
fn test_clear_payments_command() {
    let dir = tempdir().unwrap();
    let state_dir = dir.path().join("state");

    payfile(&state_dir)
        .arg("add-payment")
        .arg("--beneficiary-id")
        .arg("2")
        .arg("--amount")
        .arg("100")
        .assert()
        .success();

    payfile(&state_dir)
        .arg("clear-payments")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared pending payments"));

    payfile(&state_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending payments (0):"));
}
