use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payfile::application::generator;
use payfile::application::store::RecordStore;
use payfile::domain::beneficiary::{AccountType, BeneficiaryDraft};
use payfile::domain::payment::Amount;
use payfile::domain::ports::SnapshotStoreBox;
use payfile::infrastructure::json_file::JsonFileSnapshotStore;
use payfile::interfaces;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory where collection snapshots are kept
    #[arg(long, default_value = "payfile-data")]
    state_dir: PathBuf,

    /// Path to a RocksDB database (requires the storage-rocksdb feature)
    #[arg(long)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import beneficiaries from a CSV or Excel file
    Import {
        /// Input file (.csv, .xlsx or .xls)
        file: PathBuf,
    },
    /// Add a single beneficiary
    AddBeneficiary {
        #[arg(long)]
        name: String,
        #[arg(long)]
        account_number: String,
        #[arg(long)]
        ifsc_code: String,
        /// "10"/"Saving", "11"/"Current", or any other code verbatim
        #[arg(long, default_value = "")]
        account_type: String,
        #[arg(long, default_value = "")]
        place: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        mobile: String,
    },
    /// Queue a payment for a beneficiary
    AddPayment {
        #[arg(long)]
        beneficiary_id: String,
        /// Amount in currency units, e.g. 150000 or 99.50
        #[arg(long)]
        amount: String,
    },
    /// List beneficiaries and pending payments
    List,
    /// Remove all pending payments
    ClearPayments,
    /// Write the bank payment file for all pending payments
    Generate {
        /// Directory to write the payment file into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn open_snapshots(cli: &Cli) -> Result<SnapshotStoreBox> {
    if let Some(db_path) = &cli.db_path {
        #[cfg(feature = "storage-rocksdb")]
        {
            let store = payfile::infrastructure::rocksdb::RocksDbSnapshotStore::open(db_path)
                .into_diagnostic()?;
            return Ok(Box::new(store));
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        {
            let _ = db_path;
            return Err(miette::miette!(
                "this build has no RocksDB support; rebuild with --features storage-rocksdb"
            ));
        }
    }
    Ok(Box::new(JsonFileSnapshotStore::new(&cli.state_dir)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = RecordStore::open(open_snapshots(&cli)?).await;

    match cli.command {
        Command::Import { file } => {
            let drafts = interfaces::read_beneficiaries(&file).into_diagnostic()?;
            let imported = store.import_beneficiaries(drafts).await.into_diagnostic()?;
            println!("Imported {} beneficiaries", imported.len());
        }
        Command::AddBeneficiary {
            name,
            account_number,
            ifsc_code,
            account_type,
            place,
            email,
            mobile,
        } => {
            let draft = BeneficiaryDraft {
                name,
                account_number,
                ifsc_code,
                account_type: AccountType::parse(&account_type),
                place,
                email,
                mobile,
            };
            let record = store.add_beneficiary(draft).await.into_diagnostic()?;
            println!("Added beneficiary {}", record.id);
        }
        Command::AddPayment {
            beneficiary_id,
            amount,
        } => {
            let amount = Amount::parse(&amount).into_diagnostic()?;
            let payment = store
                .add_payment(beneficiary_id, amount)
                .await
                .into_diagnostic()?;
            println!(
                "Queued payment {} ({} via {})",
                payment.id,
                payment.amount,
                generator::payment_method(payment.amount)
            );
        }
        Command::List => {
            let beneficiaries = store.beneficiaries().await;
            println!("Beneficiaries ({}):", beneficiaries.len());
            for b in beneficiaries {
                println!(
                    "  {}\t{}\t{}\t{}\t{}",
                    b.id, b.name, b.account_number, b.ifsc_code, b.account_type
                );
            }
            let payments = store.payments().await;
            println!("Pending payments ({}):", payments.len());
            for p in payments {
                println!(
                    "  {}\t{}\t{}\t{}",
                    p.id,
                    p.beneficiary_id,
                    p.amount,
                    generator::payment_method(p.amount)
                );
            }
        }
        Command::ClearPayments => {
            store.clear_payments().await.into_diagnostic()?;
            println!("Cleared pending payments");
        }
        Command::Generate { out_dir } => {
            let payments = store.payments().await;
            let beneficiaries = store.beneficiaries().await;
            let content = generator::render(&payments, &beneficiaries).into_diagnostic()?;
            let path = out_dir.join(generator::file_name(chrono::Local::now().date_naive()));
            std::fs::write(&path, content).into_diagnostic()?;
            println!(
                "Wrote {} payment entries to {}",
                payments.len(),
                path.display()
            );
        }
    }

    Ok(())
}
