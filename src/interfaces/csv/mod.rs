mod beneficiary_reader;

pub use beneficiary_reader::BeneficiaryReader;
