mod sheet_reader;

pub use sheet_reader::read_beneficiaries;
