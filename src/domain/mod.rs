pub mod beneficiary;
pub mod payment;
pub mod ports;
