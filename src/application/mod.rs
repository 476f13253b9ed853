pub mod generator;
pub mod normalizer;
pub mod store;
