//! Parser layer tests
//!
//! - Tabular reader segmentation and column fidelity
//! - Structural parsing scenarios across whole files
//! - Python keyword library extraction

pub mod tests_python_source;
pub mod tests_reader_properties;
pub mod tests_scenarios;
pub mod tests_table_reader;
