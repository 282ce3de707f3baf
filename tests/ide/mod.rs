pub mod tests_analysis;
