pub mod tests_traverse;
