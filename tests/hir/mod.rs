pub mod tests_index_properties;
pub mod tests_workspace;
