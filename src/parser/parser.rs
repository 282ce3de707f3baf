//! Suite assembler: tables in, one [`TestSuite`] out.

use tracing::trace;

use super::ParseError;
use super::ast::{SettingsTable, TestSuite};
use super::grammar::functions::{parse_keywords_table, parse_test_cases_table};
use super::grammar::settings::parse_settings_table;
use super::grammar::variables::parse_variables_table;
use super::table::DataTable;
use super::table_reader::read_tables;
use crate::base::constants::{
    KEYWORDS_TABLE_NAMES, SETTINGS_TABLE_NAMES, TEST_CASES_TABLE_NAMES, VARIABLES_TABLE_NAMES,
};
use crate::base::{Location, Position, Span};

/// Table kind selected by header name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Settings,
    Variables,
    Keywords,
    TestCases,
}

impl TableKind {
    /// Case-insensitive lookup; `None` for unrecognized headers.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        let name = name.as_str();
        if SETTINGS_TABLE_NAMES.contains(&name) {
            Some(Self::Settings)
        } else if VARIABLES_TABLE_NAMES.contains(&name) {
            Some(Self::Variables)
        } else if KEYWORDS_TABLE_NAMES.contains(&name) {
            Some(Self::Keywords)
        } else if TEST_CASES_TABLE_NAMES.contains(&name) {
            Some(Self::TestCases)
        } else {
            None
        }
    }
}

/// Read and parse tabular source text.
pub fn parse_file(text: &str, namespace: &str) -> Result<TestSuite, ParseError> {
    parse_tables(&read_tables(text), namespace)
}

/// Assemble tables into a suite. A repeated table kind is merged into the
/// first one; unrecognized tables are skipped.
pub fn parse_tables(tables: &[DataTable], namespace: &str) -> Result<TestSuite, ParseError> {
    let mut suite = TestSuite::new(suite_location(tables));

    for table in tables {
        let Some(kind) = TableKind::from_name(&table.name) else {
            trace!(table = %table.name, "unrecognized table skipped");
            continue;
        };

        match kind {
            TableKind::Settings => {
                let parsed = parse_settings_table(table);
                match suite.settings_table.as_mut() {
                    Some(existing) => merge_settings(existing, parsed),
                    None => suite.settings_table = Some(parsed),
                }
            }
            TableKind::Variables => {
                let parsed = parse_variables_table(table);
                match suite.variables_table.as_mut() {
                    Some(existing) => {
                        existing.location = existing.location.cover(&parsed.location);
                        existing.variables.extend(parsed.variables);
                    }
                    None => suite.variables_table = Some(parsed),
                }
            }
            TableKind::Keywords => {
                let parsed = parse_keywords_table(table, namespace)?;
                match suite.keywords_table.as_mut() {
                    Some(existing) => {
                        existing.location = existing.location.cover(&parsed.location);
                        existing.keywords.extend(parsed.keywords);
                    }
                    None => suite.keywords_table = Some(parsed),
                }
            }
            TableKind::TestCases => {
                let parsed = parse_test_cases_table(table)?;
                match suite.test_cases_table.as_mut() {
                    Some(existing) => {
                        existing.location = existing.location.cover(&parsed.location);
                        existing.test_cases.extend(parsed.test_cases);
                    }
                    None => suite.test_cases_table = Some(parsed),
                }
            }
        }
    }

    Ok(suite)
}

/// The suite spans every table; a file without tables gets an empty span.
fn suite_location(tables: &[DataTable]) -> Location {
    tables
        .iter()
        .map(|t| t.span())
        .reduce(|a, b| a.cover(&b))
        .map(Location::Parsed)
        .unwrap_or(Location::Parsed(Span::empty_at(Position::new(0, 0))))
}

/// Later single-valued settings replace earlier ones; imports accumulate.
fn merge_settings(existing: &mut SettingsTable, later: SettingsTable) {
    existing.location = existing.location.cover(&later.location);
    existing.documentation = later.documentation.or(existing.documentation.take());
    existing.suite_setup = later.suite_setup.or(existing.suite_setup.take());
    existing.suite_teardown = later.suite_teardown.or(existing.suite_teardown.take());
    existing.test_setup = later.test_setup.or(existing.test_setup.take());
    existing.test_teardown = later.test_teardown.or(existing.test_teardown.take());
    existing.test_timeout = later.test_timeout.or(existing.test_timeout.take());
    existing.force_tags = later.force_tags.or(existing.force_tags.take());
    existing.default_tags = later.default_tags.or(existing.default_tags.take());
    existing.library_imports.extend(later.library_imports);
    existing.resource_imports.extend(later.resource_imports);
    existing.variable_imports.extend(later.variable_imports);
}
