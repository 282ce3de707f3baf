//! Settings table and bracketed function settings (`[Documentation]` etc).

use tracing::trace;

use super::call_expression::parse_call_expression;
use super::logical_rows;
use super::primitives::{
    cell_location, cells_location, parse_declaration_target, parse_identifier, parse_literal,
    parse_plain_identifier, parse_value,
};
use crate::base::{Location, Span};
use crate::parser::ParseError;
use crate::parser::ast::{
    Arguments, Documentation, Identifier, LibraryImport, Literal, ResourceImport, Return,
    SettingsTable, Setup, SuiteSetting, Tags, Teardown, Template, TestCase, Timeout, UserKeyword,
    VariableDeclaration, VariableImport,
};
use crate::parser::table::{Cell, ContinuationStyle, DataTable};

// ============================================================================
// Settings table
// ============================================================================

/// Handler selected by a settings table row's first cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuiteSettingKind {
    Library,
    Resource,
    Variables,
    Documentation,
    SuiteSetup,
    SuiteTeardown,
    TestSetup,
    TestTeardown,
    TestTimeout,
    ForceTags,
    DefaultTags,
}

impl SuiteSettingKind {
    fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim_end_matches(':').trim().to_lowercase();
        let kind = match normalized.as_str() {
            "library" => Self::Library,
            "resource" => Self::Resource,
            "variables" => Self::Variables,
            "documentation" => Self::Documentation,
            "suite setup" | "suite precondition" => Self::SuiteSetup,
            "suite teardown" | "suite postcondition" => Self::SuiteTeardown,
            "test setup" | "test precondition" => Self::TestSetup,
            "test teardown" | "test postcondition" => Self::TestTeardown,
            "test timeout" => Self::TestTimeout,
            "force tags" => Self::ForceTags,
            "default tags" => Self::DefaultTags,
            _ => return None,
        };
        Some(kind)
    }
}

/// Library alias markers: `Library    Foo    WITH NAME    Bar`
const ALIAS_MARKERS: &[&str] = &["WITH NAME", "AS"];

pub fn parse_settings_table(table: &DataTable) -> SettingsTable {
    let mut settings = SettingsTable::new(Location::Parsed(table.span()));

    for row in logical_rows(&table.rows, ContinuationStyle::FirstCell) {
        let cells: Vec<Cell> = row.cells.into_iter().filter(|c| !c.is_empty()).collect();
        let Some((name_cell, values)) = cells.split_first() else {
            continue;
        };
        let Some(kind) = SuiteSettingKind::from_name(&name_cell.content) else {
            trace!(setting = %name_cell.content, "unrecognized setting ignored");
            continue;
        };
        let location = Location::Parsed(row.span);

        match kind {
            SuiteSettingKind::Library => {
                if let Some(import) = parse_library_import(values, location) {
                    settings.library_imports.push(import);
                }
            }
            SuiteSettingKind::Resource => {
                if let Some(target) = values.first() {
                    settings.resource_imports.push(ResourceImport {
                        target: parse_literal(target),
                        location,
                    });
                }
            }
            SuiteSettingKind::Variables => {
                if let Some((target, args)) = values.split_first() {
                    settings.variable_imports.push(VariableImport {
                        target: parse_literal(target),
                        args: args.iter().map(parse_value).collect(),
                        location,
                    });
                }
            }
            SuiteSettingKind::Documentation => {
                settings.documentation = Some(parse_documentation(&cells));
            }
            SuiteSettingKind::SuiteSetup => {
                settings.suite_setup = Some(parse_suite_setting(&cells));
            }
            SuiteSettingKind::SuiteTeardown => {
                settings.suite_teardown = Some(parse_suite_setting(&cells));
            }
            SuiteSettingKind::TestSetup => {
                settings.test_setup = Some(parse_suite_setting(&cells));
            }
            SuiteSettingKind::TestTeardown => {
                settings.test_teardown = Some(parse_suite_setting(&cells));
            }
            SuiteSettingKind::TestTimeout => {
                settings.test_timeout = Some(parse_timeout(&cells));
            }
            SuiteSettingKind::ForceTags => {
                settings.force_tags = Some(parse_tags(&cells));
            }
            SuiteSettingKind::DefaultTags => {
                settings.default_tags = Some(parse_tags(&cells));
            }
        }
    }

    settings
}

fn parse_library_import(values: &[Cell], location: Location) -> Option<LibraryImport> {
    let (target, rest) = values.split_first()?;
    let alias_at = rest
        .iter()
        .position(|c| ALIAS_MARKERS.contains(&c.content.as_str()));
    let (args, alias) = match alias_at {
        Some(idx) => (&rest[..idx], rest.get(idx + 1).map(parse_literal)),
        None => (rest, None),
    };

    Some(LibraryImport {
        target: parse_literal(target),
        args: args.iter().map(parse_value).collect(),
        alias,
        location,
    })
}

fn parse_suite_setting(cells: &[Cell]) -> SuiteSetting {
    SuiteSetting {
        name: parse_plain_identifier(&cells[0]),
        value: parse_call_expression(&cells[1..]),
        location: cells_location(cells).unwrap_or(cell_location(&cells[0])),
    }
}

// ============================================================================
// Function settings
// ============================================================================

/// Bracketed settings inside keyword and test case bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionSetting {
    Documentation,
    Arguments,
    Return,
    Timeout,
    Setup,
    Teardown,
    Template,
    Tags,
}

/// Settings a user keyword accepts
pub const KEYWORD_SETTINGS: &[FunctionSetting] = &[
    FunctionSetting::Documentation,
    FunctionSetting::Arguments,
    FunctionSetting::Return,
    FunctionSetting::Timeout,
    FunctionSetting::Teardown,
    FunctionSetting::Tags,
];

/// Settings a test case accepts
pub const TEST_CASE_SETTINGS: &[FunctionSetting] = &[
    FunctionSetting::Documentation,
    FunctionSetting::Setup,
    FunctionSetting::Teardown,
    FunctionSetting::Template,
    FunctionSetting::Timeout,
    FunctionSetting::Tags,
];

impl FunctionSetting {
    /// Recognize `[Name]` (case-insensitive, inner whitespace trimmed).
    pub fn from_cell(content: &str) -> Option<Self> {
        let inner = content.strip_prefix('[')?.strip_suffix(']')?;
        let setting = match inner.trim().to_lowercase().as_str() {
            "documentation" => Self::Documentation,
            "arguments" => Self::Arguments,
            "return" => Self::Return,
            "timeout" => Self::Timeout,
            "setup" | "precondition" => Self::Setup,
            "teardown" | "postcondition" => Self::Teardown,
            "template" => Self::Template,
            "tags" => Self::Tags,
            _ => return None,
        };
        Some(setting)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Documentation => "Documentation",
            Self::Arguments => "Arguments",
            Self::Return => "Return",
            Self::Timeout => "Timeout",
            Self::Setup => "Setup",
            Self::Teardown => "Teardown",
            Self::Template => "Template",
            Self::Tags => "Tags",
        }
    }
}

fn unexpected(setting: FunctionSetting, owner: &'static str, cells: &[Cell]) -> ParseError {
    ParseError::UnexpectedSetting {
        setting: setting.name().to_string(),
        owner,
        line: cells.first().map(|c| c.span.start.line).unwrap_or_default(),
    }
}

fn require_cells(
    setting: FunctionSetting,
    owner: &'static str,
    cells: &[Cell],
) -> Result<(), ParseError> {
    if cells.is_empty() {
        return Err(ParseError::EmptySetting {
            setting: setting.name().to_string(),
            owner,
        });
    }
    Ok(())
}

/// Apply a setting row (`cells[0]` is the bracketed name) to a keyword.
pub fn apply_keyword_setting(
    keyword: &mut UserKeyword,
    setting: FunctionSetting,
    cells: &[Cell],
) -> Result<(), ParseError> {
    require_cells(setting, "keyword", cells)?;
    match setting {
        FunctionSetting::Documentation => keyword.documentation = Some(parse_documentation(cells)),
        FunctionSetting::Arguments => keyword.arguments = Some(parse_arguments(cells)),
        FunctionSetting::Return => keyword.returns = Some(parse_return(cells)),
        FunctionSetting::Timeout => keyword.timeout = Some(parse_timeout(cells)),
        FunctionSetting::Teardown => keyword.teardown = Some(parse_teardown(cells)),
        FunctionSetting::Tags => keyword.tags = Some(parse_tags(cells)),
        FunctionSetting::Setup | FunctionSetting::Template => {
            return Err(unexpected(setting, "keyword", cells));
        }
    }
    Ok(())
}

/// Apply a setting row (`cells[0]` is the bracketed name) to a test case.
pub fn apply_test_case_setting(
    test_case: &mut TestCase,
    setting: FunctionSetting,
    cells: &[Cell],
) -> Result<(), ParseError> {
    require_cells(setting, "test case", cells)?;
    match setting {
        FunctionSetting::Documentation => {
            test_case.documentation = Some(parse_documentation(cells))
        }
        FunctionSetting::Setup => test_case.setup = Some(parse_setup(cells)),
        FunctionSetting::Teardown => test_case.teardown = Some(parse_teardown(cells)),
        FunctionSetting::Template => test_case.template = Some(parse_template(cells)),
        FunctionSetting::Timeout => test_case.timeout = Some(parse_timeout(cells)),
        FunctionSetting::Tags => test_case.tags = Some(parse_tags(cells)),
        FunctionSetting::Arguments | FunctionSetting::Return => {
            return Err(unexpected(setting, "test case", cells));
        }
    }
    Ok(())
}

// ============================================================================
// Shared setting parsers (cells[0] is the setting name)
// ============================================================================

fn setting_id(cells: &[Cell]) -> Identifier {
    parse_plain_identifier(&cells[0])
}

fn setting_location(cells: &[Cell]) -> Location {
    cells_location(cells).unwrap_or(Location::Synthetic)
}

fn parse_documentation(cells: &[Cell]) -> Documentation {
    let values = &cells[1..];
    let text = values
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let value_location = cells_location(values).unwrap_or_else(|| {
        Location::Parsed(Span::empty_at(cells[0].span.end))
    });

    Documentation {
        id: setting_id(cells),
        value: Literal::new(text, value_location),
        location: setting_location(cells),
    }
}

fn parse_arguments(cells: &[Cell]) -> Arguments {
    let values = cells[1..]
        .iter()
        .filter_map(|cell| {
            let target = parse_declaration_target(cell, true)?;
            Some(VariableDeclaration {
                id: target.id,
                kind: target.kind,
                values: target.default.into_iter().collect(),
                location: target.location,
            })
        })
        .collect();

    Arguments {
        id: setting_id(cells),
        values,
        location: setting_location(cells),
    }
}

fn parse_return(cells: &[Cell]) -> Return {
    Return {
        id: setting_id(cells),
        values: cells[1..].iter().map(parse_value).collect(),
        location: setting_location(cells),
    }
}

fn parse_timeout(cells: &[Cell]) -> Timeout {
    Timeout {
        id: setting_id(cells),
        value: cells.get(1).map(parse_literal),
        message: cells.get(2).map(parse_literal),
        location: setting_location(cells),
    }
}

fn parse_setup(cells: &[Cell]) -> Setup {
    Setup {
        id: setting_id(cells),
        keyword: parse_call_expression(&cells[1..]),
        location: setting_location(cells),
    }
}

fn parse_teardown(cells: &[Cell]) -> Teardown {
    Teardown {
        id: setting_id(cells),
        keyword: parse_call_expression(&cells[1..]),
        location: setting_location(cells),
    }
}

fn parse_tags(cells: &[Cell]) -> Tags {
    Tags {
        id: setting_id(cells),
        values: cells[1..].iter().map(parse_literal).collect(),
        location: setting_location(cells),
    }
}

fn parse_template(cells: &[Cell]) -> Template {
    Template {
        id: setting_id(cells),
        keyword: cells.get(1).map(parse_identifier),
        location: setting_location(cells),
    }
}
