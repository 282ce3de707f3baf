//! Keywords and test cases tables.
//!
//! Both tables share one row state machine: a row whose first cell holds
//! text opens a new function, indented rows add settings or steps to it.

use tracing::trace;

use super::call_expression::parse_call_expression;
use super::primitives::{cells_location, parse_declaration_target, parse_plain_identifier};
use super::settings::{
    FunctionSetting, KEYWORD_SETTINGS, TEST_CASE_SETTINGS, apply_keyword_setting,
    apply_test_case_setting,
};
use super::{LogicalRow, logical_rows};
use crate::base::Location;
use crate::parser::ParseError;
use crate::parser::ast::{
    Expression, Identifier, KeywordsTable, Step, StepBody, TestCase, TestCasesTable, UserKeyword,
    VariableDeclaration,
};
use crate::parser::table::{Cell, ContinuationStyle, DataTable};

/// A declaration owning steps and bracketed settings
trait Function: Sized {
    const OWNER: &'static str;
    const SETTINGS: &'static [FunctionSetting];

    fn create(id: Identifier) -> Self;
    fn apply_setting(&mut self, setting: FunctionSetting, cells: &[Cell])
    -> Result<(), ParseError>;
    fn steps_mut(&mut self) -> &mut Vec<Step>;
    fn location_mut(&mut self) -> &mut Location;
}

impl Function for UserKeyword {
    const OWNER: &'static str = "keyword";
    const SETTINGS: &'static [FunctionSetting] = KEYWORD_SETTINGS;

    fn create(id: Identifier) -> Self {
        UserKeyword::new(id)
    }

    fn apply_setting(
        &mut self,
        setting: FunctionSetting,
        cells: &[Cell],
    ) -> Result<(), ParseError> {
        apply_keyword_setting(self, setting, cells)
    }

    fn steps_mut(&mut self) -> &mut Vec<Step> {
        &mut self.steps
    }

    fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }
}

impl Function for TestCase {
    const OWNER: &'static str = "test case";
    const SETTINGS: &'static [FunctionSetting] = TEST_CASE_SETTINGS;

    fn create(id: Identifier) -> Self {
        TestCase::new(id)
    }

    fn apply_setting(
        &mut self,
        setting: FunctionSetting,
        cells: &[Cell],
    ) -> Result<(), ParseError> {
        apply_test_case_setting(self, setting, cells)
    }

    fn steps_mut(&mut self) -> &mut Vec<Step> {
        &mut self.steps
    }

    fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }
}

/// Parse a keywords table. Keyword ids carry `namespace` unless it is empty.
pub fn parse_keywords_table(table: &DataTable, namespace: &str) -> Result<KeywordsTable, ParseError> {
    let keywords = parse_functions(table, |cell| {
        let id = parse_plain_identifier(cell);
        if namespace.is_empty() {
            id
        } else {
            Identifier::namespaced(namespace, id.name, id.location)
        }
    })?;

    Ok(KeywordsTable {
        keywords,
        location: Location::Parsed(table.span()),
    })
}

pub fn parse_test_cases_table(table: &DataTable) -> Result<TestCasesTable, ParseError> {
    let test_cases = parse_functions(table, parse_plain_identifier)?;

    Ok(TestCasesTable {
        test_cases,
        location: Location::Parsed(table.span()),
    })
}

fn parse_functions<F: Function>(
    table: &DataTable,
    make_id: impl Fn(&Cell) -> Identifier,
) -> Result<Vec<F>, ParseError> {
    let mut functions: Vec<F> = Vec::new();

    for row in logical_rows(&table.rows, ContinuationStyle::Indented) {
        let body = if row.starts_with_content() {
            let name = &row.cells[0];
            functions.push(F::create(make_id(name)));
            &row.cells[1..]
        } else {
            row.cells.as_slice()
        };

        let body = trim_empty(body);
        if body.is_empty() {
            continue;
        }

        let Some(function) = functions.last_mut() else {
            trace!(line = row.span.start.line, owner = F::OWNER, "body row without owner dropped");
            continue;
        };

        extend_location(function.location_mut(), &row);

        match FunctionSetting::from_cell(&body[0].content) {
            Some(setting) if F::SETTINGS.contains(&setting) => {
                function.apply_setting(setting, body)?;
            }
            _ => {
                if let Some(step) = parse_step(body) {
                    function.steps_mut().push(step);
                }
            }
        }
    }

    Ok(functions)
}

fn extend_location(location: &mut Location, row: &LogicalRow) {
    *location = location.cover(&Location::Parsed(row.span));
}

/// Drop indentation and trailing empty cells.
fn trim_empty(cells: &[Cell]) -> &[Cell] {
    let start = cells.iter().position(|c| !c.is_empty()).unwrap_or(cells.len());
    let end = cells
        .iter()
        .rposition(|c| !c.is_empty())
        .map(|idx| idx + 1)
        .unwrap_or(start);
    &cells[start..end.max(start)]
}

/// Parse one body statement.
///
/// `${a}=    Keyword    args` becomes a declaration whose value is the call;
/// with several assignment targets only the first is kept.
pub fn parse_step(cells: &[Cell]) -> Option<Step> {
    let location = cells_location(cells)?;

    let Some(target) = parse_declaration_target(&cells[0], false) else {
        let call = parse_call_expression(cells)?;
        return Some(Step {
            body: StepBody::Call(call),
            location,
        });
    };

    let call_start = cells
        .iter()
        .position(|c| parse_declaration_target(c, false).is_none())
        .unwrap_or(cells.len());
    let values = parse_call_expression(&cells[call_start..])
        .map(Expression::Call)
        .into_iter()
        .collect();

    Some(Step {
        body: StepBody::Declaration(VariableDeclaration {
            id: target.id,
            kind: target.kind,
            values,
            location,
        }),
        location,
    })
}
