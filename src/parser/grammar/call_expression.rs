//! Keyword call parsing, including built-in keywords that take other
//! keywords as arguments.

use super::primitives::{cells_location, parse_identifier, parse_literal, parse_value};
use crate::base::constants::AND_SEPARATOR;
use crate::parser::ast::{CallExpression, Expression};
use crate::parser::table::Cell;

/// Keywords whose first argument is a keyword call
const KEYWORD_AS_FIRST_ARG: &[&str] = &[
    "run keyword",
    "run keyword and continue on failure",
    "run keyword and ignore error",
    "run keyword and return",
    "run keyword and return status",
    "run keyword and warn on failure",
    "run keyword if all critical tests passed",
    "run keyword if all tests passed",
    "run keyword if any critical tests failed",
    "run keyword if any tests failed",
    "run keyword if test failed",
    "run keyword if test passed",
    "run keyword if timeout occurred",
];

/// Keywords whose second argument is a keyword call
const KEYWORD_AS_SECOND_ARG: &[&str] = &[
    "run keyword and expect error",
    "run keyword and return if",
    "run keyword if",
    "run keyword unless",
    "repeat keyword",
];

/// Keywords whose third argument is a keyword call
const KEYWORD_AS_THIRD_ARG: &[&str] = &["wait until keyword succeeds"];

/// Runs each argument segment, separated by `AND`, as its own keyword
const MULTI_KEYWORD_RUNNER: &str = "run keywords";

/// How a call's argument cells are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgumentShape {
    Values,
    KeywordAt(usize),
    MultipleKeywords,
}

fn argument_shape(callee: &str) -> ArgumentShape {
    let lowered = callee.to_lowercase();
    let name = lowered.as_str();
    if KEYWORD_AS_FIRST_ARG.contains(&name) {
        ArgumentShape::KeywordAt(0)
    } else if KEYWORD_AS_SECOND_ARG.contains(&name) {
        ArgumentShape::KeywordAt(1)
    } else if KEYWORD_AS_THIRD_ARG.contains(&name) {
        ArgumentShape::KeywordAt(2)
    } else if name == MULTI_KEYWORD_RUNNER {
        ArgumentShape::MultipleKeywords
    } else {
        ArgumentShape::Values
    }
}

/// Parse cells as a keyword call; the first cell names the keyword.
pub fn parse_call_expression(cells: &[Cell]) -> Option<CallExpression> {
    let (first, rest) = cells.split_first()?;
    let callee = parse_identifier(first);
    let args = match argument_shape(&callee.name) {
        ArgumentShape::Values => parse_values(rest),
        ArgumentShape::KeywordAt(position) => {
            let split = position.min(rest.len());
            let (values, keyword) = rest.split_at(split);
            let mut args = parse_values(values);
            args.extend(parse_call_expression(keyword).map(Expression::Call));
            args
        }
        ArgumentShape::MultipleKeywords => parse_multiple_keywords(rest),
    };

    Some(CallExpression {
        callee,
        args,
        location: cells_location(cells)?,
    })
}

fn parse_values(cells: &[Cell]) -> Vec<Expression> {
    cells.iter().map(parse_value).collect()
}

/// `Run Keywords    A    arg    AND    B`: one nested call per `AND`
/// separated segment, with the `AND` cells kept as literal separators.
/// Without any `AND`, every cell is a keyword called without arguments.
fn parse_multiple_keywords(cells: &[Cell]) -> Vec<Expression> {
    if !cells.iter().any(|c| c.content == AND_SEPARATOR) {
        return cells
            .iter()
            .filter_map(|cell| parse_call_expression(std::slice::from_ref(cell)))
            .map(Expression::Call)
            .collect();
    }

    let mut args = Vec::new();
    let mut segment_start = 0;
    for (idx, cell) in cells.iter().enumerate() {
        if cell.content == AND_SEPARATOR {
            args.extend(parse_call_expression(&cells[segment_start..idx]).map(Expression::Call));
            args.push(Expression::Literal(parse_literal(cell)));
            segment_start = idx + 1;
        }
    }
    args.extend(parse_call_expression(&cells[segment_start..]).map(Expression::Call));
    args
}
