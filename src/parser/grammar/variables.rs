use tracing::trace;

use super::logical_rows;
use super::primitives::{parse_declaration_target, parse_literal, parse_value};
use crate::base::Location;
use crate::parser::ast::{Expression, VariableDeclaration, VariableKind, VariablesTable};
use crate::parser::table::{Cell, ContinuationStyle, DataTable};

pub fn parse_variables_table(table: &DataTable) -> VariablesTable {
    let mut variables = Vec::new();

    for row in logical_rows(&table.rows, ContinuationStyle::FirstCell) {
        if !row.starts_with_content() {
            trace!(line = row.span.start.line, "indented variable row dropped");
            continue;
        }
        let cells: Vec<&Cell> = row.cells.iter().filter(|c| !c.is_empty()).collect();
        let Some((name, values)) = cells.split_first() else {
            continue;
        };
        let Some(target) = parse_declaration_target(name, false) else {
            trace!(cell = %name.content, "not a variable declaration");
            continue;
        };

        let values: Vec<Expression> = match target.kind {
            VariableKind::Scalar => values.first().map(|c| parse_value(c)).into_iter().collect(),
            VariableKind::List => values.iter().map(|c| parse_value(c)).collect(),
            // TODO: split `key=value` items once dictionary entries get their own node
            VariableKind::Dictionary => values
                .iter()
                .map(|c| Expression::Literal(parse_literal(c)))
                .collect(),
            VariableKind::Environment => {
                trace!(name = %target.id.name, "environment variable declaration dropped");
                continue;
            }
        };

        variables.push(VariableDeclaration {
            id: target.id,
            kind: target.kind,
            values,
            location: Location::Parsed(row.span),
        });
    }

    VariablesTable {
        variables,
        location: Location::Parsed(table.span()),
    }
}
