//! Cell-level parsers: identifiers, literals, values, declaration targets.

use crate::base::{Location, Position, Span};
use crate::parser::ast::{
    Expression, Identifier, Literal, TemplateElement, TemplateLiteral, VariableExpression,
    VariableKind,
};
use crate::parser::lexer::{Token, tokenize};
use crate::parser::table::Cell;

pub fn cell_location(cell: &Cell) -> Location {
    Location::Parsed(cell.span)
}

/// Location covering the first through last cell, if any.
pub fn cells_location(cells: &[Cell]) -> Option<Location> {
    let first = cells.first()?;
    let last = cells.last()?;
    Some(Location::Parsed(Span::new(first.span.start, last.span.end)))
}

/// Span of a character range inside a cell.
fn sub_span(cell: &Cell, start: usize, end: usize) -> Span {
    let line = cell.span.start.line;
    let column = cell.span.start.column;
    Span::new(
        Position::new(line, column + start),
        Position::new(line, column + end),
    )
}

pub fn parse_literal(cell: &Cell) -> Literal {
    Literal::new(cell.content.clone(), cell_location(cell))
}

/// Identifier without namespace splitting
pub fn parse_plain_identifier(cell: &Cell) -> Identifier {
    Identifier::new(cell.content.as_str(), cell_location(cell))
}

/// Identifier with namespace splitting at the last dot: `Lib.Sub.Keyword`
/// → namespace `Lib.Sub`, name `Keyword`.
pub fn parse_identifier(cell: &Cell) -> Identifier {
    match cell.content.rsplit_once('.') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
            Identifier::namespaced(namespace, name, cell_location(cell))
        }
        _ => parse_plain_identifier(cell),
    }
}

fn variable_expression(cell: &Cell, token: &Token<'_>) -> Option<VariableExpression> {
    let (sigil, name) = token.variable_parts()?;
    let kind = VariableKind::from_sigil(sigil)?;
    let location = Location::Parsed(sub_span(cell, token.start, token.end));
    Some(VariableExpression {
        id: Identifier::new(name, location),
        kind,
        location,
    })
}

/// Classify a cell's value.
///
/// No variable reference gives a [`Literal`]; a single reference spanning
/// the whole cell gives a [`VariableExpression`]; anything else gives a
/// [`TemplateLiteral`] with segments in source order.
pub fn parse_value(cell: &Cell) -> Expression {
    let tokens = tokenize(&cell.content);
    let variable_count = tokens.iter().filter(|t| t.is_variable()).count();

    if variable_count == 0 {
        return Expression::Literal(parse_literal(cell));
    }

    if tokens.len() == 1 {
        if let Some(variable) = variable_expression(cell, &tokens[0]) {
            return Expression::Variable(variable);
        }
    }

    Expression::Template(parse_template(cell, &tokens))
}

fn parse_template(cell: &Cell, tokens: &[Token<'_>]) -> TemplateLiteral {
    let mut quasis = Vec::new();
    let mut expressions = Vec::new();
    let mut text = String::new();
    let mut text_start = 0;

    for token in tokens {
        match variable_expression(cell, token) {
            Some(variable) => {
                quasis.push(TemplateElement {
                    value: std::mem::take(&mut text),
                    location: Location::Parsed(sub_span(cell, text_start, token.start)),
                });
                expressions.push(variable);
                text_start = token.end;
            }
            None => text.push_str(token.text),
        }
    }

    let end = tokens.last().map(|t| t.end).unwrap_or(text_start);
    quasis.push(TemplateElement {
        value: text,
        location: Location::Parsed(sub_span(cell, text_start, end)),
    });

    TemplateLiteral {
        quasis,
        expressions,
        location: cell_location(cell),
    }
}

/// The variable being declared by a cell: `${name}`, `${name}=`,
/// `${name} =` or, in argument lists, `${name}=default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationTarget {
    pub id: Identifier,
    pub kind: VariableKind,
    pub default: Option<Expression>,
    pub location: Location,
}

/// Parse a cell as a declaration target. Returns `None` when the cell does
/// not start with a variable reference or has trailing text that is not an
/// assignment (or, with `allow_default`, a default value).
pub fn parse_declaration_target(cell: &Cell, allow_default: bool) -> Option<DeclarationTarget> {
    let tokens = tokenize(&cell.content);
    let head = tokens.first()?;
    let (sigil, name) = head.variable_parts()?;
    let kind = VariableKind::from_sigil(sigil)?;

    let id_location = Location::Parsed(sub_span(cell, head.start, head.end));
    let id = Identifier::new(name, id_location);

    let rest = &cell.content[head.text.len()..];
    let trimmed = rest.trim();

    if trimmed.is_empty() || (trimmed == "=" && !allow_default) {
        return Some(DeclarationTarget {
            id,
            kind,
            default: None,
            location: cell_location(cell),
        });
    }

    if !allow_default {
        return None;
    }

    let default_text = rest.strip_prefix('=')?;
    let default_start = head.end + 1;
    let default_end = default_start + default_text.chars().count();
    let default_cell = Cell::new(default_text, sub_span(cell, default_start, default_end));

    Some(DeclarationTarget {
        id,
        kind,
        default: Some(parse_value(&default_cell)),
        location: cell_location(cell),
    })
}
