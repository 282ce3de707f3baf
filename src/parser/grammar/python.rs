//! Keyword extraction from python library sources.
//!
//! Only function signatures are read: module-level `def`s and methods of
//! module-level classes. Bodies are never inspected.

use tracing::trace;

use super::primitives::parse_value;
use crate::base::{Location, Position, Span};
use crate::parser::ast::{
    Arguments, Identifier, KeywordsTable, TestSuite, UserKeyword, VariableDeclaration, VariableKind,
};
use crate::parser::table::Cell;

/// A character of a signature together with its source position
type SourceChar = (char, Position);

/// Parse python source into a suite holding only a keywords table.
pub fn parse_python_source(text: &str, namespace: &str) -> TestSuite {
    let lines: Vec<&str> = text.lines().collect();
    let mut keywords = Vec::new();
    let mut class_scope = ClassScope::default();

    let mut line_no = 0;
    while line_no < lines.len() {
        let line = lines[line_no];
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            line_no += 1;
            continue;
        }

        let indent = line.chars().count() - trimmed.chars().count();
        class_scope.observe(indent, trimmed);

        let is_def = trimmed.starts_with("def ") || trimmed.starts_with("async def ");
        if is_def && class_scope.accepts(indent) {
            let (signature, last_line) = collect_signature(&lines, line_no);
            if let Some(keyword) = parse_def(&signature, line_no, line, namespace) {
                keywords.push(keyword);
            }
            line_no = last_line + 1;
            continue;
        }
        line_no += 1;
    }

    let end = lines
        .last()
        .map(|l| Position::new(lines.len() - 1, l.chars().count()))
        .unwrap_or(Position::new(0, 0));
    let location = Location::Parsed(Span::new(Position::new(0, 0), end));

    let mut suite = TestSuite::new(location);
    suite.keywords_table = Some(KeywordsTable { keywords, location });
    suite
}

/// Tracks whether indented `def`s are methods of a module-level class.
#[derive(Debug, Default)]
struct ClassScope {
    in_class: bool,
    method_indent: Option<usize>,
}

impl ClassScope {
    fn observe(&mut self, indent: usize, trimmed: &str) {
        if indent == 0 {
            self.in_class = trimmed.starts_with("class ");
            self.method_indent = None;
        } else if self.in_class && self.method_indent.is_none() {
            self.method_indent = Some(indent);
        }
    }

    fn accepts(&self, indent: usize) -> bool {
        indent == 0 || (self.in_class && self.method_indent == Some(indent))
    }
}

/// Collect the characters of a possibly multi-line signature, from `def`
/// through the closing parenthesis. Returns the last line consumed.
fn collect_signature(lines: &[&str], start: usize) -> (Vec<SourceChar>, usize) {
    let mut chars = Vec::new();
    let mut depth = 0usize;
    let mut opened = false;

    for (line_no, line) in lines.iter().enumerate().skip(start) {
        for (column, c) in line.chars().enumerate() {
            if c == '#' && depth > 0 {
                break;
            }
            chars.push((c, Position::new(line_no, column)));
            match c {
                '(' | '[' | '{' => {
                    depth += 1;
                    opened = true;
                }
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        if opened && depth == 0 {
            return (chars, line_no);
        }
        chars.push((' ', Position::new(line_no, line.chars().count())));
    }

    (chars, lines.len().saturating_sub(1))
}

fn parse_def(signature: &[SourceChar], line_no: usize, line: &str, namespace: &str) -> Option<UserKeyword> {
    let text: String = signature.iter().map(|(c, _)| c).collect();
    let def_at = text.find("def ")?;
    let after_def = &text[def_at + 4..];
    let name_len = after_def.find('(')?;
    let name = after_def[..name_len].trim();

    if name.is_empty() || name.starts_with('_') {
        trace!(function = %name, "private python function skipped");
        return None;
    }

    let name_offset = text[..def_at + 4].chars().count()
        + after_def[..name_len].chars().take_while(|c| c.is_whitespace()).count();
    let name_span = span_of(signature, name_offset, name_offset + name.chars().count());
    let name_location = Location::Parsed(name_span);
    let id = if namespace.is_empty() {
        Identifier::new(name, name_location)
    } else {
        Identifier::namespaced(namespace, name, name_location)
    };

    let open = text[..def_at + 4 + name_len].chars().count();
    let close = matching_paren(signature, open)?;
    let params = split_params(signature, open + 1, close);

    let values: Vec<VariableDeclaration> = params
        .into_iter()
        .enumerate()
        .filter_map(|(idx, range)| parse_param(signature, range, idx == 0))
        .collect();

    let def_line = Location::Parsed(Span::from_coords(line_no, 0, line_no, line.chars().count()));
    let mut keyword = UserKeyword::new(id);
    keyword.location = def_line;
    keyword.arguments = Some(Arguments {
        id: Identifier::new("Arguments", Location::Parsed(span_of(signature, open, close + 1))),
        values,
        location: Location::Parsed(span_of(signature, open, close + 1)),
    });
    Some(keyword)
}

fn span_of(signature: &[SourceChar], start: usize, end: usize) -> Span {
    let start_pos = signature.get(start).map(|(_, p)| *p).unwrap_or_default();
    let end_pos = end
        .checked_sub(1)
        .and_then(|last| signature.get(last))
        .map(|(_, p)| Position::new(p.line, p.column + 1))
        .unwrap_or(start_pos);
    Span::new(start_pos, end_pos)
}

fn matching_paren(signature: &[SourceChar], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, (c, _)) in signature.iter().enumerate().skip(open) {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `[start, end)` on commas outside brackets and string literals.
fn split_params(signature: &[SourceChar], start: usize, end: usize) -> Vec<(usize, usize)> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut param_start = start;

    for idx in start..end {
        let c = signature[idx].0;
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(' | '[' | '{') => depth += 1,
            (None, ')' | ']' | '}') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                params.push((param_start, idx));
                param_start = idx + 1;
            }
            _ => {}
        }
    }
    params.push((param_start, end));
    params
}

/// One parameter: `name`, `name=default`, `name: type = default`, `*args`
/// or `**kwargs`. A leading `self`, bare `*` and `/` yield nothing.
fn parse_param(
    signature: &[SourceChar],
    (start, end): (usize, usize),
    is_first: bool,
) -> Option<VariableDeclaration> {
    let raw: String = signature[start..end].iter().map(|(c, _)| c).collect();
    let lead = raw.chars().take_while(|c| c.is_whitespace()).count();
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "*" || trimmed == "/" || (is_first && trimmed == "self") {
        return None;
    }

    let (kind, stars) = if trimmed.starts_with("**") {
        (VariableKind::Dictionary, 2)
    } else if trimmed.starts_with('*') {
        (VariableKind::List, 1)
    } else {
        (VariableKind::Scalar, 0)
    };

    let (head, default) = match trimmed.split_once('=') {
        Some((head, default)) => (head, Some(default)),
        None => (trimmed, None),
    };
    let name = head.split(':').next().unwrap_or(head).trim()[stars..].trim();
    if name.is_empty() {
        return None;
    }

    let param_start = start + lead;
    let name_start = param_start + stars;
    let name_span = span_of(signature, name_start, name_start + name.chars().count());
    let param_span = span_of(signature, param_start, param_start + trimmed.chars().count());

    let values = default
        .map(|default| {
            let default_start = param_start + head.chars().count() + 1;
            let skip = default.chars().take_while(|c| c.is_whitespace()).count();
            let value = default.trim();
            let from = default_start + skip;
            let cell = Cell::new(value, span_of(signature, from, from + value.chars().count()));
            parse_value(&cell)
        })
        .into_iter()
        .collect();

    Some(VariableDeclaration {
        id: Identifier::new(name, Location::Parsed(name_span)),
        kind,
        values,
        location: Location::Parsed(param_span),
    })
}
