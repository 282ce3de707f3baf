//! Logos-based lexer for cell contents.
//!
//! A cell is split into plain text and `[$@%&]{name}` variable references in
//! a single pass. Offsets are reported in characters relative to the cell
//! start so they can be added to the cell's column.

use logos::Logos;

/// Token kinds inside a cell
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueToken {
    /// `${name}`, `@{name}`, `%{name}`, `&{name}`
    #[regex(r"[$@%&]\{[^}]+\}")]
    Variable,

    #[regex(r"[^$@%&]+")]
    Text,

    /// A sigil that does not open a complete reference
    #[regex(r"[$@%&]")]
    Sigil,
}

/// A token with its text and character offsets within the cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: ValueToken,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn is_variable(&self) -> bool {
        self.kind == ValueToken::Variable
    }

    /// Sigil and bare name of a variable token: `${foo}` → (`$`, `foo`)
    pub fn variable_parts(&self) -> Option<(char, &str)> {
        if !self.is_variable() {
            return None;
        }
        let sigil = self.text.chars().next()?;
        let name = &self.text[2..self.text.len() - 1];
        Some((sigil, name))
    }
}

/// Tokenize a cell's content.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    tokenize_into(input, 0, &mut tokens);
    tokens
}

fn tokenize_into<'a>(input: &'a str, mut column: usize, tokens: &mut Vec<Token<'a>>) {
    let mut lexer = ValueToken::lexer(input);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let width = text.chars().count();
        let Ok(kind) = result else {
            // An unterminated reference: the sigil stands alone and the
            // rest of the slice is lexed again.
            let sigil_len = text.chars().next().map_or(0, char::len_utf8);
            let rest_at = lexer.span().start + sigil_len;
            tokens.push(Token {
                kind: ValueToken::Sigil,
                text: &text[..sigil_len],
                start: column,
                end: column + 1,
            });
            tokenize_into(&input[rest_at..], column + 1, tokens);
            return;
        };
        tokens.push(Token {
            kind,
            text,
            start: column,
            end: column + width,
        });
        column += width;
    }
}
