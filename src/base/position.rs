/// Position tracking for cells and AST nodes
///
/// Stores the source location (line/column) of parsed elements for editor
/// features like go-to-definition, references and node-at-cursor lookup.
/// A span representing a range in source code (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed, columns counted in characters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Zero-width span at a single position
    pub fn empty_at(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Smallest span covering both `self` and `other`
    pub fn cover(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Check if a position falls within this span.
    ///
    /// The end is inclusive: a cursor placed right after the last
    /// character still counts as inside.
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.column < self.start.column {
            return false;
        }
        if position.line == self.end.line && position.column > self.end.column {
            return false;
        }
        true
    }

    /// Check if `other` lies entirely within this span
    pub fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Where a node came from.
///
/// Everything the parser produces is `Parsed`. Keywords synthesized from
/// library definitions have no source text and are `Synthetic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Parsed(Span),
    Synthetic,
}

impl Location {
    pub fn span(&self) -> Option<Span> {
        match self {
            Location::Parsed(span) => Some(*span),
            Location::Synthetic => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Location::Synthetic)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.span().is_some_and(|span| span.contains(position))
    }

    /// Cover two locations. Synthetic absorbs nothing.
    pub fn cover(&self, other: &Location) -> Location {
        match (self, other) {
            (Location::Parsed(a), Location::Parsed(b)) => Location::Parsed(a.cover(b)),
            (Location::Parsed(_), Location::Synthetic) => *self,
            (Location::Synthetic, _) => *other,
        }
    }
}

impl From<Span> for Location {
    fn from(span: Span) -> Self {
        Location::Parsed(span)
    }
}
