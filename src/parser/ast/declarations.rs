use super::{CallExpression, Expression, Identifier, Literal, VariableKind};
use crate::base::Location;

// ============================================================================
// Variable declarations and steps
// ============================================================================

/// `${name}    value`, `@{list}    a    b`, `[Arguments]    ${arg}=default`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub kind: VariableKind,
    /// Scalars hold at most one value; lists and dictionaries hold all
    /// value cells. A step assignment holds the assigned call expression.
    pub values: Vec<Expression>,
    pub location: Location,
}

impl VariableDeclaration {
    pub fn value(&self) -> Option<&Expression> {
        self.values.first()
    }

    /// `${name}` form of the declared name
    pub fn display_name(&self) -> String {
        self.kind.format_name(&self.id.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepBody {
    Declaration(VariableDeclaration),
    Call(CallExpression),
}

/// One logical row in a keyword or test case body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub body: StepBody,
    pub location: Location,
}

// ============================================================================
// Function settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documentation {
    pub id: Identifier,
    pub value: Literal,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    pub id: Identifier,
    pub values: Vec<VariableDeclaration>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    pub id: Identifier,
    pub values: Vec<Expression>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeout {
    pub id: Identifier,
    pub value: Option<Literal>,
    pub message: Option<Literal>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub id: Identifier,
    pub keyword: Option<CallExpression>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teardown {
    pub id: Identifier,
    pub keyword: Option<CallExpression>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tags {
    pub id: Identifier,
    pub values: Vec<Literal>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: Identifier,
    pub keyword: Option<Identifier>,
    pub location: Location,
}

// ============================================================================
// Functions
// ============================================================================

/// A keyword declared in a keywords table or supplied by a library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserKeyword {
    pub id: Identifier,
    pub steps: Vec<Step>,
    pub documentation: Option<Documentation>,
    pub arguments: Option<Arguments>,
    pub returns: Option<Return>,
    pub timeout: Option<Timeout>,
    pub teardown: Option<Teardown>,
    pub tags: Option<Tags>,
    pub location: Location,
}

impl UserKeyword {
    pub fn new(id: Identifier) -> Self {
        let location = id.location;
        Self {
            id,
            steps: Vec::new(),
            documentation: None,
            arguments: None,
            returns: None,
            timeout: None,
            teardown: None,
            tags: None,
            location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub id: Identifier,
    pub steps: Vec<Step>,
    pub documentation: Option<Documentation>,
    pub setup: Option<Setup>,
    pub teardown: Option<Teardown>,
    pub template: Option<Template>,
    pub timeout: Option<Timeout>,
    pub tags: Option<Tags>,
    pub location: Location,
}

impl TestCase {
    pub fn new(id: Identifier) -> Self {
        let location = id.location;
        Self {
            id,
            steps: Vec::new(),
            documentation: None,
            setup: None,
            teardown: None,
            template: None,
            timeout: None,
            tags: None,
            location,
        }
    }
}
