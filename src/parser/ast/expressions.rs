use smol_str::SmolStr;

use crate::base::Location;

// ============================================================================
// Identifier
// ============================================================================

/// A name, optionally qualified by a namespace (`Resource.Keyword`).
///
/// A namespaced identifier's namespace is the text before the *last* dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub namespace: Option<SmolStr>,
    pub name: SmolStr,
    pub location: Location,
}

impl Identifier {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            location,
        }
    }

    pub fn namespaced(
        namespace: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        location: Location,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
            location,
        }
    }

    pub fn is_namespaced(&self) -> bool {
        self.namespace.is_some()
    }

    /// `namespace.name` for namespaced identifiers, `name` otherwise
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.to_string(),
        }
    }
}

// ============================================================================
// Variables
// ============================================================================

/// Variable type, selected by the sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableKind {
    Scalar,
    List,
    Dictionary,
    Environment,
}

impl VariableKind {
    pub fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '$' => Some(Self::Scalar),
            '@' => Some(Self::List),
            '&' => Some(Self::Dictionary),
            '%' => Some(Self::Environment),
            _ => None,
        }
    }

    pub fn sigil(&self) -> char {
        match self {
            Self::Scalar => '$',
            Self::List => '@',
            Self::Dictionary => '&',
            Self::Environment => '%',
        }
    }

    /// `${name}` style reference text
    pub fn format_name(&self, name: &str) -> String {
        format!("{}{{{}}}", self.sigil(), name)
    }
}

/// A reference to a variable: `${name}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableExpression {
    pub id: Identifier,
    pub kind: VariableKind,
    pub location: Location,
}

// ============================================================================
// Values
// ============================================================================

/// Plain text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
    pub location: Location,
}

impl Literal {
    pub fn new(value: impl Into<String>, location: Location) -> Self {
        Self {
            value: value.into(),
            location,
        }
    }
}

/// Literal segment of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateElement {
    pub value: String,
    pub location: Location,
}

/// Text interleaved with variable references: `Hello ${name}!`
///
/// `quasis` always has exactly one more element than `expressions`; source
/// order is `quasis[0] expressions[0] quasis[1] ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLiteral {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<VariableExpression>,
    pub location: Location,
}

/// A keyword invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub args: Vec<Expression>,
    pub location: Location,
}

impl CallExpression {
    /// Nested calls among the arguments (composite keywords)
    pub fn nested_calls(&self) -> impl Iterator<Item = &CallExpression> {
        self.args.iter().filter_map(|arg| match arg {
            Expression::Call(call) => Some(call),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    Variable(VariableExpression),
    Template(TemplateLiteral),
    Call(CallExpression),
}

impl Expression {
    pub fn location(&self) -> Location {
        match self {
            Expression::Literal(node) => node.location,
            Expression::Variable(node) => node.location,
            Expression::Template(node) => node.location,
            Expression::Call(node) => node.location,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpression> {
        match self {
            Expression::Call(call) => Some(call),
            _ => None,
        }
    }
}
