//! Borrowed, type-tagged view over every AST node.

use crate::base::Location;
use crate::parser::ast::{
    Arguments, CallExpression, Documentation, Expression, Identifier, LibraryImport,
    KeywordsTable, Literal, ResourceImport, Return, SettingsTable, Setup, Step, StepBody,
    SuiteSetting, Tags, Teardown, Template, TemplateElement, TemplateLiteral, TestCase,
    TestCasesTable, TestSuite, Timeout, UserKeyword, VariableDeclaration, VariableExpression,
    VariableImport, VariablesTable,
};

/// Node type tag, the key of the traversal schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    TestSuite,
    SettingsTable,
    VariablesTable,
    KeywordsTable,
    TestCasesTable,
    SuiteSetting,
    LibraryImport,
    ResourceImport,
    VariableImport,
    UserKeyword,
    TestCase,
    Step,
    VariableDeclaration,
    Documentation,
    Arguments,
    Return,
    Timeout,
    Setup,
    Teardown,
    Tags,
    Template,
    Identifier,
    VariableExpression,
    Literal,
    TemplateLiteral,
    TemplateElement,
    CallExpression,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TestSuite => "TestSuite",
            Self::SettingsTable => "SettingsTable",
            Self::VariablesTable => "VariablesTable",
            Self::KeywordsTable => "KeywordsTable",
            Self::TestCasesTable => "TestCasesTable",
            Self::SuiteSetting => "SuiteSetting",
            Self::LibraryImport => "LibraryImport",
            Self::ResourceImport => "ResourceImport",
            Self::VariableImport => "VariableImport",
            Self::UserKeyword => "UserKeyword",
            Self::TestCase => "TestCase",
            Self::Step => "Step",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::Documentation => "Documentation",
            Self::Arguments => "Arguments",
            Self::Return => "Return",
            Self::Timeout => "Timeout",
            Self::Setup => "Setup",
            Self::Teardown => "Teardown",
            Self::Tags => "Tags",
            Self::Template => "Template",
            Self::Identifier => "Identifier",
            Self::VariableExpression => "VariableExpression",
            Self::Literal => "Literal",
            Self::TemplateLiteral => "TemplateLiteral",
            Self::TemplateElement => "TemplateElement",
            Self::CallExpression => "CallExpression",
        }
    }
}

/// A reference to any AST node.
///
/// `Expression` and `StepBody` are sum types rather than nodes; converting
/// them yields the wrapped node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    TestSuite(&'a TestSuite),
    SettingsTable(&'a SettingsTable),
    VariablesTable(&'a VariablesTable),
    KeywordsTable(&'a KeywordsTable),
    TestCasesTable(&'a TestCasesTable),
    SuiteSetting(&'a SuiteSetting),
    LibraryImport(&'a LibraryImport),
    ResourceImport(&'a ResourceImport),
    VariableImport(&'a VariableImport),
    UserKeyword(&'a UserKeyword),
    TestCase(&'a TestCase),
    Step(&'a Step),
    VariableDeclaration(&'a VariableDeclaration),
    Documentation(&'a Documentation),
    Arguments(&'a Arguments),
    Return(&'a Return),
    Timeout(&'a Timeout),
    Setup(&'a Setup),
    Teardown(&'a Teardown),
    Tags(&'a Tags),
    Template(&'a Template),
    Identifier(&'a Identifier),
    VariableExpression(&'a VariableExpression),
    Literal(&'a Literal),
    TemplateLiteral(&'a TemplateLiteral),
    TemplateElement(&'a TemplateElement),
    CallExpression(&'a CallExpression),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::TestSuite(_) => NodeKind::TestSuite,
            NodeRef::SettingsTable(_) => NodeKind::SettingsTable,
            NodeRef::VariablesTable(_) => NodeKind::VariablesTable,
            NodeRef::KeywordsTable(_) => NodeKind::KeywordsTable,
            NodeRef::TestCasesTable(_) => NodeKind::TestCasesTable,
            NodeRef::SuiteSetting(_) => NodeKind::SuiteSetting,
            NodeRef::LibraryImport(_) => NodeKind::LibraryImport,
            NodeRef::ResourceImport(_) => NodeKind::ResourceImport,
            NodeRef::VariableImport(_) => NodeKind::VariableImport,
            NodeRef::UserKeyword(_) => NodeKind::UserKeyword,
            NodeRef::TestCase(_) => NodeKind::TestCase,
            NodeRef::Step(_) => NodeKind::Step,
            NodeRef::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            NodeRef::Documentation(_) => NodeKind::Documentation,
            NodeRef::Arguments(_) => NodeKind::Arguments,
            NodeRef::Return(_) => NodeKind::Return,
            NodeRef::Timeout(_) => NodeKind::Timeout,
            NodeRef::Setup(_) => NodeKind::Setup,
            NodeRef::Teardown(_) => NodeKind::Teardown,
            NodeRef::Tags(_) => NodeKind::Tags,
            NodeRef::Template(_) => NodeKind::Template,
            NodeRef::Identifier(_) => NodeKind::Identifier,
            NodeRef::VariableExpression(_) => NodeKind::VariableExpression,
            NodeRef::Literal(_) => NodeKind::Literal,
            NodeRef::TemplateLiteral(_) => NodeKind::TemplateLiteral,
            NodeRef::TemplateElement(_) => NodeKind::TemplateElement,
            NodeRef::CallExpression(_) => NodeKind::CallExpression,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            NodeRef::TestSuite(n) => n.location,
            NodeRef::SettingsTable(n) => n.location,
            NodeRef::VariablesTable(n) => n.location,
            NodeRef::KeywordsTable(n) => n.location,
            NodeRef::TestCasesTable(n) => n.location,
            NodeRef::SuiteSetting(n) => n.location,
            NodeRef::LibraryImport(n) => n.location,
            NodeRef::ResourceImport(n) => n.location,
            NodeRef::VariableImport(n) => n.location,
            NodeRef::UserKeyword(n) => n.location,
            NodeRef::TestCase(n) => n.location,
            NodeRef::Step(n) => n.location,
            NodeRef::VariableDeclaration(n) => n.location,
            NodeRef::Documentation(n) => n.location,
            NodeRef::Arguments(n) => n.location,
            NodeRef::Return(n) => n.location,
            NodeRef::Timeout(n) => n.location,
            NodeRef::Setup(n) => n.location,
            NodeRef::Teardown(n) => n.location,
            NodeRef::Tags(n) => n.location,
            NodeRef::Template(n) => n.location,
            NodeRef::Identifier(n) => n.location,
            NodeRef::VariableExpression(n) => n.location,
            NodeRef::Literal(n) => n.location,
            NodeRef::TemplateLiteral(n) => n.location,
            NodeRef::TemplateElement(n) => n.location,
            NodeRef::CallExpression(n) => n.location,
        }
    }

    pub fn as_user_keyword(&self) -> Option<&'a UserKeyword> {
        match *self {
            NodeRef::UserKeyword(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_test_case(&self) -> Option<&'a TestCase> {
        match *self {
            NodeRef::TestCase(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&'a CallExpression> {
        match *self {
            NodeRef::CallExpression(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_variable_declaration(&self) -> Option<&'a VariableDeclaration> {
        match *self {
            NodeRef::VariableDeclaration(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_variable_expression(&self) -> Option<&'a VariableExpression> {
        match *self {
            NodeRef::VariableExpression(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&'a Identifier> {
        match *self {
            NodeRef::Identifier(node) => Some(node),
            _ => None,
        }
    }
}

impl<'a> From<&'a Expression> for NodeRef<'a> {
    fn from(expression: &'a Expression) -> Self {
        match expression {
            Expression::Literal(node) => NodeRef::Literal(node),
            Expression::Variable(node) => NodeRef::VariableExpression(node),
            Expression::Template(node) => NodeRef::TemplateLiteral(node),
            Expression::Call(node) => NodeRef::CallExpression(node),
        }
    }
}

impl<'a> From<&'a StepBody> for NodeRef<'a> {
    fn from(body: &'a StepBody) -> Self {
        match body {
            StepBody::Declaration(node) => NodeRef::VariableDeclaration(node),
            StepBody::Call(node) => NodeRef::CallExpression(node),
        }
    }
}

impl<'a> From<&'a TestSuite> for NodeRef<'a> {
    fn from(suite: &'a TestSuite) -> Self {
        NodeRef::TestSuite(suite)
    }
}
