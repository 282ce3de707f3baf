use super::{
    CallExpression, Documentation, Expression, Identifier, Literal, Tags, TestCase, Timeout,
    UserKeyword, VariableDeclaration,
};
use crate::base::Location;

// ============================================================================
// Settings table
// ============================================================================

/// `Suite Setup`, `Suite Teardown`, `Test Setup`, `Test Teardown`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSetting {
    pub name: Identifier,
    pub value: Option<CallExpression>,
    pub location: Location,
}

/// `Library    Name    args...    WITH NAME    Alias`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryImport {
    pub target: Literal,
    pub args: Vec<Expression>,
    pub alias: Option<Literal>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceImport {
    pub target: Literal,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableImport {
    pub target: Literal,
    pub args: Vec<Expression>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsTable {
    pub documentation: Option<Documentation>,
    pub suite_setup: Option<SuiteSetting>,
    pub suite_teardown: Option<SuiteSetting>,
    pub test_setup: Option<SuiteSetting>,
    pub test_teardown: Option<SuiteSetting>,
    pub test_timeout: Option<Timeout>,
    pub force_tags: Option<Tags>,
    pub default_tags: Option<Tags>,
    pub library_imports: Vec<LibraryImport>,
    pub resource_imports: Vec<ResourceImport>,
    pub variable_imports: Vec<VariableImport>,
    pub location: Location,
}

impl SettingsTable {
    pub fn new(location: Location) -> Self {
        Self {
            documentation: None,
            suite_setup: None,
            suite_teardown: None,
            test_setup: None,
            test_teardown: None,
            test_timeout: None,
            force_tags: None,
            default_tags: None,
            library_imports: Vec::new(),
            resource_imports: Vec::new(),
            variable_imports: Vec::new(),
            location,
        }
    }
}

// ============================================================================
// Other tables
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablesTable {
    pub variables: Vec<VariableDeclaration>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordsTable {
    pub keywords: Vec<UserKeyword>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCasesTable {
    pub test_cases: Vec<TestCase>,
    pub location: Location,
}

// ============================================================================
// Test suite
// ============================================================================

/// Root of a parsed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    pub settings_table: Option<SettingsTable>,
    pub variables_table: Option<VariablesTable>,
    pub keywords_table: Option<KeywordsTable>,
    pub test_cases_table: Option<TestCasesTable>,
    pub location: Location,
}

impl TestSuite {
    pub fn new(location: Location) -> Self {
        Self {
            settings_table: None,
            variables_table: None,
            keywords_table: None,
            test_cases_table: None,
            location,
        }
    }

    /// Keywords declared in this suite, in source order
    pub fn keywords(&self) -> &[UserKeyword] {
        self.keywords_table
            .as_ref()
            .map(|t| t.keywords.as_slice())
            .unwrap_or_default()
    }

    /// Test cases declared in this suite, in source order
    pub fn test_cases(&self) -> &[TestCase] {
        self.test_cases_table
            .as_ref()
            .map(|t| t.test_cases.as_slice())
            .unwrap_or_default()
    }

    /// Variables declared in the variables table, in source order
    pub fn variables(&self) -> &[VariableDeclaration] {
        self.variables_table
            .as_ref()
            .map(|t| t.variables.as_slice())
            .unwrap_or_default()
    }
}
