//! Structural parsing of whole files.

use robotls::Location;
use robotls::parser::grammar::settings::{FunctionSetting, apply_test_case_setting};
use robotls::parser::{
    CallExpression, Expression, Identifier, ParseError, StepBody, TestCase, TestSuite,
    VariableKind, parse_file, read_row, read_tables,
};

use crate::helpers::source_fixtures::{COMMON_RESOURCE, LOGIN_SUITE};

fn only_call(suite: &TestSuite, keyword: usize, step: usize) -> &CallExpression {
    match &suite.keywords()[keyword].steps[step].body {
        StepBody::Call(call) => call,
        other => panic!("expected a call step, got {:?}", other),
    }
}

fn literal(expr: &Expression) -> &str {
    expr.as_literal().map(|l| l.value.as_str()).unwrap_or("<not a literal>")
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_simple_keyword_table() {
    let suite = parse_file("*** Keywords ***\nKeyword Name\n    Step 1    arg1    arg2\n", "lib").unwrap();

    let keywords = suite.keywords();
    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].id.name, "Keyword Name");
    assert_eq!(keywords[0].steps.len(), 1);

    let call = only_call(&suite, 0, 0);
    assert_eq!(call.callee.name, "Step 1");
    let args: Vec<&str> = call.args.iter().map(literal).collect();
    assert_eq!(args, vec!["arg1", "arg2"]);
}

#[test]
fn test_composite_keyword_decomposes() {
    let suite = parse_file(
        "*** Keywords ***\nFarewell\n    Run Keywords    Say Hello    AND    Kiss Goodbye\n",
        "lib",
    )
    .unwrap();

    let call = only_call(&suite, 0, 0);
    let nested: Vec<&CallExpression> = call.nested_calls().collect();
    let names: Vec<&str> = nested.iter().map(|c| c.callee.name.as_str()).collect();
    assert_eq!(names, vec!["Say Hello", "Kiss Goodbye"]);
    assert!(nested.iter().all(|c| c.args.is_empty()));
    assert!(
        nested
            .iter()
            .all(|c| c.callee.name != "AND" && c.callee.name != "Run Keywords")
    );
}

#[test]
fn test_composite_matching_ignores_case() {
    let suite = parse_file(
        "*** Keywords ***\nRetry\n    wait until KEYWORD succeeds    3x    1s    Check    ready\n",
        "lib",
    )
    .unwrap();

    let call = only_call(&suite, 0, 0);
    assert_eq!(literal(&call.args[0]), "3x");
    assert_eq!(literal(&call.args[1]), "1s");
    let nested = call.args[2].as_call().unwrap();
    assert_eq!(nested.callee.name, "Check");
    assert_eq!(literal(&nested.args[0]), "ready");
}

#[test]
fn test_template_literal_argument() {
    let suite = parse_file(
        "*** Test Cases ***\nEmbedded\n    Log    Keyword ${arg1} embedded ${arg2}\n",
        "suite",
    )
    .unwrap();

    let StepBody::Call(call) = &suite.test_cases()[0].steps[0].body else {
        panic!("expected call");
    };
    let Expression::Template(template) = &call.args[0] else {
        panic!("expected template literal, got {:?}", call.args[0]);
    };
    let quasis: Vec<&str> = template.quasis.iter().map(|q| q.value.as_str()).collect();
    assert_eq!(quasis, vec!["Keyword ", " embedded ", ""]);
    let names: Vec<&str> = template.expressions.iter().map(|e| e.id.name.as_str()).collect();
    assert_eq!(names, vec!["arg1", "arg2"]);
}

// =============================================================================
// WHOLE FILES
// =============================================================================

#[test]
fn test_resource_file() {
    let suite = parse_file(COMMON_RESOURCE, "common").unwrap();

    let settings = suite.settings_table.as_ref().unwrap();
    assert_eq!(settings.library_imports.len(), 1);
    assert_eq!(settings.library_imports[0].target.value, "SeleniumLibrary");
    assert_eq!(
        settings.documentation.as_ref().map(|d| d.value.value.as_str()),
        Some("Shared helpers")
    );

    let variables = &suite.variables_table.as_ref().unwrap().variables;
    assert_eq!(variables.len(), 2);
    assert_eq!(variables[0].kind, VariableKind::Scalar);
    assert_eq!(variables[1].kind, VariableKind::List);
    assert_eq!(variables[1].values.len(), 2);

    let open_app = &suite.keywords()[0];
    assert_eq!(open_app.id.full_name(), "common.Open App");
    assert_eq!(open_app.arguments.as_ref().unwrap().values.len(), 1);
    assert!(open_app.documentation.is_some());
    assert_eq!(open_app.steps.len(), 1);
}

#[test]
fn test_suite_file() {
    let suite = parse_file(LOGIN_SUITE, "login").unwrap();

    let settings = suite.settings_table.as_ref().unwrap();
    assert_eq!(settings.resource_imports.len(), 2);
    let teardown = settings.suite_teardown.as_ref().unwrap();
    let callee = &teardown.value.as_ref().unwrap().callee;
    assert_eq!(callee.namespace.as_deref(), Some("browser"));
    assert_eq!(callee.name, "Close All");

    let tests = suite.test_cases();
    assert_eq!(tests.len(), 2);
    assert_eq!(tests[0].steps.len(), 4);
    assert!(matches!(tests[0].steps[2].body, StepBody::Declaration(_)));

    let template = tests[1].template.as_ref().unwrap();
    assert_eq!(template.keyword.as_ref().unwrap().full_name(), "common.Find");
    assert_eq!(tests[1].steps.len(), 2);
}

#[test]
fn test_continuation_rows_extend_statements() {
    let text = "\
*** Variables ***
@{ITEMS}    one    two
...    three

*** Keywords ***
Long Call
    [Arguments]    ${a}
    ...    ${b}
    Log Many    first
    ...    second    third
";
    let suite = parse_file(text, "lib").unwrap();

    let items = &suite.variables_table.as_ref().unwrap().variables[0];
    assert_eq!(items.values.len(), 3);

    let keyword = &suite.keywords()[0];
    assert_eq!(keyword.arguments.as_ref().unwrap().values.len(), 2);
    let StepBody::Call(call) = &keyword.steps[0].body else {
        panic!("expected call");
    };
    let args: Vec<&str> = call.args.iter().map(literal).collect();
    assert_eq!(args, vec!["first", "second", "third"]);
    // the step spans both physical lines
    let span = keyword.steps[0].location.span().unwrap();
    assert_eq!((span.start.line, span.end.line), (8, 9));
}

#[test]
fn test_continuation_marker_placement_per_table() {
    let keywords = parse_file(
        "*** Keywords ***\nKw\n    Log Many    a\n...    b\nNext\n",
        "",
    )
    .unwrap();
    let names: Vec<&str> = keywords.keywords().iter().map(|k| k.id.name.as_str()).collect();
    assert_eq!(names, vec!["Kw", "Next"]);
    let StepBody::Call(call) = &keywords.keywords()[0].steps[0].body else {
        panic!("expected call");
    };
    assert_eq!(call.args.iter().map(literal).collect::<Vec<_>>(), vec!["a"]);

    let variables = parse_file("*** Variables ***\n@{L}    a\n    ...    b\n", "").unwrap();
    let list = &variables.variables_table.as_ref().unwrap().variables[0];
    assert_eq!(list.values.len(), 1);

    let settings = parse_file(
        "*** Settings ***\nLibrary    Collections\n...    arg\n    ...    ignored\n",
        "",
    )
    .unwrap();
    let import = &settings.settings_table.as_ref().unwrap().library_imports[0];
    assert_eq!(import.args.iter().map(literal).collect::<Vec<_>>(), vec!["arg"]);
}

#[test]
fn test_tolerated_gaps_are_dropped() {
    let text = "\
*** Settings ***
Unknown Setting    value

*** Comments ***
Anything    goes here

*** Test Cases ***
    ...    orphan continuation
Case
    No Operation
";
    let tables = read_tables(text);
    assert_eq!(tables.len(), 3);

    let suite = parse_file(text, "suite").unwrap();
    let settings = suite.settings_table.as_ref().unwrap();
    assert!(settings.library_imports.is_empty());
    assert!(settings.suite_setup.is_none());
    assert_eq!(suite.test_cases().len(), 1);
    assert_eq!(suite.test_cases()[0].steps.len(), 1);
}

#[test]
fn test_foreign_setting_is_a_step() {
    let suite = parse_file(
        "*** Test Cases ***\nCase\n    [Return]    value\n    [Setup]    Prepare\n",
        "suite",
    )
    .unwrap();
    let case = &suite.test_cases()[0];
    assert!(case.setup.is_some());
    assert_eq!(case.steps.len(), 1);
    let StepBody::Call(call) = &case.steps[0].body else {
        panic!("expected call");
    };
    assert_eq!(call.callee.name, "[Return]");
}

#[test]
fn test_dispatcher_rejects_foreign_setting() {
    let mut case = TestCase::new(Identifier::new("Case", Location::Synthetic));
    let cells = read_row(4, "[Return]    value").cells;
    let err = apply_test_case_setting(&mut case, FunctionSetting::Return, &cells).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedSetting { line: 4, .. }));
}

#[test]
fn test_table_locations_enclose_children() {
    let suite = parse_file(LOGIN_SUITE, "login").unwrap();
    let suite_span = suite.location.span().unwrap();
    let table = suite.test_cases_table.as_ref().unwrap();
    let table_span = table.location.span().unwrap();
    assert!(suite_span.encloses(&table_span));
    for case in &table.test_cases {
        let case_span = case.location.span().unwrap();
        assert!(table_span.encloses(&case_span));
        for step in &case.steps {
            assert!(case_span.encloses(&step.location.span().unwrap()));
        }
    }
}
