use robotls::parser::{TestSuite, parse_file};
use robotls::syntax::{EnterFn, NodeKind, NodeRef, Visitor, VisitorOption, collect_nodes, traverse};

use crate::helpers::source_fixtures::LOGIN_SUITE;

fn login_suite() -> TestSuite {
    parse_file(LOGIN_SUITE, "login").unwrap()
}

fn callees<'a>(root: impl Into<NodeRef<'a>>) -> Vec<String> {
    collect_nodes(root, |node| node.kind() == NodeKind::CallExpression)
        .into_iter()
        .filter_map(|node| node.as_call())
        .map(|call| call.callee.full_name())
        .collect()
}

#[test]
fn test_calls_in_document_order() {
    let suite = login_suite();
    let valid_login = &suite.test_cases()[0];
    assert_eq!(
        callees(NodeRef::TestCase(valid_login)),
        vec!["Open App", "common.Find", "Get Title", "Run Keywords", "Find", "Close All"]
    );

    let settings = suite.settings_table.as_ref().unwrap();
    assert_eq!(
        callees(NodeRef::SettingsTable(settings)),
        vec!["Open App", "browser.Close All"]
    );
}

#[test]
fn test_skip_settings_table() {
    let suite = login_suite();
    let mut seen = Vec::new();
    traverse(
        &suite,
        &mut EnterFn(|node: NodeRef<'_>, _parent: Option<NodeRef<'_>>| {
            seen.push(node.kind());
            if node.kind() == NodeKind::SettingsTable {
                VisitorOption::Skip
            } else {
                VisitorOption::Continue
            }
        }),
    );
    assert!(seen.contains(&NodeKind::SettingsTable));
    assert!(!seen.contains(&NodeKind::SuiteSetting));
    assert!(!seen.contains(&NodeKind::ResourceImport));
    assert!(seen.contains(&NodeKind::TestCase));
}

#[test]
fn test_break_stops_at_first_test_case() {
    let suite = login_suite();
    let mut names = Vec::new();
    let broke = traverse(
        &suite,
        &mut EnterFn(|node: NodeRef<'_>, _parent: Option<NodeRef<'_>>| {
            if let Some(case) = node.as_test_case() {
                names.push(case.id.name.to_string());
                return VisitorOption::Break;
            }
            VisitorOption::Continue
        }),
    );
    assert!(broke);
    assert_eq!(names, vec!["Valid Login"]);
}

/// Checks that every `leave` matches the most recent unmatched `enter`
/// and that parents are reported consistently.
#[derive(Default)]
struct Balanced<'a> {
    stack: Vec<NodeRef<'a>>,
    entered: usize,
    left: usize,
}

impl<'a> Visitor<'a> for Balanced<'a> {
    fn enter(&mut self, node: NodeRef<'a>, parent: Option<NodeRef<'a>>) -> VisitorOption {
        assert_eq!(
            parent.map(|p| (p.kind(), p.location())),
            self.stack.last().map(|p| (p.kind(), p.location()))
        );
        self.stack.push(node);
        self.entered += 1;
        VisitorOption::Continue
    }

    fn leave(&mut self, node: NodeRef<'a>, _parent: Option<NodeRef<'a>>) -> VisitorOption {
        let top = self.stack.pop().unwrap();
        assert_eq!((top.kind(), top.location()), (node.kind(), node.location()));
        self.left += 1;
        VisitorOption::Continue
    }
}

#[test]
fn test_enter_and_leave_are_balanced() {
    let suite = login_suite();
    let mut visitor = Balanced::default();
    assert!(!traverse(&suite, &mut visitor));
    assert!(visitor.stack.is_empty());
    assert_eq!(visitor.entered, visitor.left);
    assert!(visitor.entered > 20);
}

#[test]
fn test_parent_of_template_keyword() {
    let suite = login_suite();
    let mut parents = Vec::new();
    traverse(
        &suite,
        &mut EnterFn(|node: NodeRef<'_>, parent: Option<NodeRef<'_>>| {
            if let Some(id) = node.as_identifier()
                && id.full_name() == "common.Find"
            {
                parents.push(parent.map(|p| p.kind()));
            }
            VisitorOption::Continue
        }),
    );
    assert_eq!(
        parents,
        vec![Some(NodeKind::CallExpression), Some(NodeKind::Template)]
    );
}
