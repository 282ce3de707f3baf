//! Child-slot schema: the one place that encodes the shape of each node.
//!
//! [`child_slots`] lists a node kind's slots in traversal order, and
//! [`collect_slot`] resolves a slot name on a concrete node. A new node kind
//! needs an entry in both and nothing else.

use super::node::{NodeKind, NodeRef};

/// A named child position on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSlot {
    pub name: &'static str,
    /// Whether the order of children in this slot carries meaning. Purely
    /// informational: traversal always visits in declaration order.
    pub ordered: bool,
}

const fn slot(name: &'static str) -> ChildSlot {
    ChildSlot {
        name,
        ordered: false,
    }
}

const fn ordered(name: &'static str) -> ChildSlot {
    ChildSlot {
        name,
        ordered: true,
    }
}

const NO_CHILDREN: &[ChildSlot] = &[];

/// Child slots of a node kind, in visiting order.
pub fn child_slots(kind: NodeKind) -> &'static [ChildSlot] {
    match kind {
        NodeKind::TestSuite => const { &[
            slot("settings_table"),
            slot("variables_table"),
            slot("keywords_table"),
            slot("test_cases_table"),
        ] },
        NodeKind::SettingsTable => const { &[
            slot("documentation"),
            slot("suite_setup"),
            slot("suite_teardown"),
            slot("test_setup"),
            slot("test_teardown"),
            slot("test_timeout"),
            slot("force_tags"),
            slot("default_tags"),
            ordered("library_imports"),
            ordered("resource_imports"),
            ordered("variable_imports"),
        ] },
        NodeKind::VariablesTable => const { &[ordered("variables")] },
        NodeKind::KeywordsTable => const { &[ordered("keywords")] },
        NodeKind::TestCasesTable => const { &[ordered("test_cases")] },
        NodeKind::SuiteSetting => const { &[slot("name"), slot("value")] },
        NodeKind::LibraryImport => const { &[slot("target"), ordered("args"), slot("alias")] },
        NodeKind::ResourceImport => const { &[slot("target")] },
        NodeKind::VariableImport => const { &[slot("target"), ordered("args")] },
        NodeKind::UserKeyword => const { &[
            slot("id"),
            slot("documentation"),
            slot("arguments"),
            slot("returns"),
            slot("timeout"),
            slot("teardown"),
            slot("tags"),
            ordered("steps"),
        ] },
        NodeKind::TestCase => const { &[
            slot("id"),
            slot("documentation"),
            slot("setup"),
            slot("teardown"),
            slot("template"),
            slot("timeout"),
            slot("tags"),
            ordered("steps"),
        ] },
        NodeKind::Step => const { &[slot("body")] },
        NodeKind::VariableDeclaration => const { &[slot("id"), ordered("values")] },
        NodeKind::Documentation => const { &[slot("id"), slot("value")] },
        NodeKind::Arguments => const { &[slot("id"), ordered("values")] },
        NodeKind::Return => const { &[slot("id"), ordered("values")] },
        NodeKind::Timeout => const { &[slot("id"), slot("value"), slot("message")] },
        NodeKind::Setup | NodeKind::Teardown => const { &[slot("id"), slot("keyword")] },
        NodeKind::Tags => const { &[slot("id"), ordered("values")] },
        NodeKind::Template => const { &[slot("id"), slot("keyword")] },
        NodeKind::VariableExpression => const { &[slot("id")] },
        NodeKind::TemplateLiteral => const { &[ordered("quasis"), ordered("expressions")] },
        NodeKind::CallExpression => const { &[slot("callee"), ordered("args")] },
        NodeKind::Identifier | NodeKind::Literal | NodeKind::TemplateElement => NO_CHILDREN,
    }
}

/// Push the children held in `slot` of `node` onto `out`. Absent optional
/// children and unknown slot names push nothing.
pub fn collect_slot<'a>(node: NodeRef<'a>, slot: &str, out: &mut Vec<NodeRef<'a>>) {
    match (node, slot) {
        (NodeRef::TestSuite(n), "settings_table") => {
            out.extend(n.settings_table.as_ref().map(NodeRef::SettingsTable))
        }
        (NodeRef::TestSuite(n), "variables_table") => {
            out.extend(n.variables_table.as_ref().map(NodeRef::VariablesTable))
        }
        (NodeRef::TestSuite(n), "keywords_table") => {
            out.extend(n.keywords_table.as_ref().map(NodeRef::KeywordsTable))
        }
        (NodeRef::TestSuite(n), "test_cases_table") => {
            out.extend(n.test_cases_table.as_ref().map(NodeRef::TestCasesTable))
        }

        (NodeRef::SettingsTable(n), "documentation") => {
            out.extend(n.documentation.as_ref().map(NodeRef::Documentation))
        }
        (NodeRef::SettingsTable(n), "suite_setup") => {
            out.extend(n.suite_setup.as_ref().map(NodeRef::SuiteSetting))
        }
        (NodeRef::SettingsTable(n), "suite_teardown") => {
            out.extend(n.suite_teardown.as_ref().map(NodeRef::SuiteSetting))
        }
        (NodeRef::SettingsTable(n), "test_setup") => {
            out.extend(n.test_setup.as_ref().map(NodeRef::SuiteSetting))
        }
        (NodeRef::SettingsTable(n), "test_teardown") => {
            out.extend(n.test_teardown.as_ref().map(NodeRef::SuiteSetting))
        }
        (NodeRef::SettingsTable(n), "test_timeout") => {
            out.extend(n.test_timeout.as_ref().map(NodeRef::Timeout))
        }
        (NodeRef::SettingsTable(n), "force_tags") => {
            out.extend(n.force_tags.as_ref().map(NodeRef::Tags))
        }
        (NodeRef::SettingsTable(n), "default_tags") => {
            out.extend(n.default_tags.as_ref().map(NodeRef::Tags))
        }
        (NodeRef::SettingsTable(n), "library_imports") => {
            out.extend(n.library_imports.iter().map(NodeRef::LibraryImport))
        }
        (NodeRef::SettingsTable(n), "resource_imports") => {
            out.extend(n.resource_imports.iter().map(NodeRef::ResourceImport))
        }
        (NodeRef::SettingsTable(n), "variable_imports") => {
            out.extend(n.variable_imports.iter().map(NodeRef::VariableImport))
        }

        (NodeRef::VariablesTable(n), "variables") => {
            out.extend(n.variables.iter().map(NodeRef::VariableDeclaration))
        }
        (NodeRef::KeywordsTable(n), "keywords") => {
            out.extend(n.keywords.iter().map(NodeRef::UserKeyword))
        }
        (NodeRef::TestCasesTable(n), "test_cases") => {
            out.extend(n.test_cases.iter().map(NodeRef::TestCase))
        }

        (NodeRef::SuiteSetting(n), "name") => out.push(NodeRef::Identifier(&n.name)),
        (NodeRef::SuiteSetting(n), "value") => {
            out.extend(n.value.as_ref().map(NodeRef::CallExpression))
        }
        (NodeRef::LibraryImport(n), "target") => out.push(NodeRef::Literal(&n.target)),
        (NodeRef::LibraryImport(n), "args") => out.extend(n.args.iter().map(NodeRef::from)),
        (NodeRef::LibraryImport(n), "alias") => out.extend(n.alias.as_ref().map(NodeRef::Literal)),
        (NodeRef::ResourceImport(n), "target") => out.push(NodeRef::Literal(&n.target)),
        (NodeRef::VariableImport(n), "target") => out.push(NodeRef::Literal(&n.target)),
        (NodeRef::VariableImport(n), "args") => out.extend(n.args.iter().map(NodeRef::from)),

        (NodeRef::UserKeyword(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::UserKeyword(n), "documentation") => {
            out.extend(n.documentation.as_ref().map(NodeRef::Documentation))
        }
        (NodeRef::UserKeyword(n), "arguments") => {
            out.extend(n.arguments.as_ref().map(NodeRef::Arguments))
        }
        (NodeRef::UserKeyword(n), "returns") => out.extend(n.returns.as_ref().map(NodeRef::Return)),
        (NodeRef::UserKeyword(n), "timeout") => out.extend(n.timeout.as_ref().map(NodeRef::Timeout)),
        (NodeRef::UserKeyword(n), "teardown") => {
            out.extend(n.teardown.as_ref().map(NodeRef::Teardown))
        }
        (NodeRef::UserKeyword(n), "tags") => out.extend(n.tags.as_ref().map(NodeRef::Tags)),
        (NodeRef::UserKeyword(n), "steps") => out.extend(n.steps.iter().map(NodeRef::Step)),

        (NodeRef::TestCase(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::TestCase(n), "documentation") => {
            out.extend(n.documentation.as_ref().map(NodeRef::Documentation))
        }
        (NodeRef::TestCase(n), "setup") => out.extend(n.setup.as_ref().map(NodeRef::Setup)),
        (NodeRef::TestCase(n), "teardown") => out.extend(n.teardown.as_ref().map(NodeRef::Teardown)),
        (NodeRef::TestCase(n), "template") => out.extend(n.template.as_ref().map(NodeRef::Template)),
        (NodeRef::TestCase(n), "timeout") => out.extend(n.timeout.as_ref().map(NodeRef::Timeout)),
        (NodeRef::TestCase(n), "tags") => out.extend(n.tags.as_ref().map(NodeRef::Tags)),
        (NodeRef::TestCase(n), "steps") => out.extend(n.steps.iter().map(NodeRef::Step)),

        (NodeRef::Step(n), "body") => out.push(NodeRef::from(&n.body)),
        (NodeRef::VariableDeclaration(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::VariableDeclaration(n), "values") => {
            out.extend(n.values.iter().map(NodeRef::from))
        }

        (NodeRef::Documentation(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Documentation(n), "value") => out.push(NodeRef::Literal(&n.value)),
        (NodeRef::Arguments(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Arguments(n), "values") => {
            out.extend(n.values.iter().map(NodeRef::VariableDeclaration))
        }
        (NodeRef::Return(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Return(n), "values") => out.extend(n.values.iter().map(NodeRef::from)),
        (NodeRef::Timeout(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Timeout(n), "value") => out.extend(n.value.as_ref().map(NodeRef::Literal)),
        (NodeRef::Timeout(n), "message") => out.extend(n.message.as_ref().map(NodeRef::Literal)),
        (NodeRef::Setup(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Setup(n), "keyword") => {
            out.extend(n.keyword.as_ref().map(NodeRef::CallExpression))
        }
        (NodeRef::Teardown(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Teardown(n), "keyword") => {
            out.extend(n.keyword.as_ref().map(NodeRef::CallExpression))
        }
        (NodeRef::Tags(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Tags(n), "values") => out.extend(n.values.iter().map(NodeRef::Literal)),
        (NodeRef::Template(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::Template(n), "keyword") => {
            out.extend(n.keyword.as_ref().map(NodeRef::Identifier))
        }

        (NodeRef::VariableExpression(n), "id") => out.push(NodeRef::Identifier(&n.id)),
        (NodeRef::TemplateLiteral(n), "quasis") => {
            out.extend(n.quasis.iter().map(NodeRef::TemplateElement))
        }
        (NodeRef::TemplateLiteral(n), "expressions") => {
            out.extend(n.expressions.iter().map(NodeRef::VariableExpression))
        }
        (NodeRef::CallExpression(n), "callee") => out.push(NodeRef::Identifier(&n.callee)),
        (NodeRef::CallExpression(n), "args") => out.extend(n.args.iter().map(NodeRef::from)),

        _ => {}
    }
}
