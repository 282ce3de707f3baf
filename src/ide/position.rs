//! Locating AST nodes under a cursor.

use crate::base::Position;
use crate::parser::ast::TestSuite;
use crate::syntax::{NodeRef, Visitor, VisitorOption, traverse};

struct CursorFinder<'a> {
    position: Position,
    stack: Vec<NodeRef<'a>>,
    deepest: Vec<NodeRef<'a>>,
}

impl<'a> Visitor<'a> for CursorFinder<'a> {
    fn enter(&mut self, node: NodeRef<'a>, _parent: Option<NodeRef<'a>>) -> VisitorOption {
        // popped in `leave`, which also runs for skipped nodes
        self.stack.push(node);
        if !node.location().contains(self.position) {
            return VisitorOption::Skip;
        }
        if self.stack.len() >= self.deepest.len() {
            self.deepest = self.stack.clone();
        }
        VisitorOption::Continue
    }

    fn leave(&mut self, _node: NodeRef<'a>, _parent: Option<NodeRef<'a>>) -> VisitorOption {
        self.stack.pop();
        VisitorOption::Continue
    }
}

/// Chain of nodes containing `position`, outermost first.
///
/// Subtrees whose location does not contain the position are never
/// entered. When adjacent nodes both touch the position the later one wins.
pub fn nodes_at_position(suite: &TestSuite, position: Position) -> Vec<NodeRef<'_>> {
    let mut finder = CursorFinder {
        position,
        stack: Vec::new(),
        deepest: Vec::new(),
    };
    traverse(suite, &mut finder);
    finder.deepest
}

/// Deepest node containing `position`
pub fn node_at_position(suite: &TestSuite, position: Position) -> Option<NodeRef<'_>> {
    nodes_at_position(suite, position).pop()
}
