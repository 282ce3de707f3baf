use std::ops::ControlFlow;

use super::node::NodeRef;
use super::schema::{child_slots, collect_slot};

/// What the traversal does after a callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitorOption {
    #[default]
    Continue,
    /// From `enter`: do not descend into this node. Its `leave` still runs.
    Skip,
    /// Stop the whole traversal; no further `enter` or `leave` calls.
    Break,
}

/// Callbacks invoked around each node. Both default to `Continue`.
pub trait Visitor<'a> {
    fn enter(&mut self, _node: NodeRef<'a>, _parent: Option<NodeRef<'a>>) -> VisitorOption {
        VisitorOption::Continue
    }

    fn leave(&mut self, _node: NodeRef<'a>, _parent: Option<NodeRef<'a>>) -> VisitorOption {
        VisitorOption::Continue
    }
}

/// Depth-first walk: `enter` in pre-order, `leave` in post-order, slots in
/// schema order. Returns `true` if the visitor broke out early.
pub fn traverse<'a, V: Visitor<'a> + ?Sized>(root: impl Into<NodeRef<'a>>, visitor: &mut V) -> bool {
    visit(root.into(), None, visitor).is_break()
}

fn visit<'a, V: Visitor<'a> + ?Sized>(
    node: NodeRef<'a>,
    parent: Option<NodeRef<'a>>,
    visitor: &mut V,
) -> ControlFlow<()> {
    match visitor.enter(node, parent) {
        VisitorOption::Break => return ControlFlow::Break(()),
        VisitorOption::Skip => {}
        VisitorOption::Continue => {
            let mut children = Vec::new();
            for slot in child_slots(node.kind()) {
                children.clear();
                collect_slot(node, slot.name, &mut children);
                for child in children.drain(..) {
                    visit(child, Some(node), visitor)?;
                }
            }
        }
    }

    match visitor.leave(node, parent) {
        VisitorOption::Break => ControlFlow::Break(()),
        _ => ControlFlow::Continue(()),
    }
}

/// A visitor with only an `enter` callback
pub struct EnterFn<F>(pub F);

impl<'a, F> Visitor<'a> for EnterFn<F>
where
    F: FnMut(NodeRef<'a>, Option<NodeRef<'a>>) -> VisitorOption,
{
    fn enter(&mut self, node: NodeRef<'a>, parent: Option<NodeRef<'a>>) -> VisitorOption {
        (self.0)(node, parent)
    }
}

/// Collect every node for which `predicate` holds, in pre-order.
pub fn collect_nodes<'a>(
    root: impl Into<NodeRef<'a>>,
    mut predicate: impl FnMut(&NodeRef<'a>) -> bool,
) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    traverse(
        root,
        &mut EnterFn(|node: NodeRef<'a>, _parent: Option<NodeRef<'a>>| {
            if predicate(&node) {
                found.push(node);
            }
            VisitorOption::Continue
        }),
    );
    found
}
