//! Ternary search tree keyed by strings.
//!
//! Nodes live in an arena (`Vec`) and link to each other by index. Each key
//! maps to a list of values, so two declarations that normalize to the same
//! key coexist. Nodes emptied by removal stay in the arena until [`clear`].
//!
//! Prefix search walks the prefix once (`O(k)`) and then only the matching
//! subtree, returning values in key order.
//!
//! [`clear`]: TernarySearchTree::clear

use std::cmp::Ordering;

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node<V> {
    ch: char,
    lo: Option<NodeId>,
    eq: Option<NodeId>,
    hi: Option<NodeId>,
    values: Vec<V>,
}

impl<V> Node<V> {
    fn new(ch: char) -> Self {
        Self {
            ch,
            lo: None,
            eq: None,
            hi: None,
            values: Vec::new(),
        }
    }
}

/// Which link to follow (or create) during insertion
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Lo(NodeId),
    Eq(NodeId),
    Hi(NodeId),
}

/// Traversal frames for the iterative in-order walk
enum Frame {
    Expand(NodeId),
    Emit(NodeId),
}

#[derive(Debug, Clone)]
pub struct TernarySearchTree<V> {
    nodes: Vec<Node<V>>,
    root: Option<NodeId>,
    /// Values stored under the empty key
    empty_key: Vec<V>,
    len: usize,
}

impl<V> Default for TernarySearchTree<V> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            empty_key: Vec::new(),
            len: 0,
        }
    }
}

impl<V> TernarySearchTree<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values (not keys)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.empty_key.clear();
        self.len = 0;
    }

    pub fn insert(&mut self, key: &str, value: V) {
        let chars: Vec<char> = key.chars().collect();
        if chars.is_empty() {
            self.empty_key.push(value);
            self.len += 1;
            return;
        }

        let mut link = Link::Root;
        let mut idx = 0;
        loop {
            let id = match self.follow(link) {
                Some(id) => id,
                None => self.attach(link, chars[idx]),
            };
            let node = &mut self.nodes[id];
            match chars[idx].cmp(&node.ch) {
                Ordering::Less => link = Link::Lo(id),
                Ordering::Greater => link = Link::Hi(id),
                Ordering::Equal if idx + 1 == chars.len() => {
                    node.values.push(value);
                    self.len += 1;
                    return;
                }
                Ordering::Equal => {
                    idx += 1;
                    link = Link::Eq(id);
                }
            }
        }
    }

    /// Values stored under exactly `key`
    pub fn get(&self, key: &str) -> &[V] {
        if key.is_empty() {
            return &self.empty_key;
        }
        match self.find_node(key) {
            Some(id) => &self.nodes[id].values,
            None => &[],
        }
    }

    /// Remove the values under `key` matching `predicate`; returns how many
    /// were removed.
    pub fn remove_where(&mut self, key: &str, mut predicate: impl FnMut(&V) -> bool) -> usize {
        let values = if key.is_empty() {
            &mut self.empty_key
        } else {
            match self.find_node(key) {
                Some(id) => &mut self.nodes[id].values,
                None => return 0,
            }
        };

        let before = values.len();
        values.retain(|v| !predicate(v));
        let removed = before - values.len();
        self.len -= removed;
        removed
    }

    /// All values whose key starts with `prefix`, in key order.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&V> {
        let mut out = Vec::new();
        if prefix.is_empty() {
            out.extend(self.empty_key.iter());
            self.collect_subtree(self.root, &mut out);
            return out;
        }

        if let Some(id) = self.find_node(prefix) {
            let node = &self.nodes[id];
            out.extend(node.values.iter());
            self.collect_subtree(node.eq, &mut out);
        }
        out
    }

    /// Every value in key order
    pub fn values(&self) -> Vec<&V> {
        self.find_by_prefix("")
    }

    fn follow(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Lo(id) => self.nodes[id].lo,
            Link::Eq(id) => self.nodes[id].eq,
            Link::Hi(id) => self.nodes[id].hi,
        }
    }

    fn attach(&mut self, link: Link, ch: char) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(ch));
        match link {
            Link::Root => self.root = Some(id),
            Link::Lo(parent) => self.nodes[parent].lo = Some(id),
            Link::Eq(parent) => self.nodes[parent].eq = Some(id),
            Link::Hi(parent) => self.nodes[parent].hi = Some(id),
        }
        id
    }

    /// Node holding the last character of `key`
    fn find_node(&self, key: &str) -> Option<NodeId> {
        let mut chars = key.chars();
        let mut ch = chars.next()?;
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];
            match ch.cmp(&node.ch) {
                Ordering::Less => current = node.lo,
                Ordering::Greater => current = node.hi,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        ch = next;
                        current = node.eq;
                    }
                    None => return Some(id),
                },
            }
        }
        None
    }

    fn collect_subtree<'a>(&'a self, start: Option<NodeId>, out: &mut Vec<&'a V>) {
        let mut stack: Vec<Frame> = start.map(Frame::Expand).into_iter().collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand(id) => {
                    let node = &self.nodes[id];
                    // pushed in reverse of visiting order: lo, self, eq, hi
                    stack.extend(node.hi.map(Frame::Expand));
                    stack.extend(node.eq.map(Frame::Expand));
                    stack.push(Frame::Emit(id));
                    stack.extend(node.lo.map(Frame::Expand));
                }
                Frame::Emit(id) => out.extend(self.nodes[id].values.iter()),
            }
        }
    }
}
