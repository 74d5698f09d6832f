//! Context paths and the path-addressed error tree.
//!
//! Validation failures recorded during a transaction are keyed by the
//! context path at which they occurred. The tree mirrors the nesting of
//! context scopes: one level per pushed step, siblings keyed by distinct
//! step identities.

use std::collections::BTreeMap;
use std::fmt;

/// One step of a context path: a collection index or a field name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathStep {
    /// Position within a collection.
    Index(usize),
    /// Named field or scope.
    Key(String),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(i) => write!(f, "{}", i),
            PathStep::Key(k) => write!(f, "{}", k),
        }
    }
}

impl From<usize> for PathStep {
    fn from(i: usize) -> Self {
        PathStep::Index(i)
    }
}

impl From<&str> for PathStep {
    fn from(k: &str) -> Self {
        PathStep::Key(k.to_string())
    }
}

impl From<String> for PathStep {
    fn from(k: String) -> Self {
        PathStep::Key(k)
    }
}

/// A collection of error messages, each addressed by a context path.
///
/// Messages recorded with an empty path live at this node; messages with
/// a non-empty path live in the child keyed by the first step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<PathStep, ErrorTree>,
}

impl ErrorTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message at the given path, creating intermediate nodes
    /// as needed. Later calls sharing a path prefix accumulate into the
    /// same subtree.
    pub fn add(&mut self, path: &[PathStep], message: impl Into<String>) {
        match path.split_first() {
            None => self.messages.push(message.into()),
            Some((step, rest)) => self
                .children
                .entry(step.clone())
                .or_default()
                .add(rest, message),
        }
    }

    /// Messages recorded at this node, in recording order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The subtree for the given step, if any message was recorded there.
    pub fn child(&self, step: &PathStep) -> Option<&ErrorTree> {
        self.children.get(step)
    }

    /// Iterate over child subtrees keyed by their step.
    pub fn children(&self) -> impl Iterator<Item = (&PathStep, &ErrorTree)> {
        self.children.iter()
    }

    /// True if no message is recorded anywhere in the tree.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(|c| c.is_empty())
    }

    /// Total number of messages in the tree.
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(ErrorTree::len).sum::<usize>()
    }

    fn fmt_with_prefix(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        for message in &self.messages {
            if prefix.is_empty() {
                writeln!(f, "{}", message)?;
            } else {
                writeln!(f, "{}: {}", prefix, message)?;
            }
        }
        for (step, child) in &self.children {
            let nested = if prefix.is_empty() {
                step.to_string()
            } else {
                format!("{}.{}", prefix, step)
            };
            child.fmt_with_prefix(f, &nested)?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorTree {
    /// Renders one line per message, prefixed by its dotted path.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_prefix(f, "")
    }
}
