use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid character {character:?} at position {position}, only lowercase letters a-z are allowed")]
pub struct InvalidInputError {
    pub character: char,
    pub position: usize,
}

/// One position along the path of some inserted string(s).
#[derive(Default)]
pub struct PrefixNode {
    count: usize,
    children: BTreeMap<char, PrefixNode>,
}

impl PrefixNode {
    /// Number of inserted strings having this node's path as a prefix.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = (char, &PrefixNode)> {
        self.children.iter().map(|(letter, child)| (*letter, child))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Prefix tree over lowercase strings, counting how many inserted strings
/// share each prefix.
///
/// Queries run in time proportional to the query length. The root's own
/// count is never exposed, so `count_with_prefix("")` is always 0.
#[derive(Default)]
pub struct PrefixStore {
    root: PrefixNode,
}

impl PrefixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count of every prefix of `contact`, creating missing
    /// nodes along the way. An empty contact is a no-op.
    pub fn insert(&mut self, contact: &str) -> Result<(), InvalidInputError> {
        validate(contact)?;

        let mut node = &mut self.root;
        for letter in contact.chars() {
            node = node.children.entry(letter).or_default();
            node.count += 1;
        }

        Ok(())
    }

    /// Number of inserted strings starting with `prefix`.
    pub fn count_with_prefix(&self, prefix: &str) -> Result<usize, InvalidInputError> {
        validate(prefix)?;

        if prefix.is_empty() {
            return Ok(0);
        }

        let mut node = &self.root;
        for letter in prefix.chars() {
            match node.children.get(&letter) {
                Some(child) => node = child,
                None => return Ok(0),
            }
        }

        Ok(node.count)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn root(&self) -> &PrefixNode {
        &self.root
    }

    /// Nodes below the root in depth-first alphabetical order.
    pub fn walk(&self) -> Walk<'_> {
        let mut walk = Walk { stack: Vec::new() };
        walk.push_children(0, &self.root);
        walk
    }
}

/// Depth-first iterator over `(depth, letter, node)`, depth starting at 1.
pub struct Walk<'a> {
    stack: Vec<(usize, char, &'a PrefixNode)>,
}

impl<'a> Walk<'a> {
    fn push_children(&mut self, depth: usize, node: &'a PrefixNode) {
        self.stack.extend(
            node.children
                .iter()
                .rev()
                .map(|(letter, child)| (depth + 1, *letter, child)),
        );
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, char, &'a PrefixNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, letter, node) = self.stack.pop()?;
        self.push_children(depth, node);
        Some((depth, letter, node))
    }
}

impl fmt::Debug for PrefixStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixStore")
            .field("nodes", &self.walk().count())
            .finish()
    }
}

#[derive(Serialize)]
struct Entry {
    depth: usize,
    letter: char,
    count: usize,
}

// A flat pre-order list keeps serialization off the call stack, however
// long the stored contacts are.
impl Serialize for PrefixStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.walk().map(|(depth, letter, node)| Entry {
            depth,
            letter,
            count: node.count,
        }))
    }
}

// Nested maps would otherwise drop recursively, one frame per letter.
impl Drop for PrefixStore {
    fn drop(&mut self) {
        let mut pending: Vec<PrefixNode> =
            std::mem::take(&mut self.root.children).into_values().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

fn validate(value: &str) -> Result<(), InvalidInputError> {
    match value
        .chars()
        .enumerate()
        .find(|(_, character)| !character.is_ascii_lowercase())
    {
        None => Ok(()),
        Some((position, character)) => Err(InvalidInputError {
            character,
            position,
        }),
    }
}
