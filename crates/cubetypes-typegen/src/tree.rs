//! Delimiter-split cube names as a tagged tree.
//!
//! A node is either a cube identifier (leaf) or a group of further path
//! segments (branch). Keeping the two cases as an explicit sum type makes a
//! name collision between a full cube name and a group prefix a detectable
//! error instead of a silent overwrite.

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A cube name is both a group prefix and a full name.
    #[error("name collision at `{path}`: a cube name is both a group prefix and a full name")]
    Collision { path: String },
}

/// One node of the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTreeNode {
    Leaf(String),
    Branch(IndexMap<String, NameTreeNode>),
}

/// Rooted tree keyed by path segments, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTree {
    root: IndexMap<String, NameTreeNode>,
}

impl NameTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `value` at the node reached by following `path`, creating
    /// branches as needed. Re-inserting an identical leaf is a no-op; any
    /// other overlap is a collision.
    pub fn insert(&mut self, path: &[&str], value: String) -> Result<(), TreeError> {
        insert_node(&mut self.root, path, value, path)
    }

    /// Read back the leaf value stored at `path`, if any.
    pub fn get(&self, path: &[&str]) -> Option<&str> {
        let (last, prefix) = path.split_last()?;
        let mut map = &self.root;
        for segment in prefix {
            match map.get(*segment)? {
                NameTreeNode::Branch(children) => map = children,
                NameTreeNode::Leaf(_) => return None,
            }
        }
        match map.get(*last)? {
            NameTreeNode::Leaf(value) => Some(value.as_str()),
            NameTreeNode::Branch(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NameTreeNode)> {
        self.root.iter()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn insert_node(
    map: &mut IndexMap<String, NameTreeNode>,
    path: &[&str],
    value: String,
    full_path: &[&str],
) -> Result<(), TreeError> {
    let collision = || TreeError::Collision {
        path: full_path.join("."),
    };
    match path {
        [] => Ok(()),
        [last] => match map.get(*last) {
            Some(NameTreeNode::Leaf(existing)) if *existing == value => Ok(()),
            Some(_) => Err(collision()),
            None => {
                map.insert((*last).to_string(), NameTreeNode::Leaf(value));
                Ok(())
            }
        },
        [head, rest @ ..] => {
            let entry = map
                .entry((*head).to_string())
                .or_insert_with(|| NameTreeNode::Branch(IndexMap::new()));
            match entry {
                NameTreeNode::Branch(children) => insert_node(children, rest, value, full_path),
                NameTreeNode::Leaf(_) => Err(collision()),
            }
        }
    }
}
