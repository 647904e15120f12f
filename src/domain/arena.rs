use std::collections::VecDeque;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Stable identity of a node in a [`SceneArena`].
///
/// Identity is index equality: two nodes with the same name are still distinct.
pub type NodeId = Index;

/// Node in the arena-based scene hierarchy.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Display name, not required to be unique
    pub name: String,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<NodeId>,
    /// Indices of child nodes in the arena, in sibling order
    pub children: Vec<NodeId>,
}

impl SceneNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-based tree holding one scene hierarchy.
///
/// Uses a generational arena, so ids of removed nodes never resolve again,
/// even after their slot has been reused.
#[derive(Debug)]
pub struct SceneArena {
    arena: Arena<SceneNode>,
    root: Option<NodeId>,
}

impl Default for SceneArena {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node below `parent`, or as the root when `parent` is None.
    ///
    /// The node is appended after its existing siblings.
    #[instrument(level = "trace", skip(self, name), fields(name = %name.as_ref()))]
    pub fn insert_node(
        &mut self,
        name: impl AsRef<str>,
        parent: Option<NodeId>,
    ) -> DomainResult<NodeId> {
        match parent {
            None if self.root.is_some() => return Err(DomainError::RootAlreadySet),
            Some(parent_idx) if !self.arena.contains(parent_idx) => {
                return Err(DomainError::InvalidParent(parent_idx))
            }
            _ => {}
        }

        let node_idx = self.arena.insert(SceneNode {
            name: name.as_ref().to_string(),
            parent,
            children: Vec::new(),
        });

        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(node_idx),
            None => self.root = Some(node_idx),
        }

        Ok(node_idx)
    }

    /// Removes `node` and all of its descendants.
    ///
    /// Returns the number of removed nodes. Removing the root empties the arena.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_subtree(&mut self, node: NodeId) -> DomainResult<usize> {
        let parent = match self.arena.get(node) {
            Some(n) => n.parent,
            None => {
                return Err(DomainError::invalid_argument(
                    "node",
                    "node is not part of the arena",
                ))
            }
        };

        if let Some(parent_node) = parent.and_then(|p| self.arena.get_mut(p)) {
            parent_node.children.retain(|&c| c != node);
        }
        if self.root == Some(node) {
            self.root = None;
        }

        let mut removed = 0;
        let mut queue = VecDeque::from([node]);
        while let Some(idx) = queue.pop_front() {
            if let Some(n) = self.arena.remove(idx) {
                queue.extend(n.children);
                removed += 1;
            }
        }
        debug!("removed {} node(s)", removed);
        Ok(removed)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: NodeId) -> Option<&SceneNode> {
        self.arena.get(idx)
    }

    pub fn contains(&self, idx: NodeId) -> bool {
        self.arena.contains(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of levels in the tree, 0 for an empty arena.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: NodeId) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}
