//! Full path formatting for scene nodes.
//!
//! A full path is built from the root downwards: the prefix, then the root's
//! name directly after it, then the delimiter and the name of every level
//! below down to the node itself:
//!
//! ```text
//! A            -> "/A"
//! A > B        -> "/A.B"
//! A > B > C    -> "/A.B.C"
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::arena::{NodeId, SceneArena, SceneNode};
use crate::domain::error::{DomainError, DomainResult};

pub const DEFAULT_DELIMITER: &str = ".";
pub const DEFAULT_PREFIX: &str = "/";

/// Delimiter and prefix used when formatting full paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathFormat {
    /// Inserted between two names
    pub delimiter: String,
    /// Start of every path
    pub prefix: String,
}

impl Default for PathFormat {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.into(),
            prefix: DEFAULT_PREFIX.into(),
        }
    }
}

impl PathFormat {
    pub fn new(delimiter: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            prefix: prefix.into(),
        }
    }
}

impl SceneArena {
    /// Full path of `node` with the default delimiter `"."` and prefix `"/"`.
    pub fn full_path(&self, node: NodeId) -> DomainResult<String> {
        self.full_path_fmt(node, &PathFormat::default())
    }

    /// Full path of `node` with a custom delimiter and prefix.
    pub fn full_path_with(&self, node: NodeId, delimiter: &str, prefix: &str) -> DomainResult<String> {
        let mut path = String::new();
        let scene_node = self.get_node(node).ok_or_else(|| {
            DomainError::invalid_argument("node", "node is not part of the arena")
        })?;

        self.write_path(&mut path, scene_node, delimiter, prefix);
        Ok(path)
    }

    #[instrument(level = "trace", skip(self, format))]
    pub fn full_path_fmt(&self, node: NodeId, format: &PathFormat) -> DomainResult<String> {
        self.full_path_with(node, &format.delimiter, &format.prefix)
    }

    /// Ascends to the root, then writes the prefix and the names on the way
    /// back down, a delimiter in front of every name below the root.
    fn write_path(&self, path: &mut String, node: &SceneNode, delimiter: &str, prefix: &str) {
        match self.resolved_parent(node) {
            None => path.push_str(prefix),
            Some(parent) => {
                self.write_path(path, parent, delimiter, prefix);
                path.push_str(delimiter);
            }
        }
        path.push_str(&node.name);
    }

    /// Finds the node whose full path equals `path`.
    ///
    /// Names need not be unique, so the first match in breadth-first order
    /// wins (shallowest, then left-most).
    #[instrument(level = "debug", skip(self, format))]
    pub fn find_by_path(&self, path: &str, format: &PathFormat) -> Option<NodeId> {
        let nodes = self.iterate_hierarchy(self.root()).ok()?;
        nodes
            .map(|(idx, _)| idx)
            .find(|&idx| {
                self.full_path_fmt(idx, format)
                    .map(|candidate| candidate == path)
                    .unwrap_or(false)
            })
    }

    // A parent id that no longer resolves ends the chain like a root does.
    fn resolved_parent(&self, node: &SceneNode) -> Option<&SceneNode> {
        node.parent.and_then(|p| self.get_node(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = PathFormat::default();
        assert_eq!(format.delimiter, ".");
        assert_eq!(format.prefix, "/");
    }

    #[test]
    fn test_root_has_no_delimiter() {
        let mut arena = SceneArena::new();
        let root = arena.insert_node("Scene", None).unwrap();
        assert_eq!(arena.full_path(root).unwrap(), "/Scene");
        assert_eq!(arena.full_path_with(root, "-", "ROOT:").unwrap(), "ROOT:Scene");
    }

    #[test]
    fn test_empty_delimiter_and_prefix() {
        let mut arena = SceneArena::new();
        let root = arena.insert_node("A", None).unwrap();
        let b = arena.insert_node("B", Some(root)).unwrap();
        let c = arena.insert_node("C", Some(b)).unwrap();
        assert_eq!(arena.full_path_with(c, "", "").unwrap(), "ABC");
    }
}
