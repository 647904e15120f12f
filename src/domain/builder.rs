//! Hierarchy builder for loading scene trees from TOML descriptions.

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::arena::SceneArena;
use crate::domain::error::{DomainError, DomainResult};

/// One node of a hierarchy description, children in sibling order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NodeSpec>) -> Self {
        self.children = children;
        self
    }
}

/// Hierarchy description file.
///
/// ```toml
/// [root]
/// name = "Scene"
///
/// [[root.children]]
/// name = "Camera"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HierarchyFile {
    pub root: NodeSpec,
}

impl HierarchyFile {
    pub fn from_toml_str(content: &str) -> DomainResult<Self> {
        toml::from_str(content).map_err(|e| DomainError::InvalidHierarchy {
            message: e.to_string(),
        })
    }

    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::io(format!("read {}", path.display()), e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            DomainError::InvalidHierarchy { message } => DomainError::InvalidHierarchy {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }
}

/// Constructs a [`SceneArena`] from a hierarchy description.
#[derive(Debug, Default)]
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the arena level by level so every parent receives its children
    /// in document order.
    #[instrument(level = "debug", skip(self, file))]
    pub fn build(&self, file: &HierarchyFile) -> DomainResult<SceneArena> {
        let mut tree = SceneArena::new();
        let mut queue = VecDeque::from([(&file.root, None)]);

        while let Some((spec, parent_idx)) = queue.pop_front() {
            let current_idx = tree.insert_node(&spec.name, parent_idx)?;
            for child in &spec.children {
                queue.push_back((child, Some(current_idx)));
            }
        }

        debug!("built hierarchy with {} node(s)", tree.len());
        Ok(tree)
    }

    pub fn build_from_path(&self, path: &Path) -> DomainResult<SceneArena> {
        self.build(&HierarchyFile::load(path)?)
    }
}
