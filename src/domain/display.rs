//! Conversion of scene hierarchies into `termtree` trees for display.

use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{NodeId, SceneArena};

pub trait SceneTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl SceneTreeConvert for SceneArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        self.root()
            .and_then(|root| self.subtree_to_tree(root))
            .unwrap_or_else(|| Tree::new("<empty>".to_string()))
    }
}

impl SceneArena {
    /// Renders `node` and its descendants, None if `node` is not in the arena.
    pub fn subtree_to_tree(&self, node: NodeId) -> Option<Tree<String>> {
        let scene_node = self.get_node(node)?;
        let leaves: Vec<_> = scene_node
            .children
            .iter()
            .filter_map(|&child| self.subtree_to_tree(child))
            .collect();
        Some(Tree::new(scene_node.name.clone()).with_leaves(leaves))
    }
}
