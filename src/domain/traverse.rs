//! Breadth-first hierarchy traversal with subtree exclusion.

use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

use tracing::{instrument, trace};

use crate::domain::arena::{NodeId, SceneArena, SceneNode};
use crate::domain::error::{DomainError, DomainResult};

/// Lazy level-order iterator over a node and its descendants.
///
/// Holds the pending queue as its only state. Excluded nodes are dropped when
/// dequeued, before their children are enqueued, so a whole branch is pruned.
/// Single pass: start a new traversal to walk the tree again.
#[derive(Debug)]
pub struct HierarchyIter<'a> {
    arena: &'a SceneArena,
    queue: VecDeque<NodeId>,
    exclude: Option<&'a HashSet<NodeId>>,
}

impl<'a> HierarchyIter<'a> {
    fn new(arena: &'a SceneArena, root: NodeId, exclude: Option<&'a HashSet<NodeId>>) -> Self {
        Self {
            arena,
            queue: VecDeque::from([root]),
            exclude,
        }
    }

    fn is_excluded(&self, idx: NodeId) -> bool {
        self.exclude.is_some_and(|set| set.contains(&idx))
    }
}

impl<'a> Iterator for HierarchyIter<'a> {
    type Item = (NodeId, &'a SceneNode);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some(current_idx) = self.queue.pop_front() {
            if self.is_excluded(current_idx) {
                trace!("pruning excluded subtree at {:?}", current_idx);
                continue;
            }
            if let Some(node) = arena.get_node(current_idx) {
                self.queue.extend(
                    node.children
                        .iter()
                        .copied()
                        .filter(|&child| arena.contains(child)),
                );
                return Some((current_idx, node));
            }
        }
        None
    }
}

impl FusedIterator for HierarchyIter<'_> {}

impl SceneArena {
    /// Iterates `root` and all of its descendants in breadth-first order.
    ///
    /// Fails when `root` is None or not part of this arena.
    #[instrument(level = "debug", skip(self))]
    pub fn iterate_hierarchy(&self, root: Option<NodeId>) -> DomainResult<HierarchyIter<'_>> {
        let root = self.validate_root(root)?;
        Ok(HierarchyIter::new(self, root, None))
    }

    /// Iterates `root` and all of its descendants in breadth-first order,
    /// skipping every node in `exclude` together with its whole branch.
    ///
    /// Fails when `root` is None or not part of this arena, and when `exclude`
    /// is None. Use [`SceneArena::iterate_hierarchy`] to walk without exclusions.
    #[instrument(level = "debug", skip(self, exclude))]
    pub fn iterate_hierarchy_excluding<'a>(
        &'a self,
        root: Option<NodeId>,
        exclude: Option<&'a HashSet<NodeId>>,
    ) -> DomainResult<HierarchyIter<'a>> {
        let root = self.validate_root(root)?;
        let exclude = exclude.ok_or_else(|| {
            DomainError::invalid_argument(
                "exclude",
                "exclude set can't be None, use iterate_hierarchy(root) instead",
            )
        })?;
        Ok(HierarchyIter::new(self, root, Some(exclude)))
    }

    fn validate_root(&self, root: Option<NodeId>) -> DomainResult<NodeId> {
        match root {
            None => Err(DomainError::invalid_argument(
                "root",
                "root node must be given",
            )),
            Some(idx) if !self.contains(idx) => Err(DomainError::invalid_argument(
                "root",
                "node is not part of the arena",
            )),
            Some(idx) => Ok(idx),
        }
    }
}
