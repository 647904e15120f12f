//! Domain layer: the scene hierarchy and the operations over it
//!
//! This layer is independent of external concerns (no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod display;
pub mod error;
pub mod path;
pub mod traverse;

pub use arena::{NodeId, SceneArena, SceneNode};
pub use builder::{HierarchyBuilder, HierarchyFile, NodeSpec};
pub use display::SceneTreeConvert;
pub use error::{DomainError, DomainResult};
pub use path::{PathFormat, DEFAULT_DELIMITER, DEFAULT_PREFIX};
pub use traverse::HierarchyIter;
