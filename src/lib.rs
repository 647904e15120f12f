//! Scene-graph hierarchy helpers.
//!
//! A [`domain::SceneArena`] owns a tree of named nodes. On top of it the crate
//! offers two read-only operations:
//!
//! - [`domain::SceneArena::full_path`]: the delimited path from the root to a node
//! - [`domain::SceneArena::iterate_hierarchy`]: a lazy breadth-first walk of a
//!   node and its descendants, optionally pruning excluded branches
//!
//! ```
//! use std::collections::HashSet;
//! use scenetree::domain::SceneArena;
//!
//! let mut arena = SceneArena::new();
//! let root = arena.insert_node("R", None).unwrap();
//! let x = arena.insert_node("X", Some(root)).unwrap();
//! arena.insert_node("Y", Some(root)).unwrap();
//! let z = arena.insert_node("Z", Some(x)).unwrap();
//!
//! assert_eq!(arena.full_path(z).unwrap(), "/R.X.Z");
//!
//! let exclude = HashSet::from([x]);
//! let names: Vec<_> = arena
//!     .iterate_hierarchy_excluding(Some(root), Some(&exclude))
//!     .unwrap()
//!     .map(|(_, node)| node.name.as_str())
//!     .collect();
//! assert_eq!(names, ["R", "Y"]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
