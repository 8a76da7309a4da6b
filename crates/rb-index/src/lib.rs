//! Arena-backed red-black tree used as an ordered-key index.
//!
//! Insert, delete, membership, min/max and successor lookups all run in
//! O(log n). Nodes are stored in a `Vec` and link to each other through
//! [`NodeId`] indices; every absent link is the reserved [`NodeId::NIL`]
//! sentinel, which always reads as black.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`NodeId`], [`Color`] |
//! [`error`] | [`RbError`], [`InvariantViolation`] |
//! `arena` | node storage, sentinel-aware link accessors |
//! `tree` | [`RbTree`], lookups, min/max, successor/predecessor |
//! `rotate` | `rotate_left` / `rotate_right` |
//! `insert` | `insert`, `bst_insert`, insert fixup |
//! `remove` | `delete`, `transplant`, delete fixup |
//! [`traverse`] | preorder / inorder / postorder iterators |
//! `validate` | invariant checker, `height`, `black_height` |
//! `print` | `print_tree`, `print_with_colors`, `dump` |
//!
//! # Example
//!
//! ```
//! use rb_index::{Color, RbError, RbTree};
//!
//! let mut tree = RbTree::new();
//! for k in 1..=7 {
//!     tree.insert(k);
//! }
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [2, 1, 4, 3, 6, 5, 7]);
//! assert_eq!(tree.print_with_colors(), "2B 1B 4R 3B 6B 5R 7R");
//!
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.find_successor(&7), Err(RbError::NoSuccessor));
//! assert_eq!(tree.delete(&42), Err(RbError::NotFound));
//! assert_eq!(tree.color(tree.root().unwrap()), Color::Black);
//! tree.validate().unwrap();
//! ```

mod arena;
pub mod error;
mod insert;
mod print;
mod remove;
mod rotate;
pub mod traverse;
mod tree;
pub mod types;
mod validate;

pub use error::{InvariantViolation, RbError, Result};
pub use traverse::{Colored, Keys, Order};
pub use tree::RbTree;
pub use types::{Color, NodeId};
