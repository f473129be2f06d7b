// In-memory bookmark tree: arena nodes, assembly from flat records,
// pre-order walking and the outline/JSON renderers.

pub mod builder;
pub mod json;
pub mod node;
pub mod printer;
pub mod walker;

pub use builder::{attach_bookmarks, build_bookmark_tree, build_folder_tree};
pub use node::{Entry, Node, NodeId, NodeKind, Tree};
pub use walker::flatten;
