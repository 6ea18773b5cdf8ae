pub mod node;
pub mod scope;
pub mod selection;
pub mod value;

// Re-export key types for easier access from other modules (and lib.rs)
pub use node::{Child, Node, Role, RoleTag};
pub use scope::MatchScope;
pub use selection::{Origin, Selection};
pub use value::Value;
