// switchcraft/src/engine/mod.rs

//! The two selection engines. Both are linear, side-effect-free scans over an
//! already classified child set and keep no state between calls.

pub mod branch;
pub mod matching;

pub use branch::select_branch;
pub use matching::select_case;
