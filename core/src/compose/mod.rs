// switchcraft/src/compose/mod.rs

//! The public composers: `If` (standalone), `IfElse` and `Switch`.
//!
//! Each composer owns its child sequence, classifies it on every render and
//! hands the classified set to the matching engine. Nothing is cached between
//! renders, so rendering twice with the same props selects the same payload.

pub mod builder;
pub mod if_else;
pub mod standalone;
pub mod switch;

pub use builder::{BranchChainBuilder, BranchConfigurator, CaseConfigurator, CaseListBuilder};
pub use if_else::IfElse;
pub use standalone::If;
pub use switch::Switch;

use crate::config::RenderEnv;
use crate::core::selection::Selection;

/// A component that turns its children into at most one selected payload.
///
/// Lets a host keep heterogeneous composers as `Box<dyn Composer<P>>`.
pub trait Composer<P> {
  /// Name used in diagnostics and spans.
  fn name(&self) -> &'static str;

  fn compose<'a>(&'a self, env: &RenderEnv<'_>) -> Selection<'a, P>;
}
