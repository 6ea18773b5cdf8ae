// switchcraft/src/compose/if_else.rs

use crate::classify::classify_chain;
use crate::compose::Composer;
use crate::config::RenderEnv;
use crate::core::node::Child;
use crate::core::selection::Selection;
use crate::core::value::Value;
use crate::engine::select_branch;
use tracing::instrument;

/// Sibling form of the branch chain: `IfElse[If, ElIf*, Else?]`.
///
/// Holds no condition of its own. The `If` must be a direct child (fragments
/// are flattened, other nesting is not searched).
#[derive(Debug, Clone, PartialEq)]
pub struct IfElse<P, V = Value> {
  children: Vec<Child<P, V>>,
}

impl<P, V> IfElse<P, V> {
  pub const NAME: &'static str = "IfElse";

  pub fn new(children: Vec<Child<P, V>>) -> Self {
    Self { children }
  }

  pub fn children(&self) -> &[Child<P, V>] {
    &self.children
  }

  #[instrument(name = "IfElse::render", skip_all, fields(children = self.children.len()))]
  pub fn render<'a>(&'a self, env: &RenderEnv<'_>) -> Selection<'a, P> {
    let chain = classify_chain(Self::NAME, &self.children, env);
    select_branch(&chain, env)
  }
}

impl<P, V> Composer<P> for IfElse<P, V> {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn compose<'a>(&'a self, env: &RenderEnv<'_>) -> Selection<'a, P> {
    self.render(env)
  }
}

impl<P, V> FromIterator<Child<P, V>> for IfElse<P, V> {
  fn from_iter<I: IntoIterator<Item = Child<P, V>>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
