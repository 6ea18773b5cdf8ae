// switchcraft/src/compose/standalone.rs

use crate::classify::classify_nested_chain;
use crate::compose::Composer;
use crate::config::RenderEnv;
use crate::core::node::Child;
use crate::core::selection::Selection;
use crate::core::value::Value;
use crate::engine::select_branch;
use tracing::instrument;

/// Standalone form of the branch chain: `If(condition)[content, ElIf*, Else?]`.
///
/// The first ordinary element among the children is the content rendered when
/// `condition` holds; text and other ignorable children are never rendered.
/// Nested `ElIf`/`Else` nodes are evaluated exactly as siblings under `IfElse`
/// would be, through the same engine.
#[derive(Debug, Clone, PartialEq)]
pub struct If<P, V = Value> {
  condition: bool,
  children: Vec<Child<P, V>>,
}

impl<P, V> If<P, V> {
  pub const NAME: &'static str = "If";

  pub fn new(condition: bool, children: Vec<Child<P, V>>) -> Self {
    Self { condition, children }
  }

  pub fn condition(&self) -> bool {
    self.condition
  }

  pub fn children(&self) -> &[Child<P, V>] {
    &self.children
  }

  #[instrument(name = "If::render", skip_all, fields(condition = self.condition, children = self.children.len()))]
  pub fn render<'a>(&'a self, env: &RenderEnv<'_>) -> Selection<'a, P> {
    let chain = classify_nested_chain(Self::NAME, self.condition, &self.children, env);
    select_branch(&chain, env)
  }
}

impl<P, V> Composer<P> for If<P, V> {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn compose<'a>(&'a self, env: &RenderEnv<'_>) -> Selection<'a, P> {
    self.render(env)
  }
}
