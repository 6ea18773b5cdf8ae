// switchcraft/src/compose/switch.rs

use crate::classify::classify_cases;
use crate::compose::Composer;
use crate::config::RenderEnv;
use crate::core::node::Child;
use crate::core::scope::MatchScope;
use crate::core::selection::Selection;
use crate::core::value::Value;
use crate::engine::select_case;
use std::fmt::Debug;
use tracing::{event, instrument, Level};

/// Multi-way selection: `Switch(value)[Case(when)*, Default?]`.
///
/// Each `Switch` owns a `MatchScope`. Every render publishes the raw `value`
/// into it before selecting, so the host can hand `scope()` to the selected
/// payload's descendants.
#[derive(Debug)]
pub struct Switch<P, V = Value> {
  value: V,
  children: Vec<Child<P, V>>,
  scope: MatchScope<V>,
}

impl<P, V> Switch<P, V>
where
  V: PartialEq + Clone + Debug,
{
  pub const NAME: &'static str = "Switch";

  pub fn new(value: impl Into<V>, children: Vec<Child<P, V>>) -> Self {
    Self {
      value: value.into(),
      children,
      scope: MatchScope::new(),
    }
  }

  pub fn value(&self) -> &V {
    &self.value
  }

  /// Replaces the value for the next render; the scope keeps the old value until then.
  pub fn set_value(&mut self, value: impl Into<V>) {
    self.value = value.into();
  }

  pub fn children(&self) -> &[Child<P, V>] {
    &self.children
  }

  /// A handle on this instance's ambient channel.
  pub fn scope(&self) -> MatchScope<V> {
    self.scope.clone()
  }

  #[instrument(name = "Switch::render", skip_all, fields(scope_id = self.scope.id(), children = self.children.len()))]
  pub fn render<'a>(&'a self, env: &RenderEnv<'_>) -> Selection<'a, P> {
    self.scope.publish(self.value.clone());
    event!(Level::TRACE, value = ?self.value, "Published value to match scope.");
    let set = classify_cases(Self::NAME, &self.children, env);
    select_case(&set, &self.value)
  }
}

impl<P, V> Composer<P> for Switch<P, V>
where
  V: PartialEq + Clone + Debug,
{
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn compose<'a>(&'a self, env: &RenderEnv<'_>) -> Selection<'a, P> {
    self.render(env)
  }
}
