// switchcraft/examples/switch_scope.rs

use switchcraft::{Child, MatchScope, Node, RenderEnv, Switch, Value};
use tracing::info;

// Payloads are render functions that receive the enclosing Switch's scope,
// the way a host would pass ambient context down to mounted descendants.
type View = fn(&MatchScope<Value>) -> String;

fn loading(_: &MatchScope<Value>) -> String {
  "Loading...".to_string()
}

fn status_line(scope: &MatchScope<Value>) -> String {
  scope
    .with(|status| format!("Status is {}", status))
    .unwrap_or_else(|| "Status unknown".to_string())
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Switch Scope Example ---");

  let env = RenderEnv::default();
  let children: Vec<Child<View>> = vec![
    Node::case("loading", loading as View).into(),
    Node::case("ready", status_line as View).into(),
    Node::default_(status_line as View).into(),
  ];
  let mut switch = Switch::new("loading", children);

  for status in ["loading", "ready", "failed"] {
    switch.set_value(status);
    let selection = switch.render(&env);
    let scope = switch.scope();
    if let Some(view) = selection.payload() {
      info!(origin = ?selection.origin, renders = scope.renders(), "{}", view(&scope));
    }
  }
}
