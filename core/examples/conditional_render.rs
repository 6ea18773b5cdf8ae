// switchcraft/examples/conditional_render.rs

use switchcraft::{Child, CollectingSink, If, IfElse, Node, RenderEnv, RenderOptions};
use tracing::info;

// --- A tiny host: payloads are strings, mounting means printing ---
fn mount(composer: &str, payload: Option<&&str>) {
  match payload {
    Some(markup) => info!("{} mounted: {}", composer, markup),
    None => info!("{} rendered nothing", composer),
  }
}

fn main() -> Result<(), switchcraft::ConfigError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Conditional Rendering Example ---");

  let options = RenderOptions::from_env()?;
  let sink = CollectingSink::new();
  let env = RenderEnv::new(&sink).with_options(options);

  // Standalone form: the If holds the condition and nests its Else.
  for logged_in in [true, false] {
    let greeting: If<&str> = If::new(
      logged_in,
      vec![
        Node::element("span", "<span>Welcome back!</span>").into(),
        Node::else_("<button>Sign in</button>").into(),
      ],
    );
    mount("If", greeting.render(&env).payload());
  }

  // Sibling form under IfElse.
  for stock in [0u32, 3, 42] {
    let badge: IfElse<&str> = IfElse::builder()
      .when(stock == 0)
      .render("<em>Sold out</em>")
      .when(stock < 5)
      .render("<em>Only a few left</em>")
      .otherwise("<em>In stock</em>")
      .build();
    mount("IfElse", badge.render(&env).payload());
  }

  // A misconfigured chain renders nothing and reports why.
  let broken: IfElse<&str> = IfElse::new(vec![
    Child::text("\n"),
    Node::elif(true, "<p>unreachable</p>").into(),
    Node::case(1, "<p>misplaced</p>").into(),
  ]);
  mount("IfElse", broken.render(&env).payload());

  for diagnostic in sink.diagnostics() {
    info!(severity = ?diagnostic.severity, "diagnostic: {}", diagnostic.error);
  }
  Ok(())
}
