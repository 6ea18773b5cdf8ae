// tests/switch_tests.rs
mod common;

use common::*;
use switchcraft::{Child, CollectingSink, Composer, Origin, RenderEnv, RenderOptions, RoleTag, Switch, Value};

#[test]
fn test_matching_case_is_selected() {
  setup_tracing();
  let env = RenderEnv::default();
  let switch = Switch::new("apple", vec![case("banana", "Banana Case"), case("apple", "Apple Case"), default_("Default Case")]);
  let selection = switch.render(&env);
  assert_eq!(selection.payload(), Some(&"Apple Case"));
  assert_eq!(selection.origin, Origin::Case(1));
}

#[test]
fn test_default_when_no_case_matches() {
  setup_tracing();
  let env = RenderEnv::default();
  let switch = Switch::new("grape", vec![case("banana", "Banana"), case("apple", "Apple"), default_("Default")]);
  let selection = switch.render(&env);
  assert_eq!(selection.payload(), Some(&"Default"));
  assert_eq!(selection.origin, Origin::Default);
}

#[test]
fn test_nothing_when_no_case_and_no_default() {
  setup_tracing();
  let sink = CollectingSink::new();
  let env = collecting_env(&sink);
  let switch = Switch::new("grape", vec![case("banana", "Banana"), case("apple", "Apple")]);
  let selection = switch.render(&env);
  assert!(selection.is_empty());
  assert_eq!(selection.origin, Origin::Nothing);
  assert!(sink.is_empty());
}

#[test]
fn test_only_first_matching_case() {
  setup_tracing();
  let env = RenderEnv::default();
  let switch = Switch::new(1, vec![case(1, "First Match"), case(1, "Second Match"), case(2, "Another")]);
  assert_eq!(switch.render(&env).payload(), Some(&"First Match"));
}

#[test]
fn test_scenario_e_numbers() {
  setup_tracing();
  let env = RenderEnv::default();
  let switch = Switch::new(10, vec![case(5, "Five"), case(10, "Ten"), default_("Other Number")]);
  assert_eq!(switch.render(&env).payload(), Some(&"Ten"));
}

#[test]
fn test_large_integer_ids_are_not_rounded() {
  setup_tracing();
  let env = RenderEnv::default();
  let id = 9_007_199_254_740_993u64;
  let switch = Switch::new(
    id,
    vec![case(9_007_199_254_740_992u64, "neighbour id"), case(id, "exact id"), default_("unknown")],
  );
  let selection = switch.render(&env);
  assert_eq!(selection.payload(), Some(&"exact id"));
  assert_eq!(selection.origin, Origin::Case(1));

  let switch = Switch::new(i64::MAX, vec![case(i64::MAX - 1, "one below"), case(i64::MAX as f64, "float")]);
  assert!(switch.render(&env).is_empty());
}

#[test]
fn test_booleans() {
  setup_tracing();
  let env = RenderEnv::default();
  let switch = Switch::new(true, vec![case(false, "False Case"), case(true, "True Case")]);
  assert_eq!(switch.render(&env).payload(), Some(&"True Case"));
}

#[test]
fn test_scenario_f_null_matches_only_null() {
  setup_tracing();
  let env = RenderEnv::default();
  let switch = Switch::new(
    Value::Null,
    vec![case(Value::Undefined, "Undefined Case"), case(Value::Null, "Null Case"), default_("No Match")],
  );
  assert_eq!(switch.render(&env).payload(), Some(&"Null Case"));

  let switch = Switch::new(
    Value::Undefined,
    vec![case(Value::Null, "Null Case"), case(Value::Undefined, "Undefined Case"), default_("No Match")],
  );
  assert_eq!(switch.render(&env).payload(), Some(&"Undefined Case"));
}

#[test]
fn test_no_type_coercion() {
  setup_tracing();
  let env = RenderEnv::default();
  let switch = Switch::new("1", vec![case(1, "number"), case(true, "bool"), default_("default")]);
  assert_eq!(switch.render(&env).payload(), Some(&"default"));

  let switch = Switch::new(0, vec![case(false, "false"), case("", "empty"), case(Value::Null, "null"), default_("default")]);
  assert_eq!(switch.render(&env).payload(), Some(&"default"));

  let switch = Switch::new(f64::NAN, vec![case(f64::NAN, "nan"), default_("default")]);
  assert_eq!(switch.render(&env).payload(), Some(&"default"));
}

#[test]
fn test_object_values_match_by_identity() {
  setup_tracing();
  let env = RenderEnv::default();
  let shared = Value::object(String::from("token"));
  let lookalike = Value::object(String::from("token"));
  let switch = Switch::new(shared.clone(), vec![case(lookalike, "lookalike"), case(shared, "shared")]);
  assert_eq!(switch.render(&env).payload(), Some(&"shared"));
}

#[test]
fn test_duplicate_default_first_wins() {
  setup_tracing();
  let sink = CollectingSink::new();
  let env = collecting_env(&sink);
  let switch = Switch::new(3, vec![default_("first"), case(1, "one"), default_("second")]);
  assert_eq!(switch.render(&env).payload(), Some(&"first"));
  assert!(sink.is_empty());
}

#[test]
fn test_unexpected_children_warned_and_siblings_processed() {
  setup_tracing();
  let sink = CollectingSink::new();
  let env = collecting_env(&sink);
  let switch = Switch::new(
    2,
    vec![
      Child::text("  "),
      if_(true, "if"),
      case(1, "one"),
      element("div", "stray"),
      case(2, "two"),
      else_("else"),
    ],
  );
  assert_eq!(switch.compose(&env).payload(), Some(&"two"));
  assert_eq!(
    sink.warnings(),
    vec![
      unexpected("Switch", RoleTag::If),
      unexpected_element("Switch", "div"),
      unexpected("Switch", RoleTag::Else),
    ]
  );
  assert_eq!(switch.name(), "Switch");
}

#[test]
fn test_mutual_exclusivity_and_idempotence() {
  setup_tracing();
  let env = RenderEnv::default();
  let whens = [Value::from(1), Value::from("a"), Value::Null, Value::from(false)];
  let candidates = [Value::from(1), Value::from("a"), Value::Null, Value::Undefined, Value::from(false), Value::from(2)];
  for with_default in [true, false] {
    for candidate in candidates.iter() {
      let mut children: Vec<Child<&str>> = vec![
        case(whens[0].clone(), "c0"),
        case(whens[1].clone(), "c1"),
        case(whens[2].clone(), "c2"),
        case(whens[3].clone(), "c3"),
      ];
      if with_default {
        children.push(default_("default"));
      }
      let switch = Switch::new(candidate.clone(), children);
      let first = switch.render(&env);
      let second = switch.render(&env);
      assert_eq!(first, second);

      match whens.iter().position(|w| w == candidate) {
        Some(idx) => assert_eq!(first.origin, Origin::Case(idx)),
        None if with_default => assert_eq!(first.origin, Origin::Default),
        None => assert_eq!(first.origin, Origin::Nothing),
      }
    }
  }
}

#[test]
fn test_generic_value_type() {
  #[derive(Debug, Clone, PartialEq)]
  enum Status {
    Loading,
    Ready,
    Failed,
  }

  setup_tracing();
  let env = RenderEnv::default();
  let switch: Switch<&str, Status> = Switch::builder(Status::Ready)
    .case(Status::Loading)
    .render("spinner")
    .case(Status::Failed)
    .render("error")
    .case(Status::Ready)
    .render("content")
    .build();
  assert_eq!(switch.render(&env).payload(), Some(&"content"));
  assert_eq!(switch.scope().current(), Some(Status::Ready));
}

#[test]
fn test_cases_inside_fragments() {
  setup_tracing();
  let sink = CollectingSink::new();
  let env = collecting_env(&sink);
  let switch = Switch::new(
    "b",
    vec![
      Child::Fragment(vec![case("a", "A"), Child::Fragment(vec![case("b", "B")])]),
      Child::Fragment(vec![]),
      default_("fallback"),
    ],
  );
  let selection = switch.render(&env);
  assert_eq!(selection.payload(), Some(&"B"));
  assert_eq!(selection.origin, Origin::Case(1));
  assert!(sink.is_empty());
}

#[test]
fn test_duplicates_dropped_with_duplicate_tracing_off() {
  setup_tracing();
  let sink = CollectingSink::new();
  let options = RenderOptions {
    trace_duplicates: false,
    ..RenderOptions::default()
  };
  let env = collecting_env(&sink).with_options(options);
  let switch = Switch::new(9, vec![default_("first"), case(1, "one"), default_("second")]);
  assert_eq!(switch.render(&env).payload(), Some(&"first"));
  assert_eq!(switch.render(&env).origin, Origin::Default);
  assert!(sink.is_empty());
}

#[test]
fn test_builder_child_accepts_prebuilt_cases() {
  setup_tracing();
  let env = RenderEnv::default();
  let shared: Vec<Child<&str>> = vec![case("en", "English"), case("fr", "French")];
  let switch: Switch<&str> = Switch::builder("fr")
    .case("de")
    .render("German")
    .child(Child::Fragment(shared))
    .default("Unknown")
    .build();
  let selection = switch.render(&env);
  assert_eq!(selection.payload(), Some(&"French"));
  assert_eq!(selection.origin, Origin::Case(2));
  assert_eq!(switch.children().len(), 3);
}
