// switchcraft/src/classify.rs

//! The node classifier and the classified child sets each engine consumes.
//!
//! Classification reads only the role tag a node was constructed with. It is
//! total: primitives, empty entries and fragments that flatten to nothing are
//! ignorable, never errors. Children whose role does not belong to the
//! enclosing composer are reported through the `RenderEnv` and skipped.

use crate::config::RenderEnv;
use crate::core::node::{Child, Node, Role, RoleTag};
use crate::error::{OffendingRole, SwitchcraftError};
use std::slice;
use tracing::{event, Level};

/// What a single child of a sequence turned out to be.
#[derive(Debug, PartialEq)]
pub enum Classification<'a, V> {
  /// A marker node, with the role (and its metadata) it was constructed with.
  Marker(&'a Role<V>),
  /// An ordinary element, by name.
  Element(&'a str),
  /// Text, numbers, booleans, empty entries.
  Ignorable,
}

impl<'a, V> Clone for Classification<'a, V> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, V> Copy for Classification<'a, V> {}

impl<'a, V> Classification<'a, V> {
  /// The marker's role tag, `None` for elements and ignorable entries.
  pub fn tag(&self) -> Option<RoleTag> {
    match self {
      Classification::Marker(role) => Some(role.tag()),
      _ => None,
    }
  }
}

/// Classifies one child. Fragments classify as ignorable here; use `flatten`
/// to walk their contents.
pub fn classify<P, V>(child: &Child<P, V>) -> Classification<'_, V> {
  match child {
    Child::Node(node) => match node.role() {
      Some(role) => Classification::Marker(role),
      None => Classification::Element(node.name()),
    },
    _ => Classification::Ignorable,
  }
}

/// Depth-first, in-order walk over a child sequence that steps into fragments.
pub struct Flatten<'a, P, V> {
  stack: Vec<slice::Iter<'a, Child<P, V>>>,
}

impl<'a, P, V> Iterator for Flatten<'a, P, V> {
  type Item = &'a Child<P, V>;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(top) = self.stack.last_mut() {
      match top.next() {
        Some(Child::Fragment(inner)) => self.stack.push(inner.iter()),
        Some(child) => return Some(child),
        None => {
          self.stack.pop();
        }
      }
    }
    None
  }
}

pub fn flatten<P, V>(children: &[Child<P, V>]) -> Flatten<'_, P, V> {
  Flatten {
    stack: vec![children.iter()],
  }
}

/// Flattens a child sequence and classifies each entry, dropping ignorable ones.
/// Every result builder below reads roles only through this.
pub fn classified<P, V>(children: &[Child<P, V>]) -> impl Iterator<Item = (Classification<'_, V>, &Node<P, V>)> {
  flatten(children).filter_map(|child| match (classify(child), child.as_node()) {
    (Classification::Ignorable, _) | (_, None) => None,
    (class, Some(node)) => Some((class, node)),
  })
}

fn report_unexpected<V>(env: &RenderEnv<'_>, composer: &'static str, class: Classification<'_, V>) {
  let role = match class {
    Classification::Marker(role) => OffendingRole::Marker(role.tag()),
    Classification::Element(name) => OffendingRole::Element(name.to_string().into()),
    Classification::Ignorable => return,
  };
  env.report(SwitchcraftError::UnexpectedRole { composer, role });
}

fn trace_duplicate(env: &RenderEnv<'_>, composer: &'static str, what: &str) {
  if env.options().trace_duplicates {
    event!(Level::DEBUG, composer, role = what, "Duplicate dropped; the first occurrence is honored.");
  }
}

// --- Branch chain ---

/// One `If`/`ElIf` candidate: its condition and the payload it would select.
#[derive(Debug, PartialEq)]
pub struct Branch<'a, P> {
  pub condition: bool,
  /// `None` only for a standalone `If` that has no content element.
  pub payload: Option<&'a P>,
}

impl<'a, P> Clone for Branch<'a, P> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, P> Copy for Branch<'a, P> {}

/// The classified input of the branch-chain engine.
#[derive(Debug, PartialEq)]
pub struct BranchChain<'a, P> {
  /// Name of the composer that built the chain, used in diagnostics.
  pub composer: &'static str,
  /// The first `If`; later ones are dropped.
  pub if_branch: Option<Branch<'a, P>>,
  /// Every `ElIf`, in source order.
  pub elifs: Vec<Branch<'a, P>>,
  /// The first `Else`; later ones are dropped.
  pub else_payload: Option<&'a P>,
}

impl<'a, P> BranchChain<'a, P> {
  pub fn new(composer: &'static str) -> Self {
    Self {
      composer,
      if_branch: None,
      elifs: Vec::new(),
      else_payload: None,
    }
  }

  /// Adds an `ElIf` or `Else` node to the chain. Returns `false` (and leaves the
  /// chain untouched) for any other node.
  fn absorb_tail<V>(&mut self, class: Classification<'_, V>, node: &'a Node<P, V>, env: &RenderEnv<'_>) -> bool {
    match class {
      Classification::Marker(Role::ElIf { condition }) => {
        self.elifs.push(Branch {
          condition: *condition,
          payload: Some(node.payload()),
        });
        true
      }
      Classification::Marker(Role::Else) => {
        if self.else_payload.is_none() {
          self.else_payload = Some(node.payload());
        } else {
          trace_duplicate(env, self.composer, "Else");
        }
        true
      }
      _ => false,
    }
  }
}

/// Classifies sibling `If`/`ElIf`/`Else` children, as `IfElse` receives them.
pub fn classify_chain<'a, P, V>(
  composer: &'static str,
  children: &'a [Child<P, V>],
  env: &RenderEnv<'_>,
) -> BranchChain<'a, P> {
  let mut chain = BranchChain::new(composer);
  for (class, node) in classified(children) {
    if chain.absorb_tail(class, node, env) {
      continue;
    }
    match class {
      Classification::Marker(Role::If { condition }) => {
        if chain.if_branch.is_none() {
          chain.if_branch = Some(Branch {
            condition: *condition,
            payload: Some(node.payload()),
          });
        } else {
          trace_duplicate(env, composer, "If");
        }
      }
      _ => report_unexpected(env, composer, class),
    }
  }
  event!(
    Level::TRACE,
    composer,
    has_if = chain.if_branch.is_some(),
    elifs = chain.elifs.len(),
    has_else = chain.else_payload.is_some(),
    "Branch chain classified."
  );
  chain
}

/// Classifies the children of a standalone `If` that holds `condition` itself.
///
/// The first ordinary element is the `If` content; nested `ElIf`/`Else` nodes
/// continue the chain. Nested `If`, `Case` and `Default` nodes are unexpected.
pub fn classify_nested_chain<'a, P, V>(
  composer: &'static str,
  condition: bool,
  children: &'a [Child<P, V>],
  env: &RenderEnv<'_>,
) -> BranchChain<'a, P> {
  let mut chain = BranchChain::new(composer);
  let mut content: Option<&'a P> = None;
  for (class, node) in classified(children) {
    if chain.absorb_tail(class, node, env) {
      continue;
    }
    match class {
      Classification::Element(name) => {
        if content.is_none() {
          content = Some(node.payload());
        } else {
          trace_duplicate(env, composer, name);
        }
      }
      _ => report_unexpected(env, composer, class),
    }
  }
  chain.if_branch = Some(Branch {
    condition,
    payload: content,
  });
  event!(
    Level::TRACE,
    composer,
    has_content = content.is_some(),
    elifs = chain.elifs.len(),
    has_else = chain.else_payload.is_some(),
    "Nested branch chain classified."
  );
  chain
}

// --- Case set ---

/// The classified input of the match engine.
#[derive(Debug, PartialEq)]
pub struct CaseSet<'a, P, V> {
  pub composer: &'static str,
  /// Every `Case` as `(when, payload)`, in source order.
  pub cases: Vec<(&'a V, &'a P)>,
  /// The first `Default`; later ones are dropped.
  pub default_payload: Option<&'a P>,
}

impl<'a, P, V> CaseSet<'a, P, V> {
  pub fn new(composer: &'static str) -> Self {
    Self {
      composer,
      cases: Vec::new(),
      default_payload: None,
    }
  }
}

/// Classifies `Case`/`Default` children, as `Switch` receives them.
pub fn classify_cases<'a, P, V>(
  composer: &'static str,
  children: &'a [Child<P, V>],
  env: &RenderEnv<'_>,
) -> CaseSet<'a, P, V> {
  let mut set = CaseSet::new(composer);
  for (class, node) in classified(children) {
    match class {
      Classification::Marker(Role::Case { when }) => set.cases.push((when, node.payload())),
      Classification::Marker(Role::Default) => {
        if set.default_payload.is_none() {
          set.default_payload = Some(node.payload());
        } else {
          trace_duplicate(env, composer, "Default");
        }
      }
      _ => report_unexpected(env, composer, class),
    }
  }
  event!(
    Level::TRACE,
    composer,
    cases = set.cases.len(),
    has_default = set.default_payload.is_some(),
    "Case set classified."
  );
  set
}
