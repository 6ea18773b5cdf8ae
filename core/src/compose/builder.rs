// switchcraft/src/compose/builder.rs

//! Fluent builders for `IfElse` and `Switch` child sequences.
//!
//! ```
//! use switchcraft::{IfElse, RenderEnv, Switch, Value};
//!
//! let chain: IfElse<&str> = IfElse::builder()
//!   .when(false).render("a")
//!   .when(true).render("b")
//!   .otherwise("c")
//!   .build();
//! assert_eq!(chain.render(&RenderEnv::default()).payload(), Some(&"b"));
//!
//! let switch: Switch<&str, Value> = Switch::builder(10)
//!   .case(5).render("five")
//!   .case(10).render("ten")
//!   .default("other")
//!   .build();
//! assert_eq!(switch.render(&RenderEnv::default()).payload(), Some(&"ten"));
//! ```

use crate::compose::if_else::IfElse;
use crate::compose::switch::Switch;
use crate::core::node::{Child, Node, Role};
use crate::core::value::Value;
use std::fmt::Debug;
use tracing::{event, Level};

/// Collects an `If`, any number of `ElIf`s and an optional `Else`, in that order.
pub struct BranchChainBuilder<P, V = Value> {
  children: Vec<Child<P, V>>,
  has_if: bool,
  has_else: bool,
}

impl<P, V> BranchChainBuilder<P, V> {
  pub fn new() -> Self {
    Self {
      children: Vec::new(),
      has_if: false,
      has_else: false,
    }
  }

  /// Starts a conditional branch. The first call produces the `If`, later calls `ElIf`s.
  pub fn when(self, condition: bool) -> BranchConfigurator<P, V> {
    BranchConfigurator {
      builder: self,
      condition,
    }
  }

  /// Adds the `Else`. A second `otherwise` is kept as a child but never selected.
  pub fn otherwise(mut self, payload: P) -> Self {
    if self.has_else {
      event!(Level::DEBUG, "BranchChainBuilder already has an Else; the new one will be ignored at render.");
    }
    self.has_else = true;
    self.children.push(Node::else_(payload).into());
    self
  }

  /// Appends an arbitrary child unchanged.
  pub fn child(mut self, child: impl Into<Child<P, V>>) -> Self {
    self.children.push(child.into());
    self
  }

  pub fn build(self) -> IfElse<P, V> {
    IfElse::new(self.children)
  }
}

impl<P, V> Default for BranchChainBuilder<P, V> {
  fn default() -> Self {
    Self::new()
  }
}

/// Intermediate builder holding the condition of one branch until its payload is given.
pub struct BranchConfigurator<P, V = Value> {
  builder: BranchChainBuilder<P, V>,
  condition: bool,
}

impl<P, V> BranchConfigurator<P, V> {
  pub fn render(mut self, payload: P) -> BranchChainBuilder<P, V> {
    let node = if self.builder.has_if {
      Node::elif(self.condition, payload)
    } else {
      self.builder.has_if = true;
      Node::if_(self.condition, payload)
    };
    self.builder.children.push(node.into());
    self.builder
  }
}

impl<P, V> IfElse<P, V> {
  pub fn builder() -> BranchChainBuilder<P, V> {
    BranchChainBuilder::new()
  }
}

/// Collects `Case`s in order and an optional `Default` for a `Switch` on `value`.
pub struct CaseListBuilder<P, V = Value> {
  value: V,
  children: Vec<Child<P, V>>,
}

impl<P, V> CaseListBuilder<P, V>
where
  V: PartialEq + Clone + Debug,
{
  pub fn new(value: impl Into<V>) -> Self {
    Self {
      value: value.into(),
      children: Vec::new(),
    }
  }

  pub fn case(self, when: impl Into<V>) -> CaseConfigurator<P, V> {
    CaseConfigurator {
      builder: self,
      when: when.into(),
    }
  }

  pub fn default(mut self, payload: P) -> Self {
    self.children.push(Node::default_(payload).into());
    self
  }

  /// Appends an arbitrary child unchanged, e.g. a fragment of prebuilt cases.
  pub fn child(mut self, child: impl Into<Child<P, V>>) -> Self {
    self.children.push(child.into());
    self
  }

  pub fn build(self) -> Switch<P, V> {
    Switch::new(self.value, self.children)
  }
}

/// Intermediate builder holding one `Case`'s comparison value until its payload is given.
pub struct CaseConfigurator<P, V = Value> {
  builder: CaseListBuilder<P, V>,
  when: V,
}

impl<P, V> CaseConfigurator<P, V>
where
  V: PartialEq + Clone + Debug,
{
  pub fn render(mut self, payload: P) -> CaseListBuilder<P, V> {
    self.builder.children.push(Node::marker(Role::Case { when: self.when }, payload).into());
    self.builder
  }
}

impl<P, V> Switch<P, V>
where
  V: PartialEq + Clone + Debug,
{
  pub fn builder(value: impl Into<V>) -> CaseListBuilder<P, V> {
    CaseListBuilder::new(value)
  }
}
