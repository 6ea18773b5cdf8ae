// switchcraft/src/core/node.rs

//! Defines the role-tagged `Node` and the `Child` entries of a child sequence.
//!
//! A node's role is explicit data fixed at construction. Classification never
//! looks at the payload, which stays opaque and is only ever forwarded.

use crate::core::value::Value;
use std::borrow::Cow;
use std::fmt;

/// Payload-free discriminant of a marker role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTag {
  If,
  ElIf,
  Else,
  Case,
  Default,
}

impl RoleTag {
  pub fn as_str(&self) -> &'static str {
    match self {
      RoleTag::If => "If",
      RoleTag::ElIf => "ElIf",
      RoleTag::Else => "Else",
      RoleTag::Case => "Case",
      RoleTag::Default => "Default",
    }
  }
}

impl fmt::Display for RoleTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A marker role together with its role-specific metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum Role<V = Value> {
  If { condition: bool },
  ElIf { condition: bool },
  Else,
  Case { when: V },
  Default,
}

impl<V> Role<V> {
  pub fn tag(&self) -> RoleTag {
    match self {
      Role::If { .. } => RoleTag::If,
      Role::ElIf { .. } => RoleTag::ElIf,
      Role::Else => RoleTag::Else,
      Role::Case { .. } => RoleTag::Case,
      Role::Default => RoleTag::Default,
    }
  }

  /// The boolean condition of an `If`/`ElIf`, `None` for every other role.
  pub fn condition(&self) -> Option<bool> {
    match self {
      Role::If { condition } | Role::ElIf { condition } => Some(*condition),
      _ => None,
    }
  }

  /// The comparison value of a `Case`, `None` for every other role.
  pub fn when(&self) -> Option<&V> {
    match self {
      Role::Case { when } => Some(when),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
enum Kind<V> {
  Marker(Role<V>),
  Element(Cow<'static, str>),
}

/// An opaque renderable unit: a marker role or an ordinary element, plus its payload.
///
/// `P` is the host's subtree type. `V` is the comparison type used by `Case` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<P, V = Value> {
  kind: Kind<V>,
  payload: P,
}

impl<P, V> Node<P, V> {
  pub fn marker(role: Role<V>, payload: P) -> Self {
    Self {
      kind: Kind::Marker(role),
      payload,
    }
  }

  /// An `If` branch holding `condition`.
  pub fn if_(condition: bool, payload: P) -> Self {
    Self::marker(Role::If { condition }, payload)
  }

  pub fn elif(condition: bool, payload: P) -> Self {
    Self::marker(Role::ElIf { condition }, payload)
  }

  pub fn else_(payload: P) -> Self {
    Self::marker(Role::Else, payload)
  }

  /// A `Case` selected when the enclosing `Switch` value strictly equals `when`.
  pub fn case(when: impl Into<V>, payload: P) -> Self {
    Self::marker(Role::Case { when: when.into() }, payload)
  }

  pub fn default_(payload: P) -> Self {
    Self::marker(Role::Default, payload)
  }

  /// An ordinary element carrying no marker role. `name` is used in diagnostics.
  pub fn element(name: impl Into<Cow<'static, str>>, payload: P) -> Self {
    Self {
      kind: Kind::Element(name.into()),
      payload,
    }
  }

  pub fn role(&self) -> Option<&Role<V>> {
    match &self.kind {
      Kind::Marker(role) => Some(role),
      Kind::Element(_) => None,
    }
  }

  pub fn tag(&self) -> Option<RoleTag> {
    self.role().map(Role::tag)
  }

  /// The element name for ordinary elements, or the role name for markers.
  pub fn name(&self) -> &str {
    match &self.kind {
      Kind::Marker(role) => role.tag().as_str(),
      Kind::Element(name) => name,
    }
  }

  pub fn payload(&self) -> &P {
    &self.payload
  }

  pub fn into_payload(self) -> P {
    self.payload
  }
}

/// One entry of a child sequence handed to a composer.
///
/// Only `Node` entries take part in selection. Primitive entries are
/// ignorable, and fragments are flattened in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<P, V = Value> {
  Node(Node<P, V>),
  Text(String),
  Number(f64),
  Bool(bool),
  /// A null or undefined entry.
  Empty,
  Fragment(Vec<Child<P, V>>),
}

impl<P, V> Child<P, V> {
  pub fn text(s: impl Into<String>) -> Self {
    Child::Text(s.into())
  }

  pub fn as_node(&self) -> Option<&Node<P, V>> {
    match self {
      Child::Node(node) => Some(node),
      _ => None,
    }
  }
}

impl<P, V> From<Node<P, V>> for Child<P, V> {
  fn from(node: Node<P, V>) -> Self {
    Child::Node(node)
  }
}

impl<P, V> From<Vec<Child<P, V>>> for Child<P, V> {
  fn from(children: Vec<Child<P, V>>) -> Self {
    Child::Fragment(children)
  }
}

impl<P, V> From<Option<Node<P, V>>> for Child<P, V> {
  fn from(node: Option<Node<P, V>>) -> Self {
    node.map_or(Child::Empty, Child::Node)
  }
}
