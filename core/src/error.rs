// switchcraft/src/error.rs
use crate::core::node::RoleTag;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Problems a composer can detect while classifying its children.
///
/// These never unwind through the host renderer. They are wrapped in a
/// `Diagnostic` and handed to the active `DiagnosticSink`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchcraftError {
  #[error("{composer} requires an `If` as a direct child; rendering nothing")]
  MissingIf { composer: &'static str },

  #[error("{composer} received a child with unexpected role `{role}`; it was ignored")]
  UnexpectedRole { composer: &'static str, role: OffendingRole },
}

/// The role of a child that did not belong where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffendingRole {
  Marker(RoleTag),
  /// An ordinary element, by name.
  Element(Cow<'static, str>),
}

impl fmt::Display for OffendingRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OffendingRole::Marker(tag) => write!(f, "{}", tag),
      OffendingRole::Element(name) => write!(f, "{}", name),
    }
  }
}

/// Errors from loading `RenderOptions` out of the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Invalid value '{value}' for {var}: expected true/false, 1/0 or on/off")]
  InvalidFlag { var: &'static str, value: String },
}
