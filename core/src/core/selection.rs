// switchcraft/src/core/selection.rs

//! Defines the outcome of one selection: the chosen payload and the rule that chose it.

/// Which rule produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
  /// The `If` condition held.
  If,
  /// The `ElIf` at this position (among `ElIf` nodes, source order) was the first to hold.
  ElIf(usize),
  /// No condition held and an `Else` was present.
  Else,
  /// The `Case` at this position (among `Case` nodes, source order) was the first to match.
  Case(usize),
  /// No `Case` matched and a `Default` was present.
  Default,
  /// Nothing was selected; the subtree renders empty.
  Nothing,
}

/// The single subtree a composer hands back to the host, borrowed from its children.
#[derive(Debug, PartialEq)]
pub struct Selection<'a, P> {
  pub payload: Option<&'a P>,
  pub origin: Origin,
}

impl<'a, P> Selection<'a, P> {
  pub(crate) fn new(payload: Option<&'a P>, origin: Origin) -> Self {
    Self { payload, origin }
  }

  pub fn nothing() -> Self {
    Self {
      payload: None,
      origin: Origin::Nothing,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.payload.is_none()
  }

  pub fn payload(&self) -> Option<&'a P> {
    self.payload
  }
}

// Derive would require P: Clone; only the reference is copied.
impl<'a, P> Clone for Selection<'a, P> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, P> Copy for Selection<'a, P> {}
