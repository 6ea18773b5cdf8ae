// switchcraft/src/core/scope.rs

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use std::sync::Arc;

#[derive(Debug)]
struct ScopeState<V> {
  value: Option<V>,
  renders: u64,
}

/// The ambient read channel of one `Switch` instance.
///
/// The owning `Switch` publishes its raw value once per render, overwriting
/// whatever the previous render left behind. Descendants of the selected
/// payload receive a clone of this handle and read the active value from it.
///
/// Clones share state through `Arc<RwLock<..>>`. Read guards are blocking and
/// should be dropped before the next render publishes.
#[derive(Debug)]
pub struct MatchScope<V> {
  state: Arc<RwLock<ScopeState<V>>>,
}

impl<V> MatchScope<V> {
  pub fn new() -> Self {
    Self {
      state: Arc::new(RwLock::new(ScopeState { value: None, renders: 0 })),
    }
  }

  /// Identifies the owning scope by its shared state. Clones of a handle report
  /// the same id; ids are unique among live scopes and may be reused once every
  /// handle of a scope is dropped.
  pub fn id(&self) -> u64 {
    Arc::as_ptr(&self.state) as usize as u64
  }

  /// Overwrites the channel with the value of the current render.
  pub(crate) fn publish(&self, value: V) {
    let mut guard = self.state.write();
    guard.value = Some(value);
    guard.renders += 1;
  }

  /// Acquires a read guard on the published value (`None` before the first render).
  pub fn read(&self) -> MappedRwLockReadGuard<'_, Option<V>> {
    RwLockReadGuard::map(self.state.read(), |s| &s.value)
  }

  /// Calls `f` with the published value, if any.
  pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> Option<R> {
    self.state.read().value.as_ref().map(f)
  }

  /// Number of renders that have published into this scope.
  pub fn renders(&self) -> u64 {
    self.state.read().renders
  }
}

impl<V: Clone> MatchScope<V> {
  pub fn current(&self) -> Option<V> {
    self.state.read().value.clone()
  }
}

impl<V> Clone for MatchScope<V> {
  fn clone(&self) -> Self {
    MatchScope {
      state: Arc::clone(&self.state),
    }
  }
}

impl<V> Default for MatchScope<V> {
  fn default() -> Self {
    Self::new()
  }
}
