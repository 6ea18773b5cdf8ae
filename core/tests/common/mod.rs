// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use switchcraft::{Child, CollectingSink, Node, OffendingRole, RenderEnv, RoleTag, SwitchcraftError, Value};
use tracing::Level;

// --- Common Child Helpers ---
// Payloads are plain strings so assertions can compare what was selected.
pub type Children = Vec<Child<&'static str, Value>>;

pub fn if_(condition: bool, payload: &'static str) -> Child<&'static str> {
  Node::if_(condition, payload).into()
}

pub fn elif(condition: bool, payload: &'static str) -> Child<&'static str> {
  Node::elif(condition, payload).into()
}

pub fn else_(payload: &'static str) -> Child<&'static str> {
  Node::else_(payload).into()
}

pub fn case(when: impl Into<Value>, payload: &'static str) -> Child<&'static str> {
  Node::case(when, payload).into()
}

pub fn default_(payload: &'static str) -> Child<&'static str> {
  Node::default_(payload).into()
}

pub fn element(name: &'static str, payload: &'static str) -> Child<&'static str> {
  Node::element(name, payload).into()
}

pub fn unexpected(composer: &'static str, tag: RoleTag) -> SwitchcraftError {
  SwitchcraftError::UnexpectedRole {
    composer,
    role: OffendingRole::Marker(tag),
  }
}

pub fn unexpected_element(composer: &'static str, name: &'static str) -> SwitchcraftError {
  SwitchcraftError::UnexpectedRole {
    composer,
    role: OffendingRole::Element(name.into()),
  }
}

/// A sink plus an environment borrowing it, for one test.
pub fn collecting_env(sink: &CollectingSink) -> RenderEnv<'_> {
  RenderEnv::new(sink)
}

// --- Lazily rendered payloads ---
// A payload that only does work when the host mounts it, counted globally.
pub type LazyPayload = Arc<dyn Fn() -> String + Send + Sync>;

pub static MOUNT_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn lazy(label: &'static str) -> LazyPayload {
  Arc::new(move || {
    MOUNT_COUNTER.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(target: "test_payloads", label, "payload mounted");
    label.to_string()
  })
}

pub fn reset_counters() {
  MOUNT_COUNTER.store(0, Ordering::SeqCst);
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
