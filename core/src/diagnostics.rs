// switchcraft/src/diagnostics.rs

//! The two-level diagnostic channel.
//!
//! Composers report a `Diagnostic` to a `DiagnosticSink` instead of failing the
//! render. A configuration error (`Severity::Error`) means the offending
//! subtree renders empty; a warning means one child was skipped while its
//! siblings were still processed.

use crate::error::SwitchcraftError;
use parking_lot::Mutex;
use tracing::{event, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
  Warning,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub severity: Severity,
  pub error: SwitchcraftError,
}

impl Diagnostic {
  pub fn new(error: SwitchcraftError) -> Self {
    let severity = match error {
      SwitchcraftError::MissingIf { .. } => Severity::Error,
      SwitchcraftError::UnexpectedRole { .. } => Severity::Warning,
    };
    Self { severity, error }
  }
}

/// Receives diagnostics raised during a render.
///
/// Implementations must not panic; the render that raised the diagnostic
/// carries on (or renders empty) regardless of what the sink does.
pub trait DiagnosticSink: Send + Sync {
  fn report(&self, diagnostic: &Diagnostic);
}

// --- Tracing Sink ---

/// Forwards diagnostics to `tracing` at ERROR or WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn report(&self, diagnostic: &Diagnostic) {
    match diagnostic.severity {
      Severity::Error => event!(target: "switchcraft", Level::ERROR, "{}", diagnostic.error),
      Severity::Warning => event!(target: "switchcraft", Level::WARN, "{}", diagnostic.error),
    }
  }
}

// --- Collecting Sink ---

/// Keeps every diagnostic it receives, in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
  diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a copy of everything collected so far.
  pub fn diagnostics(&self) -> Vec<Diagnostic> {
    self.diagnostics.lock().clone()
  }

  pub fn errors(&self) -> Vec<SwitchcraftError> {
    self.with_severity(Severity::Error)
  }

  pub fn warnings(&self) -> Vec<SwitchcraftError> {
    self.with_severity(Severity::Warning)
  }

  fn with_severity(&self, severity: Severity) -> Vec<SwitchcraftError> {
    self
      .diagnostics
      .lock()
      .iter()
      .filter(|d| d.severity == severity)
      .map(|d| d.error.clone())
      .collect()
  }

  pub fn is_empty(&self) -> bool {
    self.diagnostics.lock().is_empty()
  }

  /// Removes and returns everything collected so far.
  pub fn take(&self) -> Vec<Diagnostic> {
    std::mem::take(&mut *self.diagnostics.lock())
  }
}

impl DiagnosticSink for CollectingSink {
  fn report(&self, diagnostic: &Diagnostic) {
    self.diagnostics.lock().push(diagnostic.clone());
  }
}

// --- Functional Sink ---

/// Adapts a closure into a `DiagnosticSink`.
pub struct FnSink<F>
where
  F: Fn(&Diagnostic) + Send + Sync,
{
  f: F,
}

impl<F> FnSink<F>
where
  F: Fn(&Diagnostic) + Send + Sync,
{
  pub fn new(f: F) -> Self {
    Self { f }
  }
}

impl<F> DiagnosticSink for FnSink<F>
where
  F: Fn(&Diagnostic) + Send + Sync,
{
  fn report(&self, diagnostic: &Diagnostic) {
    (self.f)(diagnostic)
  }
}
