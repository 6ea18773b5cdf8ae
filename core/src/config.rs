// switchcraft/src/config.rs

//! Render options and the per-render environment handed to composers.

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{ConfigError, SwitchcraftError};
use std::env;
use tracing::{event, Level};

pub const ENV_UNEXPECTED_ROLES: &str = "SWITCHCRAFT_UNEXPECTED_ROLES";
pub const ENV_TRACE_DUPLICATES: &str = "SWITCHCRAFT_TRACE_DUPLICATES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
  /// Report children whose role does not belong to the enclosing composer.
  pub report_unexpected_roles: bool,
  /// Emit DEBUG events when a duplicate `If`, `Else` or `Default` is dropped.
  pub trace_duplicates: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      report_unexpected_roles: true,
      trace_duplicates: true,
    }
  }
}

impl RenderOptions {
  /// Loads options from `SWITCHCRAFT_*` environment variables, keeping the
  /// default for any variable that is unset.
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();
    Ok(Self {
      report_unexpected_roles: flag_from_env(ENV_UNEXPECTED_ROLES)?.unwrap_or(defaults.report_unexpected_roles),
      trace_duplicates: flag_from_env(ENV_TRACE_DUPLICATES)?.unwrap_or(defaults.trace_duplicates),
    })
  }
}

fn flag_from_env(var: &'static str) -> Result<Option<bool>, ConfigError> {
  match env::var(var) {
    Ok(raw) => parse_flag(var, &raw).map(Some),
    Err(_) => Ok(None),
  }
}

pub(crate) fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "true" | "1" | "on" => Ok(true),
    "false" | "0" | "off" => Ok(false),
    _ => Err(ConfigError::InvalidFlag {
      var,
      value: raw.to_string(),
    }),
  }
}

static DEFAULT_SINK: TracingSink = TracingSink;

/// Everything a composer needs for one render besides its own props:
/// where to send diagnostics and which optional reports to make.
#[derive(Clone, Copy)]
pub struct RenderEnv<'s> {
  sink: &'s dyn DiagnosticSink,
  options: RenderOptions,
}

impl<'s> RenderEnv<'s> {
  pub fn new(sink: &'s dyn DiagnosticSink) -> Self {
    Self {
      sink,
      options: RenderOptions::default(),
    }
  }

  pub fn with_options(mut self, options: RenderOptions) -> Self {
    self.options = options;
    self
  }

  pub fn options(&self) -> RenderOptions {
    self.options
  }

  /// Configuration errors always reach the sink; unexpected-role warnings
  /// only when `report_unexpected_roles` is set.
  pub(crate) fn report(&self, error: SwitchcraftError) {
    if matches!(error, SwitchcraftError::UnexpectedRole { .. }) && !self.options.report_unexpected_roles {
      event!(Level::TRACE, %error, "Unexpected-role report suppressed by options.");
      return;
    }
    self.sink.report(&Diagnostic::new(error));
  }
}

impl Default for RenderEnv<'static> {
  fn default() -> Self {
    RenderEnv::new(&DEFAULT_SINK)
  }
}

impl std::fmt::Debug for RenderEnv<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RenderEnv").field("options", &self.options).finish()
  }
}
