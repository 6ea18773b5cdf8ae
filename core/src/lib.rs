// src/lib.rs

//! Switchcraft: declarative conditional composition for tree-based UI renderers.
//!
//! Instead of writing host-language control flow around element construction,
//! an author places marker nodes in a child sequence and lets a composer pick
//! exactly one subtree (or nothing) to hand back to the renderer:
//!  - `If` / `ElIf` / `Else`: sequential short-circuit selection, either as
//!    siblings under `IfElse` or nested inside a standalone `If`.
//!  - `Switch` / `Case` / `Default`: first `Case` strictly equal to the value,
//!    else the `Default`, else nothing. The value is published to a scoped
//!    ambient channel the selected subtree's descendants can read.
//!  - Configuration errors and unexpected children are reported through a
//!    `DiagnosticSink` and never abort the render.

pub mod classify;
pub mod compose;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod engine;
pub mod error;

// --- Re-exports for the Public API ---

// Data model
pub use crate::core::node::{Child, Node, Role, RoleTag};
pub use crate::core::scope::MatchScope;
pub use crate::core::selection::{Origin, Selection};
pub use crate::core::value::Value;

// Classifier and engines
pub use crate::classify::{classified, classify, BranchChain, CaseSet, Classification};
pub use crate::engine::{select_branch, select_case};

// Composers and their builders
pub use crate::compose::{BranchChainBuilder, CaseListBuilder, Composer, If, IfElse, Switch};

pub use crate::config::{RenderEnv, RenderOptions};
pub use crate::diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, FnSink, Severity, TracingSink};
pub use crate::error::{ConfigError, OffendingRole, SwitchcraftError};

/*
    Render flow:
    1. The host builds a child sequence of `Child` values: marker nodes made with
       `Node::if_`, `Node::elif`, `Node::else_`, `Node::case`, `Node::default_`,
       ordinary elements made with `Node::element`, plus text and fragments.
    2. It wraps them in a composer (`If`, `IfElse` or `Switch`).
    3. On every render it calls `render(&env)`; the composer classifies its
       children, runs the engine and returns a `Selection` borrowing the chosen
       payload.
    4. The host mounts only `selection.payload`. For a `Switch` it also passes
       `switch.scope()` down to the mounted subtree.
*/
