// switchcraft/src/engine/branch.rs

use crate::classify::BranchChain;
use crate::config::RenderEnv;
use crate::core::selection::{Origin, Selection};
use crate::error::SwitchcraftError;
use tracing::{event, Level};

/// Selects from an `If` → `ElIf`* → `Else` chain.
///
/// A true `If` wins outright. Otherwise the first true `ElIf` in source order
/// wins, then the `Else`, then nothing. A true `If` without content selects
/// nothing and does not fall through. A chain without an `If` is a
/// configuration error: it is reported once and nothing is selected.
pub fn select_branch<'a, P>(chain: &BranchChain<'a, P>, env: &RenderEnv<'_>) -> Selection<'a, P> {
  let Some(if_branch) = chain.if_branch else {
    env.report(SwitchcraftError::MissingIf {
      composer: chain.composer,
    });
    return Selection::nothing();
  };

  if if_branch.condition {
    return match if_branch.payload {
      Some(payload) => {
        event!(Level::DEBUG, composer = chain.composer, "If condition held.");
        Selection::new(Some(payload), Origin::If)
      }
      None => {
        event!(Level::DEBUG, composer = chain.composer, "If condition held but it has no content; rendering nothing.");
        Selection::nothing()
      }
    };
  }

  if let Some((idx, elif)) = chain.elifs.iter().enumerate().find(|(_, b)| b.condition) {
    event!(Level::DEBUG, composer = chain.composer, elif_index = idx, "ElIf condition held.");
    return Selection::new(elif.payload, Origin::ElIf(idx));
  }

  match chain.else_payload {
    Some(payload) => {
      event!(Level::DEBUG, composer = chain.composer, "No condition held, falling back to Else.");
      Selection::new(Some(payload), Origin::Else)
    }
    None => {
      event!(Level::DEBUG, composer = chain.composer, "No condition held and no Else; rendering nothing.");
      Selection::nothing()
    }
  }
}
