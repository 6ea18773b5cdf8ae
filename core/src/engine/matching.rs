// switchcraft/src/engine/matching.rs

use crate::classify::CaseSet;
use crate::core::selection::{Origin, Selection};
use std::fmt::Debug;
use tracing::{event, Level};

/// Selects the first `Case` whose `when` equals `value`, else the `Default`, else nothing.
///
/// Equality is `V`'s `PartialEq`. For `Value` that is strict equality with no
/// coercion between kinds.
pub fn select_case<'a, P, V>(set: &CaseSet<'a, P, V>, value: &V) -> Selection<'a, P>
where
  V: PartialEq + Debug,
{
  if let Some((idx, (_, payload))) = set.cases.iter().enumerate().find(|(_, (when, _))| *when == value) {
    event!(Level::DEBUG, composer = set.composer, case_index = idx, ?value, "Case matched.");
    return Selection::new(Some(*payload), Origin::Case(idx));
  }

  match set.default_payload {
    Some(payload) => {
      event!(Level::DEBUG, composer = set.composer, ?value, "No Case matched, falling back to Default.");
      Selection::new(Some(payload), Origin::Default)
    }
    None => {
      event!(Level::DEBUG, composer = set.composer, ?value, "No Case matched and no Default; rendering nothing.");
      Selection::nothing()
    }
  }
}
