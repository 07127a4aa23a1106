//! # Section Reordering
//!
//! Single-element relocation within the ordered section sequence, the model
//! behind drag-and-drop. The engine only sees `(active, over)` id pairs, so
//! pointer drags and keyboard-driven moves that resolve to the same pair
//! produce the identical order.

use crate::mutations::MutationError;
use pagecraft_model::Section;

/// Move the section `active_id` to the position currently held by `over_id`.
///
/// Standard single-element array-move semantics: the element at the active
/// position is removed and reinserted at the over position; everything
/// between the two shifts one slot toward the vacated position, everything
/// outside is untouched. `active_id == over_id` is an idempotent no-op.
///
/// A missing id means the caller raced a stale drop target; the error is an
/// invariant signal, callers usually treat it as a no-op.
pub fn move_section(
    sections: &[Section],
    active_id: &str,
    over_id: &str,
) -> Result<Vec<Section>, MutationError> {
    let from = position(sections, active_id)?;
    if active_id == over_id {
        return Ok(sections.to_vec());
    }
    let to = position(sections, over_id)?;

    let mut next = sections.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Ok(next)
}

/// Index-targeted variant for discrete (keyboard) reordering. `index` is
/// clamped to the sequence length.
pub fn move_section_to(
    sections: &[Section],
    id: &str,
    index: usize,
) -> Result<Vec<Section>, MutationError> {
    let from = position(sections, id)?;

    let mut next = sections.to_vec();
    let moved = next.remove(from);
    next.insert(index.min(next.len()), moved);
    Ok(next)
}

fn position(sections: &[Section], id: &str) -> Result<usize, MutationError> {
    sections
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| MutationError::SectionNotFound(id.to_string()))
}
