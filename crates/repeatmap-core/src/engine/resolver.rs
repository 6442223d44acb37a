use super::context::AnnotationContext;
use super::error::EngineError;
use super::state::InteractionState;
use super::styles::{StyleColor, StyleEntry};
use tracing::instrument;

/// Resolves the complete per-atom style assignment for one display pass.
///
/// The output has exactly one entry per atom, positionally aligned with the
/// structure table, and is freshly allocated on every call: the rendering
/// widget may retain a previous array for comparison, so no call may hand
/// back an aliased result.
///
/// Without a selection, the result is the default baseline: grey everywhere,
/// yellow for atoms inside a domain window, independent of the highlight
/// toggle. With a selection, atoms sharing the selected atom's region are
/// red, and - when the toggle is on - atoms inside a domain window are
/// yellow. Domain highlight is evaluated after region highlight and wins
/// wherever both apply. The render mode is applied uniformly.
///
/// # Errors
///
/// Returns [`EngineError::SelectionOutOfRange`] when the snapshot's selected
/// index does not reference an atom of the table; the selection is never
/// clamped.
#[instrument(skip_all, fields(atoms = ctx.structure().len(), selection = ?state.selection))]
pub fn resolve_styles(
    ctx: &AnnotationContext,
    state: &InteractionState,
) -> Result<Vec<StyleEntry>, EngineError> {
    let atoms = ctx.structure().atoms();

    let Some(selected) = state.selection else {
        let styles = ctx
            .baseline_colors()
            .iter()
            .map(|&color| StyleEntry::new(state.mode, color))
            .collect();
        return Ok(styles);
    };

    let selected_atom = atoms
        .get(selected)
        .ok_or(EngineError::SelectionOutOfRange {
            index: selected,
            atom_count: atoms.len(),
        })?;
    let active_region = ctx.region_of(selected_atom);

    let styles = atoms
        .iter()
        .map(|atom| {
            let mut color = StyleColor::Grey;
            if ctx.region_of(atom) == active_region {
                color = StyleColor::Red;
            }
            if state.domain_highlight && ctx.domain_of(atom).is_some() {
                color = StyleColor::Yellow;
            }
            StyleEntry::new(state.mode, color)
        })
        .collect();
    Ok(styles)
}
