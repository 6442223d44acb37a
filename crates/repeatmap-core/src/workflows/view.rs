use crate::engine::context::AnnotationContext;
use crate::engine::error::EngineError;
use crate::engine::resolver;
use crate::engine::state::InteractionState;
use crate::engine::styles::StyleEntry;
use crate::engine::summary::{self, SelectionSummary};
use tracing::instrument;

/// Recomputes the full style array for the current interaction snapshot.
///
/// Called by the adapter on every selection change, highlight toggle, or
/// render-mode change; the result replaces the viewer's style array
/// wholesale.
#[instrument(skip_all, name = "restyle")]
pub fn restyle(
    ctx: &AnnotationContext,
    state: &InteractionState,
) -> Result<Vec<StyleEntry>, EngineError> {
    resolver::resolve_styles(ctx, state)
}

/// Produces the textual annotation summary for the current selection.
///
/// Called by the adapter on selection changes, independently of [`restyle`].
#[instrument(skip_all, name = "describe_selection")]
pub fn describe_selection(
    ctx: &AnnotationContext,
    selection: Option<usize>,
) -> Result<SelectionSummary, EngineError> {
    summary::summarize(ctx, selection)
}
