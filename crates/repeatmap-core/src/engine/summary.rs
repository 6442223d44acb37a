use super::context::AnnotationContext;
use super::error::EngineError;
use crate::core::utils::residues::residue_full_name;
use serde::Serialize;
use std::fmt;

/// The fixed message shown while nothing is selected.
pub const NO_SELECTION_MESSAGE: &str =
    "No atom has been selected. Click somewhere on the molecular structure to select an atom.";

/// The annotation summary for the current selection.
///
/// Absence of a selection and absence of a domain are both explicit cases:
/// a domain literally labeled "false" or "No" stays distinguishable from "no
/// domain".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionSummary {
    NoSelection,
    Selected {
        residue_name: String,
        region: String,
        domain: Option<String>,
    },
}

/// Produces the selection summary for the given atom index.
///
/// # Errors
///
/// Returns [`EngineError::SelectionOutOfRange`] when the index does not
/// reference an atom of the table. Reporting the violation beats quietly
/// showing a stale summary.
pub fn summarize(
    ctx: &AnnotationContext,
    selection: Option<usize>,
) -> Result<SelectionSummary, EngineError> {
    let Some(index) = selection else {
        return Ok(SelectionSummary::NoSelection);
    };
    let atom = ctx
        .structure()
        .atom(index)
        .ok_or(EngineError::SelectionOutOfRange {
            index,
            atom_count: ctx.structure().len(),
        })?;

    Ok(SelectionSummary::Selected {
        residue_name: atom.residue_name.clone(),
        region: ctx.region_of(atom).to_string(),
        domain: ctx.domain_of(atom).map(str::to_string),
    })
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionSummary::NoSelection => f.write_str(NO_SELECTION_MESSAGE),
            SelectionSummary::Selected {
                residue_name,
                region,
                domain,
            } => {
                match residue_full_name(residue_name) {
                    Some(full) => writeln!(f, "Residue name: {residue_name} ({full})")?,
                    None => writeln!(f, "Residue name: {residue_name}")?,
                }
                writeln!(f, "Region: {region}")?;
                match domain {
                    Some(label) => write!(f, "Domain: {label}"),
                    None => write!(f, "Domain: No"),
                }
            }
        }
    }
}
