use crate::core::annotations::domain::{DomainLoadError, DomainTable};
use crate::core::annotations::region::RegionTable;
use crate::core::io::table::{TableReadError, load_structure};
use crate::engine::context::AnnotationContext;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load structure table: {0}")]
    Structure(#[from] TableReadError),

    #[error("Failed to load domain table: {0}")]
    Domains(#[from] DomainLoadError),
}

/// Builds the annotation context the viewer runs against.
///
/// Loads the materialized atom table from `structure_path` and, when
/// `domain_table_path` is given, the deployment-specific domain table;
/// otherwise the canonical per-repeat windows apply. An empty structure
/// source is fatal: the error propagates and the caller must not enter an
/// interactive state.
#[instrument(skip_all, name = "startup")]
pub fn build_context(
    structure_path: &Path,
    domain_table_path: Option<&Path>,
) -> Result<AnnotationContext, StartupError> {
    let structure = load_structure(structure_path)?;
    let domains = match domain_table_path {
        Some(path) => {
            let table = DomainTable::load(path)?;
            info!(windows = table.ranges().len(), path = %path.display(), "loaded domain table");
            table
        }
        None => DomainTable::canonical(),
    };
    Ok(AnnotationContext::new(
        structure,
        RegionTable::canonical(),
        domains,
    ))
}
