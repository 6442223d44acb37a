use crate::core::models::atom::AtomRecord;
use crate::core::models::structure::StructureTable;
use nalgebra::Point3;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum TableReadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed atom table: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("Structure source contains no atoms")]
    Empty,
}

// One row of the materialized atom table. The residue index stays textual
// here; coercion to an integer is the boundary's job, and placeholders such
// as "N/A" must not abort the whole load.
#[derive(Debug, Deserialize)]
struct AtomRow {
    residue_index: String,
    residue_name: String,
    #[serde(default)]
    chain: String,
    #[serde(default)]
    element: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    z: f64,
}

/// Reads an atom table from CSV input (one row per atom, with a header).
///
/// Expected columns: `residue_index`, `residue_name`, and the pass-through
/// fields `chain`, `element`, `x`, `y`, `z`. Rows whose residue index is not
/// coercible to an integer are kept, with the index recorded as absent; they
/// classify as outside every region and domain.
pub fn read_atom_table<R: Read>(reader: R) -> Result<Vec<AtomRecord>, TableReadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut atoms = Vec::new();
    for row in csv_reader.deserialize::<AtomRow>() {
        let row = row?;
        let residue_index = AtomRecord::coerce_residue_index(&row.residue_index);
        if residue_index.is_none() {
            debug!(
                raw = %row.residue_index,
                atom = atoms.len(),
                "residue index not coercible to an integer; atom will classify as outside"
            );
        }
        atoms.push(AtomRecord {
            residue_index,
            residue_name: row.residue_name,
            chain: row.chain.chars().next().unwrap_or(' '),
            element: row.element,
            position: Point3::new(row.x, row.y, row.z),
        });
    }
    Ok(atoms)
}

/// Loads the structure table from a file at startup.
///
/// An empty source is fatal here: the viewer has nothing to classify and must
/// not proceed to an interactive state.
pub fn load_structure(path: &Path) -> Result<StructureTable, TableReadError> {
    let file = File::open(path).map_err(|e| TableReadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let atoms = read_atom_table(BufReader::new(file))?;
    if atoms.is_empty() {
        return Err(TableReadError::Empty);
    }
    info!(atoms = atoms.len(), path = %path.display(), "loaded structure table");
    Ok(StructureTable::new(atoms))
}
