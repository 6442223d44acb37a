//! The boundary that consumes the atom table materialized by an external
//! structure parser. Structure-file parsing itself (PDB, mmCIF) is out of
//! scope; the upstream parser has already flattened the structure into one
//! record per atom.

pub mod table;
