//! Declarative residue-index classification tables.
//!
//! Both tables map residue indices to labels by interval lookup. The region
//! table is a fixed, contiguous partition of the annotated index range; the
//! domain table is a sparse, possibly empty set of non-overlapping windows.

pub mod domain;
pub mod region;
