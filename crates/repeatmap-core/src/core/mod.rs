//! # Core Module
//!
//! Fundamental building blocks for structure annotation: the immutable data
//! models, the declarative classification tables, and the boundary that turns
//! an externally-parsed atom table into an in-memory structure.
//!
//! ## Overview
//!
//! - **Molecular Representation** ([`models`]) - Immutable atom records and
//!   the ordered structure table they live in
//! - **Classification Tables** ([`annotations`]) - Region and domain range
//!   tables with their lookup algorithms
//! - **Table I/O** ([`io`]) - Reading the atom table materialized by an
//!   external structure parser
//! - **Static Knowledge** ([`utils`]) - Residue-name lookup tables

pub mod annotations;
pub mod io;
pub mod models;
pub mod utils;
