//! # repeatmap Core Library
//!
//! A library for annotating repeat-protein structures by residue index and
//! resolving the per-atom visual style a molecular viewer should display for
//! the current user interaction state.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`StructureTable`), the declarative region and domain range tables, and
//!   the I/O glue that consumes the atom table materialized by an external
//!   structure parser.
//!
//! - **[`engine`]: The Logic Core.** Resolves a complete per-atom style
//!   assignment from the annotation context and an interaction snapshot, and
//!   formats the textual summary for the current selection. All functions in
//!   this layer are pure over an immutable context.
//!
//! - **[`workflows`]: The Public API.** The entry points a UI adapter calls:
//!   building the annotation context at startup, recomputing the style array
//!   on every interaction change, and describing the current selection.

pub mod core;
pub mod engine;
pub mod workflows;
