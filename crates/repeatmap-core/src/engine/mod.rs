//! # Engine Module
//!
//! Resolves per-atom styles and selection summaries from the immutable
//! annotation context and a snapshot of the user interaction state. Every
//! function here is pure: the context is read-only, the interaction snapshot
//! is consumed by value or reference and never mutated, and each call
//! allocates its output fresh.

pub mod context;
pub mod error;
pub mod resolver;
pub mod state;
pub mod styles;
pub mod summary;
