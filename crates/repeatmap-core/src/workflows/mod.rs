//! # Workflows Module
//!
//! The public, user-facing entry points. A UI adapter builds the annotation
//! context once at startup ([`startup`]) and then, on every interaction
//! change, asks [`view`] for a fresh style array and selection summary. The
//! adapter owns event wiring and call serialization; everything below this
//! layer is purely functional.

pub mod startup;
pub mod view;
