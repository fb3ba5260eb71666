//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: source file enumeration
//! - [`source`]: opening a named resource as a line stream
//! - [`analysis`]: per-file line classification over a batch
//!
//! These ports allow the use case layer to remain independent of
//! specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod filesystem;
pub mod source;
