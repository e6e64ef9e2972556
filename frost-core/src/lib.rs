//! Core frost-crystal growth simulation library.
//!
//! Main components:
//! - [`branch`] - the growing line unit and its invariants.
//! - [`growth`] - the per-branch growth step and forking.
//! - [`seed`] - root arms of a newly planted crystal.
//! - [`simulation`] - per-frame update of the live branch collection.
//! - [`input`] - pointer drag to seed-position sampling.
//! - [`render`] - drawing-surface contract and render pass.
//! - [`random`] - pluggable random number provider.
//! - [`config`] - tunable constants.
//! - [`types`] - shared small value types.

pub mod branch;
pub mod config;
pub mod growth;
pub mod input;
pub mod random;
pub mod render;
pub mod seed;
pub mod simulation;
pub mod types;
