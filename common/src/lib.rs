//! Shared model and presentation logic for the WorkSphere admin panel.
//!
//! Everything in this crate is synchronous and target independent: the
//! frontend compiles it to WebAssembly, and the unit tests run natively.

pub mod form;
pub mod format;
pub mod model;
pub mod requests;
pub mod roster;
