//! Water potability prediction and Indian river locations.
//!
//! The GUI lives in the `water-quality` binary; this library holds the parts
//! that do not depend on rendering.

pub mod config;
pub mod data;
