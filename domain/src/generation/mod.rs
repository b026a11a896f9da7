//! Generation domain
//!
//! Parameters sent to the text generator, cleanup of its raw output, and
//! the final result of one run.

pub mod cleanup;
pub mod params;
pub mod result;
