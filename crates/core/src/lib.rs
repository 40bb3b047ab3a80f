//! Domain building blocks shared by the `tracklist` crates.
//!
//! Nothing in here performs I/O: id and timestamp aliases, the error
//! taxonomy, and the fixed catalog used to seed an empty store.

pub mod error;
pub mod seed;
pub mod types;
