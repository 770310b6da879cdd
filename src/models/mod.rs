//! Simulation domain models.
//!
//! Provides the data types shared between the engine and its collaborators:
//! the process-list editor produces `Process` values, the engine turns them
//! into a `Timeline` of `Slice`s, and the results renderer consumes that
//! timeline structurally.

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::{Process, Tick};
pub use timeline::{Slice, Timeline};
