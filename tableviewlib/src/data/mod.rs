//! Input data: labels, entries, and the validated shape of a dataset.
//!
//! This is the first stage of the pipeline. Everything downstream
//! (ordering, classification, markup) reads from a [`Dataset`] whose
//! [`Shape`] was checked once, when the view was built.

pub mod dataset;
pub mod label;

pub use dataset::{Dataset, Entry, Shape};
pub use label::{Axis, Label};
