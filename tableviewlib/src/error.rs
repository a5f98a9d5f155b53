//! Error types for tableviewlib

use thiserror::Error;

use crate::data::label::{Axis, Label};

/// Errors that make a table view impossible to construct.
///
/// These are fatal for the instance: no partially built view is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableViewError {
    /// An entry's length differs from the length set by the first entry
    #[error("size mismatch: {axis} '{label}' has {found} elements, {expected} expected")]
    ShapeMismatch {
        label: Label,
        axis: Axis,
        found: usize,
        expected: usize,
    },

    /// The raw input could not be read as a dataset
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// A one-shot render was asked for with an inconsistent sort order
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Errors raised while converting raw input into a [`crate::Dataset`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Top-level JSON value is neither an object nor an array
    #[error("dataset must be a JSON object or array, found {0}")]
    NotAContainer(&'static str),

    /// An entry nests arrays or objects below the cell level
    #[error("entry '{label}' contains a nested {kind}; cells must be scalars")]
    NestedCell { label: Label, kind: &'static str },
}

/// Reasons a sort order is rejected at render time.
///
/// Never fatal: [`crate::TableView::render`] logs these and yields an empty
/// string, [`crate::TableView::try_render`] returns them as values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("invalid sort order for table: size {found} is not the same as source data ({expected})")]
    SizeMismatch { found: usize, expected: usize },

    #[error("invalid sort order for table: key {0} does not exist in source data")]
    UnknownKey(Label),

    #[error("invalid sort order for table: key {0} appears more than once")]
    DuplicateKey(Label),
}
