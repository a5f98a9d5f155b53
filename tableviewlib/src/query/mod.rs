//! Query processing: order and classify entries ahead of rendering.
//!
//! This module sits between the validated dataset and the markup writer.
//! It provides:
//!
//! - **Order**: resolve natural or explicit label order (`resolve_order`)
//! - **Classify**: decide `th` vs `td` per label (`CellKind`)
//! - **TableQuery**: the ordered, classified lines one render works from
//!
//! ## Example
//!
//! ```rust
//! use tableviewlib::query::TableQuery;
//! use tableviewlib::{Dataset, Orientation, RenderOptions, Shape};
//!
//! let data = Dataset::new().with_entry("x", vec![1, 2]).with_entry("y", vec![3, 4]);
//! let shape = Shape::validate(&data, Orientation::Vertical).unwrap();
//! let options = RenderOptions::new().sort_order(["y", "x"]).extra_header("x");
//!
//! let query = TableQuery::build(&data, shape, &options).unwrap();
//! assert_eq!(query.lines[0].label.to_string(), "y");
//! assert_eq!(query.lines[1].kind.tag(), "th");
//! ```

pub mod classify;
pub mod order;

pub use classify::CellKind;
pub use order::resolve_order;

use crate::data::dataset::{Dataset, Entry, Shape};
use crate::data::label::Label;
use crate::error::OrderError;
use crate::options::{HeaderPlacement, Orientation, RenderOptions};

/// One dataset entry, positioned and classified.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub label: &'a Label,
    pub kind: CellKind,
    pub entry: &'a Entry,
}

/// Everything a render needs, resolved against the current options.
#[derive(Debug, Clone)]
pub struct TableQuery<'a> {
    pub orientation: Orientation,
    pub headers: HeaderPlacement,
    /// Table rows under the current orientation
    pub rows: usize,
    /// Table columns under the current orientation
    pub columns: usize,
    /// Entries in render order
    pub lines: Vec<Line<'a>>,
}

impl<'a> TableQuery<'a> {
    /// Resolve order and cell kinds for one render.
    ///
    /// `shape` is the one validated at construction; rows and columns are
    /// read from it under `options.orientation`, without re-validating.
    pub fn build(
        dataset: &'a Dataset,
        shape: Shape,
        options: &'a RenderOptions,
    ) -> Result<Self, OrderError> {
        let order = resolve_order(dataset, options.sort_order.as_deref())?;

        let lines = order
            .into_iter()
            .map(|label| -> Result<Line<'a>, OrderError> {
                let entry = dataset
                    .get(label)
                    .ok_or_else(|| OrderError::UnknownKey(label.clone()))?;
                Ok(Line {
                    label,
                    kind: CellKind::for_label(label, &options.extra_headers),
                    entry,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TableQuery {
            orientation: options.orientation,
            headers: options.headers,
            rows: shape.rows(options.orientation),
            columns: shape.columns(options.orientation),
            lines,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
