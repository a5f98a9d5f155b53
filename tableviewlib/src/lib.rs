//! # tableviewlib
//!
//! Render a labeled, two-dimensional dataset as an HTML `table` element.
//!
//! ## Overview
//!
//! A dataset is an ordered mapping from labels to entries, each entry a
//! sequence of cells (or a single cell). A [`TableView`] lays the entries
//! out either as rows ([`Orientation::Vertical`]) or as columns
//! ([`Orientation::Horizontal`]) and can:
//!
//! - **Show labels as headers**: before the data, after it, or both
//!   ([`HeaderPlacement`])
//! - **Reorder entries**: an explicit permutation of the labels
//! - **Promote entries to headers**: cells of selected labels render as `th`
//! - **Tag cells with classes**: `{prefix}{label}` on every cell, plus an id
//!   and class on the table itself
//!
//! The pipeline is: dataset (shape validated once, at construction), then a
//! query (order resolved, cells classified), then markup. Rendering performs
//! no I/O and does not escape content; escaping is up to the caller.
//!
//! ## Errors
//!
//! Construction fails on irregular data ([`TableViewError::ShapeMismatch`]).
//! Rendering does not fail: an invalid sort order is logged through the
//! `log` facade and produces an empty string. Use
//! [`TableView::try_render`] to get the [`OrderError`] instead.
//!
//! ## Example
//!
//! ```rust
//! use tableviewlib::{Dataset, HeaderPlacement, Orientation, TableView};
//!
//! let data = Dataset::new()
//!     .with_entry("name", vec!["ada", "alan"])
//!     .with_entry("born", vec![1815, 1912]);
//!
//! let mut view = TableView::with_orientation(data, Orientation::Horizontal).unwrap();
//! view.set_header_placement(HeaderPlacement::Front);
//! view.set_table_id("people");
//!
//! let html = view.render();
//! assert!(html.starts_with("<table id=\"people\" class=\"horizontal\"><thead>"));
//! assert!(html.contains("<tr><td>ada</td><td>1815</td></tr>"));
//!
//! // Bad sort orders never panic or error out of `render`
//! view.set_sort_order(["name"]);
//! assert_eq!(view.render(), "");
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod query;
pub mod view;

pub use data::{Axis, Dataset, Entry, Label, Shape};
pub use error::{DatasetError, OrderError, TableViewError};
pub use options::{HeaderPlacement, Orientation, RenderOptions, DEFAULT_CLASS_PREFIX};
pub use output::{render_html, render_table};
pub use query::{resolve_order, CellKind, TableQuery};
pub use view::TableView;

/// Result type for tableviewlib operations
pub type Result<T> = std::result::Result<T, TableViewError>;
