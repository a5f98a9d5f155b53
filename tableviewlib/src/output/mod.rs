//! Output formatting: serialize a resolved query as HTML.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **render_html**: markup for an already ordered and classified query
//! - **render_table**: one-shot, uncached rendering straight from a dataset
//!
//! ## Example
//!
//! ```rust
//! use tableviewlib::output::render_table;
//! use tableviewlib::{Dataset, Orientation, RenderOptions};
//!
//! let data = Dataset::from_rows(vec![vec!["a", "b"]]);
//! let html = render_table(&data, &RenderOptions::new().orientation(Orientation::Horizontal)).unwrap();
//! assert_eq!(
//!     html,
//!     "<table class=\"horizontal\"><tbody><tr><td>a</td></tr><tr><td>b</td></tr></tbody></table>"
//! );
//! ```

pub mod html;

pub use html::render_html;

use crate::data::dataset::{Dataset, Shape};
use crate::options::RenderOptions;
use crate::query::TableQuery;
use crate::Result;

/// Validate, resolve and render in one go, without a view or cache.
///
/// Unlike [`crate::TableView::render`], both a shape mismatch and an
/// invalid sort order are returned as errors. The dataset is validated
/// under `options.orientation`, so a mismatch names a row when vertical
/// and a column when horizontal.
pub fn render_table(dataset: &Dataset, options: &RenderOptions) -> Result<String> {
    let shape = Shape::validate(dataset, options.orientation)?;
    let query = TableQuery::build(dataset, shape, options)?;
    Ok(render_html(&query, options))
}
