//! The table view: a validated dataset plus mutable render options.
//!
//! Shape validation happens once, in the constructor, and is the only
//! fallible step a caller has to handle. After that, [`TableView::render`]
//! never fails: an inconsistent sort order is logged and rendered as an
//! empty string. [`TableView::try_render`] exposes the same failure as a
//! value for callers that prefer to handle it.
//!
//! Rendered markup is memoized per instance. The cache holds a snapshot of
//! the options it was produced with and is reused while the current options
//! compare equal to it. The cache uses a `RefCell`, so a view is `Send` but
//! not `Sync`: one thread owns it at a time.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;

use crate::data::dataset::{Dataset, Shape};
use crate::data::label::Label;
use crate::error::OrderError;
use crate::options::{HeaderPlacement, Orientation, RenderOptions};
use crate::output::html::render_html;
use crate::query::TableQuery;
use crate::Result;

#[derive(Debug, Clone)]
struct CachedRender {
    options: RenderOptions,
    html: String,
}

/// View of a dataset as an HTML table.
///
/// ```rust
/// use tableviewlib::{Dataset, HeaderPlacement, TableView};
///
/// let data = Dataset::new().with_entry("x", vec![1, 2]).with_entry("y", vec![3, 4]);
/// let mut view = TableView::new(data).unwrap();
/// view.set_header_placement(HeaderPlacement::Front);
///
/// assert_eq!(
///     view.to_string(),
///     "<table class=\"vertical\"><tbody>\
///      <tr><th class=\"front\">x</th><td>1</td><td>2</td></tr>\
///      <tr><th class=\"front\">y</th><td>3</td><td>4</td></tr>\
///      </tbody></table>"
/// );
/// ```
#[derive(Debug)]
pub struct TableView {
    dataset: Dataset,
    shape: Shape,
    options: RenderOptions,
    cache: RefCell<Option<CachedRender>>,
}

impl TableView {
    /// Build a vertical view (one row per entry).
    pub fn new(dataset: Dataset) -> Result<Self> {
        Self::with_options(dataset, RenderOptions::default())
    }

    /// Build a view, validating entries as rows or columns per `orientation`.
    pub fn with_orientation(dataset: Dataset, orientation: Orientation) -> Result<Self> {
        Self::with_options(dataset, RenderOptions::default().orientation(orientation))
    }

    /// Build a view with initial options; validation uses `options.orientation`.
    pub fn with_options(dataset: Dataset, options: RenderOptions) -> Result<Self> {
        let shape = Shape::validate(&dataset, options.orientation)?;
        log::debug!(
            "table view: {} entries of {} cells, validated as {}s",
            shape.entries,
            shape.span,
            options.orientation.entry_axis()
        );
        Ok(TableView {
            dataset,
            shape,
            options,
            cache: RefCell::new(None),
        })
    }

    /// Read the dataset from JSON (see [`Dataset::from_json`]) and build a view.
    pub fn from_json(value: &serde_json::Value, options: RenderOptions) -> Result<Self> {
        Self::with_options(Dataset::from_json(value)?, options)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.dataset.labels()
    }

    /// Table rows under the current orientation.
    pub fn rows(&self) -> usize {
        self.shape.rows(self.options.orientation)
    }

    /// Table columns under the current orientation.
    pub fn columns(&self) -> usize {
        self.shape.columns(self.options.orientation)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Change how entries are laid out. The dataset is not re-validated.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.options.orientation = orientation;
    }

    pub fn set_header_placement(&mut self, headers: HeaderPlacement) {
        self.options.headers = headers;
    }

    pub fn set_sort_order<I, L>(&mut self, order: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.options.sort_order = Some(order.into_iter().map(Into::into).collect());
    }

    pub fn clear_sort_order(&mut self) {
        self.options.sort_order = None;
    }

    pub fn set_extra_headers<I, L>(&mut self, labels: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.options.extra_headers = labels.into_iter().map(Into::into).collect::<BTreeSet<_>>();
    }

    pub fn add_extra_header(&mut self, label: impl Into<Label>) {
        self.options.extra_headers.insert(label.into());
    }

    pub fn set_label_classes(&mut self, enabled: bool) {
        self.options.label_classes = enabled;
    }

    pub fn set_class_prefix(&mut self, prefix: impl Into<String>) {
        self.options.class_prefix = prefix.into();
    }

    pub fn set_table_id(&mut self, id: impl Into<String>) {
        self.options.table_id = id.into();
    }

    pub fn set_table_class(&mut self, class: impl Into<String>) {
        self.options.table_class = class.into();
    }

    /// Whether the next render will be served from the cache.
    pub fn is_cached(&self) -> bool {
        self.cache
            .borrow()
            .as_ref()
            .is_some_and(|cached| cached.options == self.options)
    }

    /// Render, reporting an invalid sort order as an error.
    pub fn try_render(&self) -> std::result::Result<String, OrderError> {
        if let Some(cached) = self.cache.borrow().as_ref() {
            if cached.options == self.options {
                log::debug!("table view: cache hit");
                return Ok(cached.html.clone());
            }
        }

        log::debug!("table view: options changed, rendering");
        let query = TableQuery::build(&self.dataset, self.shape, &self.options)?;
        let html = render_html(&query, &self.options);

        *self.cache.borrow_mut() = Some(CachedRender {
            options: self.options.clone(),
            html: html.clone(),
        });
        Ok(html)
    }

    /// Render the table. Never fails: an invalid sort order is logged as a
    /// warning and yields an empty string.
    pub fn render(&self) -> String {
        self.try_render().unwrap_or_else(|err| {
            log::warn!("{}", err);
            String::new()
        })
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
