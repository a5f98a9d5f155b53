//! Render options for table views.
//!
//! Everything here is plain configuration with no derived state. A
//! [`RenderOptions`] value can be built in code, deserialized from JSON
//! (any subset of fields, the rest defaulted) or mutated in place on a
//! [`crate::TableView`] between renders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::data::label::{Axis, Label};

/// Whether dataset entries are laid out as columns or as rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Each entry is a column; labels head the columns
    Horizontal,
    /// Each entry is a row; labels head the rows
    #[default]
    Vertical,
}

impl Orientation {
    /// Class token always present on the `table` element.
    pub fn class_name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// What a single dataset entry is under this orientation.
    pub fn entry_axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Column,
            Orientation::Vertical => Axis::Row,
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" | "columns" => Ok(Orientation::Horizontal),
            "vertical" | "v" | "rows" => Ok(Orientation::Vertical),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }
}

/// Where label headers are emitted relative to the data.
///
/// Front means the `thead` of horizontal tables or the first cell of each
/// row in vertical ones; Back means `tfoot` or the last cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPlacement {
    #[default]
    None,
    Front,
    Back,
    Both,
}

impl HeaderPlacement {
    pub fn has_front(self) -> bool {
        matches!(self, HeaderPlacement::Front | HeaderPlacement::Both)
    }

    pub fn has_back(self) -> bool {
        matches!(self, HeaderPlacement::Back | HeaderPlacement::Both)
    }

    /// Combine front/back flags back into a placement.
    pub fn from_flags(front: bool, back: bool) -> Self {
        match (front, back) {
            (false, false) => HeaderPlacement::None,
            (true, false) => HeaderPlacement::Front,
            (false, true) => HeaderPlacement::Back,
            (true, true) => HeaderPlacement::Both,
        }
    }
}

impl FromStr for HeaderPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(HeaderPlacement::None),
            "front" | "head" => Ok(HeaderPlacement::Front),
            "back" | "foot" => Ok(HeaderPlacement::Back),
            "both" => Ok(HeaderPlacement::Both),
            _ => Err(format!("Unknown header placement: {}", s)),
        }
    }
}

/// Default prefix for label-derived class names.
pub const DEFAULT_CLASS_PREFIX: &str = "data";

/// Presentation settings for one table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub orientation: Orientation,
    pub headers: HeaderPlacement,
    /// Explicit label order; `None` (or empty) keeps insertion order
    pub sort_order: Option<Vec<Label>>,
    /// Labels whose cells render as `th` instead of `td`
    pub extra_headers: BTreeSet<Label>,
    /// Add a `{class_prefix}{label}` class to every cell
    pub label_classes: bool,
    pub class_prefix: String,
    /// `id` of the table element; omitted when empty
    pub table_id: String,
    /// Extra class on the table element, after the orientation class
    pub table_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            headers: HeaderPlacement::default(),
            sort_order: None,
            extra_headers: BTreeSet::new(),
            label_classes: false,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            table_id: String::new(),
            table_class: String::new(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn headers(mut self, headers: HeaderPlacement) -> Self {
        self.headers = headers;
        self
    }

    pub fn sort_order<I, L>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.sort_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    pub fn extra_header(mut self, label: impl Into<Label>) -> Self {
        self.extra_headers.insert(label.into());
        self
    }

    pub fn label_classes(mut self, enabled: bool) -> Self {
        self.label_classes = enabled;
        self
    }

    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn table_id(mut self, id: impl Into<String>) -> Self {
        self.table_id = id.into();
        self
    }

    pub fn table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }
}
