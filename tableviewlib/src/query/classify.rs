//! Header/data classification of cells.

use std::collections::BTreeSet;

use crate::data::label::Label;

/// Element used for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Data,
}

impl CellKind {
    /// Header-ness is decided per label, never per individual cell.
    pub fn for_label(label: &Label, extra_headers: &BTreeSet<Label>) -> Self {
        if extra_headers.contains(label) {
            CellKind::Header
        } else {
            CellKind::Data
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CellKind::Header => "th",
            CellKind::Data => "td",
        }
    }
}
