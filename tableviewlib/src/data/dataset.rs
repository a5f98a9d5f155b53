//! The labeled dataset a table view is built from, and its validated shape.
//!
//! A [`Dataset`] is an ordered mapping from [`Label`] to [`Entry`]. Entries
//! are either a single scalar (a one-element line) or a sequence of scalars.
//! [`Shape::validate`] checks that every entry has the same length and is
//! run exactly once, when a view is constructed.

use serde_json::Value;
use std::collections::HashMap;

use super::label::Label;
use crate::error::{DatasetError, TableViewError};
use crate::options::Orientation;

/// One line of cells: a row in vertical tables, a column in horizontal ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Sequence(Vec<String>),
    Scalar(String),
}

impl Entry {
    /// Build a single-cell entry.
    pub fn scalar(value: impl ToString) -> Self {
        Entry::Scalar(value.to_string())
    }

    /// Build an entry from any sequence of displayable values.
    pub fn sequence<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Entry::Sequence(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Number of cells; scalars count as one.
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells in order, with a scalar seen as a one-element slice.
    pub fn cells(&self) -> &[String] {
        match self {
            Entry::Sequence(values) => values,
            Entry::Scalar(value) => std::slice::from_ref(value),
        }
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells().get(index).map(String::as_str)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Scalar(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Scalar(value)
    }
}

impl<T: ToString> From<Vec<T>> for Entry {
    fn from(values: Vec<T>) -> Self {
        Entry::sequence(values)
    }
}

/// Ordered, label-unique collection of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<(Label, Entry)>,
    index: HashMap<Label, usize>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append an entry (or replace the one already under `label`).
    pub fn with_entry(mut self, label: impl Into<Label>, entry: impl Into<Entry>) -> Self {
        self.insert(label, entry);
        self
    }

    /// Insert an entry, keeping insertion order.
    ///
    /// An existing label keeps its position and gets the new entry; the old
    /// entry is returned.
    pub fn insert(&mut self, label: impl Into<Label>, entry: impl Into<Entry>) -> Option<Entry> {
        let label = label.into();
        let entry = entry.into();
        match self.index.get(&label) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, entry)),
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, entry));
                None
            }
        }
    }

    /// Positional data: each inner sequence becomes an entry labeled
    /// `0, 1, 2, ...`.
    pub fn from_rows<I, R, T>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: ToString,
    {
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| (Label::Index(i), Entry::sequence(row)))
            .collect()
    }

    /// Read a dataset from JSON.
    ///
    /// Arrays give index labels. Object keys give string labels, except
    /// canonical unsigned integers (`"0"`, `"12"`, not `"01"`), which give
    /// index labels so that `"1"` and `1` address the same entry. Each member is
    /// either an array of scalars or a single scalar. Strings are taken
    /// verbatim, numbers and booleans as their JSON text, `null` as an empty
    /// cell.
    pub fn from_json(value: &Value) -> Result<Self, DatasetError> {
        let members: Vec<(Label, &Value)> = match value {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| (object_key_label(k), v))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (Label::Index(i), v))
                .collect(),
            other => return Err(DatasetError::NotAContainer(json_kind(other))),
        };

        let mut dataset = Dataset::new();
        for (label, member) in members {
            let entry = match member {
                Value::Array(cells) => Entry::Sequence(
                    cells
                        .iter()
                        .map(|cell| scalar_text(&label, cell))
                        .collect::<Result<_, _>>()?,
                ),
                other => Entry::Scalar(scalar_text(&label, other)?),
            };
            dataset.insert(label, entry);
        }
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &Label) -> Option<&Entry> {
        self.index.get(label).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.index.contains_key(label)
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.entries.iter().map(|(label, _)| label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, &Entry)> {
        self.entries.iter().map(|(label, entry)| (label, entry))
    }

    /// Total number of scalar cells across all entries.
    pub fn cell_count(&self) -> usize {
        self.entries.iter().map(|(_, entry)| entry.len()).sum()
    }
}

impl<L, E> FromIterator<(L, E)> for Dataset
where
    L: Into<Label>,
    E: Into<Entry>,
{
    fn from_iter<I: IntoIterator<Item = (L, E)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for (label, entry) in iter {
            dataset.insert(label, entry);
        }
        dataset
    }
}

/// `"12"` becomes `Label::Index(12)`; `"012"`, `"-1"` and `"a"` stay keys.
fn object_key_label(key: &str) -> Label {
    match key.parse::<usize>() {
        Ok(index) if index.to_string() == key => Label::Index(index),
        _ => Label::Key(key.to_string()),
    }
}

fn scalar_text(label: &Label, value: &Value) -> Result<String, DatasetError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(DatasetError::NestedCell {
            label: label.clone(),
            kind: json_kind(value),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Regular shape of a validated dataset.
///
/// `entries` is the number of labels, `span` the length shared by every
/// entry. Which of the two is "rows" depends on the orientation the table
/// is read with, not on the one it was validated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape {
    pub entries: usize,
    pub span: usize,
}

impl Shape {
    /// Check that all entries share one length.
    ///
    /// The first entry sets the expected length. `orientation` only decides
    /// whether a mismatch is reported against a row or a column.
    pub fn validate(dataset: &Dataset, orientation: Orientation) -> Result<Shape, TableViewError> {
        let mut shape = Shape::default();

        for (label, entry) in dataset.iter() {
            let found = entry.len();
            if shape.entries > 0 && found != shape.span {
                return Err(TableViewError::ShapeMismatch {
                    label: label.clone(),
                    axis: orientation.entry_axis(),
                    found,
                    expected: shape.span,
                });
            }
            shape.span = found;
            shape.entries += 1;
        }

        Ok(shape)
    }

    pub fn rows(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Vertical => self.entries,
            Orientation::Horizontal => self.span,
        }
    }

    pub fn columns(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Vertical => self.span,
            Orientation::Horizontal => self.entries,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.entries * self.span
    }
}
