//! Iteration order of dataset entries.

use std::collections::HashSet;

use crate::data::dataset::Dataset;
use crate::data::label::Label;
use crate::error::OrderError;

/// Resolve the order in which entries are rendered.
///
/// Without a sort order (or with an empty one) entries keep insertion
/// order. An explicit order must be a permutation of the dataset's labels:
/// same length, every label known, none repeated.
pub fn resolve_order<'a>(
    dataset: &'a Dataset,
    sort_order: Option<&'a [Label]>,
) -> Result<Vec<&'a Label>, OrderError> {
    let order = match sort_order {
        Some(order) if !order.is_empty() => order,
        _ => return Ok(dataset.labels().collect()),
    };

    if order.len() != dataset.len() {
        return Err(OrderError::SizeMismatch {
            found: order.len(),
            expected: dataset.len(),
        });
    }

    let mut seen = HashSet::with_capacity(order.len());
    for label in order {
        if !dataset.contains(label) {
            return Err(OrderError::UnknownKey(label.clone()));
        }
        if !seen.insert(label) {
            return Err(OrderError::DuplicateKey(label.clone()));
        }
    }

    Ok(order.iter().collect())
}
