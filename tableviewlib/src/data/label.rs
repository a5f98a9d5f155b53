//! Labels identifying dataset entries.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Key of one dataset entry (a row or a column, depending on orientation).
///
/// Positional data (a plain list of rows) is labeled by index; keyed data
/// by string. The rendered text of a label is the bare index or key, which
/// is also what class names are built from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Index(usize),
    Key(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Index(i) => write!(f, "{}", i),
            Label::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for Label {
    fn from(index: usize) -> Self {
        Label::Index(index)
    }
}

impl From<&str> for Label {
    fn from(key: &str) -> Self {
        Label::Key(key.to_string())
    }
}

impl From<String> for Label {
    fn from(key: String) -> Self {
        Label::Key(key)
    }
}

/// Parses user-typed labels: unsigned integers become indices, anything
/// else a key. Use `Label::from(&str)` to force a key.
impl FromStr for Label {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<usize>()
            .map(Label::Index)
            .unwrap_or_else(|_| Label::Key(s.to_string())))
    }
}

/// What dataset entries represent under a given orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Index(3).to_string(), "3");
        assert_eq!(Label::from("price").to_string(), "price");
    }

    #[test]
    fn test_label_from_str() {
        assert_eq!("7".parse::<Label>().unwrap(), Label::Index(7));
        assert_eq!("x".parse::<Label>().unwrap(), Label::from("x"));
        assert_eq!("-1".parse::<Label>().unwrap(), Label::from("-1"));
        // From<&str> never produces an index
        assert_eq!(Label::from("7"), Label::Key("7".to_string()));
    }

    #[test]
    fn test_label_serde_untagged() {
        let labels: Vec<Label> = serde_json::from_str(r#"[0, "b", 12]"#).unwrap();
        assert_eq!(
            labels,
            vec![Label::Index(0), Label::from("b"), Label::Index(12)]
        );
        assert_eq!(serde_json::to_string(&labels).unwrap(), r#"[0,"b",12]"#);
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Row.to_string(), "row");
        assert_eq!(Axis::Column.to_string(), "column");
    }
}
