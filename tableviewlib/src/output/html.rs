//! HTML markup for table views.
//!
//! The writer works from a [`TableQuery`], so ordering and classification
//! have already happened; this module only decides where tags go.
//!
//! Content is inserted verbatim. Labels, cell values, ids and classes are
//! not escaped, callers that render untrusted text must escape it first.

use std::fmt::Write;

use crate::data::label::Label;
use crate::options::{Orientation, RenderOptions};
use crate::query::{CellKind, TableQuery};

/// Which side of the data a label header sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderSide {
    Front,
    Back,
}

impl HeaderSide {
    fn class_name(self) -> &'static str {
        match self {
            HeaderSide::Front => "front",
            HeaderSide::Back => "back",
        }
    }

    fn section(self) -> &'static str {
        match self {
            HeaderSide::Front => "thead",
            HeaderSide::Back => "tfoot",
        }
    }
}

/// Serialize a resolved query as a `table` element.
pub fn render_html(query: &TableQuery<'_>, options: &RenderOptions) -> String {
    let mut out = String::new();

    open_table(&mut out, query.orientation, options);
    match query.orientation {
        Orientation::Horizontal => write_horizontal(&mut out, query, options),
        Orientation::Vertical => write_vertical(&mut out, query, options),
    }
    out.push_str("</table>");

    log::trace!(
        "rendered {} table: {} rows x {} columns, {} bytes",
        query.orientation.class_name(),
        query.rows,
        query.columns,
        out.len()
    );
    out
}

fn open_table(out: &mut String, orientation: Orientation, options: &RenderOptions) {
    out.push_str("<table");
    if !options.table_id.is_empty() {
        let _ = write!(out, " id=\"{}\"", options.table_id);
    }
    let _ = write!(out, " class=\"{}", orientation.class_name());
    if !options.table_class.is_empty() {
        out.push(' ');
        out.push_str(&options.table_class);
    }
    out.push_str("\">");
}

/// Entries are columns: labels go in `thead`/`tfoot`, one body row per
/// position in the entries.
fn write_horizontal(out: &mut String, query: &TableQuery<'_>, options: &RenderOptions) {
    if !query.is_empty() {
        for side in [HeaderSide::Front, HeaderSide::Back] {
            let wanted = match side {
                HeaderSide::Front => query.headers.has_front(),
                HeaderSide::Back => query.headers.has_back(),
            };
            if !wanted {
                continue;
            }
            let _ = write!(out, "<{}><tr>", side.section());
            for line in &query.lines {
                write_label_header(out, line.label, side, options);
            }
            let _ = write!(out, "</tr></{}>", side.section());
        }
    }

    out.push_str("<tbody>");
    for row in 0..query.rows {
        out.push_str("<tr>");
        for line in &query.lines {
            let value = line.entry.cell(row).unwrap_or_default();
            write_cell(out, line.kind, line.label, value, options);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody>");
}

/// Entries are rows: labels lead and/or trail each row, and the whole
/// row shares the entry's cell kind.
fn write_vertical(out: &mut String, query: &TableQuery<'_>, options: &RenderOptions) {
    out.push_str("<tbody>");
    for line in &query.lines {
        out.push_str("<tr>");
        if query.headers.has_front() {
            write_label_header(out, line.label, HeaderSide::Front, options);
        }
        for value in line.entry.cells() {
            write_cell(out, line.kind, line.label, value, options);
        }
        if query.headers.has_back() {
            write_label_header(out, line.label, HeaderSide::Back, options);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody>");
}

fn write_label_header(out: &mut String, label: &Label, side: HeaderSide, options: &RenderOptions) {
    let _ = write!(out, "<th class=\"{}", side.class_name());
    if options.label_classes {
        let _ = write!(out, " {}{}", options.class_prefix, label);
    }
    let _ = write!(out, "\">{}</th>", label);
}

fn write_cell(
    out: &mut String,
    kind: CellKind,
    label: &Label,
    value: &str,
    options: &RenderOptions,
) {
    let tag = kind.tag();
    let _ = write!(out, "<{}", tag);
    if options.label_classes {
        let _ = write!(out, " class=\"{}{}\"", options.class_prefix, label);
    }
    let _ = write!(out, ">{}</{}>", value, tag);
}
