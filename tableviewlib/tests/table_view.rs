//! End-to-end behavior of table views through the public API.

use tableviewlib::{
    Dataset, HeaderPlacement, Label, OrderError, Orientation, RenderOptions, TableView,
    TableViewError,
};

fn xy() -> Dataset {
    Dataset::new()
        .with_entry("x", vec![1, 2])
        .with_entry("y", vec![3, 4])
}

fn grid() -> Dataset {
    Dataset::from_rows((0..4).map(|r| (0..3).map(move |c| r * 3 + c)))
}

#[test]
fn test_vertical_front_scenario() {
    let mut view = TableView::new(xy()).unwrap();
    view.set_orientation(Orientation::Vertical);
    view.set_header_placement(HeaderPlacement::Front);

    assert_eq!(
        view.render(),
        "<table class=\"vertical\"><tbody>\
         <tr><th class=\"front\">x</th><td>1</td><td>2</td></tr>\
         <tr><th class=\"front\">y</th><td>3</td><td>4</td></tr>\
         </tbody></table>"
    );
}

#[test]
fn test_shape_mismatch_cites_label_and_sizes() {
    let data = Dataset::new()
        .with_entry("a", vec![1, 2])
        .with_entry("b", vec![1, 2, 3]);
    let err = TableView::new(data).unwrap_err();
    match &err {
        TableViewError::ShapeMismatch {
            label,
            found,
            expected,
            ..
        } => {
            assert_eq!(label, &Label::from("b"));
            assert_eq!(*found, 3);
            assert_eq!(*expected, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("'b' has 3 elements, 2 expected"));
}

#[test]
fn test_rows_times_columns_is_cell_count() {
    let mut view = TableView::new(grid()).unwrap();
    let cells = view.dataset().cell_count();
    assert_eq!(cells, 12);
    assert_eq!(view.rows() * view.columns(), cells);
    assert_eq!((view.rows(), view.columns()), (4, 3));

    view.set_orientation(Orientation::Horizontal);
    assert_eq!(view.rows() * view.columns(), cells);
    assert_eq!((view.rows(), view.columns()), (3, 4));

    let html = view.try_render().expect("orientation flip must not fail");
    assert_eq!(html.matches("<tr>").count(), 3);
    assert_eq!(html.matches("<td>").count(), 12);
    assert!(html.contains("<tr><td>0</td><td>3</td><td>6</td><td>9</td></tr>"));
}

#[test]
fn test_empty_dataset_is_shell() {
    let mut view = TableView::new(Dataset::new()).unwrap();
    view.set_header_placement(HeaderPlacement::Both);
    assert_eq!(view.rows(), 0);
    assert_eq!(view.columns(), 0);
    assert_eq!(view.render(), "<table class=\"vertical\"><tbody></tbody></table>");

    view.set_orientation(Orientation::Horizontal);
    assert_eq!(
        view.render(),
        "<table class=\"horizontal\"><tbody></tbody></table>"
    );
}

#[test]
fn test_invalid_sort_orders_render_empty() {
    let mut view = TableView::new(xy()).unwrap();

    // omits a key (by repeating another)
    view.set_sort_order(["y", "y"]);
    assert_eq!(view.render(), "");
    assert!(matches!(view.try_render(), Err(OrderError::DuplicateKey(_))));

    // wrong length
    view.set_sort_order(["y", "x", "x"]);
    assert_eq!(view.render(), "");
    assert!(matches!(view.try_render(), Err(OrderError::SizeMismatch { .. })));

    // unknown key
    view.set_sort_order(["y", "w"]);
    assert_eq!(view.render(), "");
    assert_eq!(
        view.try_render(),
        Err(OrderError::UnknownKey(Label::from("w")))
    );

    view.set_sort_order(["y", "x"]);
    assert_ne!(view.render(), "");
}

#[test]
fn test_horizontal_sort_order_reorders_columns() {
    let mut view = TableView::new(xy()).unwrap();
    view.set_orientation(Orientation::Horizontal);
    view.set_header_placement(HeaderPlacement::Both);
    view.set_sort_order(["y", "x"]);

    assert_eq!(
        view.render(),
        "<table class=\"horizontal\">\
         <thead><tr><th class=\"front\">y</th><th class=\"front\">x</th></tr></thead>\
         <tfoot><tr><th class=\"back\">y</th><th class=\"back\">x</th></tr></tfoot>\
         <tbody><tr><td>3</td><td>1</td></tr><tr><td>4</td><td>2</td></tr></tbody>\
         </table>"
    );

    view.add_extra_header("x");
    let html = view.render();
    assert!(html.contains("<tbody><tr><td>3</td><th>1</th></tr><tr><td>4</td><th>2</th></tr></tbody>"));
}

#[test]
fn test_extra_headers_both_orientations() {
    let mut view = TableView::new(xy()).unwrap();
    view.add_extra_header("x");

    let html = view.render();
    assert!(html.contains("<tr><th>1</th><th>2</th></tr>"));
    assert!(html.contains("<tr><td>3</td><td>4</td></tr>"));

    view.set_orientation(Orientation::Horizontal);
    let html = view.render();
    assert!(html.contains("<tr><th>1</th><td>3</td></tr>"));
    assert!(html.contains("<tr><th>2</th><td>4</td></tr>"));
}

#[test]
fn test_both_placement() {
    let mut view = TableView::new(xy()).unwrap();
    view.set_header_placement(HeaderPlacement::Both);

    let html = view.render();
    assert!(html.contains(
        "<tr><th class=\"front\">y</th><td>3</td><td>4</td><th class=\"back\">y</th></tr>"
    ));

    view.set_orientation(Orientation::Horizontal);
    let html = view.render();
    assert!(html.contains("<thead><tr><th class=\"front\">x</th><th class=\"front\">y</th></tr></thead>"));
    assert!(html.contains("<tfoot><tr><th class=\"back\">x</th><th class=\"back\">y</th></tr></tfoot>"));
}

#[test]
fn test_back_only_placement() {
    let mut view = TableView::new(xy()).unwrap();
    view.set_header_placement(HeaderPlacement::Back);
    let html = view.render();
    assert!(!html.contains("front"));
    assert!(html.contains("<td>2</td><th class=\"back\">x</th></tr>"));

    view.set_orientation(Orientation::Horizontal);
    let html = view.render();
    assert!(!html.contains("<thead>"));
    assert!(html.contains("<tfoot>"));
}

#[test]
fn test_idempotent_and_invalidated() {
    let mut view = TableView::new(xy()).unwrap();
    let first = view.render();
    let second = view.render();
    assert_eq!(first, second);
    assert!(view.is_cached());

    view.set_label_classes(true);
    assert!(!view.is_cached());
    let third = view.render();
    assert_ne!(first, third);
    assert!(third.contains("class=\"datay\""));

    view.options_mut().label_classes = false;
    assert_eq!(view.render(), first);
}

#[test]
fn test_index_labels_and_classes() {
    let mut view = TableView::new(Dataset::from_rows(vec![vec!["a", "b"], vec!["c", "d"]])).unwrap();
    view.set_label_classes(true);
    view.set_header_placement(HeaderPlacement::Front);
    view.set_sort_order([1usize, 0]);
    view.set_table_id("myTable");
    view.set_table_class("arrayView");

    assert_eq!(
        view.render(),
        "<table id=\"myTable\" class=\"vertical arrayView\"><tbody>\
         <tr><th class=\"front data1\">1</th><td class=\"data1\">c</td><td class=\"data1\">d</td></tr>\
         <tr><th class=\"front data0\">0</th><td class=\"data0\">a</td><td class=\"data0\">b</td></tr>\
         </tbody></table>"
    );
}

#[test]
fn test_options_round_trip_through_view() {
    let options = RenderOptions::new()
        .orientation(Orientation::Horizontal)
        .headers(HeaderPlacement::Front)
        .extra_header("y");
    let view = TableView::with_options(xy(), options.clone()).unwrap();
    assert_eq!(view.options(), &options);
    assert_eq!(view.render(), tableviewlib::render_table(&xy(), &options).unwrap());
}
