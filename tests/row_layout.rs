mod common;

use common::{FakeSurface, Op, FONT};
use pdf_flow::layout::{natural_row_height, render_row, Cell, RowStyle};
use pdf_flow::{Pt, RenderSurface, TextAlign};

fn cells(texts: &[&str], size: Pt) -> Vec<Cell> {
    texts.iter().map(|t| Cell::new(t, FONT, size)).collect()
}

#[test]
fn six_short_cells_share_the_minimum_height() {
    // usable width 555, six columns of 92.5 each
    let mut surface = FakeSurface::new(595.0, 842.0, 20.0);
    let row = cells(
        &["TIN No", "VRN", "TAX OFFICE", "Z BRN No", "Z VRN", "VFD SERIAL"],
        Pt(9.0),
    );
    let style = RowStyle::default();

    let rendered = render_row(&mut surface, &row, Pt(100.0), &style, None);

    // every label fits on one wrapped line, so the minimum height wins
    assert_eq!(rendered.height, Pt(14.0));
    assert_eq!(rendered.row_top, Pt(100.0));
    assert_eq!(rendered.y_after, Pt(114.0));
    assert_eq!(rendered.y_next, Pt(114.0));
    assert_eq!(surface.texts().len(), 6);
}

#[test]
fn internal_separators_sit_on_equal_column_boundaries() {
    let mut surface = FakeSurface::new(595.0, 842.0, 20.0);
    let row = cells(
        &["TIN No", "VRN", "TAX OFFICE", "Z BRN No", "Z VRN", "VFD SERIAL"],
        Pt(9.0),
    );

    let rendered = render_row(&mut surface, &row, Pt(100.0), &RowStyle::default(), None);

    // five separators between six columns, none on the outer edges
    let verticals = surface.vertical_lines(0);
    assert_eq!(verticals.len(), 5);
    for (index, (from, to)) in verticals.iter().enumerate() {
        let expected_x = Pt(20.0) + Pt(92.5) * (index + 1) as f32;
        assert_eq!(from.0, expected_x);
        assert_eq!(from.1, rendered.row_top);
        assert_eq!(to.1, rendered.y_after);
    }

    // exactly one bottom rule spanning the usable width, closing the row
    let horizontals = surface.horizontal_lines(0);
    assert_eq!(horizontals.len(), 1);
    assert_eq!(horizontals[0].0, (Pt(20.0), rendered.y_after));
    assert_eq!(horizontals[0].1, (Pt(575.0), rendered.y_after));
}

#[test]
fn empty_cells_still_get_the_minimum_height() {
    let mut surface = FakeSurface::new(595.0, 842.0, 20.0);
    let row = cells(&["", "", ""], Pt(9.0));

    assert_eq!(
        natural_row_height(&surface, &row, Pt(14.0)),
        Pt(14.0)
    );
    let rendered = render_row(&mut surface, &row, Pt(50.0), &RowStyle::default(), None);
    assert_eq!(rendered.height, Pt(14.0));
}

#[test]
fn tallest_cell_sets_the_row_height_and_short_cells_centre() {
    // usable width 300, two columns of 150; at size 10 a character is 5 wide,
    // so 30 characters fill a line
    let mut surface = FakeSurface::new(340.0, 842.0, 20.0);
    let long = "aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd eeeeeeeeee";
    let row = vec![
        Cell::new(long, FONT, Pt(10.0)),
        Cell::new("short", FONT, Pt(10.0)),
    ];

    let tall = surface.measure_text_height(long, FONT, Pt(10.0), Pt(150.0));
    let short = surface.measure_text_height("short", FONT, Pt(10.0), Pt(150.0));
    assert!(tall > short);

    let rendered = render_row(&mut surface, &row, Pt(100.0), &RowStyle::default(), None);
    assert_eq!(rendered.height, tall);

    // the short cell is vertically centred within the shared height
    let ops = surface.texts_matching("short", 0);
    assert_eq!(ops.len(), 1);
    if let Op::Text { y, .. } = ops[0] {
        let expected = Pt(100.0) + (tall - short) * 0.5;
        assert_eq!(*y, expected);
    }
}

#[test]
fn fixed_height_overrides_measurement() {
    let mut surface = FakeSurface::new(595.0, 842.0, 20.0);
    let row = cells(&["a", "b"], Pt(9.0));

    let rendered = render_row(
        &mut surface,
        &row,
        Pt(60.0),
        &RowStyle::default(),
        Some(Pt(30.0)),
    );
    assert_eq!(rendered.height, Pt(30.0));
    assert_eq!(rendered.y_after, Pt(90.0));
}

#[test]
fn gap_separates_consecutive_rows() {
    let mut surface = FakeSurface::new(595.0, 842.0, 20.0);
    let style = RowStyle {
        min_height: Pt(14.0),
        gap: Pt(4.0),
    };
    let row = cells(&["a"], Pt(9.0));

    let first = render_row(&mut surface, &row, Pt(100.0), &style, None);
    assert_eq!(first.y_after, Pt(114.0));
    assert_eq!(first.y_next, Pt(118.0));

    let second = render_row(&mut surface, &row, first.y_next, &style, None);
    assert_eq!(second.row_top, Pt(118.0));
}

#[test]
fn cell_text_is_centred_within_its_column() {
    let mut surface = FakeSurface::new(595.0, 842.0, 20.0);
    let row = cells(&["one", "two", "three"], Pt(9.0));

    render_row(&mut surface, &row, Pt(100.0), &RowStyle::default(), None);

    let column_width = Pt(555.0) / 3.0;
    for (index, op) in surface.texts().iter().enumerate() {
        if let Op::Text {
            x,
            align,
            max_width,
            ..
        } = op
        {
            assert_eq!(*x, Pt(20.0) + column_width * index as f32);
            assert_eq!(*align, TextAlign::Centre);
            assert_eq!(*max_width, column_width);
        }
    }
}
