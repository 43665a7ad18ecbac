mod common;

use common::{FakeSurface, Op, FONT};
use pdf_flow::layout::{render_table, Cell, RowStyle, TableStyle};
use pdf_flow::{Pt, RenderSurface};

fn style_18() -> TableStyle {
    TableStyle {
        row: RowStyle {
            min_height: Pt(18.0),
            gap: Pt(0.0),
        },
    }
}

fn header() -> Vec<Cell> {
    ["DESCRIPTION", "QTY", "PRICE"]
        .iter()
        .map(|t| Cell::new(t, FONT, Pt(9.0)))
        .collect()
}

fn short_rows(count: usize) -> Vec<Vec<Cell>> {
    (0..count)
        .map(|i| {
            vec![
                Cell::new(format!("item {i}"), FONT, Pt(9.0)),
                Cell::new("1", FONT, Pt(9.0)),
                Cell::new("5.00", FONT, Pt(9.0)),
            ]
        })
        .collect()
}

#[test]
fn table_that_fits_stays_on_one_page() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let y = render_table(&mut surface, &header(), &short_rows(5), Pt(100.0), &style_18());

    assert_eq!(surface.page_count(), 1);
    // header 100..118, five rows of 18
    assert_eq!(y, Pt(118.0 + 5.0 * 18.0));
}

#[test]
fn header_is_repeated_at_the_top_of_every_continuation_page() {
    // usable area top 40, bottom 800; header at 100..118, then rows of 18:
    // row 36 ends at 784, row 37 would end at 802 and breaks
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    render_table(&mut surface, &header(), &short_rows(40), Pt(100.0), &style_18());

    assert_eq!(surface.page_count(), 2);

    assert_eq!(surface.texts_matching("DESCRIPTION", 0).len(), 1);
    let continued = surface.texts_matching("DESCRIPTION", 1);
    assert_eq!(continued.len(), 1);
    if let Op::Text { y, .. } = continued[0] {
        // redrawn header starts at the top margin, vertically centred in 18
        let header_height = surface.measure_text_height("DESCRIPTION", FONT, Pt(9.0), Pt(520.0) / 3.0);
        assert_eq!(*y, Pt(40.0) + (Pt(18.0) - header_height) * 0.5);
    }

    // the first row carried over starts right below the redrawn header
    let carried = surface.texts_matching("item 37", 1);
    assert_eq!(carried.len(), 1);
    if let Op::Text { y, .. } = carried[0] {
        let own = surface.measure_text_height("item 37", FONT, Pt(9.0), Pt(520.0) / 3.0);
        assert_eq!(*y, Pt(58.0) + (Pt(18.0) - own) * 0.5);
    }
}

#[test]
fn rows_never_extend_past_the_bottom_margin() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    render_table(&mut surface, &header(), &short_rows(120), Pt(100.0), &style_18());

    assert!(surface.page_count() > 2);
    for page in 0..surface.page_count() {
        for (from, _) in surface.horizontal_lines(page) {
            assert!(from.1 <= Pt(800.0), "rule at {} is past the bottom margin", from.1);
        }
        for (from, to) in surface.vertical_lines(page) {
            assert!(from.1 >= Pt(40.0));
            assert!(to.1 <= Pt(800.0));
        }
    }
}

#[test]
fn every_row_is_flanked_by_edge_borders() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    render_table(&mut surface, &header(), &short_rows(3), Pt(100.0), &style_18());

    // columns=3 gives 2 internal separators per row; edge borders add 2 more.
    // header + 3 rows = 4 rendered rows, so 16 verticals in total
    let verticals = surface.vertical_lines(0);
    assert_eq!(verticals.len(), 16);

    let at_left = verticals.iter().filter(|(f, _)| f.0 == Pt(40.0)).count();
    let at_right = verticals.iter().filter(|(f, _)| f.0 == Pt(560.0)).count();
    assert_eq!(at_left, 4);
    assert_eq!(at_right, 4);
}

#[test]
fn rendering_twice_produces_identical_output() {
    let mut first = FakeSurface::new(600.0, 840.0, 40.0);
    let mut second = FakeSurface::new(600.0, 840.0, 40.0);

    let y1 = render_table(&mut first, &header(), &short_rows(40), Pt(100.0), &style_18());
    let y2 = render_table(&mut second, &header(), &short_rows(40), Pt(100.0), &style_18());

    assert_eq!(y1, y2);
    assert_eq!(first.ops, second.ops);
}

#[test]
fn returned_cursor_is_below_the_last_row() {
    // page 2 carries rows 37..39: header 40..58, rows ending at 76, 94, 112
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let y = render_table(&mut surface, &header(), &short_rows(40), Pt(100.0), &style_18());
    assert_eq!(y, Pt(112.0));
}

#[test]
fn table_with_no_rows_renders_just_the_header() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let y = render_table(&mut surface, &header(), &[], Pt(100.0), &style_18());

    assert_eq!(surface.page_count(), 1);
    assert_eq!(y, Pt(118.0));
    assert_eq!(surface.texts().len(), 3);
}
