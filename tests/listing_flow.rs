mod common;

use common::{FakeSurface, Op, FONT};
use pdf_flow::layout::{listing_column_boundary, render_listing, ListingRow, ListingStyle};
use pdf_flow::{Pt, TextAlign};

fn rows(count: usize) -> Vec<ListingRow> {
    (0..count)
        .map(|i| ListingRow::new(format!("category {i}"), i + 1))
        .collect()
}

#[test]
fn label_column_takes_three_quarters_of_the_usable_width() {
    // usable 520; 0.75 × 520 = 390 exactly
    let surface = FakeSurface::new(600.0, 840.0, 40.0);
    assert_eq!(listing_column_boundary(&surface), Pt(430.0));
}

#[test]
fn fractional_boundary_is_floored() {
    // usable 523; 0.75 × 523 = 392.25, floored to 392
    let surface = FakeSurface::new(603.0, 840.0, 40.0);
    assert_eq!(listing_column_boundary(&surface), Pt(432.0));
}

#[test]
fn every_row_is_bordered_on_all_four_sides() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let style = ListingStyle::new(FONT, Pt(9.0));
    render_listing(&mut surface, "CATEGORY", "COUNT", &rows(4), Pt(100.0), &style);

    // two rects per rendered row, header included
    let rects = surface.rects(0);
    assert_eq!(rects.len(), 2 * 5);
    for (x, _, width, height) in rects {
        assert_eq!(height, Pt(18.0));
        if x == Pt(40.0) {
            assert_eq!(width, Pt(390.0));
        } else {
            assert_eq!(x, Pt(430.0));
            assert_eq!(width, Pt(130.0));
        }
    }
}

#[test]
fn rows_are_stacked_at_the_fixed_height() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let style = ListingStyle::new(FONT, Pt(9.0));
    let y = render_listing(&mut surface, "CATEGORY", "COUNT", &rows(3), Pt(100.0), &style);

    // header plus three rows of exactly 18 each
    assert_eq!(y, Pt(100.0 + 4.0 * 18.0));

    let mut label_tops: Vec<Pt> = surface
        .rects(0)
        .iter()
        .filter(|(x, ..)| *x == Pt(40.0))
        .map(|(_, y, ..)| *y)
        .collect();
    label_tops.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(label_tops, vec![Pt(100.0), Pt(118.0), Pt(136.0), Pt(154.0)]);
}

#[test]
fn labels_are_left_aligned_and_values_centred() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let style = ListingStyle::new(FONT, Pt(9.0));
    render_listing(&mut surface, "CATEGORY", "COUNT", &rows(1), Pt(100.0), &style);

    let labels = surface.texts_matching("category 0", 0);
    assert_eq!(labels.len(), 1);
    if let Op::Text { x, align, .. } = labels[0] {
        assert_eq!(*x, Pt(44.0));
        assert_eq!(*align, TextAlign::Left);
    }

    let values = surface.texts_matching("1", 0);
    assert_eq!(values.len(), 1);
    if let Op::Text { x, align, .. } = values[0] {
        assert_eq!(*x, Pt(434.0));
        assert_eq!(*align, TextAlign::Centre);
    }
}

#[test]
fn headers_are_redrawn_on_continuation_pages() {
    // header at 100..118, rows of 18 with 2 of slack required below each:
    // row 36 starts at 766 and fits (786 <= 800), row 37 would need 804
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let style = ListingStyle::new(FONT, Pt(9.0));
    render_listing(&mut surface, "CATEGORY", "COUNT", &rows(40), Pt(100.0), &style);

    assert_eq!(surface.page_count(), 2);
    assert_eq!(surface.texts_matching("CATEGORY", 0).len(), 1);
    assert_eq!(surface.texts_matching("CATEGORY", 1).len(), 1);

    // the redrawn header row sits at the top margin
    let page_two_tops: Vec<Pt> = surface
        .rects(1)
        .iter()
        .filter(|(x, ..)| *x == Pt(40.0))
        .map(|(_, y, ..)| *y)
        .collect();
    assert_eq!(page_two_tops[0], Pt(40.0));
    assert_eq!(page_two_tops[1], Pt(58.0));
}

#[test]
fn short_listing_never_breaks() {
    let mut surface = FakeSurface::new(600.0, 840.0, 40.0);
    let style = ListingStyle::new(FONT, Pt(9.0));
    render_listing(&mut surface, "CATEGORY", "COUNT", &rows(6), Pt(100.0), &style);
    assert_eq!(surface.page_count(), 1);
}
