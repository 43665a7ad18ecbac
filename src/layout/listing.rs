use crate::layout::{ensure_room, Cursor};
use crate::surface::{FontRef, RenderSurface, TextAlign};
use crate::units::Pt;

/// The share of the usable width given to the label column
const LABEL_SHARE: f32 = 0.75;

/// One label/value pair in a wide-left listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub label: String,
    pub value: String,
}

impl ListingRow {
    pub fn new<L: ToString, V: ToString>(label: L, value: V) -> ListingRow {
        ListingRow {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Styling for a wide-left listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListingStyle {
    pub font: FontRef,
    pub size: Pt,
    /// Every row gets exactly this height; content is not measured
    pub row_height: Pt,
    /// Extra clearance required below a row before it is allowed on the page
    pub border_slack: Pt,
    /// Horizontal padding between a cell border and its text
    pub inset: Pt,
}

impl ListingStyle {
    pub fn new(font: FontRef, size: Pt) -> ListingStyle {
        ListingStyle {
            font,
            size,
            row_height: Pt(18.0),
            border_slack: Pt(2.0),
            inset: Pt(4.0),
        }
    }
}

/// x-coordinate of the boundary between the label and value columns. The
/// label column is exactly `floor(0.75 × usable width)` wide.
pub fn listing_column_boundary<S>(surface: &S) -> Pt
where
    S: RenderSurface + ?Sized,
{
    surface.geometry().left() + (surface.geometry().usable_width() * LABEL_SHARE).floor()
}

/// Render a two-column listing (wide label column, narrow value column)
/// starting at `y0`. Returns the y where the listing ended.
///
/// This is the simpler, faster sibling of the flowing table, meant for long
/// enumerable listings (per-category counts and the like): rows are a fixed
/// height rather than content-driven, each row is checked against the bottom
/// margin individually, and the two header cells are redrawn at the top of
/// every continuation page. Unlike the open-topped flowing-table rows, every
/// row here is individually bordered on all four sides.
pub fn render_listing<S>(
    surface: &mut S,
    left_header: &str,
    right_header: &str,
    rows: &[ListingRow],
    y0: Pt,
    style: &ListingStyle,
) -> Pt
where
    S: RenderSurface + ?Sized,
{
    let mut cursor = Cursor::new(y0);

    listing_row(surface, left_header, right_header, cursor.peek(), style);
    cursor.advance(style.row_height);

    for row in rows.iter() {
        ensure_room(
            surface,
            &mut cursor,
            style.row_height + style.border_slack,
            |surface, cursor| {
                log::debug!("listing: headers redrawn on continuation page");
                listing_row(surface, left_header, right_header, cursor.peek(), style);
                cursor.advance(style.row_height);
            },
        );

        listing_row(surface, &row.label, &row.value, cursor.peek(), style);
        cursor.advance(style.row_height);
    }

    cursor.peek()
}

/// One fixed-height, fully bordered label/value row
fn listing_row<S>(surface: &mut S, label: &str, value: &str, y: Pt, style: &ListingStyle)
where
    S: RenderSurface + ?Sized,
{
    let left = surface.geometry().left();
    let usable = surface.geometry().usable_width();
    let boundary = listing_column_boundary(surface);
    let label_width = boundary - left;
    let value_width = left + usable - boundary;

    surface.draw_rect(left, y, label_width, style.row_height);
    surface.draw_rect(boundary, y, value_width, style.row_height);

    let label_text_width = label_width - style.inset * 2.0;
    let label_height =
        surface.measure_text_height(label, style.font, style.size, label_text_width);
    let label_offset = ((style.row_height - label_height) * 0.5).max(Pt(0.0));
    surface.draw_text(
        label,
        left + style.inset,
        y + label_offset,
        style.font,
        style.size,
        TextAlign::Left,
        label_text_width,
    );

    let value_text_width = value_width - style.inset * 2.0;
    let value_height =
        surface.measure_text_height(value, style.font, style.size, value_text_width);
    let value_offset = ((style.row_height - value_height) * 0.5).max(Pt(0.0));
    surface.draw_text(
        value,
        boundary + style.inset,
        y + value_offset,
        style.font,
        style.size,
        TextAlign::Centre,
        value_text_width,
    );
}
