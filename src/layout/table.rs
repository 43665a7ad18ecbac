use crate::layout::{ensure_room, natural_row_height, render_row, Cell, Cursor, RowStyle};
use crate::surface::RenderSurface;
use crate::units::Pt;

/// Styling for a whole flowing table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStyle {
    /// Applied to the header row and every data row
    pub row: RowStyle,
}

/// Render a multi-row table (header row plus data rows) starting at `y0`,
/// breaking across pages as needed. Returns the y where the table ended and
/// the next block may start.
///
/// Pagination is transparent to the caller: before each data row the engine
/// checks whether the row's measured height still fits above the bottom
/// margin, and if not it opens a new page and redraws the header row at the
/// top margin. Every page fragment of the table therefore shows the column
/// headers, not just the first.
///
/// Each row is rendered at the height measured for the break check, so the
/// check and the drawn result can never disagree. Left and right edge borders
/// are drawn per row, spanning exactly that row's vertical extent, and a final
/// bottom rule closes the table after the last row. A single row taller than
/// one page's usable height is drawn anyway and overflows the following page's
/// content area uncorrected — an accepted limitation.
pub fn render_table<S>(
    surface: &mut S,
    header: &[Cell],
    rows: &[Vec<Cell>],
    y0: Pt,
    style: &TableStyle,
) -> Pt
where
    S: RenderSurface + ?Sized,
{
    let mut cursor = Cursor::new(y0);

    let rendered = render_row(surface, header, cursor.peek(), &style.row, None);
    edge_borders(surface, rendered.row_top, rendered.y_after);
    cursor.reset_to(rendered.y_next);

    let mut last_rule_y = rendered.y_after;

    for (index, cells) in rows.iter().enumerate() {
        let height = natural_row_height(surface, cells, style.row.min_height);

        let broke = ensure_room(surface, &mut cursor, height, |surface, cursor| {
            let header_row = render_row(surface, header, cursor.peek(), &style.row, None);
            edge_borders(surface, header_row.row_top, header_row.y_after);
            cursor.reset_to(header_row.y_next);
        });
        if broke {
            log::debug!("table: header redrawn on continuation page before row {index}");
        }

        let rendered = render_row(surface, cells, cursor.peek(), &style.row, Some(height));
        edge_borders(surface, rendered.row_top, rendered.y_after);
        cursor.reset_to(rendered.y_next);
        last_rule_y = rendered.y_after;
    }

    let left = surface.geometry().left();
    let right = left + surface.geometry().usable_width();
    surface.draw_line((left, last_rule_y), (right, last_rule_y));

    cursor.peek()
}

/// Left and right table borders for one row's vertical extent
fn edge_borders<S>(surface: &mut S, top: Pt, bottom: Pt)
where
    S: RenderSurface + ?Sized,
{
    let left = surface.geometry().left();
    let right = left + surface.geometry().usable_width();
    surface.draw_line((left, top), (left, bottom));
    surface.draw_line((right, top), (right, bottom));
}
