use crate::surface::{FontRef, RenderSurface, TextAlign};
use crate::units::Pt;

/// One column's worth of content in a table row. Ephemeral: built for a single
/// row render and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub font: FontRef,
    pub size: Pt,
}

impl Cell {
    pub fn new<S: ToString>(text: S, font: FontRef, size: Pt) -> Cell {
        Cell {
            text: text.to_string(),
            font,
            size,
        }
    }
}

/// Knobs shared by every row of a table
#[derive(Debug, Clone, PartialEq)]
pub struct RowStyle {
    /// Rows never get shorter than this, even when every cell is empty
    pub min_height: Pt,
    /// Extra space between a row's bottom rule and the next row's top
    pub gap: Pt,
}

impl Default for RowStyle {
    fn default() -> RowStyle {
        RowStyle {
            min_height: Pt(14.0),
            gap: Pt(0.0),
        }
    }
}

/// Where a rendered row ended up on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRender {
    /// The y the row started at — callers use this to retroactively draw
    /// left/right borders spanning the row
    pub row_top: Pt,
    /// The y of the row's bottom rule; content extends exactly to here
    pub y_after: Pt,
    /// Where the next block may start (`y_after` plus the inter-row gap)
    pub y_next: Pt,
    /// The computed (or supplied) uniform row height
    pub height: Pt,
}

/// The uniform height all columns of a row will share: the tallest cell's
/// wrapped height, floored at `min_height`. Cells are measured against their
/// own column width (an equal partition of the usable width).
pub fn natural_row_height<S>(surface: &S, cells: &[Cell], min_height: Pt) -> Pt
where
    S: RenderSurface + ?Sized,
{
    let column_width = surface.geometry().usable_width() / cells.len().max(1) as f32;
    cells
        .iter()
        .map(|cell| surface.measure_text_height(&cell.text, cell.font, cell.size, column_width))
        .fold(min_height, Pt::max)
}

/// Render one logical row of N equal-width columns starting at `y0`.
///
/// The row height is `fixed_height` when supplied, otherwise computed with
/// [natural_row_height]. Each cell's text is centred horizontally within its
/// column and vertically within the row. Vertical separator lines between
/// adjacent columns are drawn only after every cell has been measured, so they
/// span exactly `[row_top, y_after]`; a horizontal rule closes the row at
/// `y_after`. The row's top edge is deliberately left open — consecutive rows
/// share rules, and the caller draws any outer border.
pub fn render_row<S>(
    surface: &mut S,
    cells: &[Cell],
    y0: Pt,
    style: &RowStyle,
    fixed_height: Option<Pt>,
) -> RowRender
where
    S: RenderSurface + ?Sized,
{
    let left = surface.geometry().left();
    let usable = surface.geometry().usable_width();
    let columns = cells.len().max(1);
    let column_width = usable / columns as f32;

    let height =
        fixed_height.unwrap_or_else(|| natural_row_height(surface, cells, style.min_height));

    for (index, cell) in cells.iter().enumerate() {
        let x = left + column_width * index as f32;
        let own_height =
            surface.measure_text_height(&cell.text, cell.font, cell.size, column_width);
        let offset = ((height - own_height) * 0.5).max(Pt(0.0));
        surface.draw_text(
            &cell.text,
            x,
            y0 + offset,
            cell.font,
            cell.size,
            TextAlign::Centre,
            column_width,
        );
    }

    let y_after = y0 + height;

    for index in 1..columns {
        let x = left + column_width * index as f32;
        surface.draw_line((x, y0), (x, y_after));
    }
    surface.draw_line((left, y_after), (left + usable, y_after));

    RowRender {
        row_top: y0,
        y_after,
        y_next: y_after + style.gap,
        height,
    }
}
