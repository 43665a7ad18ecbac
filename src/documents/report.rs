use crate::info::Info;
use crate::layout::{
    ensure_room, render_listing, render_table, Cell, Cursor, ListingRow, ListingStyle, Margins,
    TableStyle,
};
use crate::pagesize::PageSize;
use crate::surface::{PdfSurface, RenderSurface, TextAlign};
use crate::units::Pt;
use crate::{Document, PDFError};

/// One group-by bucket in a report summary. The aggregation itself happens
/// upstream; the report only renders the result.
#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// An aggregate business report: a paginated detail table followed by
/// per-category summary listings
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub period: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub categories: Vec<CategoryCount>,
}

/// Render a report into a finished [Document]
pub fn render_report(
    report: &Report,
    font_bytes: Vec<u8>,
    size: PageSize,
    margins: Margins,
) -> Result<Document, PDFError> {
    let mut surface = PdfSurface::new(size, margins)?;
    let font = surface.register_font(font_bytes)?;

    let left = surface.geometry().left();
    let usable = surface.geometry().usable_width();
    let mut cursor = Cursor::new(surface.geometry().top());

    for (text, text_size) in [(&report.title, Pt(14.0)), (&report.period, Pt(10.0))] {
        let height = surface.measure_text_height(text, font, text_size, usable);
        surface.draw_text(
            text,
            left,
            cursor.peek(),
            font,
            text_size,
            TextAlign::Centre,
            usable,
        );
        cursor.advance(height + Pt(4.0));
    }
    cursor.advance(Pt(8.0));

    let header: Vec<Cell> = report
        .columns
        .iter()
        .map(|column| Cell::new(column, font, Pt(9.0)))
        .collect();
    let rows: Vec<Vec<Cell>> = report
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| Cell::new(value, font, Pt(9.0)))
                .collect()
        })
        .collect();
    let y = render_table(
        &mut surface,
        &header,
        &rows,
        cursor.peek(),
        &TableStyle::default(),
    );
    cursor.reset_to(y);
    cursor.advance(Pt(16.0));

    let listing_style = ListingStyle::new(font, Pt(9.0));

    // keep the listing's header and at least one row together on a page
    ensure_room(
        &mut surface,
        &mut cursor,
        listing_style.row_height * 2.0 + listing_style.border_slack,
        |_, _| {},
    );

    let listing_rows: Vec<ListingRow> = report
        .categories
        .iter()
        .map(|category| ListingRow::new(&category.label, category.count))
        .collect();
    render_listing(
        &mut surface,
        "CATEGORY",
        "COUNT",
        &listing_rows,
        cursor.peek(),
        &listing_style,
    );

    let mut info = Info::new();
    info.title(&report.title).subject(&report.period);
    surface.set_info(info);

    Ok(surface.finish())
}
