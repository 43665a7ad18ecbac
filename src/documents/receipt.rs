use crate::image::Image;
use crate::info::Info;
use crate::layout::{render_row, render_table, Cell, Cursor, Margins, RowStyle, TableStyle};
use crate::pagesize::PageSize;
use crate::surface::{PdfSurface, RenderSurface, TextAlign};
use crate::units::Pt;
use crate::{Document, PDFError};
use std::path::PathBuf;

/// The issuing company's letterhead and fiscal registration details
#[derive(Debug, Clone, Default)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub tin_no: String,
    pub vrn: String,
    pub tax_office: String,
    pub z_brn_no: String,
    pub z_vrn: String,
    pub vfd_serial: String,
    /// Optional logo asset; if it cannot be loaded the receipt is generated
    /// without it
    pub logo: Option<PathBuf>,
}

/// One billed line on a receipt. All amounts are pre-formatted strings;
/// formatting and currency semantics are the caller's concern.
#[derive(Debug, Clone)]
pub struct ReceiptItem {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
}

/// Everything needed to render one insurance receipt
#[derive(Debug, Clone)]
pub struct Receipt {
    pub company: Company,
    pub receipt_no: String,
    pub customer: String,
    pub date: String,
    pub items: Vec<ReceiptItem>,
    pub total: String,
}

/// Render a receipt into a finished [Document]. Serialization and file paths
/// stay with the caller.
pub fn render_receipt(
    receipt: &Receipt,
    font_bytes: Vec<u8>,
    size: PageSize,
    margins: Margins,
) -> Result<Document, PDFError> {
    let mut surface = PdfSurface::new(size, margins)?;
    let font = surface.register_font(font_bytes)?;

    let left = surface.geometry().left();
    let usable = surface.geometry().usable_width();
    let mut cursor = Cursor::new(surface.geometry().top());

    // optional logo, centred above the letterhead
    if let Some(path) = &receipt.company.logo {
        match Image::new_from_disk(path) {
            Ok(logo) => {
                let height = Pt(48.0);
                let width = height * logo.aspect_ratio();
                let image = surface.register_image(logo);
                let x = left + ((usable - width) * 0.5).max(Pt(0.0));
                surface.draw_image(image, x, cursor.peek(), width, height);
                cursor.advance(height + Pt(6.0));
            }
            Err(err) => log::warn!("skipping logo {}: {err}", path.display()),
        }
    }

    // centred letterhead block
    for (text, text_size) in [
        (&receipt.company.name, Pt(12.0)),
        (&receipt.company.address, Pt(9.0)),
        (&receipt.company.phone, Pt(9.0)),
    ] {
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
        cursor.advance(height + Pt(2.0));
    }
    cursor.advance(Pt(8.0));

    // fiscal identity strip: a label row over a value row
    let company = &receipt.company;
    let labels = ["TIN No", "VRN", "TAX OFFICE", "Z BRN No", "Z VRN", "VFD SERIAL"];
    let values = [
        company.tin_no.as_str(),
        company.vrn.as_str(),
        company.tax_office.as_str(),
        company.z_brn_no.as_str(),
        company.z_vrn.as_str(),
        company.vfd_serial.as_str(),
    ];
    let row_style = RowStyle::default();
    for texts in [labels, values] {
        let cells: Vec<Cell> = texts
            .iter()
            .map(|text| Cell::new(text, font, Pt(9.0)))
            .collect();
        let rendered = render_row(&mut surface, &cells, cursor.peek(), &row_style, None);
        cursor.reset_to(rendered.y_next);
    }
    cursor.advance(Pt(12.0));

    // receipt metadata
    for (label, value) in [
        ("Receipt No", &receipt.receipt_no),
        ("Date", &receipt.date),
        ("Issued To", &receipt.customer),
    ] {
        let line = format!("{label}: {value}");
        let height = surface.measure_text_height(&line, font, Pt(10.0), usable);
        surface.draw_text(
            &line,
            left,
            cursor.peek(),
            font,
            Pt(10.0),
            TextAlign::Left,
            usable,
        );
        cursor.advance(height + Pt(2.0));
    }
    cursor.advance(Pt(8.0));

    // billed items, paginated with the header repeated on every page
    let header: Vec<Cell> = ["DESCRIPTION", "QTY", "UNIT PRICE", "AMOUNT"]
        .iter()
        .map(|text| Cell::new(text, font, Pt(9.0)))
        .collect();
    let rows: Vec<Vec<Cell>> = receipt
        .items
        .iter()
        .map(|item| {
            vec![
                Cell::new(&item.description, font, Pt(9.0)),
                Cell::new(&item.quantity, font, Pt(9.0)),
                Cell::new(&item.unit_price, font, Pt(9.0)),
                Cell::new(&item.amount, font, Pt(9.0)),
            ]
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
    cursor.advance(Pt(10.0));

    let total = format!("TOTAL: {}", receipt.total);
    surface.draw_text(
        &total,
        left,
        cursor.peek(),
        font,
        Pt(10.0),
        TextAlign::Right,
        usable,
    );

    let mut info = Info::new();
    info.title(format!("Receipt {}", receipt.receipt_no))
        .author(&receipt.company.name);
    surface.set_info(info);

    Ok(surface.finish())
}
