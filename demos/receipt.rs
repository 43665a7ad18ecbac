use pdf_flow::documents::{render_receipt, Company, Receipt, ReceiptItem};
use pdf_flow::layout::Margins;
use pdf_flow::pagesize;
use pdf_flow::Pt;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let font_path = std::env::args()
        .nth(1)
        .ok_or("usage: receipt <path-to-ttf-font>")?;
    let font_bytes = std::fs::read(font_path)?;

    let receipt = Receipt {
        company: Company {
            name: "Sunrise General Insurance Ltd".into(),
            address: "Plot 14, Samora Avenue, Dar es Salaam".into(),
            phone: "+255 22 555 0147".into(),
            tin_no: "123-456-789".into(),
            vrn: "40-005678-W".into(),
            tax_office: "Ilala".into(),
            z_brn_no: "Z0012345".into(),
            z_vrn: "40Z567890".into(),
            vfd_serial: "10TZ104521".into(),
            logo: None,
        },
        receipt_no: "RCP-2024-00318".into(),
        customer: "J. Mwakasege".into(),
        date: "2024-06-14".into(),
        items: vec![
            ReceiptItem {
                description: "Motor comprehensive premium, TBA 1234 AB".into(),
                quantity: "1".into(),
                unit_price: "450,000.00".into(),
                amount: "450,000.00".into(),
            },
            ReceiptItem {
                description: "Policy stamp duty".into(),
                quantity: "1".into(),
                unit_price: "2,000.00".into(),
                amount: "2,000.00".into(),
            },
        ],
        total: "452,000.00".into(),
    };

    let doc = render_receipt(&receipt, font_bytes, pagesize::A4, Margins::all(Pt(36.0)))?;
    doc.write(File::create("receipt.pdf")?)?;
    println!("wrote receipt.pdf");
    Ok(())
}
