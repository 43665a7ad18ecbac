use pdf_flow::documents::{render_report, CategoryCount, Report};
use pdf_flow::layout::Margins;
use pdf_flow::pagesize;
use pdf_flow::Pt;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let font_path = std::env::args()
        .nth(1)
        .ok_or("usage: report <path-to-ttf-font>")?;
    let font_bytes = std::fs::read(font_path)?;

    let rows: Vec<Vec<String>> = (1..=60)
        .map(|i| {
            vec![
                format!("RCP-2024-{i:05}"),
                format!("2024-06-{:02}", (i % 28) + 1),
                "Motor".into(),
                "450,000.00".into(),
            ]
        })
        .collect();

    let report = Report {
        title: "Monthly Collections Report".into(),
        period: "June 2024".into(),
        columns: vec![
            "RECEIPT NO".into(),
            "DATE".into(),
            "CLASS".into(),
            "AMOUNT".into(),
        ],
        rows,
        categories: vec![
            CategoryCount {
                label: "Motor".into(),
                count: 42,
            },
            CategoryCount {
                label: "Fire".into(),
                count: 11,
            },
            CategoryCount {
                label: "Marine".into(),
                count: 7,
            },
        ],
    };

    let doc = render_report(&report, font_bytes, pagesize::A4, Margins::all(Pt(36.0)))?;
    doc.write(File::create("report.pdf")?)?;
    println!("wrote report.pdf");
    Ok(())
}
