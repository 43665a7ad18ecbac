//! Shared content rendering logic: converts high-level page content items
//! into low-level PDF content-stream operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::Line(line) => {
                write!(&mut content, "q\n")?;
                write!(&mut content, "{} w\n", line.width)?;
                write_stroke_colour(&mut content, line.colour)?;
                write!(&mut content, "{} {} m\n", line.from.0, line.from.1)?;
                write!(&mut content, "{} {} l\n", line.to.0, line.to.1)?;
                write!(&mut content, "S\nQ\n")?;
            }
            PageContents::Rect(rect) => {
                write!(&mut content, "q\n")?;
                write!(&mut content, "{} w\n", rect.width)?;
                write_stroke_colour(&mut content, rect.colour)?;
                write!(
                    &mut content,
                    "{} {} {} {} re\n",
                    rect.rect.x1,
                    rect.rect.y1,
                    rect.rect.width(),
                    rect.rect.height()
                )?;
                write!(&mut content, "S\nQ\n")?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.x2 - image.position.x1,
                    image.position.y2 - image.position.y1,
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.id.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    if spans.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;

    // unwrap is safe, as we know spans isn't empty
    let mut current_font: SpanFont = spans.first().unwrap().font;
    let mut current_colour: Colour = spans.first().unwrap().colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for ch in span.text.chars() {
            write!(
                content,
                "{:04x}",
                fonts[current_font.id].glyph_id(ch).unwrap_or_else(|| {
                    fonts[current_font.id]
                        .replacement_glyph_id()
                        .unwrap_or_else(|| {
                            fonts[current_font.id]
                                .glyph_id('?')
                                .expect("font has '?' glyph")
                        })
                })
            )?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} K\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
