use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::Font;
use crate::image::Image;
use crate::info::Info;
use crate::layout::{wrap_text, Margins, PageGeometry};
use crate::page::{ImageLayout, Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;

/// A font registered on a surface, referred to by registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRef(pub usize);

/// An image registered on a surface, referred to by registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub usize);

/// Horizontal alignment of a text block within its measuring width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Centre,
    Right,
}

/// The rendering capability the layout engine draws through.
///
/// Coordinates are top-down: `y` grows from the top edge of the page, and the
/// `y` passed to a drawing call is the top of the drawn block. Implementations
/// that target bottom-up formats (PDF) convert at this boundary.
///
/// The one hard contract is that [RenderSurface::measure_text_height] must
/// agree exactly with the height [RenderSurface::draw_text] will consume for
/// the same text, font, size, and width. Measurement is pure: no drawing
/// state may influence it.
pub trait RenderSurface {
    /// The fixed page geometry shared by every page of this surface
    fn geometry(&self) -> &PageGeometry;

    /// Height `text` will occupy when wrapped into `max_width`. Zero for text
    /// with no visible characters.
    fn measure_text_height(&self, text: &str, font: FontRef, size: Pt, max_width: Pt) -> Pt;

    /// Draw `text` wrapped into `max_width`, with the top of the first line at
    /// `y`, aligned within `[x, x + max_width]`
    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        text: &str,
        x: Pt,
        y: Pt,
        font: FontRef,
        size: Pt,
        align: TextAlign,
        max_width: Pt,
    );

    /// Stroke a straight line between two points
    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt));

    /// Stroke a rectangle whose top-left corner is at `(x, y)`
    fn draw_rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt);

    /// Finish the current page and start a fresh one
    fn new_page(&mut self);
}

/// The production [RenderSurface]: accumulates pages into a [Document] that
/// serializes through `pdf-writer`.
///
/// One surface renders one document, start to finish, on one thread. Fonts are
/// registered once at setup; a font that fails to parse is a fatal setup error
/// since every subsequent measurement depends on it.
pub struct PdfSurface {
    doc: Document,
    page: Page,
    geometry: PageGeometry,
    size: PageSize,
    margins: Margins,
    fonts: Vec<Id<Font>>,
    images: Vec<Id<Image>>,
    colour: Colour,
}

impl PdfSurface {
    pub fn new(size: PageSize, margins: Margins) -> Result<PdfSurface, PDFError> {
        let geometry = PageGeometry::new(size, margins.clone())?;
        let page = Page::new(size, Some(margins.clone()));

        Ok(PdfSurface {
            doc: Document::default(),
            page,
            geometry,
            size,
            margins,
            fonts: Vec::new(),
            images: Vec::new(),
            colour: colours::BLACK,
        })
    }

    /// Parse and register a font, making it available to every page. Returns
    /// the handle layout calls refer to the font by.
    pub fn register_font(&mut self, bytes: Vec<u8>) -> Result<FontRef, PDFError> {
        let font = Font::load(bytes)?;
        let id = self.doc.add_font(font);
        self.fonts.push(id);
        Ok(FontRef(self.fonts.len() - 1))
    }

    /// Register an already-loaded image for placement on pages
    pub fn register_image(&mut self, image: Image) -> ImageRef {
        let id = self.doc.add_image(image);
        self.images.push(id);
        ImageRef(self.images.len() - 1)
    }

    /// Place a registered image with its top-left corner at `(x, y)`, scaled
    /// to `width` × `height`
    pub fn draw_image(&mut self, image: ImageRef, x: Pt, y: Pt, width: Pt, height: Pt) {
        let id = self.images[image.0];
        let position = Rect {
            x1: x,
            y1: self.flip(y + height),
            x2: x + width,
            y2: self.flip(y),
        };
        self.page.add_image(ImageLayout { id, position });
    }

    /// Colour used for subsequently drawn text, lines, and borders
    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    pub fn set_info(&mut self, info: Info) {
        self.doc.set_info(info);
    }

    /// Finish the in-progress page and hand back the completed document.
    /// Serialization to bytes stays with the caller via [Document::write].
    pub fn finish(mut self) -> Document {
        self.doc.add_page(self.page);
        self.doc
    }

    /// Convert a top-down layout y into PDF's bottom-up space
    fn flip(&self, y: Pt) -> Pt {
        self.geometry.height() - y
    }

    fn font(&self, font: FontRef) -> &Font {
        &self.doc.fonts[self.fonts[font.0]]
    }
}

impl RenderSurface for PdfSurface {
    fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    fn measure_text_height(&self, text: &str, font: FontRef, size: Pt, max_width: Pt) -> Pt {
        let font = self.font(font);
        let line_height = font.line_height(size);
        let lines = wrap_text(text, max_width, |s| font.width_of(s, size));
        line_height * lines.len() as f32
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Pt,
        y: Pt,
        font: FontRef,
        size: Pt,
        align: TextAlign,
        max_width: Pt,
    ) {
        let font_id = self.fonts[font.0];
        let (ascent, line_height, lines) = {
            let face = self.font(font);
            let lines: Vec<(String, Pt)> = wrap_text(text, max_width, |s| face.width_of(s, size))
                .into_iter()
                .map(|line| {
                    let width = face.width_of(&line, size);
                    (line, width)
                })
                .collect();
            (face.ascent(size), face.line_height(size), lines)
        };

        for (index, (line, width)) in lines.into_iter().enumerate() {
            let line_x = match align {
                TextAlign::Left => x,
                TextAlign::Centre => x + ((max_width - width) * 0.5).max(Pt(0.0)),
                TextAlign::Right => x + (max_width - width).max(Pt(0.0)),
            };
            let baseline = y + line_height * index as f32 + ascent;
            self.page.add_span(SpanLayout {
                text: line,
                font: SpanFont { id: font_id, size },
                colour: self.colour,
                coords: (line_x, self.flip(baseline)),
            });
        }
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        let from = (from.0, self.flip(from.1));
        let to = (to.0, self.flip(to.1));
        self.page.add_line(from, to);
    }

    fn draw_rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt) {
        self.page.add_rect(Rect {
            x1: x,
            y1: self.flip(y + height),
            x2: x + width,
            y2: self.flip(y),
        });
    }

    fn new_page(&mut self) {
        log::debug!("starting page {}", self.doc.page_order.len() + 2);
        let finished = std::mem::replace(
            &mut self.page,
            Page::new(self.size, Some(self.margins.clone())),
        );
        self.doc.add_page(finished);
    }
}
