use crate::colour::{colours, Colour};
use crate::content::render_contents;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

/// The font (by document id) and size a text span is drawn with
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of positioned text. `coords` is the baseline start position in
/// PDF coordinates (origin at the bottom-left of the page).
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A stroked straight line, in PDF coordinates
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub width: Pt,
    pub colour: Colour,
}

/// A stroked (not filled) rectangle, in PDF coordinates
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub width: Pt,
    pub colour: Colour,
}

/// A positioned image. `position` is where on the page the image will be
/// placed, in PDF coordinates; the image is scaled to fill it.
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub id: Id<Image>,
    pub position: Rect,
}

/// Everything a page can contain, in paint order
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Line(LineLayout),
    Rect(RectLayout),
    Image(ImageLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out contents of the page
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new, empty page of the given size. If margins are supplied they
    /// determine the page's content box; otherwise the content box covers the
    /// entire page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Add a stroked line in the default rule weight and colour
    pub fn add_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.contents.push(PageContents::Line(LineLayout {
            from,
            to,
            width: Pt(0.75),
            colour: colours::BLACK,
        }));
    }

    pub fn add_rect(&mut self, rect: Rect) {
        self.contents.push(PageContents::Rect(RectLayout {
            rect,
            width: Pt(0.75),
            colour: colours::BLACK,
        }));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), std::io::Error> {
        let id = refs.get(RefType::Page(page_index)).unwrap();
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree).unwrap());

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", i.index()).as_bytes()),
                refs.get(RefType::Font(i.index())).unwrap(),
            );
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (i, _) in images.iter() {
            resource_xobjects.pair(
                Name(format!("I{}", i.index()).as_bytes()),
                refs.get(RefType::Image(i.index())).unwrap(),
            );
        }
        resource_xobjects.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
