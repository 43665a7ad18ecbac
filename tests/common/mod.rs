//! A recording rendering surface with synthetic font metrics, so layout
//! behaviour can be asserted without loading real font files.
#![allow(dead_code)]

use pdf_flow::layout::{wrap_text, Margins, PageGeometry};
use pdf_flow::{FontRef, Pt, RenderSurface, TextAlign};

/// Synthetic advance width: half the font size per character
pub fn fake_width(text: &str, size: Pt) -> Pt {
    Pt(text.chars().count() as f32 * size.0 * 0.5)
}

/// Synthetic line height: 1.2 × the font size
pub fn fake_line_height(size: Pt) -> Pt {
    size * 1.2
}

/// A font handle for the fake surface; it carries no state
pub const FONT: FontRef = FontRef(0);

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        text: String,
        x: Pt,
        y: Pt,
        size: Pt,
        align: TextAlign,
        max_width: Pt,
        page: usize,
    },
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        page: usize,
    },
    Rect {
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
        page: usize,
    },
}

pub struct FakeSurface {
    geometry: PageGeometry,
    pub ops: Vec<Op>,
    pub page: usize,
}

impl FakeSurface {
    pub fn new(width: f32, height: f32, margin: f32) -> FakeSurface {
        let geometry =
            PageGeometry::new((Pt(width), Pt(height)), Margins::all(Pt(margin))).unwrap();
        FakeSurface {
            geometry,
            ops: Vec::new(),
            page: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page + 1
    }

    /// All recorded text draws, in order
    pub fn texts(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Text { .. }))
            .collect()
    }

    /// Text draws on one page whose content equals `needle`
    pub fn texts_matching(&self, needle: &str, page: usize) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Text { text, page: p, .. } if text == needle && *p == page))
            .collect()
    }

    /// Vertical line draws (x constant) on one page
    pub fn vertical_lines(&self, page: usize) -> Vec<((Pt, Pt), (Pt, Pt))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, page: p } if from.0 == to.0 && *p == page => {
                    Some((*from, *to))
                }
                _ => None,
            })
            .collect()
    }

    /// Horizontal line draws (y constant) on one page
    pub fn horizontal_lines(&self, page: usize) -> Vec<((Pt, Pt), (Pt, Pt))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, page: p } if from.1 == to.1 && *p == page => {
                    Some((*from, *to))
                }
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self, page: usize) -> Vec<(Pt, Pt, Pt, Pt)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect {
                    x,
                    y,
                    width,
                    height,
                    page: p,
                } if *p == page => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for FakeSurface {
    fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    fn measure_text_height(&self, text: &str, _font: FontRef, size: Pt, max_width: Pt) -> Pt {
        let lines = wrap_text(text, max_width, |s| fake_width(s, size));
        fake_line_height(size) * lines.len() as f32
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Pt,
        y: Pt,
        _font: FontRef,
        size: Pt,
        align: TextAlign,
        max_width: Pt,
    ) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            size,
            align,
            max_width,
            page: self.page,
        });
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.ops.push(Op::Line {
            from,
            to,
            page: self.page,
        });
    }

    fn draw_rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt) {
        self.ops.push(Op::Rect {
            x,
            y,
            width,
            height,
            page: self.page,
        });
    }

    fn new_page(&mut self) {
        self.page += 1;
    }
}
