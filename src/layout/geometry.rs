use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::units::Pt;
use crate::PDFError;

/// The fixed geometry of every page in one rendered document: page size plus
/// margins. Created once at document-open time and immutable afterwards.
///
/// All accessors are in top-down coordinates: [PageGeometry::top] is the y of
/// the first usable line on a page and [PageGeometry::bottom] is the y past
/// which content must not extend.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    width: Pt,
    height: Pt,
    margins: Margins,
}

impl PageGeometry {
    /// Create the geometry for a document. Fails with
    /// [PDFError::InvalidMargins] if any margin reaches half of the
    /// corresponding page dimension, which would leave no usable area.
    pub fn new(size: PageSize, margins: Margins) -> Result<PageGeometry, PDFError> {
        let (width, height) = size;
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        if margins.left >= half_w
            || margins.right >= half_w
            || margins.top >= half_h
            || margins.bottom >= half_h
        {
            return Err(PDFError::InvalidMargins {
                width: width.0,
                height: height.0,
            });
        }

        Ok(PageGeometry {
            width,
            height,
            margins,
        })
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn height(&self) -> Pt {
        self.height
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    /// x of the left edge of the usable area
    pub fn left(&self) -> Pt {
        self.margins.left
    }

    /// x of the right edge of the usable area
    pub fn right(&self) -> Pt {
        self.width - self.margins.right
    }

    /// y of the top of the usable area (where the cursor starts on a fresh page)
    pub fn top(&self) -> Pt {
        self.margins.top
    }

    /// y of the bottom of the usable area (content must end at or above this)
    pub fn bottom(&self) -> Pt {
        self.height - self.margins.bottom
    }

    pub fn usable_width(&self) -> Pt {
        self.width - self.margins.left - self.margins.right
    }

    pub fn usable_height(&self) -> Pt {
        self.height - self.margins.top - self.margins.bottom
    }
}

/// The current vertical drawing position on a page, in top-down coordinates.
///
/// A cursor is owned by exactly one in-progress rendering operation and is
/// mutated strictly sequentially. It performs no bounds checking of its own;
/// keeping the position within the page is [`ensure_room`](crate::layout::ensure_room)'s
/// job, layered on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    y: Pt,
}

impl Cursor {
    pub fn new(y: Pt) -> Cursor {
        Cursor { y }
    }

    /// Move the cursor down by `delta` and return the new position
    pub fn advance(&mut self, delta: Pt) -> Pt {
        self.y += delta;
        self.y
    }

    /// Read the current position without mutating
    pub fn peek(&self) -> Pt {
        self.y
    }

    /// Jump to an absolute position (e.g. the top margin after a page break)
    pub fn reset_to(&mut self, y: Pt) {
        self.y = y;
    }
}
