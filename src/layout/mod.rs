//! The flowing-layout engine: cursor arithmetic, text measurement, uniform-height
//! table rows, and transparent pagination with header redraw.
//!
//! Everything here works in top-down page coordinates: `y` grows downward from
//! the top edge of the page, and a block's `y` is the top of that block. The
//! rendering surface is responsible for converting into PDF's bottom-up space
//! when content is actually emitted.
//!
//! Layout state is never ambient: the current vertical position is an explicit
//! [Cursor] value threaded through every call, and each call returns where the
//! next block may start. A document generator is a plain sequence of calls that
//! chain those positions down the page:
//!
//! ```no_run
//! use pdf_flow::layout::{render_table, Cell, TableStyle};
//! use pdf_flow::{PdfSurface, Pt};
//! # fn demo(surface: &mut PdfSurface, font: pdf_flow::FontRef) {
//! let header = vec![
//!     Cell::new("DESCRIPTION", font, Pt(9.0)),
//!     Cell::new("AMOUNT", font, Pt(9.0)),
//! ];
//! let rows = vec![vec![
//!     Cell::new("Motor insurance premium", font, Pt(9.0)),
//!     Cell::new("150,000.00", font, Pt(9.0)),
//! ]];
//! let y = render_table(surface, &header, &rows, Pt(100.0), &TableStyle::default());
//! // the next block starts at `y`
//! # }
//! ```

mod flow;
mod geometry;
mod listing;
mod margins;
mod metrics;
mod row;
mod table;

pub use flow::*;
pub use geometry::*;
pub use listing::*;
pub use margins::*;
pub use metrics::*;
pub use row::*;
pub use table::*;
