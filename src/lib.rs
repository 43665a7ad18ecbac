mod colour;
pub use colour::*;

pub(crate) mod content;

mod document;
pub use document::*;

/// Ready-made business document generators (receipts, reports)
pub mod documents;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// The flowing-layout engine: cursors, measurement, rows, tables, pagination
pub mod layout;

mod page;
pub use page::*;

/// Pre-defined page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod surface;
pub use surface::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom content generation
pub use pdf_writer;
