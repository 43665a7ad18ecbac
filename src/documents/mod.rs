//! Ready-made business document generators built on the layout engine.
//!
//! Each generator is a thin composition of layout calls — it computes the
//! strings to show, then chains [render_row](crate::layout::render_row),
//! [render_table](crate::layout::render_table), and
//! [render_listing](crate::layout::render_listing) down the page, threading
//! the cursor position from one block to the next. All document-specific
//! knowledge lives in the data structs; none of the drawing code is.

mod receipt;
pub use receipt::*;

mod report;
pub use report::*;
