//! Utility class analysis: tokenizer, class lists, breakpoints, grid columns.
//!
//! Style tokens are opaque to rendering. This module only reads them back for
//! inspection, e.g. to see which column count a grid has at a given width.

pub mod tokenizer;
pub mod class_list;
pub mod breakpoint;
pub mod columns;

pub use breakpoint::Breakpoint;
pub use class_list::{ClassList, StyleError, UtilityClass};
pub use columns::{ColumnSpec, ColumnTable, RESPONSIVE_FALLBACK};
