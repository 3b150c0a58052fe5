//! Grid column specifications and the child-count heuristic.
//!
//! A [`ColumnSpec`] is the class string a grid carries for its columns. It is
//! emitted as-is; [`ColumnSpec::columns`] reads the per-breakpoint column
//! counts back out of it for inspection.

use std::fmt;

use tracing::trace;

use crate::style::breakpoint::Breakpoint;
use crate::style::class_list::{ClassList, StyleError};

/// Columns used when a grid without an explicit spec has more than two children.
///
/// Drops to one column at `sm` before growing again.
pub const RESPONSIVE_FALLBACK: &str = "grid-cols-2 sm:grid-cols-1 md:grid-cols-2 lg:grid-cols-3";

const COLUMN_UTILITY: &str = "grid-cols-";

/// The column classes of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec(String);

impl ColumnSpec {
    /// A caller-supplied spec, kept verbatim.
    pub fn custom(classes: impl Into<String>) -> Self {
        Self(classes.into())
    }

    /// The same column count at every breakpoint.
    pub fn fixed(columns: usize) -> Self {
        Self(format!("{COLUMN_UTILITY}{columns}"))
    }

    /// See [`RESPONSIVE_FALLBACK`].
    pub fn responsive_fallback() -> Self {
        Self(RESPONSIVE_FALLBACK.to_owned())
    }

    /// Derive a spec from the number of children.
    ///
    /// Up to two children get one column each (no children counts as one);
    /// anything more gets the responsive fallback, whatever the count.
    pub fn for_child_count(count: usize) -> Self {
        let spec = if count <= 2 {
            Self::fixed(count.max(1))
        } else {
            Self::responsive_fallback()
        };
        trace!(count, spec = %spec, "column spec from child count");
        spec
    }

    /// The class string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the per-breakpoint column counts out of the classes.
    ///
    /// Only unconditional `grid-cols-N` classes and ones under a single
    /// breakpoint prefix count; everything else is ignored. When the same
    /// breakpoint is given twice, the later class wins.
    pub fn columns(&self) -> Result<ColumnTable, StyleError> {
        let list = ClassList::parse(&self.0)?;
        let mut entries: Vec<(Breakpoint, u16)> = Vec::new();

        for class in list.iter() {
            let Some(bp) = class.breakpoint() else {
                continue;
            };
            let Some(count) = class
                .utility
                .strip_prefix(COLUMN_UTILITY)
                .and_then(|n| n.parse::<u16>().ok())
            else {
                continue;
            };
            match entries.iter_mut().find(|(b, _)| *b == bp) {
                Some(slot) => slot.1 = count,
                None => entries.push((bp, count)),
            }
        }

        entries.sort_by_key(|(bp, _)| *bp);
        Ok(ColumnTable { entries })
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column counts per breakpoint, narrowest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTable {
    entries: Vec<(Breakpoint, u16)>,
}

impl ColumnTable {
    /// The explicit `(breakpoint, columns)` entries, narrowest first.
    pub fn entries(&self) -> &[(Breakpoint, u16)] {
        &self.entries
    }

    /// Just the column counts, narrowest breakpoint first.
    pub fn counts(&self) -> Vec<u16> {
        self.entries.iter().map(|(_, n)| *n).collect()
    }

    /// Columns in effect at `bp`: the entry for `bp` or the nearest narrower one.
    pub fn at(&self, bp: Breakpoint) -> Option<u16> {
        self.entries
            .iter()
            .rev()
            .find(|(b, _)| *b <= bp)
            .map(|(_, n)| *n)
    }

    /// Columns in effect at a viewport `width` in CSS pixels.
    pub fn for_width(&self, width: u32) -> Option<u16> {
        self.at(Breakpoint::for_width(width))
    }
}
