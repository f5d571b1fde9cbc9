use std::fmt;

use crate::table::TableTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SfntError {
    /// The file or collection header does not start with a known magic value
    UnrecognizedFormat { found: u32 },

    /// A table every font must carry is absent from the directory
    MissingRequiredTable { tag: TableTag },

    /// A read needed more bytes than remain in the source or table
    TruncatedData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A seek or table window points outside of the source
    OutOfRange { offset: usize, len: usize },

    /// A collection was asked for a font past its last one
    NoSuchFont { index: usize, num_fonts: u32 },
}

impl fmt::Display for SfntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFormat { found } => {
                write!(f, "unrecognized sfnt format tag 0x{:08X}", found)
            }
            Self::MissingRequiredTable { tag } => write!(f, "missing required table '{}'", tag),
            Self::TruncatedData {
                offset,
                needed,
                available,
            } => write!(
                f,
                "truncated data at offset {}: needed {} bytes, {} available",
                offset, needed, available
            ),
            Self::OutOfRange { offset, len } => {
                write!(f, "offset {} is out of range (length {})", offset, len)
            }
            Self::NoSuchFont { index, num_fonts } => write!(
                f,
                "font index {} is out of range for a collection of {} fonts",
                index, num_fonts
            ),
        }
    }
}

impl std::error::Error for SfntError {}

pub type SfntResult<T> = anyhow::Result<T>;
