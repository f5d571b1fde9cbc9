//! Decoder for sfnt font files (TrueType and OpenType) and `ttcf` font
//! collections.
//!
//! Parsing produces an owned, immutable [`Font`] holding the metadata tables
//! `cmap`, `name`, `head`, `maxp`, `OS/2`, `kern`, `hhea`, `vhea`, `hmtx` and
//! `vmtx`. Glyph outlines are not decoded.

mod data_types;
mod error;
mod font_file;
mod locale;
mod lookup;
mod macros;
mod parse;
mod platform;
pub mod table;

#[cfg(test)]
mod test_util;

pub use data_types::{FWord, Fixed, GlyphId, LongDateTime};
pub use error::{SfntError, SfntResult};
pub use font_file::{Font, FontCollection};
pub use locale::{same_culture, BuiltinLocales, LocaleMap};
pub use lookup::{resolve_glyph, resolve_kerning, resolve_name};
pub use parse::SfntParser;
pub use platform::{Platform, UnicodeEncoding, WindowsEncoding};
pub use table::{NameId, TableTag};

/// Parses a single font file
pub fn parse_font(source: &[u8]) -> SfntResult<Font> {
    Font::parse(source)
}

/// Parses every font of a collection file
pub fn parse_collection(source: &[u8]) -> SfntResult<FontCollection> {
    FontCollection::parse(source)
}

/// Parses the font at `index` of a collection file, skipping the others
pub fn parse_collection_font(source: &[u8], index: usize) -> SfntResult<Font> {
    FontCollection::parse_font(source, index)
}

/// Whether `source` starts with a collection header rather than a font
pub fn is_collection(source: &[u8]) -> bool {
    source.starts_with(TableTag::TTCF.as_bytes())
}

/// Offset of a table from the start of a single font file, without decoding
/// any table
pub fn find_table_offset(source: &[u8], tag: TableTag) -> SfntResult<Option<u32>> {
    let directory = SfntParser::new(source).read_font_directory()?;

    Ok(directory.find_table_offset(tag))
}
