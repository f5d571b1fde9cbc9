use crate::{data_types::GlyphId, font_file::Font};

/// Maps a character to a glyph of `font`.
///
/// The Windows UCS-2 subtable is asked first. When it has no glyph for `c`,
/// every encoding record is tried in directory order and the first nonzero
/// glyph wins.
pub fn resolve_glyph(c: char, font: &Font) -> GlyphId {
    let char_code = u32::from(c);
    let records = &font.cmap().encoding_records;

    let preferred = records
        .iter()
        .find(|record| record.is_windows_unicode_bmp())
        .map(|record| record.subtable.resolve(char_code))
        .filter(|glyph| !glyph.is_notdef());

    if let Some(glyph) = preferred {
        return glyph;
    }

    records
        .iter()
        .map(|record| record.subtable.resolve(char_code))
        .find(|glyph| !glyph.is_notdef())
        .unwrap_or(GlyphId::NOTDEF)
}
