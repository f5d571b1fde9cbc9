use crate::{
    font_file::Font,
    table::{Direction, KerningPair, Values},
};

use super::resolve_glyph;

/// Horizontal kerning between two adjacent characters, in font units.
///
/// Only horizontal format 0 subtables holding plain kerning values take part;
/// the first one that lists the pair decides.
pub fn resolve_kerning(left: char, right: char, font: &Font) -> f32 {
    let kern = font.kern();

    if kern.subtables.is_empty() {
        return 0.0;
    }

    let (Ok(left), Ok(right)) = (
        u16::try_from(resolve_glyph(left, font).to_u32()),
        u16::try_from(resolve_glyph(right, font).to_u32()),
    ) else {
        return 0.0;
    };

    let pair = KerningPair::new(left, right);

    kern.subtables
        .iter()
        .filter(|subtable| {
            subtable.direction == Direction::Horizontal
                && subtable.values == Values::Kerning
                && !subtable.is_variation
        })
        .find_map(|subtable| subtable.kerning(pair))
        .map_or(0.0, f32::from)
}
