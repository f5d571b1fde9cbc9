//! Builders for synthetic font images used by the unit tests

use crate::table::TableTag;

pub fn be16(n: u16) -> Vec<u8> {
    n.to_be_bytes().to_vec()
}

pub fn be32(n: u32) -> Vec<u8> {
    n.to_be_bytes().to_vec()
}

fn i16_be(n: i16) -> Vec<u8> {
    n.to_be_bytes().to_vec()
}

fn utf16_be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Offset subtable with zeroed search hints
pub fn directory_header(sfnt_version: u32, num_tables: u16) -> Vec<u8> {
    let mut bytes = be32(sfnt_version);
    bytes.extend(be16(num_tables));
    bytes.extend([0; 6]);
    bytes
}

pub fn head_table(units_per_em: u16, magic_number: u32) -> Vec<u8> {
    let mut bytes = be16(1);
    bytes.extend(be16(0));
    bytes.extend(be32(0x0002_8000));
    bytes.extend(be32(0));
    bytes.extend(be32(magic_number));
    bytes.extend(be16(0x000B));
    bytes.extend(be16(units_per_em));
    bytes.extend(3_000_000_000i64.to_be_bytes());
    bytes.extend(3_100_000_000i64.to_be_bytes());
    for value in [-100, -200, 1000, 900] {
        bytes.extend(i16_be(value));
    }
    // bold
    bytes.extend(be16(1));
    bytes.extend(be16(8));
    bytes.extend(i16_be(2));
    bytes.extend(i16_be(1));
    bytes.extend(i16_be(0));

    debug_assert_eq!(bytes.len(), 54);
    bytes
}

/// Version 1.0 table whose capacity fields count up from 1
pub fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut bytes = be32(0x0001_0000);
    bytes.extend(be16(num_glyphs));
    for value in 1..=13 {
        bytes.extend(be16(value));
    }
    bytes
}

/// 'hhea' or 'vhea', which share a layout
pub fn metrics_header(version: u32, number_of_metrics: u16) -> Vec<u8> {
    let mut bytes = be32(version);
    bytes.extend(i16_be(800));
    bytes.extend(i16_be(-200));
    bytes.extend(i16_be(90));
    bytes.extend(be16(1200));
    bytes.extend(i16_be(-50));
    bytes.extend(i16_be(-60));
    bytes.extend(i16_be(1100));
    bytes.extend(i16_be(1));
    bytes.extend(i16_be(0));
    bytes.extend(i16_be(0));
    bytes.extend([0; 8]);
    bytes.extend(i16_be(0));
    bytes.extend(be16(number_of_metrics));

    debug_assert_eq!(bytes.len(), 36);
    bytes
}

/// 'hmtx' or 'vmtx'
pub fn metrics_table(metrics: &[(u16, i16)], bearings: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for &(advance, bearing) in metrics {
        bytes.extend(be16(advance));
        bytes.extend(i16_be(bearing));
    }
    for &bearing in bearings {
        bytes.extend(i16_be(bearing));
    }
    bytes
}

/// Lays out every OS/2 field up to version 5, then cuts the table to `len`
pub fn os2_table(version: u16, len: usize) -> Vec<u8> {
    let mut bytes = be16(version);
    bytes.extend(i16_be(520));
    bytes.extend(be16(400));
    bytes.extend(be16(5));
    bytes.extend(be16(0));
    // subscript, superscript, strikeout
    for value in [650, 600, 0, 75, 650, 600, 0, 350, 50, 300] {
        bytes.extend(i16_be(value));
    }
    bytes.extend(i16_be(0));
    bytes.extend([2, 11, 6, 4, 2, 2, 2, 2, 2, 4]);
    for range in [0x0000_0003, 0, 0, 0] {
        bytes.extend(be32(range));
    }
    bytes.extend(b"TEST");
    bytes.extend(be16(0x0040));
    bytes.extend(be16(0x20));
    bytes.extend(be16(0xFFFF));
    debug_assert_eq!(bytes.len(), 68);

    bytes.extend(i16_be(750));
    bytes.extend(i16_be(-250));
    bytes.extend(i16_be(0));
    bytes.extend(be16(1000));
    bytes.extend(be16(250));

    bytes.extend(be32(1));
    bytes.extend(be32(0));

    bytes.extend(i16_be(500));
    bytes.extend(i16_be(700));
    bytes.extend(be16(0));
    bytes.extend(be16(32));
    bytes.extend(be16(2));

    bytes.extend(be16(0));
    bytes.extend(be16(0xFFFE));
    debug_assert_eq!(bytes.len(), 100);

    bytes.truncate(len);
    bytes
}

pub struct NameEntry {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    text: &'static str,
}

impl NameEntry {
    pub fn new(
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: u16,
        text: &'static str,
    ) -> Self {
        Self {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            text,
        }
    }

    fn encode(&self) -> Vec<u8> {
        match self.platform_id {
            0 | 3 => utf16_be(self.text),
            _ => self.text.as_bytes().to_vec(),
        }
    }
}

/// Format 0 table, or format 1 when there are language tags
pub fn name_table(entries: &[NameEntry], lang_tags: &[&str]) -> Vec<u8> {
    let format = u16::from(!lang_tags.is_empty());
    let mut string_offset = 6 + 12 * entries.len();
    if format == 1 {
        string_offset += 2 + 4 * lang_tags.len();
    }

    let mut bytes = be16(format);
    bytes.extend(be16(entries.len() as u16));
    bytes.extend(be16(string_offset as u16));

    let mut storage = Vec::new();
    for entry in entries {
        let text = entry.encode();

        bytes.extend(be16(entry.platform_id));
        bytes.extend(be16(entry.encoding_id));
        bytes.extend(be16(entry.language_id));
        bytes.extend(be16(entry.name_id));
        bytes.extend(be16(text.len() as u16));
        bytes.extend(be16(storage.len() as u16));

        storage.extend(text);
    }

    if format == 1 {
        bytes.extend(be16(lang_tags.len() as u16));
        for tag in lang_tags {
            let text = utf16_be(tag);

            bytes.extend(be16(text.len() as u16));
            bytes.extend(be16(storage.len() as u16));

            storage.extend(text);
        }
    }

    bytes.extend(storage);
    bytes
}

/// Each record gets its own copy of its subtable, in record order
pub fn cmap_table(records: &[(u16, u16, Vec<u8>)]) -> Vec<u8> {
    let mut bytes = be16(0);
    bytes.extend(be16(records.len() as u16));

    let mut offset = 4 + 8 * records.len();
    for (platform_id, encoding_id, subtable) in records {
        bytes.extend(be16(*platform_id));
        bytes.extend(be16(*encoding_id));
        bytes.extend(be32(offset as u32));
        offset += subtable.len();
    }

    for (.., subtable) in records {
        bytes.extend(subtable);
    }
    bytes
}

pub fn cmap_format_0(mappings: &[(u8, u8)]) -> Vec<u8> {
    let mut glyphs = [0; 256];
    for &(code, glyph) in mappings {
        glyphs[usize::from(code)] = glyph;
    }

    let mut bytes = be16(0);
    bytes.extend(be16(262));
    bytes.extend(be16(0));
    bytes.extend(glyphs);
    bytes
}

/// One delta segment per mapping, plus the closing 0xFFFF segment.
/// Mappings must be sorted by character code
pub fn cmap_format_4(mappings: &[(u16, u16)]) -> Vec<u8> {
    let mut segments: Vec<(u16, u16, i16)> = mappings
        .iter()
        .map(|&(code, glyph)| (code, code, glyph.wrapping_sub(code) as i16))
        .collect();
    segments.push((0xFFFF, 0xFFFF, 1));

    let seg_count = segments.len() as u16;

    let mut bytes = be16(4);
    bytes.extend(be16(16 + 8 * seg_count));
    bytes.extend(be16(0));
    bytes.extend(be16(seg_count * 2));
    bytes.extend([0; 6]);
    for &(_, end, _) in &segments {
        bytes.extend(be16(end));
    }
    bytes.extend(be16(0));
    for &(start, ..) in &segments {
        bytes.extend(be16(start));
    }
    for &(.., delta) in &segments {
        bytes.extend(i16_be(delta));
    }
    for _ in &segments {
        bytes.extend(be16(0));
    }
    bytes
}

/// Format 12 or 13 subtable from `(start, end, glyph)` groups
pub fn cmap_groups(format: u16, groups: &[(u32, u32, u32)]) -> Vec<u8> {
    let mut bytes = be16(format);
    bytes.extend(be16(0));
    bytes.extend(be32(16 + 12 * groups.len() as u32));
    bytes.extend(be32(0));
    bytes.extend(be32(groups.len() as u32));
    for &(start, end, glyph) in groups {
        bytes.extend(be32(start));
        bytes.extend(be32(end));
        bytes.extend(be32(glyph));
    }
    bytes
}

/// Body of a format 0 kern subtable
pub fn kern_format_0(pairs: &[(u16, u16, i16)]) -> Vec<u8> {
    let mut bytes = be16(pairs.len() as u16);
    bytes.extend([0; 6]);
    for &(left, right, value) in pairs {
        bytes.extend(be16(left));
        bytes.extend(be16(right));
        bytes.extend(i16_be(value));
    }
    bytes
}

/// OpenType kern subtable. `flags` is the low byte of the coverage field
pub fn kern_subtable(format: u8, flags: u8, body: Vec<u8>) -> Vec<u8> {
    let mut bytes = be16(0);
    bytes.extend(be16(6 + body.len() as u16));
    bytes.extend([format, flags]);
    bytes.extend(body);
    bytes
}

pub fn kern_table(subtables: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = be16(0);
    bytes.extend(be16(subtables.len() as u16));
    for subtable in subtables {
        bytes.extend(subtable);
    }
    bytes
}

/// Assembles a font file from whole tables
#[derive(Debug, Clone)]
pub struct FontBuilder {
    sfnt_version: u32,
    tables: Vec<(TableTag, Vec<u8>)>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self {
            sfnt_version: 0x0001_0000,
            tables: Vec::new(),
        }
    }

    pub fn sfnt_version(mut self, sfnt_version: u32) -> Self {
        self.sfnt_version = sfnt_version;
        self
    }

    /// Adds or replaces a table
    pub fn table(mut self, tag: TableTag, data: Vec<u8>) -> Self {
        self.tables.retain(|(existing, _)| *existing != tag);
        self.tables.push((tag, data));
        self
    }

    pub fn without(mut self, tag: TableTag) -> Self {
        self.tables.retain(|(existing, _)| *existing != tag);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_at(0)
    }

    /// Builds the font for placement at `base` inside a larger file. Table
    /// offsets are absolute, so they include `base`
    pub fn build_at(&self, base: usize) -> Vec<u8> {
        let mut bytes = directory_header(self.sfnt_version, self.tables.len() as u16);

        let mut offset = 12 + 16 * self.tables.len();
        for (tag, data) in &self.tables {
            bytes.extend(tag.as_bytes());
            bytes.extend(be32(0));
            bytes.extend(be32((base + offset) as u32));
            bytes.extend(be32(data.len() as u32));
            offset += data.len().next_multiple_of(4);
        }

        for (_, data) in &self.tables {
            bytes.extend(data);
            bytes.resize(bytes.len().next_multiple_of(4), 0);
        }
        bytes
    }
}

/// Version 1 collection of the given fonts, one after another
pub fn collection(fonts: &[FontBuilder]) -> Vec<u8> {
    let mut header = b"ttcf".to_vec();
    header.extend(be16(1));
    header.extend(be16(0));
    header.extend(be32(fonts.len() as u32));

    let mut body = Vec::new();
    let header_len = 12 + 4 * fonts.len();
    for font in fonts {
        let offset = header_len + body.len();
        header.extend(be32(offset as u32));
        body.extend(font.build_at(offset));
    }

    header.extend(body);
    header
}

pub const GLYPH_A: u16 = 1;
pub const GLYPH_W: u16 = 2;
pub const GLYPH_T: u16 = 3;
pub const GLYPH_V: u16 = 4;
pub const GLYPH_LOWER_A: u16 = 5;

/// Glyph of 'Z', only mapped by the Macintosh subtable
pub const GLYPH_Z: u16 = 9;

/// A small but complete Latin font:
///
/// - 'cmap' with a Macintosh byte encoding subtable listed before the Windows
///   UCS-2 subtable
/// - 'name' with English, Dutch and tagged Flemish records
/// - 'kern' where only the last subtable is horizontal, kerning-valued
///   format 0, and A/W kerns by -80
pub fn sample_font() -> FontBuilder {
    let cmap = cmap_table(&[
        (1, 0, cmap_format_0(&[(b'A', 7), (b'Z', GLYPH_Z as u8)])),
        (
            3,
            1,
            cmap_format_4(&[
                (u16::from(b'A'), GLYPH_A),
                (u16::from(b'T'), GLYPH_T),
                (u16::from(b'V'), GLYPH_V),
                (u16::from(b'W'), GLYPH_W),
                (u16::from(b'a'), GLYPH_LOWER_A),
            ]),
        ),
    ]);

    let name = name_table(
        &[
            NameEntry::new(1, 0, 0, 1, "Sample Mac"),
            NameEntry::new(3, 1, 0x0009, 1, "Sample Win"),
            NameEntry::new(3, 1, 0x0409, 1, "Sample"),
            NameEntry::new(3, 1, 0x0409, 2, "Regular"),
            NameEntry::new(3, 1, 0x0413, 2, "Standaard"),
            NameEntry::new(1, 0, 0, 4, "Sample Mac Full"),
            NameEntry::new(3, 1, 0x8000, 2, "Gewoon"),
        ],
        &["nl-BE"],
    );

    let kern = kern_table(&[
        // vertical
        kern_subtable(0, 0x00, kern_format_0(&[(GLYPH_A, GLYPH_W, -999)])),
        // horizontal minimum
        kern_subtable(0, 0x03, kern_format_0(&[(GLYPH_A, GLYPH_W, -500)])),
        // horizontal, not format 0
        kern_subtable(2, 0x01, vec![0; 8]),
        kern_subtable(
            0,
            0x01,
            kern_format_0(&[
                (GLYPH_A, GLYPH_W, -80),
                (GLYPH_A, GLYPH_V, -60),
                (GLYPH_W, GLYPH_A, -70),
            ]),
        ),
    ]);

    FontBuilder::new()
        .table(TableTag::CMAP, cmap)
        .table(TableTag::NAME, name)
        .table(TableTag::HEAD, head_table(2048, 0x5F0F_3CF5))
        .table(TableTag::MAXP, maxp_table(10))
        .table(TableTag::OS2, os2_table(4, 96))
        .table(TableTag::KERN, kern)
        .table(TableTag::HHEA, metrics_header(0x0001_0000, 3))
        .table(
            TableTag::HMTX,
            metrics_table(&[(500, 0), (1300, 10), (1100, 20)], &[1, 2, 3, 4, 5, 6, 7]),
        )
        .table(TableTag::VHEA, metrics_header(0x0001_1000, 1))
        .table(TableTag::VMTX, metrics_table(&[(2048, 100)], &[110; 9]))
}
