use crate::{
    data_types::GlyphId,
    error::SfntResult,
    parse::SfntParser,
    platform::{Platform, WindowsEncoding},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmapTable {
    /// Version number (Set to zero)
    pub version: u16,
    pub encoding_records: Vec<EncodingRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingRecord {
    pub platform_id: u16,
    pub platform_specific_id: u16,

    /// Offset of the subtable from the start of the 'cmap' table
    pub offset: u32,
    pub subtable: CmapSubtable,
}

impl EncodingRecord {
    pub fn platform(&self) -> Option<Platform> {
        Platform::from_u16(self.platform_id)
    }

    /// Windows platform with the UCS-2 encoding, the mapping every Windows
    /// font is expected to carry
    pub fn is_windows_unicode_bmp(&self) -> bool {
        self.platform() == Some(Platform::Windows)
            && WindowsEncoding::from_u16(self.platform_specific_id)
                == Some(WindowsEncoding::UnicodeBmp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmapGroup {
    pub start_char_code: u32,
    pub end_char_code: u32,
    pub start_glyph_code: u32,
}

impl CmapGroup {
    fn find(groups: &[Self], char_code: u32) -> Option<&Self> {
        let index = groups.partition_point(|group| group.end_char_code < char_code);
        groups
            .get(index)
            .filter(|group| group.start_char_code <= char_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmapSubtable {
    /// Byte encoding table, glyph ids indexed directly by an 8-bit code
    Zero {
        language: u16,
        glyph_index_array: [u8; 256],
    },

    /// Segment mapping to delta values
    Four {
        language: u16,
        seg_count_x2: u16,
        search_range: u16,
        entry_selector: u16,
        range_shift: u16,
        end_code: Vec<u16>,
        start_code: Vec<u16>,
        id_delta: Vec<i16>,
        id_range_offset: Vec<u16>,
        glyph_index_array: Vec<u16>,
    },

    /// Trimmed table mapping
    Six {
        language: u16,
        first_code: u16,
        glyph_index_array: Vec<u16>,
    },

    /// Mixed 16-bit and 32-bit coverage
    Eight {
        language: u32,
        is32: Vec<u8>,
        groups: Vec<CmapGroup>,
    },

    /// Trimmed array
    Ten {
        language: u32,
        start_char_code: u32,
        glyphs: Vec<u16>,
    },

    /// Segmented coverage
    Twelve { language: u32, groups: Vec<CmapGroup> },

    /// Many-to-one range mappings
    Thirteen { language: u32, groups: Vec<CmapGroup> },

    /// A format that is kept but not interpreted, such as the high-byte
    /// mapping of format 2 or the variation sequences of format 14
    Opaque { format: u16, data: Vec<u8> },
}

impl CmapSubtable {
    pub fn format(&self) -> u16 {
        match self {
            Self::Zero { .. } => 0,
            Self::Four { .. } => 4,
            Self::Six { .. } => 6,
            Self::Eight { .. } => 8,
            Self::Ten { .. } => 10,
            Self::Twelve { .. } => 12,
            Self::Thirteen { .. } => 13,
            Self::Opaque { format, .. } => *format,
        }
    }

    /// Maps a character code to a glyph, returning [`GlyphId::NOTDEF`] for
    /// unmapped codes
    pub fn resolve(&self, char_code: u32) -> GlyphId {
        match self {
            Self::Zero {
                glyph_index_array, ..
            } => usize::try_from(char_code)
                .ok()
                .and_then(|code| glyph_index_array.get(code))
                .map_or(GlyphId::NOTDEF, |&id| GlyphId(u32::from(id))),
            Self::Four {
                end_code,
                start_code,
                id_delta,
                id_range_offset,
                glyph_index_array,
                ..
            } => resolve_segment(
                char_code,
                end_code,
                start_code,
                id_delta,
                id_range_offset,
                glyph_index_array,
            ),
            Self::Six {
                first_code,
                glyph_index_array,
                ..
            } => char_code
                .checked_sub(u32::from(*first_code))
                .and_then(|index| glyph_index_array.get(index as usize))
                .map_or(GlyphId::NOTDEF, |&id| GlyphId::from(id)),
            Self::Ten {
                start_char_code,
                glyphs,
                ..
            } => char_code
                .checked_sub(*start_char_code)
                .and_then(|index| glyphs.get(index as usize))
                .map_or(GlyphId::NOTDEF, |&id| GlyphId::from(id)),
            Self::Eight { groups, .. } | Self::Twelve { groups, .. } => {
                CmapGroup::find(groups, char_code).map_or(GlyphId::NOTDEF, |group| {
                    GlyphId(
                        group
                            .start_glyph_code
                            .wrapping_add(char_code - group.start_char_code),
                    )
                })
            }
            Self::Thirteen { groups, .. } => CmapGroup::find(groups, char_code)
                .map_or(GlyphId::NOTDEF, |group| GlyphId(group.start_glyph_code)),
            Self::Opaque { .. } => GlyphId::NOTDEF,
        }
    }
}

fn resolve_segment(
    char_code: u32,
    end_code: &[u16],
    start_code: &[u16],
    id_delta: &[i16],
    id_range_offset: &[u16],
    glyph_index_array: &[u16],
) -> GlyphId {
    let Ok(code) = u16::try_from(char_code) else {
        return GlyphId::NOTDEF;
    };

    let segment = end_code.partition_point(|&end| end < code);

    let (Some(&start), Some(&delta), Some(&range_offset)) = (
        start_code.get(segment),
        id_delta.get(segment),
        id_range_offset.get(segment),
    ) else {
        return GlyphId::NOTDEF;
    };

    if code < start {
        return GlyphId::NOTDEF;
    }

    let glyph = if range_offset == 0 {
        code.wrapping_add(delta as u16)
    } else {
        // range_offset is relative to its own slot in id_range_offset, which
        // directly precedes glyph_index_array
        let index = usize::from(range_offset / 2) + usize::from(code - start) + segment;
        let Some(&glyph) = index
            .checked_sub(id_range_offset.len())
            .and_then(|index| glyph_index_array.get(index))
        else {
            return GlyphId::NOTDEF;
        };

        if glyph == 0 {
            return GlyphId::NOTDEF;
        }

        glyph.wrapping_add(delta as u16)
    };

    GlyphId::from(glyph)
}

impl SfntParser<'_> {
    pub fn read_cmap_table(&mut self) -> SfntResult<CmapTable> {
        let version = self.read_u16()?;
        if version != 0 {
            log::warn!("unexpected cmap version {}", version);
        }

        let number_subtables = self.read_u16()?;
        let mut headers = Vec::with_capacity(usize::from(number_subtables));

        for _ in 0..number_subtables {
            let platform_id = self.read_u16()?;
            let platform_specific_id = self.read_u16()?;
            let offset = self.read_u32()?;

            headers.push((platform_id, platform_specific_id, offset));
        }

        let mut encoding_records = Vec::with_capacity(headers.len());

        for (platform_id, platform_specific_id, offset) in headers {
            // several records commonly share one subtable
            let subtable = match encoding_records
                .iter()
                .find(|record: &&EncodingRecord| record.offset == offset)
            {
                Some(record) => record.subtable.clone(),
                None => {
                    self.seek(offset as usize);
                    self.parse_cmap_subtable()?
                }
            };

            log::trace!(
                "cmap encoding record ({}, {}) uses format {}",
                platform_id,
                platform_specific_id,
                subtable.format()
            );

            encoding_records.push(EncodingRecord {
                platform_id,
                platform_specific_id,
                offset,
                subtable,
            });
        }

        Ok(CmapTable {
            version,
            encoding_records,
        })
    }

    fn parse_cmap_subtable(&mut self) -> SfntResult<CmapSubtable> {
        let format = self.read_u16()?;

        match format {
            0 => self.parse_cmap_subtable_0(),
            4 => self.parse_cmap_subtable_4(),
            6 => self.parse_cmap_subtable_6(),
            8 => self.parse_cmap_subtable_8(),
            10 => self.parse_cmap_subtable_10(),
            12 => self.parse_cmap_subtable_groups().map(|(language, groups)| {
                CmapSubtable::Twelve { language, groups }
            }),
            13 => self.parse_cmap_subtable_groups().map(|(language, groups)| {
                CmapSubtable::Thirteen { language, groups }
            }),
            _ => {
                log::warn!("keeping cmap subtable format {} uninterpreted", format);
                self.parse_opaque_cmap_subtable(format)
            }
        }
    }

    fn parse_cmap_subtable_0(&mut self) -> SfntResult<CmapSubtable> {
        let _length = self.read_u16()?;
        let language = self.read_u16()?;

        let mut glyph_index_array = [0; 256];
        glyph_index_array.copy_from_slice(self.read_bytes(256)?);

        Ok(CmapSubtable::Zero {
            language,
            glyph_index_array,
        })
    }

    fn parse_cmap_subtable_4(&mut self) -> SfntResult<CmapSubtable> {
        let _length = self.read_u16()?;
        let language = self.read_u16()?;
        let seg_count_x2 = self.read_u16()?;
        let search_range = self.read_u16()?;
        let entry_selector = self.read_u16()?;
        let range_shift = self.read_u16()?;

        let seg_count = seg_count_x2 / 2;

        let end_code = self.read_u16_array(seg_count)?;

        if end_code.last() != Some(&0xFFFF) {
            log::warn!("cmap format 4 subtable does not end with a 0xFFFF segment");
        }

        let _reserved_pad = self.read_u16()?;

        let start_code = self.read_u16_array(seg_count)?;

        let mut id_delta = Vec::with_capacity(usize::from(seg_count));
        for _ in 0..seg_count {
            id_delta.push(self.read_i16()?);
        }

        let id_range_offset = self.read_u16_array(seg_count)?;

        // the 16 bit length wraps on large subtables, so the glyph id array
        // runs to the end of the table. Lookups bound every index
        let glyph_count = self.remaining() / 2;
        let mut glyph_index_array = Vec::with_capacity(glyph_count);
        for _ in 0..glyph_count {
            glyph_index_array.push(self.read_u16()?);
        }

        Ok(CmapSubtable::Four {
            language,
            seg_count_x2,
            search_range,
            entry_selector,
            range_shift,
            end_code,
            start_code,
            id_delta,
            id_range_offset,
            glyph_index_array,
        })
    }

    fn parse_cmap_subtable_6(&mut self) -> SfntResult<CmapSubtable> {
        let _length = self.read_u16()?;
        let language = self.read_u16()?;
        let first_code = self.read_u16()?;
        let entry_count = self.read_u16()?;

        let glyph_index_array = self.read_u16_array(entry_count)?;

        Ok(CmapSubtable::Six {
            language,
            first_code,
            glyph_index_array,
        })
    }

    fn parse_cmap_subtable_8(&mut self) -> SfntResult<CmapSubtable> {
        let _reserved = self.read_u16()?;
        let _length = self.read_u32()?;
        let language = self.read_u32()?;
        let is32 = self.read_bytes(8192)?.to_vec();
        let groups = self.read_cmap_groups()?;

        Ok(CmapSubtable::Eight {
            language,
            is32,
            groups,
        })
    }

    fn parse_cmap_subtable_10(&mut self) -> SfntResult<CmapSubtable> {
        let _reserved = self.read_u16()?;
        let _length = self.read_u32()?;
        let language = self.read_u32()?;
        let start_char_code = self.read_u32()?;
        let num_chars = self.read_u32()?;

        self.ensure_available(num_chars, 2)?;
        let mut glyphs = Vec::with_capacity(num_chars as usize);
        for _ in 0..num_chars {
            glyphs.push(self.read_u16()?);
        }

        Ok(CmapSubtable::Ten {
            language,
            start_char_code,
            glyphs,
        })
    }

    fn parse_cmap_subtable_groups(&mut self) -> SfntResult<(u32, Vec<CmapGroup>)> {
        let _reserved = self.read_u16()?;
        let _length = self.read_u32()?;
        let language = self.read_u32()?;
        let groups = self.read_cmap_groups()?;

        Ok((language, groups))
    }

    fn parse_opaque_cmap_subtable(&mut self, format: u16) -> SfntResult<CmapSubtable> {
        // the length field is 16-bit below format 8 and 32-bit from format 8
        // on, where all formats but 14 put a reserved field before it
        let (length, header_size) = match format {
            0..=7 => (usize::from(self.read_u16()?), 4),
            14 => (self.read_u32()? as usize, 6),
            _ => {
                let _reserved = self.read_u16()?;
                (self.read_u32()? as usize, 8)
            }
        };

        let data = self.read_bytes(length.saturating_sub(header_size))?.to_vec();

        Ok(CmapSubtable::Opaque { format, data })
    }

    fn read_cmap_groups(&mut self) -> SfntResult<Vec<CmapGroup>> {
        let n_groups = self.read_u32()?;

        self.ensure_available(n_groups, 12)?;
        let mut groups = Vec::with_capacity(n_groups as usize);
        for _ in 0..n_groups {
            groups.push(CmapGroup {
                start_char_code: self.read_u32()?,
                end_char_code: self.read_u32()?,
                start_glyph_code: self.read_u32()?,
            });
        }

        Ok(groups)
    }
}
