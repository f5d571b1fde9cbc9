use std::collections::HashMap;

use crate::{
    error::{SfntError, SfntResult},
    parse::SfntParser,
};

use super::TableTag;

/// The version tag at the very start of an sfnt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfntVersion {
    /// 0x00010000, TrueType outlines (Windows and Adobe)
    TrueType,

    /// 'OTTO', CFF outlines
    Cff,

    /// 'true', used by older Apple fonts
    AppleTrueType,

    /// 'typ1', an sfnt wrapped PostScript Type 1 font
    AppleType1,
}

impl SfntVersion {
    pub fn from_u32(tag: u32) -> Option<Self> {
        Some(match tag {
            0x0001_0000 => Self::TrueType,
            0x4F54_544F => Self::Cff,
            0x7472_7565 => Self::AppleTrueType,
            0x7479_7031 => Self::AppleType1,
            _ => return None,
        })
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::TrueType => 0x0001_0000,
            Self::Cff => 0x4F54_544F,
            Self::AppleTrueType => 0x7472_7565,
            Self::AppleType1 => 0x7479_7031,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FontDirectory {
    pub offset_subtable: OffsetSubtable,
    pub table_directory: TableDirectory,
}

impl FontDirectory {
    pub fn find_table_entry(&self, tag: TableTag) -> Option<&DirectoryTableEntry> {
        self.table_directory.0.get(&tag)
    }

    pub fn find_table_offset(&self, tag: TableTag) -> Option<u32> {
        self.find_table_entry(tag).map(|entry| entry.offset)
    }

    pub fn contains(&self, tag: TableTag) -> bool {
        self.table_directory.0.contains_key(&tag)
    }

    /// Entries sorted by tag
    pub fn entries(&self) -> Vec<&DirectoryTableEntry> {
        let mut entries: Vec<_> = self.table_directory.0.values().collect();
        entries.sort_by_key(|entry| entry.tag);
        entries
    }
}

/// Tag to entry mapping. When a producer writes the same tag twice, the later
/// entry wins
#[derive(Debug, Clone, Default)]
pub struct TableDirectory(pub HashMap<TableTag, DirectoryTableEntry>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryTableEntry {
    pub tag: TableTag,
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct OffsetSubtable {
    pub sfnt_version: SfntVersion,

    pub number_of_tables: u16,

    /// the largest power of two less than or equal to the number of items in
    /// the table, i.e. the largest number of items that can be easily searched
    pub search_range: u16,

    /// log2(maximum power of 2 <= numTables)
    pub entry_selector: u16,

    /// numTables * 16 - searchRange
    pub range_shift: u16,
}

/// Table directory parsing
impl SfntParser<'_> {
    fn read_offset_subtable(&mut self) -> SfntResult<OffsetSubtable> {
        let tag = self.read_u32()?;
        let Some(sfnt_version) = SfntVersion::from_u32(tag) else {
            anyhow::bail!(SfntError::UnrecognizedFormat { found: tag });
        };

        let number_of_tables = self.read_u16()?;
        let search_range = self.read_u16()?;
        let entry_selector = self.read_u16()?;
        let range_shift = self.read_u16()?;

        Ok(OffsetSubtable {
            sfnt_version,
            number_of_tables,
            search_range,
            entry_selector,
            range_shift,
        })
    }

    fn read_dir_table_entry(&mut self) -> SfntResult<DirectoryTableEntry> {
        let tag = self.read_tag()?;
        let checksum = self.read_u32()?;
        let offset = self.read_u32()?;
        let length = self.read_u32()?;

        Ok(DirectoryTableEntry {
            tag,
            checksum,
            offset,
            length,
        })
    }

    /// Reads the offset subtable and table directory starting at the cursor
    pub fn read_font_directory(&mut self) -> SfntResult<FontDirectory> {
        let offset_subtable = self.read_offset_subtable()?;
        let mut entries = HashMap::with_capacity(usize::from(offset_subtable.number_of_tables));

        for _ in 0..offset_subtable.number_of_tables {
            let entry = self.read_dir_table_entry()?;

            if entries.insert(entry.tag, entry).is_some() {
                log::warn!("duplicate table directory entry for {}", entry.tag);
            }
        }

        log::debug!(
            "read {:?} table directory with {} entries",
            offset_subtable.sfnt_version,
            entries.len()
        );

        Ok(FontDirectory {
            offset_subtable,
            table_directory: TableDirectory(entries),
        })
    }
}
