use crate::{
    error::{SfntError, SfntResult},
    parse::SfntParser,
};

use super::TableTag;

/// Header of a font collection (`.ttc`/`.otc`) file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionHeader {
    /// Always 'ttcf'
    pub tag: TableTag,
    pub major_version: u16,
    pub minor_version: u16,
    pub num_fonts: u32,

    /// Offsets from the beginning of the file to the table directory of each
    /// font
    pub table_directory_offsets: Vec<u32>,

    /// Only present in version 2 headers, and only meaningful when the tag is
    /// 'DSIG'
    pub dsig: Option<DsigRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsigRecord {
    pub tag: TableTag,
    pub length: u32,
    pub offset: u32,
}

impl SfntParser<'_> {
    pub fn read_collection_header(&mut self) -> SfntResult<CollectionHeader> {
        let tag = self.read_tag()?;

        if tag != TableTag::TTCF {
            anyhow::bail!(SfntError::UnrecognizedFormat {
                found: tag.to_u32()
            });
        }

        let major_version = self.read_u16()?;
        let minor_version = self.read_u16()?;
        let num_fonts = self.read_u32()?;

        self.ensure_available(num_fonts, 4)?;

        let mut table_directory_offsets = Vec::with_capacity(num_fonts as usize);
        for _ in 0..num_fonts {
            table_directory_offsets.push(self.read_u32()?);
        }

        let dsig = if major_version >= 2 {
            Some(DsigRecord {
                tag: self.read_tag()?,
                length: self.read_u32()?,
                offset: self.read_u32()?,
            })
        } else {
            None
        };

        log::debug!(
            "read collection header v{}.{} with {} fonts",
            major_version,
            minor_version,
            num_fonts
        );

        Ok(CollectionHeader {
            tag,
            major_version,
            minor_version,
            num_fonts,
            table_directory_offsets,
            dsig,
        })
    }
}
