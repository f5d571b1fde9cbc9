use std::fmt;

use crate::{error::SfntResult, parse::SfntParser, platform::Platform};

/// Semantic role of a name record
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameId(pub u16);

impl NameId {
    pub const COPYRIGHT_NOTICE: Self = Self(0);
    pub const FAMILY_NAME: Self = Self(1);
    pub const SUBFAMILY_NAME: Self = Self(2);
    pub const UNIQUE_ID: Self = Self(3);
    pub const FULL_NAME: Self = Self(4);
    pub const VERSION_STRING: Self = Self(5);
    pub const POSTSCRIPT_NAME: Self = Self(6);
    pub const TRADEMARK: Self = Self(7);
    pub const MANUFACTURER: Self = Self(8);
    pub const DESIGNER: Self = Self(9);
    pub const DESCRIPTION: Self = Self(10);
    pub const VENDOR_URL: Self = Self(11);
    pub const DESIGNER_URL: Self = Self(12);
    pub const LICENSE_DESCRIPTION: Self = Self(13);
    pub const LICENSE_URL: Self = Self(14);
    pub const TYPOGRAPHIC_FAMILY_NAME: Self = Self(16);
    pub const TYPOGRAPHIC_SUBFAMILY_NAME: Self = Self(17);
    pub const COMPATIBLE_FULL_NAME: Self = Self(18);
    pub const SAMPLE_TEXT: Self = Self(19);
    pub const POSTSCRIPT_CID_NAME: Self = Self(20);
    pub const WWS_FAMILY_NAME: Self = Self(21);
    pub const WWS_SUBFAMILY_NAME: Self = Self(22);
    pub const LIGHT_BACKGROUND_PALETTE: Self = Self(23);
    pub const DARK_BACKGROUND_PALETTE: Self = Self(24);
    pub const VARIATIONS_POSTSCRIPT_NAME_PREFIX: Self = Self(25);
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameId({})", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    /// 0 or 1
    pub format: u16,

    /// Offset from the start of the table to the string storage
    pub string_offset: u16,
    pub name_records: Vec<NameRecord>,

    /// Only present in format 1. Language ids `0x8000 + i` refer to entry `i`
    pub lang_tags: Vec<String>,
}

impl NameTable {
    /// The language tag a format 1 language id refers to
    pub fn lang_tag(&self, language_id: u16) -> Option<&str> {
        let index = language_id.checked_sub(0x8000)?;
        self.lang_tags.get(usize::from(index)).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    /// Platform identifier code.
    pub platform_id: u16,
    /// Platform-specific encoding identifier.
    pub platform_specific_id: u16,
    /// Language identifier.
    pub language_id: u16,
    /// Name identifier.
    pub name_id: NameId,
    /// Decoded string
    pub text: String,
}

impl NameRecord {
    pub fn platform(&self) -> Option<Platform> {
        Platform::from_u16(self.platform_id)
    }
}

struct RawStringRef {
    length: u16,
    offset: u16,
}

impl SfntParser<'_> {
    pub fn read_name_table(&mut self) -> SfntResult<NameTable> {
        let format = self.read_u16()?;
        let count = self.read_u16()?;
        let string_offset = self.read_u16()?;

        let mut raw_records = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            let platform_id = self.read_u16()?;
            let platform_specific_id = self.read_u16()?;
            let language_id = self.read_u16()?;
            let name_id = NameId(self.read_u16()?);
            let string = RawStringRef {
                length: self.read_u16()?,
                offset: self.read_u16()?,
            };

            raw_records.push((platform_id, platform_specific_id, language_id, name_id, string));
        }

        let mut raw_lang_tags = Vec::new();
        if format == 1 {
            let lang_tag_count = self.read_u16()?;
            for _ in 0..lang_tag_count {
                raw_lang_tags.push(RawStringRef {
                    length: self.read_u16()?,
                    offset: self.read_u16()?,
                });
            }
        }

        let mut name_records = Vec::with_capacity(raw_records.len());
        for (platform_id, platform_specific_id, language_id, name_id, string) in raw_records {
            let text = self.read_name_string(string_offset, &string, platform_id)?;

            name_records.push(NameRecord {
                platform_id,
                platform_specific_id,
                language_id,
                name_id,
                text,
            });
        }

        let mut lang_tags = Vec::with_capacity(raw_lang_tags.len());
        for string in raw_lang_tags {
            // language tags are always UTF-16BE
            lang_tags.push(self.read_name_string(
                string_offset,
                &string,
                Platform::Unicode.to_u16(),
            )?);
        }

        log::debug!(
            "read name table format {} with {} records",
            format,
            name_records.len()
        );

        Ok(NameTable {
            format,
            string_offset,
            name_records,
            lang_tags,
        })
    }

    fn read_name_string(
        &mut self,
        storage_offset: u16,
        string: &RawStringRef,
        platform_id: u16,
    ) -> SfntResult<String> {
        self.seek(usize::from(storage_offset) + usize::from(string.offset));
        let length = usize::from(string.length);

        match Platform::from_u16(platform_id) {
            Some(Platform::Unicode | Platform::Windows) => self.read_utf16_be(length),
            _ => self.read_ascii(length),
        }
    }
}
