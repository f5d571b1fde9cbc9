use crate::{
    data_types::{FWord, Fixed, LongDateTime},
    error::SfntResult,
    parse::SfntParser,
};

/// Font header table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Head {
    pub major_version: u16,
    pub minor_version: u16,

    /// Set by font manufacturer
    pub font_revision: Fixed,
    pub check_sum_adjustment: u32,

    /// Should be 0x5F0F3CF5
    pub magic_number: u32,
    pub flags: HeadFlags,

    /// 16 to 16384
    pub units_per_em: u16,
    pub created: LongDateTime,
    pub modified: LongDateTime,
    pub x_min: FWord,
    pub y_min: FWord,
    pub x_max: FWord,
    pub y_max: FWord,
    pub mac_style: MacStyle,

    /// Smallest readable size in pixels
    pub lowest_rec_ppem: u16,

    pub font_direction_hint: i16,

    /// 0 for short offsets, 1 for long
    pub index_to_loc_format: i16,
    pub glyph_data_format: i16,
}

impl Head {
    pub const MAGIC_NUMBER: u32 = 0x5F0F_3CF5;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadFlags(pub u16);

impl HeadFlags {
    pub const BASELINE_AT_Y_ZERO: u16 = 1 << 0;
    pub const LSB_AT_X_ZERO: u16 = 1 << 1;
    pub const INSTRUCTIONS_DEPEND_ON_POINT_SIZE: u16 = 1 << 2;
    pub const FORCE_INTEGER_PPEM: u16 = 1 << 3;
    pub const LOSSLESS: u16 = 1 << 11;
    pub const CONVERTED: u16 = 1 << 12;
    pub const CLEARTYPE_OPTIMIZED: u16 = 1 << 13;
    pub const LAST_RESORT: u16 = 1 << 14;

    pub fn contains(self, flag: u16) -> bool {
        self.0 & flag != 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacStyle(pub u16);

impl MacStyle {
    pub fn is_bold(self) -> bool {
        self.0 & 1 != 0
    }

    pub fn is_italic(self) -> bool {
        self.0 & (1 << 1) != 0
    }
}

impl SfntParser<'_> {
    pub fn read_head_table(&mut self) -> SfntResult<Head> {
        let major_version = self.read_u16()?;
        let minor_version = self.read_u16()?;
        let font_revision = self.read_fixed()?;
        let check_sum_adjustment = self.read_u32()?;
        let magic_number = self.read_u32()?;

        if magic_number != Head::MAGIC_NUMBER {
            log::warn!("unexpected head magic number 0x{:08X}", magic_number);
        }

        let flags = HeadFlags(self.read_u16()?);
        let units_per_em = self.read_u16()?;
        let created = self.read_long_date_time()?;
        let modified = self.read_long_date_time()?;
        let x_min = self.read_fword()?;
        let y_min = self.read_fword()?;
        let x_max = self.read_fword()?;
        let y_max = self.read_fword()?;
        let mac_style = MacStyle(self.read_u16()?);
        let lowest_rec_ppem = self.read_u16()?;
        let font_direction_hint = self.read_i16()?;
        let index_to_loc_format = self.read_i16()?;
        let glyph_data_format = self.read_i16()?;

        Ok(Head {
            major_version,
            minor_version,
            font_revision,
            check_sum_adjustment,
            magic_number,
            flags,
            units_per_em,
            created,
            modified,
            x_min,
            y_min,
            x_max,
            y_max,
            mac_style,
            lowest_rec_ppem,
            font_direction_hint,
            index_to_loc_format,
            glyph_data_format,
        })
    }
}
