use crate::{error::SfntResult, parse::SfntParser};

/// OS/2 and Windows metrics table.
///
/// Every version extends the previous one with a block of fields. Blocks a
/// table does not carry are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Os2Table {
    pub version: u16,
    pub x_avg_char_width: i16,
    pub us_weight_class: u16,
    pub us_width_class: u16,

    /// Embedding licensing rights
    pub fs_type: u16,
    pub y_subscript_x_size: i16,
    pub y_subscript_y_size: i16,
    pub y_subscript_x_offset: i16,
    pub y_subscript_y_offset: i16,
    pub y_superscript_x_size: i16,
    pub y_superscript_y_size: i16,
    pub y_superscript_x_offset: i16,
    pub y_superscript_y_offset: i16,
    pub y_strikeout_size: i16,
    pub y_strikeout_position: i16,
    pub s_family_class: i16,
    pub panose: [u8; 10],
    pub ul_unicode_range: [u32; 4],
    pub ach_vend_id: String,
    pub fs_selection: u16,
    pub us_first_char_index: u16,
    pub us_last_char_index: u16,

    /// Version 0 tables written against the Apple specification stop before
    /// this block
    pub line_metrics: Option<Os2LineMetrics>,

    /// Version 1 and up
    pub ul_code_page_range: Option<[u32; 2]>,

    /// Version 2 and up
    pub glyph_metrics: Option<Os2GlyphMetrics>,

    /// Version 5 and up
    pub optical_size: Option<Os2OpticalSize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Os2LineMetrics {
    pub s_typo_ascender: i16,
    pub s_typo_descender: i16,
    pub s_typo_line_gap: i16,
    pub us_win_ascent: u16,
    pub us_win_descent: u16,
}

impl Os2LineMetrics {
    const SIZE: usize = 10;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Os2GlyphMetrics {
    pub sx_height: i16,
    pub s_cap_height: i16,
    pub us_default_char: u16,
    pub us_break_char: u16,
    pub us_max_context: u16,
}

/// Design size range, in twentieths of a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Os2OpticalSize {
    pub us_lower_optical_point_size: u16,
    pub us_upper_optical_point_size: u16,
}

impl SfntParser<'_> {
    /// Reads the table from a parser windowed to the table's declared length,
    /// which decides whether a version 0 table carries line metrics
    pub fn read_os2_table(&mut self) -> SfntResult<Os2Table> {
        let version = self.read_u16()?;
        let x_avg_char_width = self.read_i16()?;
        let us_weight_class = self.read_u16()?;
        let us_width_class = self.read_u16()?;
        let fs_type = self.read_u16()?;
        let y_subscript_x_size = self.read_i16()?;
        let y_subscript_y_size = self.read_i16()?;
        let y_subscript_x_offset = self.read_i16()?;
        let y_subscript_y_offset = self.read_i16()?;
        let y_superscript_x_size = self.read_i16()?;
        let y_superscript_y_size = self.read_i16()?;
        let y_superscript_x_offset = self.read_i16()?;
        let y_superscript_y_offset = self.read_i16()?;
        let y_strikeout_size = self.read_i16()?;
        let y_strikeout_position = self.read_i16()?;
        let s_family_class = self.read_i16()?;

        let mut panose = [0; 10];
        panose.copy_from_slice(self.read_bytes(10)?);

        let ul_unicode_range = [
            self.read_u32()?,
            self.read_u32()?,
            self.read_u32()?,
            self.read_u32()?,
        ];
        let ach_vend_id = self.read_ascii(4)?;
        let fs_selection = self.read_u16()?;
        let us_first_char_index = self.read_u16()?;
        let us_last_char_index = self.read_u16()?;

        let mut table = Os2Table {
            version,
            x_avg_char_width,
            us_weight_class,
            us_width_class,
            fs_type,
            y_subscript_x_size,
            y_subscript_y_size,
            y_subscript_x_offset,
            y_subscript_y_offset,
            y_superscript_x_size,
            y_superscript_y_size,
            y_superscript_x_offset,
            y_superscript_y_offset,
            y_strikeout_size,
            y_strikeout_position,
            s_family_class,
            panose,
            ul_unicode_range,
            ach_vend_id,
            fs_selection,
            us_first_char_index,
            us_last_char_index,
            line_metrics: None,
            ul_code_page_range: None,
            glyph_metrics: None,
            optical_size: None,
        };

        if version == 0 {
            match self.remaining() {
                0 => return Ok(table),
                n if n < Os2LineMetrics::SIZE => {
                    log::warn!("ignoring {} trailing bytes in version 0 OS/2 table", n);
                    return Ok(table);
                }
                _ => {}
            }
        }

        table.line_metrics = Some(Os2LineMetrics {
            s_typo_ascender: self.read_i16()?,
            s_typo_descender: self.read_i16()?,
            s_typo_line_gap: self.read_i16()?,
            us_win_ascent: self.read_u16()?,
            us_win_descent: self.read_u16()?,
        });

        if version == 0 {
            return Ok(table);
        }

        table.ul_code_page_range = Some([self.read_u32()?, self.read_u32()?]);

        if version == 1 {
            return Ok(table);
        }

        table.glyph_metrics = Some(Os2GlyphMetrics {
            sx_height: self.read_i16()?,
            s_cap_height: self.read_i16()?,
            us_default_char: self.read_u16()?,
            us_break_char: self.read_u16()?,
            us_max_context: self.read_u16()?,
        });

        if version < 5 {
            return Ok(table);
        }

        table.optical_size = Some(Os2OpticalSize {
            us_lower_optical_point_size: self.read_u16()?,
            us_upper_optical_point_size: self.read_u16()?,
        });

        Ok(table)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        error::SfntError,
        test_util::{be16, os2_table},
    };

    #[test]
    fn strict_version_zero() {
        let bytes = os2_table(0, 68);

        let os2 = SfntParser::new(&bytes).read_os2_table().unwrap();

        assert_eq!(os2.version, 0);
        assert_eq!(os2.us_weight_class, 400);
        assert_eq!(os2.panose, [2, 11, 6, 4, 2, 2, 2, 2, 2, 4]);
        assert_eq!(os2.ach_vend_id, "TEST");
        assert_eq!(os2.us_last_char_index, 0xFFFF);
        assert_eq!(os2.line_metrics, None);
        assert_eq!(os2.ul_code_page_range, None);
    }

    #[test]
    fn version_zero_with_line_metrics() {
        let bytes = os2_table(0, 78);

        let os2 = SfntParser::new(&bytes).read_os2_table().unwrap();

        let metrics = os2.line_metrics.unwrap();
        assert_eq!(metrics.s_typo_ascender, 750);
        assert_eq!(metrics.us_win_descent, 250);
        assert_eq!(os2.ul_code_page_range, None);
    }

    #[test]
    fn version_zero_partial_block_is_ignored() {
        let mut bytes = os2_table(0, 68);
        bytes.extend(be16(750));

        let os2 = SfntParser::new(&bytes).read_os2_table().unwrap();

        assert_eq!(os2.line_metrics, None);
    }

    #[test]
    fn version_one() {
        let bytes = os2_table(1, 86);

        let os2 = SfntParser::new(&bytes).read_os2_table().unwrap();

        assert!(os2.line_metrics.is_some());
        assert_eq!(os2.ul_code_page_range, Some([1, 0]));
        assert_eq!(os2.glyph_metrics, None);
    }

    #[test]
    fn version_four() {
        let bytes = os2_table(4, 96);

        let os2 = SfntParser::new(&bytes).read_os2_table().unwrap();

        let glyph_metrics = os2.glyph_metrics.unwrap();
        assert_eq!(glyph_metrics.sx_height, 500);
        assert_eq!(glyph_metrics.s_cap_height, 700);
        assert_eq!(glyph_metrics.us_break_char, 32);
        assert_eq!(os2.optical_size, None);
    }

    #[test]
    fn version_five() {
        let bytes = os2_table(5, 100);

        let os2 = SfntParser::new(&bytes).read_os2_table().unwrap();

        assert_eq!(
            os2.optical_size,
            Some(Os2OpticalSize {
                us_lower_optical_point_size: 0,
                us_upper_optical_point_size: 0xFFFE,
            })
        );
    }

    #[test]
    fn version_two_shorter_than_its_fields() {
        let bytes = os2_table(2, 86);

        let err = SfntParser::new(&bytes).read_os2_table().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SfntError>(),
            Some(SfntError::TruncatedData { .. })
        ));
    }
}
