use crate::{error::SfntResult, parse::SfntParser};

/// Horizontal header table, information for horizontal layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HheaTable {
    pub major_version: u16,
    pub minor_version: u16,

    /// Typographic ascent
    pub ascender: i16,

    /// Typographic descent
    pub descender: i16,

    /// Typographic line gap
    pub line_gap: i16,

    /// Maximum advance width value in 'hmtx' table
    pub advance_width_max: u16,

    /// Minimum left sidebearing value in 'hmtx' table for glyphs with contours
    pub min_left_side_bearing: i16,

    /// min(aw - (lsb + xMax - xMin)) for glyphs with contours
    pub min_right_side_bearing: i16,

    /// max(lsb + (xMax - xMin))
    pub x_max_extent: i16,

    /// Slope of the cursor is rise/run; 1 for vertical
    pub caret_slope_rise: i16,

    /// 0 for vertical
    pub caret_slope_run: i16,
    pub caret_offset: i16,

    /// 0 for current format
    pub metric_data_format: i16,

    /// Number of paired records at the start of 'hmtx'
    pub number_of_h_metrics: u16,
}

impl SfntParser<'_> {
    pub fn read_hhea_table(&mut self) -> SfntResult<HheaTable> {
        let major_version = self.read_u16()?;
        let minor_version = self.read_u16()?;
        let ascender = self.read_i16()?;
        let descender = self.read_i16()?;
        let line_gap = self.read_i16()?;
        let advance_width_max = self.read_u16()?;
        let min_left_side_bearing = self.read_i16()?;
        let min_right_side_bearing = self.read_i16()?;
        let x_max_extent = self.read_i16()?;
        let caret_slope_rise = self.read_i16()?;
        let caret_slope_run = self.read_i16()?;
        let caret_offset = self.read_i16()?;

        // 4 reserved int16
        self.skip(8)?;

        let metric_data_format = self.read_i16()?;
        let number_of_h_metrics = self.read_u16()?;

        Ok(HheaTable {
            major_version,
            minor_version,
            ascender,
            descender,
            line_gap,
            advance_width_max,
            min_left_side_bearing,
            min_right_side_bearing,
            x_max_extent,
            caret_slope_rise,
            caret_slope_run,
            caret_offset,
            metric_data_format,
            number_of_h_metrics,
        })
    }
}
