use crate::{data_types::Fixed, error::SfntResult, parse::SfntParser};

/// Vertical header table, information for vertical layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VheaTable {
    /// 1.0 or 1.1
    pub version: Fixed,

    /// Distance from the vertical center baseline to the right edge of the
    /// ideographic em box. Named vertTypoAscender in version 1.1
    pub ascender: i16,

    /// Distance from the vertical center baseline to the left edge of the
    /// ideographic em box. Named vertTypoDescender in version 1.1
    pub descender: i16,

    /// Named vertTypoLineGap in version 1.1
    pub line_gap: i16,

    pub advance_height_max: u16,
    pub min_top_side_bearing: i16,
    pub min_bottom_side_bearing: i16,

    /// max(tsb + (yMax - yMin))
    pub y_max_extent: i16,
    pub caret_slope_rise: i16,
    pub caret_slope_run: i16,
    pub caret_offset: i16,

    /// 0 for current format
    pub metric_data_format: i16,

    /// Number of paired records at the start of 'vmtx'
    pub number_of_v_metrics: u16,
}

impl SfntParser<'_> {
    pub fn read_vhea_table(&mut self) -> SfntResult<VheaTable> {
        let version = self.read_fixed()?;
        let ascender = self.read_i16()?;
        let descender = self.read_i16()?;
        let line_gap = self.read_i16()?;
        let advance_height_max = self.read_u16()?;
        let min_top_side_bearing = self.read_i16()?;
        let min_bottom_side_bearing = self.read_i16()?;
        let y_max_extent = self.read_i16()?;
        let caret_slope_rise = self.read_i16()?;
        let caret_slope_run = self.read_i16()?;
        let caret_offset = self.read_i16()?;

        // 4 reserved int16
        self.skip(8)?;

        let metric_data_format = self.read_i16()?;
        let number_of_v_metrics = self.read_u16()?;

        Ok(VheaTable {
            version,
            ascender,
            descender,
            line_gap,
            advance_height_max,
            min_top_side_bearing,
            min_bottom_side_bearing,
            y_max_extent,
            caret_slope_rise,
            caret_slope_run,
            caret_offset,
            metric_data_format,
            number_of_v_metrics,
        })
    }
}
