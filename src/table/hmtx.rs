use crate::{data_types::GlyphId, error::SfntResult, parse::SfntParser};

/// Horizontal layout metrics for a glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongHorMetric {
    /// Advance width, in font design units
    pub advance_width: u16,

    /// Glyph left side bearing, in font design units
    pub lsb: i16,
}

/// Horizontal metrics table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HmtxTable {
    /// Paired advance width and left side bearing values, indexed by glyph id
    pub h_metrics: Vec<LongHorMetric>,

    /// Left side bearings for glyphs past the end of `h_metrics`. These glyphs
    /// share the advance width of the last entry in `h_metrics`
    pub left_side_bearings: Vec<i16>,
}

impl HmtxTable {
    pub fn advance_width(&self, glyph: GlyphId) -> Option<u16> {
        let index = glyph.to_u32() as usize;

        if index >= self.h_metrics.len() + self.left_side_bearings.len() {
            return None;
        }

        self.h_metrics
            .get(index)
            .or_else(|| self.h_metrics.last())
            .map(|metric| metric.advance_width)
    }

    pub fn left_side_bearing(&self, glyph: GlyphId) -> Option<i16> {
        let index = glyph.to_u32() as usize;

        match self.h_metrics.get(index) {
            Some(metric) => Some(metric.lsb),
            None => self
                .left_side_bearings
                .get(index - self.h_metrics.len())
                .copied(),
        }
    }
}

impl SfntParser<'_> {
    /// `metrics_count` comes from 'hhea' and `glyph_count` from 'maxp'
    pub fn read_hmtx_table(
        &mut self,
        metrics_count: u16,
        glyph_count: u16,
    ) -> SfntResult<HmtxTable> {
        let mut h_metrics = Vec::with_capacity(usize::from(metrics_count));
        for _ in 0..metrics_count {
            h_metrics.push(LongHorMetric {
                advance_width: self.read_u16()?,
                lsb: self.read_i16()?,
            });
        }

        let bearing_count = glyph_count.saturating_sub(metrics_count);
        let mut left_side_bearings = Vec::with_capacity(usize::from(bearing_count));
        for _ in 0..bearing_count {
            left_side_bearings.push(self.read_i16()?);
        }

        Ok(HmtxTable {
            h_metrics,
            left_side_bearings,
        })
    }
}
