use crate::{data_types::GlyphId, error::SfntResult, parse::SfntParser};

/// Vertical layout metrics for a glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongVerMetric {
    pub advance_height: u16,
    pub top_side_bearing: i16,
}

/// Vertical metrics table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VmtxTable {
    pub v_metrics: Vec<LongVerMetric>,

    /// Top side bearings for glyphs past the end of `v_metrics`, which reuse
    /// the advance height of its last entry
    pub top_side_bearings: Vec<i16>,
}

impl VmtxTable {
    pub fn advance_height(&self, glyph: GlyphId) -> Option<u16> {
        let index = glyph.to_u32() as usize;

        if index >= self.v_metrics.len() + self.top_side_bearings.len() {
            return None;
        }

        self.v_metrics
            .get(index)
            .or_else(|| self.v_metrics.last())
            .map(|metric| metric.advance_height)
    }

    pub fn top_side_bearing(&self, glyph: GlyphId) -> Option<i16> {
        let index = glyph.to_u32() as usize;

        match self.v_metrics.get(index) {
            Some(metric) => Some(metric.top_side_bearing),
            None => self
                .top_side_bearings
                .get(index - self.v_metrics.len())
                .copied(),
        }
    }
}

impl SfntParser<'_> {
    /// `metrics_count` comes from 'vhea' and `glyph_count` from 'maxp'
    pub fn read_vmtx_table(
        &mut self,
        metrics_count: u16,
        glyph_count: u16,
    ) -> SfntResult<VmtxTable> {
        let mut v_metrics = Vec::with_capacity(usize::from(metrics_count));
        for _ in 0..metrics_count {
            v_metrics.push(LongVerMetric {
                advance_height: self.read_u16()?,
                top_side_bearing: self.read_i16()?,
            });
        }

        let bearing_count = glyph_count.saturating_sub(metrics_count);
        let mut top_side_bearings = Vec::with_capacity(usize::from(bearing_count));
        for _ in 0..bearing_count {
            top_side_bearings.push(self.read_i16()?);
        }

        Ok(VmtxTable {
            v_metrics,
            top_side_bearings,
        })
    }
}
