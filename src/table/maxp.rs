use crate::{data_types::Fixed, error::SfntResult, parse::SfntParser};

/// Maximum profile table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaxpTable {
    /// Version 0.5, used by fonts with CFF outlines
    PostScript(MaxpPostscriptTable),

    /// Version 1.0, used by fonts with TrueType outlines
    TrueType(MaxpTrueTypeTable),
}

impl MaxpTable {
    pub fn version(&self) -> Fixed {
        match self {
            Self::PostScript(table) => table.version,
            Self::TrueType(table) => table.version,
        }
    }

    pub fn num_glyphs(&self) -> u16 {
        match self {
            Self::PostScript(table) => table.num_glyphs,
            Self::TrueType(table) => table.num_glyphs,
        }
    }
}

/// Stands in for a missing table: no glyphs and no capacity fields
impl Default for MaxpTable {
    fn default() -> Self {
        Self::PostScript(MaxpPostscriptTable {
            version: Fixed(0),
            num_glyphs: 0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxpTrueTypeTable {
    /// 0x00010000 (1.0)
    pub version: Fixed,
    /// the number of glyphs in the font
    pub num_glyphs: u16,
    /// points in non-compound glyph
    pub max_points: u16,
    /// contours in non-compound glyph
    pub max_contours: u16,
    /// points in compound glyph
    pub max_component_points: u16,
    /// contours in compound glyph
    pub max_component_contours: u16,
    /// set to 2
    pub max_zones: u16,
    /// points used in Twilight Zone (Z0)
    pub max_twilight_points: u16,
    /// number of Storage Area locations
    pub max_storage: u16,
    /// number of FDEFs
    pub max_function_defs: u16,
    /// number of IDEFs
    pub max_instruction_defs: u16,
    /// maximum stack depth
    pub max_stack_elements: u16,
    /// byte count for glyph instructions
    pub max_size_of_instructions: u16,
    /// number of glyphs referenced at top level
    pub max_component_elements: u16,
    /// levels of recursion, set to 0 if font has only simple glyphs
    pub max_component_depth: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxpPostscriptTable {
    /// 0x00005000 (0.5)
    pub version: Fixed,
    /// the number of glyphs in the font
    pub num_glyphs: u16,
}

impl SfntParser<'_> {
    pub fn read_maxp_table(&mut self) -> SfntResult<MaxpTable> {
        let version = self.read_fixed()?;
        let num_glyphs = self.read_u16()?;

        if version == Fixed::VERSION_0_5 {
            return Ok(MaxpTable::PostScript(MaxpPostscriptTable {
                version,
                num_glyphs,
            }));
        }

        if version != Fixed::VERSION_1_0 {
            log::warn!(
                "unknown maxp version {}.{}, reading as 1.0",
                version.major(),
                version.minor()
            );
        }

        Ok(MaxpTable::TrueType(MaxpTrueTypeTable {
            version,
            num_glyphs,
            max_points: self.read_u16()?,
            max_contours: self.read_u16()?,
            max_component_points: self.read_u16()?,
            max_component_contours: self.read_u16()?,
            max_zones: self.read_u16()?,
            max_twilight_points: self.read_u16()?,
            max_storage: self.read_u16()?,
            max_function_defs: self.read_u16()?,
            max_instruction_defs: self.read_u16()?,
            max_stack_elements: self.read_u16()?,
            max_size_of_instructions: self.read_u16()?,
            max_component_elements: self.read_u16()?,
            max_component_depth: self.read_u16()?,
        }))
    }
}
