use std::collections::HashMap;

use bitvec::{field::BitField, order::Msb0, vec::BitVec};

use crate::{error::SfntResult, parse::SfntParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Whether subtable values adjust the distance between glyphs or give the
/// minimum distance allowed between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Values {
    Kerning,
    Minimum,
}

/// An ordered glyph pair. `(a, b)` and `(b, a)` are different pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KerningPair {
    pub left: u16,
    pub right: u16,
}

impl KerningPair {
    pub const fn new(left: u16, right: u16) -> Self {
        Self { left, right }
    }
}

/// Kerning table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KernTable {
    /// 0 for the OpenType layout, 0x00010000 for the Apple layout
    pub version: u32,
    pub subtables: Vec<KernSubtable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernSubtable {
    /// Length of the subtable in bytes, including its header
    pub length: u32,
    pub format: u8,

    /// The raw coverage word, most significant bit first
    pub coverage: BitVec<u8, Msb0>,
    pub direction: Direction,
    pub values: Values,
    pub is_cross_stream: bool,
    pub is_override: bool,

    /// Apple subtables whose values are adjusted by font variations
    pub is_variation: bool,
    pub data: KernSubtableData,
}

impl KernSubtable {
    pub fn format0(&self) -> Option<&KernFormat0> {
        match &self.data {
            KernSubtableData::Format0(format0) => Some(format0),
            KernSubtableData::Other(..) => None,
        }
    }

    pub fn kerning(&self, pair: KerningPair) -> Option<i16> {
        self.format0()?.pairs.get(&pair).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernSubtableData {
    /// Ordered list of kerning pairs
    Format0(KernFormat0),

    /// Body of any other format, after the subtable header
    Other(Vec<u8>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KernFormat0 {
    pub search_range: u16,
    pub entry_selector: u16,
    pub range_shift: u16,
    pub pairs: HashMap<KerningPair, i16>,
}

impl SfntParser<'_> {
    pub fn read_kern_table(&mut self) -> SfntResult<KernTable> {
        let start = self.position();

        match self.read_u16()? {
            0 => self.read_ot_kern_table(),
            1 => {
                self.seek(start);
                self.read_apple_kern_table()
            }
            version => {
                log::warn!("ignoring kern table with unknown version {}", version);
                Ok(KernTable::default())
            }
        }
    }

    fn read_ot_kern_table(&mut self) -> SfntResult<KernTable> {
        let n_tables = self.read_u16()?;
        let mut subtables = Vec::with_capacity(usize::from(n_tables));

        for _ in 0..n_tables {
            let _version = self.read_u16()?;
            let length = self.read_u16()?;
            let coverage = self.read_bits(2)?;

            let format = coverage[..8].load_be::<u8>();
            let direction = if coverage[15] {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let values = if coverage[14] {
                Values::Minimum
            } else {
                Values::Kerning
            };
            let is_cross_stream = coverage[13];
            let is_override = coverage[12];

            let data = self.read_kern_subtable_data(format, usize::from(length), 6)?;

            subtables.push(KernSubtable {
                length: u32::from(length),
                format,
                coverage,
                direction,
                values,
                is_cross_stream,
                is_override,
                is_variation: false,
                data,
            });
        }

        log::debug!("read kern table with {} subtables", subtables.len());

        Ok(KernTable {
            version: 0,
            subtables,
        })
    }

    fn read_apple_kern_table(&mut self) -> SfntResult<KernTable> {
        let version = self.read_u32()?;
        let n_tables = self.read_u32()?;

        // the smallest subtable is its 8 byte header
        self.ensure_available(n_tables, 8)?;
        let mut subtables = Vec::with_capacity(n_tables as usize);

        for _ in 0..n_tables {
            let length = self.read_u32()?;
            let coverage = self.read_bits(2)?;
            let _tuple_index = self.read_u16()?;

            let format = coverage[8..].load_be::<u8>();
            let direction = if coverage[0] {
                Direction::Vertical
            } else {
                Direction::Horizontal
            };
            let is_cross_stream = coverage[1];
            let is_variation = coverage[2];

            let data = self.read_kern_subtable_data(format, length as usize, 8)?;

            subtables.push(KernSubtable {
                length,
                format,
                coverage,
                direction,
                values: Values::Kerning,
                is_cross_stream,
                is_override: false,
                is_variation,
                data,
            });
        }

        log::debug!("read Apple kern table with {} subtables", subtables.len());

        Ok(KernTable { version, subtables })
    }

    fn read_kern_subtable_data(
        &mut self,
        format: u8,
        length: usize,
        header_size: usize,
    ) -> SfntResult<KernSubtableData> {
        if format == 0 {
            let body_start = self.position();
            let format0 = self.read_kern_format0()?;
            let consumed = header_size + (self.position() - body_start);

            // the 16 bit length of large format 0 subtables wraps, in which
            // case the pair count decides where the subtable ends
            if length >= consumed {
                self.seek(body_start + (length - header_size));
            } else {
                log::trace!(
                    "kern subtable length {} shorter than its {} bytes of pairs",
                    length,
                    consumed
                );
            }

            return Ok(KernSubtableData::Format0(format0));
        }

        log::trace!("skipping kern subtable format {}", format);

        let body = self.read_bytes(length.saturating_sub(header_size))?;
        Ok(KernSubtableData::Other(body.to_vec()))
    }

    fn read_kern_format0(&mut self) -> SfntResult<KernFormat0> {
        let n_pairs = self.read_u16()?;
        let search_range = self.read_u16()?;
        let entry_selector = self.read_u16()?;
        let range_shift = self.read_u16()?;

        let mut pairs = HashMap::with_capacity(usize::from(n_pairs));
        for _ in 0..n_pairs {
            let left = self.read_u16()?;
            let right = self.read_u16()?;
            let value = self.read_i16()?;

            pairs.insert(KerningPair::new(left, right), value);
        }

        Ok(KernFormat0 {
            search_range,
            entry_selector,
            range_shift,
            pairs,
        })
    }
}
