use std::fmt;

use bitvec::{order::Msb0, vec::BitVec};

use crate::{
    data_types::{FWord, Fixed, LongDateTime},
    error::{SfntError, SfntResult},
    table::{DirectoryTableEntry, TableTag},
};

/// Big-endian cursor over a font file, or over a single table inside of one.
///
/// `base` is the absolute position of `buffer[0]` in the file and is only used
/// to report absolute offsets in errors.
#[derive(Clone)]
pub struct SfntParser<'a> {
    buffer: &'a [u8],
    cursor: usize,
    base: usize,
}

impl fmt::Debug for SfntParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SfntParser")
            .field("cursor", &self.cursor)
            .field("base", &self.base)
            .field("buffer", &format!("[ {} bytes ]", self.buffer.len()))
            .finish()
    }
}

/// Base parsing
impl<'a> SfntParser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            base: 0,
        }
    }

    /// Creates a parser restricted to the bytes of a single table.
    ///
    /// Positions of the returned parser are relative to the start of the
    /// table, and reads past its declared length fail.
    pub fn for_table(source: &'a [u8], entry: &DirectoryTableEntry) -> SfntResult<Self> {
        let start = entry.offset as usize;
        let end = start.checked_add(entry.length as usize);

        match end.and_then(|end| source.get(start..end)) {
            Some(buffer) => Ok(Self {
                buffer,
                cursor: 0,
                base: start,
            }),
            None => anyhow::bail!(SfntError::OutOfRange {
                offset: start.saturating_add(entry.length as usize),
                len: source.len(),
            }),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.cursor)
    }

    /// Moves the cursor. Seeking past the end is allowed; the next read fails
    pub fn seek(&mut self, offset: usize) {
        self.cursor = offset;
    }

    pub fn seek_relative(&mut self, delta: isize) -> SfntResult<()> {
        match self.cursor.checked_add_signed(delta) {
            Some(cursor) => {
                self.cursor = cursor;
                Ok(())
            }
            None => anyhow::bail!(SfntError::OutOfRange {
                offset: (self.base + self.cursor).saturating_add_signed(delta),
                len: self.base + self.buffer.len(),
            }),
        }
    }

    pub fn skip(&mut self, n: usize) -> SfntResult<()> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn read_bytes(&mut self, n: usize) -> SfntResult<&'a [u8]> {
        if self.cursor > self.buffer.len() {
            anyhow::bail!(SfntError::OutOfRange {
                offset: self.base + self.cursor,
                len: self.base + self.buffer.len(),
            });
        }

        let end = self.cursor.saturating_add(n);

        match self.buffer.get(self.cursor..end) {
            Some(bytes) => {
                self.cursor = end;
                Ok(bytes)
            }
            None => anyhow::bail!(SfntError::TruncatedData {
                offset: self.base + self.cursor,
                needed: n,
                available: self.remaining(),
            }),
        }
    }

    /// Fails without reading when `count` records of `size` bytes do not fit
    /// in the rest of the buffer. Used before allocating for 32-bit counts
    pub fn ensure_available(&self, count: u32, size: usize) -> SfntResult<()> {
        let needed = (count as usize).saturating_mul(size);

        if needed > self.remaining() {
            anyhow::bail!(SfntError::TruncatedData {
                offset: self.base + self.cursor,
                needed,
                available: self.remaining(),
            });
        }

        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> SfntResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> SfntResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> SfntResult<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    pub fn read_i16(&mut self) -> SfntResult<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> SfntResult<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> SfntResult<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    /// 16.16 fixed-point number
    pub fn read_fixed(&mut self) -> SfntResult<Fixed> {
        Ok(Fixed(i32::from_be_bytes(self.read_array()?)))
    }

    pub fn read_fword(&mut self) -> SfntResult<FWord> {
        Ok(FWord(self.read_i16()?))
    }

    pub fn read_long_date_time(&mut self) -> SfntResult<LongDateTime> {
        Ok(LongDateTime(self.read_i64()?))
    }

    pub fn read_tag(&mut self) -> SfntResult<TableTag> {
        Ok(TableTag::new(self.read_array()?))
    }

    pub fn read_u16_array(&mut self, count: u16) -> SfntResult<Vec<u16>> {
        let mut out = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            out.push(self.read_u16()?);
        }
        Ok(out)
    }

    /// Reads `n` bytes of single-byte text. Bytes outside of ASCII become
    /// U+FFFD
    pub fn read_ascii(&mut self, n: usize) -> SfntResult<String> {
        Ok(self
            .read_bytes(n)?
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '\u{FFFD}' })
            .collect())
    }

    /// Reads `n` bytes of UTF-16BE text, dropping the NUL padding of fixed
    /// width name slots
    pub fn read_utf16_be(&mut self, n: usize) -> SfntResult<String> {
        let bytes = self.read_bytes(n)?;
        let units = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));

        Ok(char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .filter(|&c| c != '\0')
            .collect())
    }

    /// Reads `n` bytes of flags, most significant bit of each byte first
    pub fn read_bits(&mut self, n: usize) -> SfntResult<BitVec<u8, Msb0>> {
        Ok(BitVec::from_slice(self.read_bytes(n)?))
    }
}
