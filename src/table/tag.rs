use std::fmt::{self, Write};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableTag([u8; 4]);

impl TableTag {
    pub const CMAP: Self = Self::new(*b"cmap");
    pub const HEAD: Self = Self::new(*b"head");
    pub const HHEA: Self = Self::new(*b"hhea");
    pub const HMTX: Self = Self::new(*b"hmtx");
    pub const KERN: Self = Self::new(*b"kern");
    pub const MAXP: Self = Self::new(*b"maxp");
    pub const NAME: Self = Self::new(*b"name");
    pub const OS2: Self = Self::new(*b"OS/2");
    pub const VHEA: Self = Self::new(*b"vhea");
    pub const VMTX: Self = Self::new(*b"vmtx");

    /// Digital signature table, referenced from version 2 collection headers
    pub const DSIG: Self = Self::new(*b"DSIG");

    /// Collection header tag
    pub const TTCF: Self = Self::new(*b"ttcf");

    pub const fn new(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    pub const fn from_u32(tag: u32) -> Self {
        Self(tag.to_be_bytes())
    }

    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for TableTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '?'
            })?;
        }

        Ok(())
    }
}

impl fmt::Debug for TableTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        fmt::Display::fmt(self, f)?;
        f.write_char('"')?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::TableTag;

    #[test]
    fn tag_round_trips_through_u32() {
        assert_eq!(TableTag::from_u32(0x6B65_726E), TableTag::KERN);
        assert_eq!(TableTag::OS2.to_u32(), 0x4F53_2F32);
    }

    #[test]
    fn display_keeps_trailing_space() {
        assert_eq!(TableTag::new(*b"cvt ").to_string(), "cvt ");
        assert_eq!(format!("{:?}", TableTag::NAME), "\"name\"");
    }
}
