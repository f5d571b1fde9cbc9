use crate::{
    error::{SfntError, SfntResult},
    locale::BuiltinLocales,
    lookup,
    parse::SfntParser,
    table::{
        CmapTable, CollectionHeader, DirectoryTableEntry, FontDirectory, Head, HheaTable,
        HmtxTable, KernTable, MaxpTable, NameId, NameTable, Os2Table, TableTag, VheaTable,
        VmtxTable,
    },
};

/// The decoded metadata tables of a single font.
///
/// Tables a font does not carry are replaced by their `Default`. The model
/// owns everything it holds and no longer borrows the source bytes.
#[derive(Debug, Clone)]
pub struct Font {
    directory: FontDirectory,
    cmap: CmapTable,
    name: NameTable,
    head: Head,
    maxp: MaxpTable,
    os2: Os2Table,
    kern: KernTable,
    hhea: HheaTable,
    vhea: VheaTable,
    hmtx: HmtxTable,
    vmtx: VmtxTable,
}

impl Font {
    pub fn parse(source: &[u8]) -> SfntResult<Self> {
        Self::parse_at(source, 0)
    }

    /// Parses the font whose table directory starts at `offset`. Table
    /// offsets are always relative to the start of `source`
    pub fn parse_at(source: &[u8], offset: usize) -> SfntResult<Self> {
        let mut parser = SfntParser::new(source);
        parser.seek(offset);

        let directory = parser.read_font_directory()?;

        // the metrics tables are sized by 'maxp', 'hhea' and 'vhea', so those
        // have to be read first
        let cmap = Self::required_table(source, &directory, TableTag::CMAP, |parser| {
            parser.read_cmap_table()
        })?;
        let name = Self::required_table(source, &directory, TableTag::NAME, |parser| {
            parser.read_name_table()
        })?;
        let head = Self::optional_table(source, &directory, TableTag::HEAD, |parser| {
            parser.read_head_table()
        })?;
        let maxp = Self::optional_table(source, &directory, TableTag::MAXP, |parser| {
            parser.read_maxp_table()
        })?;
        let os2 = Self::optional_table(source, &directory, TableTag::OS2, |parser| {
            parser.read_os2_table()
        })?;
        let kern = Self::optional_table(source, &directory, TableTag::KERN, |parser| {
            parser.read_kern_table()
        })?;
        let hhea = Self::optional_table(source, &directory, TableTag::HHEA, |parser| {
            parser.read_hhea_table()
        })?;
        let vhea = Self::optional_table(source, &directory, TableTag::VHEA, |parser| {
            parser.read_vhea_table()
        })?;

        let num_glyphs = maxp.num_glyphs();

        let hmtx = Self::optional_table(source, &directory, TableTag::HMTX, |parser| {
            parser.read_hmtx_table(hhea.number_of_h_metrics, num_glyphs)
        })?;
        let vmtx = Self::optional_table(source, &directory, TableTag::VMTX, |parser| {
            parser.read_vmtx_table(vhea.number_of_v_metrics, num_glyphs)
        })?;

        log::debug!(
            "parsed font with {} tables and {} glyphs",
            directory.table_directory.0.len(),
            num_glyphs
        );

        Ok(Self {
            directory,
            cmap,
            name,
            head,
            maxp,
            os2,
            kern,
            hhea,
            vhea,
            hmtx,
            vmtx,
        })
    }

    fn required_table<'a, T>(
        source: &'a [u8],
        directory: &FontDirectory,
        tag: TableTag,
        read: impl FnOnce(&mut SfntParser<'a>) -> SfntResult<T>,
    ) -> SfntResult<T> {
        match directory.find_table_entry(tag) {
            Some(entry) => read(&mut SfntParser::for_table(source, entry)?),
            None => anyhow::bail!(SfntError::MissingRequiredTable { tag }),
        }
    }

    fn optional_table<'a, T: Default>(
        source: &'a [u8],
        directory: &FontDirectory,
        tag: TableTag,
        read: impl FnOnce(&mut SfntParser<'a>) -> SfntResult<T>,
    ) -> SfntResult<T> {
        match directory.find_table_entry(tag) {
            Some(entry) => read(&mut SfntParser::for_table(source, entry)?),
            None => {
                log::debug!("no '{}' table, using defaults", tag);
                Ok(T::default())
            }
        }
    }

    pub fn directory(&self) -> &FontDirectory {
        &self.directory
    }

    pub fn cmap(&self) -> &CmapTable {
        &self.cmap
    }

    pub fn name_table(&self) -> &NameTable {
        &self.name
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn maxp(&self) -> &MaxpTable {
        &self.maxp
    }

    pub fn os2(&self) -> &Os2Table {
        &self.os2
    }

    pub fn kern(&self) -> &KernTable {
        &self.kern
    }

    pub fn hhea(&self) -> &HheaTable {
        &self.hhea
    }

    pub fn vhea(&self) -> &VheaTable {
        &self.vhea
    }

    pub fn hmtx(&self) -> &HmtxTable {
        &self.hmtx
    }

    pub fn vmtx(&self) -> &VmtxTable {
        &self.vmtx
    }

    /// The text of `name_id` in `locale`, or an empty string
    pub fn name(&self, name_id: NameId, locale: &str) -> String {
        lookup::resolve_name(self, name_id, locale, &BuiltinLocales)
    }

    /// Raw bytes of a table of this font. `source` must be the bytes the font
    /// was parsed from
    pub fn table_data<'a>(&self, source: &'a [u8], tag: TableTag) -> SfntResult<Option<&'a [u8]>> {
        self.directory
            .find_table_entry(tag)
            .map(|entry| table_bytes(source, entry))
            .transpose()
    }
}

fn table_bytes<'a>(source: &'a [u8], entry: &DirectoryTableEntry) -> SfntResult<&'a [u8]> {
    let mut parser = SfntParser::for_table(source, entry)?;
    parser.read_bytes(entry.length as usize)
}

/// Every font of a collection file
#[derive(Debug, Clone)]
pub struct FontCollection {
    pub header: CollectionHeader,
    pub fonts: Vec<Font>,
}

impl FontCollection {
    pub fn parse(source: &[u8]) -> SfntResult<Self> {
        let header = SfntParser::new(source).read_collection_header()?;

        let fonts = header
            .table_directory_offsets
            .iter()
            .map(|&offset| Font::parse_at(source, offset as usize))
            .collect::<SfntResult<Vec<_>>>()?;

        Ok(Self { header, fonts })
    }

    /// Parses only the font at `index`
    pub fn parse_font(source: &[u8], index: usize) -> SfntResult<Font> {
        let header = SfntParser::new(source).read_collection_header()?;

        match header.table_directory_offsets.get(index) {
            Some(&offset) => Font::parse_at(source, offset as usize),
            None => anyhow::bail!(SfntError::NoSuchFont {
                index,
                num_fonts: header.num_fonts,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Font> {
        self.fonts.iter()
    }
}

impl<'a> IntoIterator for &'a FontCollection {
    type Item = &'a Font;
    type IntoIter = std::slice::Iter<'a, Font>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}
