mod cmap;
mod collection;
mod font_directory;
mod head;
mod hhea;
mod hmtx;
mod kern;
mod maxp;
mod name;
mod os2;
mod tag;
mod vhea;
mod vmtx;

pub use cmap::{CmapGroup, CmapSubtable, CmapTable, EncodingRecord};
pub use collection::{CollectionHeader, DsigRecord};
pub use font_directory::{
    DirectoryTableEntry, FontDirectory, OffsetSubtable, SfntVersion, TableDirectory,
};
pub use head::{Head, HeadFlags, MacStyle};
pub use hhea::HheaTable;
pub use hmtx::{HmtxTable, LongHorMetric};
pub use kern::{
    Direction, KernFormat0, KernSubtable, KernSubtableData, KernTable, KerningPair, Values,
};
pub use maxp::{MaxpPostscriptTable, MaxpTable, MaxpTrueTypeTable};
pub use name::{NameId, NameRecord, NameTable};
pub use os2::{Os2GlyphMetrics, Os2LineMetrics, Os2OpticalSize, Os2Table};
pub use tag::TableTag;
pub use vhea::VheaTable;
pub use vmtx::{LongVerMetric, VmtxTable};
