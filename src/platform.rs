use crate::sfnt_enum;

sfnt_enum! {
    /// Platform identifier used by 'cmap' encoding records and 'name' records
    pub enum Platform {
        Unicode = 0,
        Macintosh = 1,

        /// Deprecated
        Iso = 2,
        Windows = 3,
        Custom = 4,
    }
}

sfnt_enum! {
    /// Encoding identifiers for the Windows platform
    pub enum WindowsEncoding {
        Symbol = 0,

        /// UCS-2, the Basic Multilingual Plane only
        UnicodeBmp = 1,
        ShiftJis = 2,
        Prc = 3,
        Big5 = 4,
        Wansung = 5,
        Johab = 6,

        /// UCS-4
        UnicodeFull = 10,
    }
}

sfnt_enum! {
    /// Encoding identifiers for the Unicode platform
    pub enum UnicodeEncoding {
        Unicode1_0 = 0,
        Unicode1_1 = 1,
        Iso10646 = 2,
        Unicode2Bmp = 3,
        Unicode2Full = 4,
        VariationSequences = 5,
        UnicodeFull = 6,
    }
}
