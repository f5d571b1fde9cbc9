//! Queries that combine several tables of a parsed [`Font`](crate::Font).
//!
//! Lookups never fail. Anything a font cannot answer resolves to glyph 0, a
//! kerning of 0.0 or an empty name.

mod glyph;
mod kerning;
mod name;

pub use glyph::resolve_glyph;
pub use kerning::resolve_kerning;
pub use name::resolve_name;
