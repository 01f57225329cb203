pub(crate) mod glyphs;
pub(crate) mod scroll;
