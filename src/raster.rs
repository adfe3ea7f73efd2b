pub(crate) mod canvas;
pub(crate) mod composite;
pub(crate) mod glyph;
pub(crate) mod gradient;
pub(crate) mod shape;
