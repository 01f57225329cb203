//! Raster surfaces, compositing and the frame-producing pipeline.

pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod pipeline;
pub(crate) mod surface;
