/// RGB raster the cover is composed on.
pub mod canvas;
/// PNG persistence of rendered covers.
pub mod output;
/// End-to-end cover rendering.
pub mod pipeline;
