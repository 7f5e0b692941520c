//! Text measuring and drawing.
//!
//! Layout code talks to a [`device::TextDevice`]; [`raster::ParleyTextDevice`] is the production
//! implementation backed by parley shaping and vello_cpu glyph rasterization.

/// Text device capability.
pub mod device;
/// parley + vello_cpu text device.
pub mod raster;
/// parley layout construction from raw font bytes.
pub mod shaper;
