//! Raster rendering: sprite loading, pixel compositing, portrait rendering,
//! and postcard assembly.

pub mod composite;
pub mod portrait;
pub mod postcard;
pub mod sprites;
