//! fraxel — procedural fractal raster rendering.
//!
//! Renders diamond-square terrain heightmaps and Sierpinski figures onto an
//! in-memory 24-bit pixel buffer through per-pixel paint strategies, then
//! serializes the result as an uncompressed BMP. Everything is synchronous
//! and single-threaded: one render owns one buffer from allocation to
//! serialization.

pub mod bmp;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod heightmap;
pub mod raster;
pub mod sierpinski;

pub use color::Rgb;
pub use config::RenderConfig;
pub use error::{RasterError, Result};
pub use geometry::Point;
pub use heightmap::Heightmap;
pub use raster::{Brush, PixelBuffer};
