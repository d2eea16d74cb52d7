//! Per-pixel paint strategies.
//!
//! A `Brush` decides the color of every pixel the rasterizer asks it to
//! paint. The set of strategies is closed, so they live in one enum and
//! dispatch by match; each is a pure function of the buffer contents and the
//! coordinate, plus whatever the variant captured at construction.

use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::{segment_x_at, Point};
use crate::heightmap::Heightmap;
use crate::raster::PixelBuffer;

pub enum Brush {
    /// Paints nothing.
    NoOp,
    /// Replaces each painted pixel with its per-channel complement.
    Invert,
    /// Paints a fixed color.
    Solid(Rgb),
    /// Linear color ramp between the control line `a`-`b` and the parallel
    /// line through `c`. Pixels on the control line get `color1`, pixels on
    /// the line through `c` get `color2`; in between, the blend follows the
    /// signed x-distance ratio (y-distance for a horizontal control line).
    AxialGradient {
        a: Point,
        b: Point,
        c: Point,
        color1: Rgb,
        color2: Rgb,
    },
    /// Shades pixels inside a bounding square by the elevation of the
    /// heightmap cell they map to, blending `low` at elevation zero toward
    /// `high` at the maximum. The variant owns its heightmap; it is dropped
    /// with the brush. Pixels outside the declared square are left untouched.
    Terrain {
        map: Heightmap,
        origin: Point,
        size: i32,
        low: Rgb,
        high: Rgb,
    },
}

impl Brush {
    /// Terrain brush for the square covering a `w`x`h` area anchored at
    /// (x, y); the longer side is used as the mapping extent.
    pub fn terrain(map: Heightmap, x: i32, y: i32, w: i32, h: i32, low: Rgb, high: Rgb) -> Self {
        Self::Terrain {
            map,
            origin: Point::new(x, y),
            size: w.max(h),
            low,
            high,
        }
    }

    /// Paint one pixel. Called by the rasterizer once per covered coordinate;
    /// coordinates are guaranteed in-bounds by the caller's up-front checks.
    pub fn paint(&self, buffer: &mut PixelBuffer, x: i32, y: i32) -> Result<()> {
        match self {
            Brush::NoOp => Ok(()),

            Brush::Invert => {
                let px = buffer.get_pixel(x, y)?;
                buffer.set_pixel(x, y, px.inverted())
            },

            Brush::Solid(color) => buffer.set_pixel(x, y, *color),

            Brush::AxialGradient {
                a,
                b,
                c,
                color1,
                color2,
            } => {
                // Distance in x from the control line, measured against the
                // distance of the line through c; horizontal control lines
                // measure in y instead.
                let (i, imax) = if a.y != b.y {
                    let imax = c.x - segment_x_at(*a, *b, c.y);
                    let i = x - segment_x_at(*a, *b, y);
                    (i, imax)
                } else {
                    (y - a.y, c.y - a.y)
                };
                buffer.set_pixel(x, y, color1.gradient(*color2, i, imax))
            },

            Brush::Terrain {
                map,
                origin,
                size,
                low,
                high,
            } => {
                if x < origin.x || y < origin.y || x >= origin.x + size || y >= origin.y + size {
                    return Ok(());
                }
                let span = *size as usize;
                let gx = (x - origin.x) as usize * (map.dim() - 1) / span;
                let gy = (y - origin.y) as usize * (map.dim() - 1) / span;
                buffer.set_pixel(x, y, low.blend(*high, map.intensity(gx, gy)))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noop_leaves_buffer() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        Brush::NoOp.paint(&mut buf, 1, 1).unwrap();
        assert_eq!(buf.get_pixel(1, 1).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_solid_writes_color() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        let c = Rgb::new(9, 8, 7);
        Brush::Solid(c).paint(&mut buf, 2, 0).unwrap();
        assert_eq!(buf.get_pixel(2, 0).unwrap(), c);
    }

    #[test]
    fn test_invert_twice_restores() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        let c = Rgb::new(17, 117, 217);
        buf.set_pixel(1, 2, c).unwrap();
        let brush = Brush::Invert;
        brush.paint(&mut buf, 1, 2).unwrap();
        assert_eq!(buf.get_pixel(1, 2).unwrap(), c.inverted());
        brush.paint(&mut buf, 1, 2).unwrap();
        assert_eq!(buf.get_pixel(1, 2).unwrap(), c);
    }

    #[test]
    fn test_gradient_exact_on_both_lines() {
        // Vertical control line on the left edge, boundary line at x = 10
        let c1 = Rgb::new(0, 255, 255);
        let c2 = Rgb::new(255, 0, 255);
        let brush = Brush::AxialGradient {
            a: Point::new(0, 0),
            b: Point::new(0, 1),
            c: Point::new(10, 0),
            color1: c1,
            color2: c2,
        };
        let mut buf = PixelBuffer::new(12, 4).unwrap();
        brush.paint(&mut buf, 0, 2).unwrap();
        assert_eq!(buf.get_pixel(0, 2).unwrap(), c1);
        brush.paint(&mut buf, 10, 3).unwrap();
        assert_eq!(buf.get_pixel(10, 3).unwrap(), c2);
    }

    #[test]
    fn test_gradient_horizontal_control_line() {
        // Horizontal control line at y = 0, boundary through (0, 8): blend
        // runs down the y axis.
        let c1 = Rgb::new(0, 0, 0);
        let c2 = Rgb::new(255, 255, 255);
        let brush = Brush::AxialGradient {
            a: Point::new(0, 0),
            b: Point::new(5, 0),
            c: Point::new(0, 8),
            color1: c1,
            color2: c2,
        };
        let mut buf = PixelBuffer::new(8, 10).unwrap();
        brush.paint(&mut buf, 3, 0).unwrap();
        assert_eq!(buf.get_pixel(3, 0).unwrap(), c1);
        brush.paint(&mut buf, 3, 8).unwrap();
        assert_eq!(buf.get_pixel(3, 8).unwrap(), c2);
        brush.paint(&mut buf, 3, 4).unwrap();
        assert_eq!(buf.get_pixel(3, 4).unwrap(), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_terrain_blend_matches_cell_intensity() {
        let mut rng = StdRng::seed_from_u64(11);
        let map = Heightmap::generate(16, 256, 1, &mut rng);
        let expect = Rgb::BLACK.blend(Rgb::WHITE, map.intensity(0, 0));
        let brush = Brush::terrain(map, 0, 0, 16, 16, Rgb::BLACK, Rgb::WHITE);
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        brush.paint(&mut buf, 0, 0).unwrap();
        assert_eq!(buf.get_pixel(0, 0).unwrap(), expect);
    }

    #[test]
    fn test_terrain_silent_outside_declared_square() {
        let mut rng = StdRng::seed_from_u64(5);
        let map = Heightmap::generate(8, 100, 1, &mut rng);
        let brush = Brush::terrain(map, 2, 2, 8, 8, Rgb::BLACK, Rgb::WHITE);
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        // In-bounds for the buffer, outside the declared square: no effect
        brush.paint(&mut buf, 0, 0).unwrap();
        brush.paint(&mut buf, 12, 5).unwrap();
        assert_eq!(buf.get_pixel(0, 0).unwrap(), Rgb::BLACK);
        assert_eq!(buf.get_pixel(12, 5).unwrap(), Rgb::BLACK);
    }
}
