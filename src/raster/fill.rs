//! Scan conversion: rectangle and triangle fills.
//!
//! Both fills validate their shape against the buffer up front and fail
//! before touching any pixel, then enumerate covered coordinates scanline by
//! scanline and hand each one to the brush.

use std::mem;

use crate::error::Result;
use crate::geometry::{segment_x_at, Point};
use crate::raster::{Brush, PixelBuffer};

impl PixelBuffer {
    /// Paint every pixel in `[x, x+w) x [y, y+h)` with `brush`, row-major.
    ///
    /// Fails with `OutOfBounds` if the rectangle is not fully contained.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, brush: &Brush) -> Result<()> {
        if x < 0 || y < 0 {
            return Err(self.out_of_bounds(x, y));
        }
        if i64::from(x) + i64::from(w) > i64::from(self.width())
            || i64::from(y) + i64::from(h) > i64::from(self.height())
        {
            return Err(self.out_of_bounds(x, y));
        }

        for j in 0..h as i32 {
            for i in 0..w as i32 {
                brush.paint(self, x + i, y + j)?;
            }
        }
        Ok(())
    }

    /// Paint the filled triangle with the given vertices.
    ///
    /// Vertices are reordered so the scan runs top to bottom; each scanline
    /// fills the inclusive span between the long edge (first to last vertex)
    /// and whichever short edge covers that line. Degenerate (collinear or
    /// flat) triangles fall out of the segment interpolation rule and paint
    /// their covered pixels without special casing.
    ///
    /// Fails with `OutOfBounds` if any vertex lies outside the buffer.
    pub fn fill_triangle(&mut self, p1: Point, p2: Point, p3: Point, brush: &Brush) -> Result<()> {
        for p in [p1, p2, p3] {
            if !self.in_bounds(p.x, p.y) {
                return Err(self.out_of_bounds(p.x, p.y));
            }
        }

        // Sort vertices by y (stable pairwise swaps)
        let (mut p1, mut p2, mut p3) = (p1, p2, p3);
        if p1.y > p2.y {
            mem::swap(&mut p1, &mut p2);
        }
        if p1.y > p3.y {
            mem::swap(&mut p1, &mut p3);
        }
        if p2.y > p3.y {
            mem::swap(&mut p2, &mut p3);
        }

        for y in p1.y..=p3.y {
            // The long edge spans the whole y-range; the short side switches
            // from the upper edge to the lower edge at p2.
            let x_long = segment_x_at(p1, p3, y);
            let x_short = if y > p2.y {
                segment_x_at(p2, p3, y)
            } else {
                segment_x_at(p1, p2, y)
            };
            for x in x_long.min(x_short)..=x_long.max(x_short) {
                brush.paint(self, x, y)?;
            }
        }
        Ok(())
    }
}
