//! Sierpinski figures by recursive subdivision.
//!
//! Both generators paint a background shape first, then recursively knock out
//! foreground regions: the carpet removes the center ninth of each rectangle,
//! the triangle removes the medial (upside-down) triangle of each bounding
//! box. Recursion depth is logarithmic in the figure size, terminating when a
//! subdivision reaches single-pixel scale.
//!
//! The recursive bounding boxes of the triangle variant overlap by one pixel
//! to avoid seams, so they can extend one pixel per level past the initial
//! box; leave a small margin between the box and the buffer edge.

use crate::error::Result;
use crate::geometry::Point;
use crate::raster::{Brush, PixelBuffer};

/// Draw a Sierpinski carpet filling the `w`x`h` rectangle at (x, y).
pub fn carpet(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    background: &Brush,
    foreground: &Brush,
) -> Result<()> {
    buffer.fill_rect(x, y, w, h, background)?;
    carpet_recurse(buffer, x, y, w, h, foreground)
}

fn carpet_recurse(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    brush: &Brush,
) -> Result<()> {
    // Thirds, with remainder pixels absorbed into the last third of each axis
    let x1 = x + (w / 3) as i32;
    let x2 = x + (w * 2 / 3) as i32;
    let x3 = x + w as i32;
    let y1 = y + (h / 3) as i32;
    let y2 = y + (h * 2 / 3) as i32;
    let y3 = y + h as i32;
    buffer.fill_rect(x1, y1, (x2 - x1) as u32, (y2 - y1) as u32, brush)?;

    if w / 3 <= 1 || h / 3 <= 1 {
        return Ok(());
    }

    // The eight surrounding cells, unrolled
    carpet_recurse(buffer, x, y, (x1 - x) as u32, (y1 - y) as u32, brush)?;
    carpet_recurse(buffer, x1, y, (x2 - x1) as u32, (y1 - y) as u32, brush)?;
    carpet_recurse(buffer, x2, y, (x3 - x2) as u32, (y1 - y) as u32, brush)?;
    carpet_recurse(buffer, x, y1, (x1 - x) as u32, (y2 - y1) as u32, brush)?;
    carpet_recurse(buffer, x2, y1, (x3 - x2) as u32, (y2 - y1) as u32, brush)?;
    carpet_recurse(buffer, x, y2, (x1 - x) as u32, (y3 - y2) as u32, brush)?;
    carpet_recurse(buffer, x1, y2, (x2 - x1) as u32, (y3 - y2) as u32, brush)?;
    carpet_recurse(buffer, x2, y2, (x3 - x2) as u32, (y3 - y2) as u32, brush)
}

/// Draw a Sierpinski triangle inscribed in the `w`x`h` box at (x, y).
///
/// The enclosing triangle runs bottom-middle, top-left, top-right and is
/// filled with `background`; the recursively removed medial triangles are
/// filled with `foreground`.
pub fn triangle(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    background: &Brush,
    foreground: &Brush,
) -> Result<()> {
    let p1 = Point::new(x + (w / 2) as i32, y + h as i32 - 1);
    let p2 = Point::new(x, y);
    let p3 = Point::new(x + w as i32 - 1, y);
    buffer.fill_triangle(p1, p2, p3, background)?;

    triangle_recurse(buffer, x, y, w, h, foreground)
}

fn triangle_recurse(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    brush: &Brush,
) -> Result<()> {
    // Medial triangle of the box: apex at the top middle, base across the
    // half-height line.
    let x1 = x + (w / 2) as i32;
    let y1 = y + 1;
    let x2 = x + (w / 4) as i32;
    let y2 = y + (h / 2) as i32;
    let x3 = x + (3 * w / 4) as i32;
    let y3 = y2;

    // Degenerate at single-pixel scale: done
    if x2 >= x3 || y1 == y2 {
        return Ok(());
    }

    buffer.fill_triangle(
        Point::new(x1, y1),
        Point::new(x2, y2),
        Point::new(x3, y3),
        brush,
    )?;

    // Three corner boxes at half size, one pixel of overlap against gaps
    triangle_recurse(buffer, x2, y2, w / 2 + 1, h / 2, brush)?;
    triangle_recurse(buffer, x, y, w / 2 + 1, h / 2, brush)?;
    triangle_recurse(buffer, x1, y, w / 2 + 1, h / 2, brush)
}
