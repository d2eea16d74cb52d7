//! Diamond-square heightmap synthesis.
//!
//! Generates a square grid of bounded integer elevations by recursive midpoint
//! displacement (the "cloud fractal"). The grid dimension is `2^steps + 1`:
//! after seeding the four corners with random elevations, each refinement
//! level runs one diamond pass (square centers from their four corners) and
//! one square pass (diamond-edge midpoints from their axis-aligned neighbors),
//! halving the random displacement magnitude per level until every cell is
//! set.

use log::debug;
use rand::Rng;

/// Grid dimension filled by `steps` refinement levels.
///
/// A 0-step grid is 2x2, 1-step 3x3, 2-step 5x5, and so on.
#[inline]
pub fn dim_from_steps(steps: u32) -> usize {
    (1usize << steps) + 1
}

/// Largest `steps` such that `dim_from_steps(steps) <= dim`, by repeated
/// halving. Inverse of `dim_from_steps` on exact dimensions.
pub fn steps_from_dim(dim: usize) -> u32 {
    if dim <= 1 {
        return 0;
    }
    let mut steps = 0;
    let mut dim = (dim - 1) >> 1;
    while dim != 0 {
        dim >>= 1;
        steps += 1;
    }
    steps
}

/// An immutable square grid of elevations in `[0, max_elevation]`.
///
/// Fully populated at construction; never mutated afterward.
pub struct Heightmap {
    cells: Vec<i32>,
    dim: usize,
    max_elevation: i32,
}

impl Heightmap {
    /// Run diamond-square over a grid sized for `size_px` pixels.
    ///
    /// `granularity` is the minimum pixel spacing between independently
    /// computed grid points: the grid dimension is the largest `2^n + 1` not
    /// exceeding `size_px / granularity`. The result is deterministic given
    /// the random source's sequence.
    pub fn generate<R: Rng + ?Sized>(
        size_px: u32,
        max_elevation: i32,
        granularity: u32,
        rng: &mut R,
    ) -> Self {
        debug_assert!(size_px > 0, "heightmap size must be positive");
        debug_assert!(max_elevation > 0, "max elevation must be positive");
        debug_assert!(granularity > 0, "granularity must be positive");

        let min_dim = (size_px / granularity) as usize;
        let steps = steps_from_dim(min_dim);
        let dim = dim_from_steps(steps);
        debug!(
            "diamond-square: {}px at granularity {} -> {} steps, {}x{} grid",
            size_px, granularity, steps, dim, dim
        );

        let mut map = Self {
            cells: vec![0; dim * dim],
            dim,
            max_elevation,
        };

        // Independent random corner elevations
        let corner = dim - 1;
        map.set(0, 0, random_elevation(max_elevation, rng));
        map.set(0, corner, random_elevation(max_elevation, rng));
        map.set(corner, 0, random_elevation(max_elevation, rng));
        map.set(corner, corner, random_elevation(max_elevation, rng));

        let mut magnitude = max_elevation / 2;
        for level in (1..=steps).rev() {
            map.refine(level, magnitude, rng);
            magnitude /= 2;
        }

        map
    }

    /// One refinement level: a diamond pass then a square pass, each new cell
    /// offset by a random value in `[-magnitude/2, magnitude/2]` and clamped
    /// to the elevation range.
    fn refine<R: Rng + ?Sized>(&mut self, level: u32, magnitude: i32, rng: &mut R) {
        let dim = self.dim;
        let step = 1usize << (level - 1);

        // Diamond step: the center of each 2*step square gets the average of
        // its four corners.
        let mut i = step;
        while i < dim {
            let mut j = step;
            while j < dim {
                let sum = self.at(i - step, j - step)
                    + self.at(i + step, j - step)
                    + self.at(i - step, j + step)
                    + self.at(i + step, j + step);
                let h = sum / 4 + random_offset(magnitude, rng);
                self.set(i, j, h.clamp(0, self.max_elevation));
                j += 2 * step;
            }
            i += 2 * step;
        }

        // Square step: each remaining midpoint sums whichever of its four
        // axis-aligned neighbors at distance `step` exist within the grid.
        // The sum is divided by a constant 4 even at boundaries where fewer
        // neighbors exist, matching the reference output (boundary cells run
        // low as a consequence).
        let mut i = 0;
        while i < dim {
            let mut j = if (i / step) % 2 == 0 { step } else { 0 };
            while j < dim {
                let mut sum = 0;
                if i != 0 {
                    sum += self.at(i - step, j);
                }
                if j != 0 {
                    sum += self.at(i, j - step);
                }
                if i != dim - 1 {
                    sum += self.at(i + step, j);
                }
                if j != dim - 1 {
                    sum += self.at(i, j + step);
                }
                let h = sum / 4 + random_offset(magnitude, rng);
                self.set(i, j, h.clamp(0, self.max_elevation));
                j += 2 * step;
            }
            i += step;
        }
    }

    /// Grid row/column count.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Upper bound of the elevation range.
    #[inline]
    pub fn max_elevation(&self) -> i32 {
        self.max_elevation
    }

    /// Elevation at grid cell (gx, gy).
    #[inline]
    pub fn elevation(&self, gx: usize, gy: usize) -> i32 {
        self.at(gx, gy)
    }

    /// Elevation at (gx, gy) scaled to [0, 1].
    #[inline]
    pub fn intensity(&self, gx: usize, gy: usize) -> f64 {
        f64::from(self.at(gx, gy)) / f64::from(self.max_elevation)
    }

    #[inline]
    fn at(&self, gx: usize, gy: usize) -> i32 {
        self.cells[gx * self.dim + gy]
    }

    #[inline]
    fn set(&mut self, gx: usize, gy: usize, h: i32) {
        self.cells[gx * self.dim + gy] = h;
    }
}

/// Uniform random elevation in [0, max).
#[inline]
fn random_elevation<R: Rng + ?Sized>(max: i32, rng: &mut R) -> i32 {
    (rng.gen::<f64>() * f64::from(max)) as i32
}

/// Uniform random offset in [-magnitude/2, magnitude/2], rounded to nearest.
#[inline]
fn random_offset<R: Rng + ?Sized>(magnitude: i32, rng: &mut R) -> i32 {
    (rng.gen::<f64>() * f64::from(magnitude) + 0.5) as i32 - magnitude / 2
}
