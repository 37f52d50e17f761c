//! Reproducible pseudo-random test grids

use crate::error::TestResult;
use pixgrid_core::BitGrid2D;

/// Simple deterministic RNG (64-bit LCG).
///
/// Only the high bits are used, the low bits of a power-of-two LCG
/// have short periods.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Build a grid where each bit is 1 with probability `density`.
///
/// The same `seed` always yields the same grid.
pub fn random_grid(width: u32, height: u32, density: f64, seed: u64) -> TestResult<BitGrid2D> {
    let mut grid = BitGrid2D::new(width, height)?;
    let mut rng = SimpleRng::new(seed);
    for col in 0..width {
        for row in 0..height {
            if rng.next_f64() < density {
                grid.put(col, row, 1)?;
            }
        }
    }
    Ok(grid)
}
