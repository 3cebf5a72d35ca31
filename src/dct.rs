use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};
use std::sync::Arc;

use rustdct::{Dct2, Dct3, DctPlanner, TransformType2And3};

use crate::block::Block;
use crate::BLOCK_SIZE;

/// Scale factor that turns rustdct's unnormalized transforms into the
/// orthonormal convention, so forward and inverse are exact inverses.
const ORTHO_SCALE: f64 = 0.5; // sqrt(2.0 / BLOCK_SIZE as f64)

/// Separable 2D DCT over 8x8 blocks. Plans the 1D transform once; the same
/// planned transform serves both the forward (type II) and inverse (type III)
/// directions.
pub struct Dct2d {
    transform: Arc<dyn TransformType2And3<f64>>,
}

impl Dct2d {
    pub fn new() -> Self {
        Self {
            transform: DctPlanner::new().plan_dct2(BLOCK_SIZE),
        }
    }

    pub fn spatial_to_freq(&self, block: &Block) -> Block {
        separable(block, |line| {
            self.transform.process_dct2(line);
            for value in line.iter_mut() {
                *value *= ORTHO_SCALE;
            }
            line[0] *= FRAC_1_SQRT_2;
        })
    }

    pub fn freq_to_spatial(&self, block: &Block) -> Block {
        separable(block, |line| {
            line[0] *= SQRT_2;
            for value in line.iter_mut() {
                *value *= ORTHO_SCALE;
            }
            self.transform.process_dct3(line);
        })
    }
}

impl Default for Dct2d {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a 1D transform along every row, then along every column.
fn separable<F>(block: &Block, transform_1d: F) -> Block
where
    F: Fn(&mut [f64; BLOCK_SIZE]),
{
    let mut result = *block;

    for row in result.iter_mut() {
        transform_1d(row);
    }

    for x in 0..BLOCK_SIZE {
        let mut column = [0.0; BLOCK_SIZE];
        for y in 0..BLOCK_SIZE {
            column[y] = result[y][x];
        }
        transform_1d(&mut column);
        for y in 0..BLOCK_SIZE {
            result[y][x] = column[y];
        }
    }

    result
}
