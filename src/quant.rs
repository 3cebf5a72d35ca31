use crate::block::Block;
use crate::BLOCK_SIZE;

pub type QuantizationTable = [[u8; BLOCK_SIZE]; BLOCK_SIZE];

/// Absolute tolerance of the near-zero snap. Quantized values are already
/// rounded to integers, so in practice this only normalizes `-0.0`.
const ZERO_TOLERANCE: f64 = 1e-8;

/// Divides each coefficient by the matching table entry and rounds to the
/// nearest integer. Lossy on purpose.
pub fn apply_quantization(freq: &mut Block, quantization: &QuantizationTable) {
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            let quantized = (freq[y][x] / quantization[y][x] as f64).round();
            freq[y][x] = if quantized.abs() <= ZERO_TOLERANCE {
                0.0
            } else {
                quantized
            };
        }
    }
}

pub fn undo_quantization(freq: &mut Block, quantization: &QuantizationTable) {
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            freq[y][x] *= quantization[y][x] as f64;
        }
    }
}

pub const LUMINANCE_QUANTIZATION_TABLE: QuantizationTable = [
    [16, 11, 10, 16, 24, 40, 51, 61],
    [12, 12, 14, 19, 26, 58, 60, 55],
    [14, 13, 16, 24, 40, 57, 69, 56],
    [14, 17, 22, 29, 51, 87, 80, 62],
    [18, 22, 37, 56, 68, 109, 103, 77],
    [24, 35, 55, 64, 81, 104, 113, 92],
    [49, 64, 78, 87, 103, 121, 120, 101],
    [72, 92, 95, 98, 112, 100, 103, 99],
];
