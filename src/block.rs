use crate::BLOCK_SIZE;

pub type PixelBlock = [[u8; BLOCK_SIZE]; BLOCK_SIZE];
pub type Block = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

/// Offset that shifts 0..=255 samples so they straddle zero before the DCT.
pub const CENTER_OFFSET: f64 = 128.0;

/// 8x8 luma block from the JPEG codec example on Wikipedia.
pub const SAMPLE_PIXEL_BLOCK: PixelBlock = [
    [52, 55, 61, 66, 70, 61, 64, 73],
    [63, 59, 55, 90, 109, 85, 69, 72],
    [62, 59, 68, 113, 144, 104, 66, 73],
    [63, 58, 71, 122, 154, 106, 70, 69],
    [67, 61, 68, 104, 126, 88, 68, 70],
    [79, 65, 60, 70, 77, 68, 58, 75],
    [85, 71, 64, 59, 55, 61, 65, 83],
    [87, 79, 69, 68, 65, 76, 78, 94],
];

pub fn to_float(block: &PixelBlock) -> Block {
    let mut result = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            result[y][x] = block[y][x] as f64;
        }
    }
    result
}

pub fn zero_center(block: &PixelBlock) -> Block {
    let mut result = to_float(block);
    for row in result.iter_mut() {
        for value in row.iter_mut() {
            *value -= CENTER_OFFSET;
        }
    }
    result
}

pub fn restore_center(block: &Block) -> Block {
    let mut result = *block;
    for row in result.iter_mut() {
        for value in row.iter_mut() {
            *value += CENTER_OFFSET;
        }
    }
    result
}

pub fn round(block: &Block) -> Block {
    block.map(|row| row.map(f64::round))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_center_straddles_zero() {
        let centered = zero_center(&SAMPLE_PIXEL_BLOCK);
        assert_eq!(centered[0][0], 52.0 - 128.0);
        assert_eq!(centered[3][4], 154.0 - 128.0);
        assert!(centered.iter().flatten().any(|&v| v < 0.0));
        assert!(centered.iter().flatten().any(|&v| v > 0.0));
    }

    #[test]
    fn restore_center_inverts_zero_center() {
        let centered = zero_center(&SAMPLE_PIXEL_BLOCK);
        let restored = restore_center(&centered);
        let original = to_float(&SAMPLE_PIXEL_BLOCK);
        assert_eq!(restored, original);
    }
}
