use std::path::Path;

use anyhow::Result;
use log::info;

use dct_diagrams::block::{self, Block, SAMPLE_PIXEL_BLOCK};
use dct_diagrams::dct::Dct2d;
use dct_diagrams::quant::{self, LUMINANCE_QUANTIZATION_TABLE};
use dct_diagrams::render::save_grid;

fn main() -> Result<()> {
    env_logger::init();

    let dct = Dct2d::new();
    let centered = block::zero_center(&SAMPLE_PIXEL_BLOCK);
    let dct_block = dct.spatial_to_freq(&centered);

    let mut quantized = dct_block;
    quant::apply_quantization(&mut quantized, &LUMINANCE_QUANTIZATION_TABLE);

    let mut dequantized = quantized;
    quant::undo_quantization(&mut dequantized, &LUMINANCE_QUANTIZATION_TABLE);

    let reconstructed = block::restore_center(&dct.freq_to_spatial(&dequantized));

    let diagrams: [(Block, &str, &str); 5] = [
        (
            block::to_float(&SAMPLE_PIXEL_BLOCK),
            "Original 8x8 Block",
            "original_8x8_block.svg",
        ),
        (dct_block, "DCT of Block", "dct_of_block.svg"),
        (
            block::to_float(&LUMINANCE_QUANTIZATION_TABLE),
            "Quantization Matrix",
            "quantization_matrix.svg",
        ),
        (quantized, "Quantized DCT Block", "quantized_dct_block.svg"),
        (
            block::round(&reconstructed),
            "Reconstructed Block",
            "reconstructed_block.svg",
        ),
    ];

    for (matrix, title, filename) in &diagrams {
        save_grid(matrix, title, Path::new(filename))?;
        info!("wrote {filename}");
    }

    Ok(())
}
