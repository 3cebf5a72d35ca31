pub mod block;
pub mod dct;
pub mod quant;
pub mod render;

pub const BLOCK_SIZE: usize = 8;
