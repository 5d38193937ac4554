pub mod compression;
pub mod vpcf;

use crate::error::VpcfResult;

/// A raw block compressor. Output carries no framing, so the caller tracks the
/// decompressed length itself.
pub trait BlockCompressor {
    fn compress_block(&self, src: &[u8]) -> VpcfResult<Vec<u8>>;
}
