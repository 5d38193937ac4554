use crate::containers::BlockCompressor;
use crate::error::VpcfResult;

// The engine decodes the DATA payload as a bare LZ4 block sized by the u32 in front of it.
// No frame header, no checksum.

#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4Block;

impl BlockCompressor for Lz4Block {
    fn compress_block(&self, src: &[u8]) -> VpcfResult<Vec<u8>> {
        let mut dst = vec![0u8; lz4_flex::block::get_maximum_output_size(src.len())];
        let written = lz4_flex::block::compress_into(src, &mut dst)?;
        dst.truncate(written);
        Ok(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_has_no_frame_magic() {
        let src = b"particles/dry_erase/particles/dry_erase/particles/dry_erase/";
        let compressed = Lz4Block.compress_block(src).unwrap();

        // LZ4 frame magic is 0x184D2204
        assert!(!compressed.starts_with(&[0x04, 0x22, 0x4D, 0x18]));
        assert!(compressed.len() < src.len());

        let restored = lz4_flex::block::decompress(&compressed, src.len()).unwrap();
        assert_eq!(restored, src);
    }
}
