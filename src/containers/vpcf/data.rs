use tracing::debug;

use crate::containers::vpcf::layout::DATA_TEXTURE_SLOT;
use crate::containers::vpcf::templates::DATA_TEMPLATE;
use crate::containers::BlockCompressor;
use crate::error::VpcfResult;

/// Compressed KV3 body ready to be appended after the header.
#[derive(Debug, Clone)]
pub struct DataSection {
    pub compressed: Vec<u8>,
    /// Length of the spliced body before compression. The engine sizes its
    /// decompression buffer from this.
    pub decompressed_len: u32,
}

impl DataSection {
    pub fn compressed_len(&self) -> u32 {
        self.compressed.len() as u32
    }
}

/// The data template with `texture` written into the `m_hTexture` string slot.
pub fn splice_texture(texture: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(DATA_TEMPLATE.len() + texture.len());
    body.extend_from_slice(&DATA_TEMPLATE[..DATA_TEXTURE_SLOT]);
    body.extend_from_slice(texture);
    body.extend_from_slice(&DATA_TEMPLATE[DATA_TEXTURE_SLOT..]);
    body
}

pub fn compress_data_section<C: BlockCompressor>(
    texture: &str,
    compressor: &C,
) -> VpcfResult<DataSection> {
    let body = splice_texture(texture.as_bytes());
    let compressed = compressor.compress_block(&body)?;

    debug!(
        decompressed = body.len(),
        compressed = compressed.len(),
        "Compressed KV3 data section"
    );

    Ok(DataSection {
        compressed,
        decompressed_len: body.len() as u32,
    })
}
