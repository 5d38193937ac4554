//! Compiled particle system (`.vpcf_c`) synthesis.
//!
//! A vpcf_c built here is the header template with three paths spliced in, followed
//! by an LZ4 block holding the KV3 body that points `m_hTexture` at the texture:
//!
//! ```text
//! [resource header][block table][RERL + texture path][REDI + output path + game]
//! [DATA: KV3 prefix][u32 decompressed size][lz4 block]
//! ```

pub mod data;
pub mod header;
pub mod identity;
pub mod layout;
pub mod templates;

use tracing::info;

use crate::containers::compression::Lz4Block;
use crate::containers::BlockCompressor;
use crate::error::VpcfResult;

use data::compress_data_section;
use header::HeaderWriter;
pub use identity::{texture_checksum, ResourceId};

pub const DEFAULT_GAME: &str = "hlvr";
pub const DEFAULT_PARTICLE_DIR: &str = "particles/dry_erase";

/// Game-relative paths embedded in the resource, always with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub texture: String,
    pub output: String,
    pub game: String,
}

impl ResourcePaths {
    /// When `output` is `None` the particle is named after the texture and placed in
    /// [`DEFAULT_PARTICLE_DIR`].
    pub fn new(texture: &str, output: Option<&str>, game: &str) -> Self {
        let texture = to_slash(texture);
        let output = match output {
            Some(output) => to_slash(output),
            None => default_output_path(&texture),
        };

        ResourcePaths {
            texture,
            output,
            game: to_slash(game),
        }
    }
}

pub fn to_slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// `materials/foo/bar.vtex` -> `particles/dry_erase/bar.vpcf`
pub fn default_output_path(texture: &str) -> String {
    let texture = to_slash(texture);
    let file_name = texture
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };
    format!("{DEFAULT_PARTICLE_DIR}/{stem}.vpcf")
}

/// A finished vpcf_c and the values stamped into it.
#[derive(Debug, Clone)]
pub struct VpcfFile {
    pub bytes: Vec<u8>,
    pub resource_id: ResourceId,
    pub checksum: u32,
    pub decompressed_len: u32,
    pub compressed_len: u32,
}

impl VpcfFile {
    /// Size declared for the DATA block.
    pub fn data_size(&self) -> u32 {
        self.compressed_len + layout::DATA_SIZE_BIAS
    }
}

/// Builds a vpcf_c referencing `texture`, the raw bytes of the compiled texture
/// resource, with a freshly drawn resource id.
pub fn build(paths: &ResourcePaths, texture: &[u8]) -> VpcfResult<VpcfFile> {
    let checksum = texture_checksum(texture);
    let resource_id = ResourceId::random();
    info!("Resource id = {}", resource_id);

    build_with(paths, checksum, resource_id, &Lz4Block)
}

pub fn build_with<C: BlockCompressor>(
    paths: &ResourcePaths,
    checksum: u32,
    resource_id: ResourceId,
    compressor: &C,
) -> VpcfResult<VpcfFile> {
    let mut header = HeaderWriter::splice(paths);
    header.patch(paths, checksum, resource_id)?;
    let slot = header.reserve_payload()?;

    let section = compress_data_section(&paths.texture, compressor)?;
    let bytes = header.finish(slot, &section)?;

    Ok(VpcfFile {
        bytes,
        resource_id,
        checksum,
        decompressed_len: section.decompressed_len,
        compressed_len: section.compressed_len(),
    })
}
