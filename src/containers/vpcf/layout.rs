//! Offset table for the built-in vpcf_c templates.
//!
//! Every offset here is in *template coordinates*, i.e. measured in the unspliced
//! header template. Once paths are spliced in, an offset moves by the total length of
//! the strings inserted at or before it (see [`super::header::Splice`]).
//!
//! The biases are the distances the engine expects between a field and the thing it
//! points at, excluding the variable-length strings. They were taken from compiled
//! resources and must be reproduced as-is.

use crate::binary_utils::{write_u32, write_u64};
use crate::error::{VpcfError, VpcfResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    U32,
    U64,
}

impl Width {
    pub const fn bytes(self) -> usize {
        match self {
            Width::U32 => 4,
            Width::U64 => 8,
        }
    }
}

/// A little-endian integer field at a fixed template offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: Width,
}

impl Field {
    const fn u32(name: &'static str, offset: usize) -> Self {
        Field {
            name,
            offset,
            width: Width::U32,
        }
    }

    const fn u64(name: &'static str, offset: usize) -> Self {
        Field {
            name,
            offset,
            width: Width::U64,
        }
    }

    /// Writes `value` at the already shifted position `at`. A value wider than the
    /// field is an error, never truncated.
    pub fn write(&self, buf: &mut [u8], at: usize, value: u64) -> VpcfResult<()> {
        debug_assert!(at + self.width.bytes() <= buf.len(), "{} past end", self.name);
        match self.width {
            Width::U32 => {
                let value = u32::try_from(value).map_err(|_| VpcfError::FieldOverflow {
                    field: self.name,
                    value,
                })?;
                write_u32(buf, value, at);
            }
            Width::U64 => write_u64(buf, value, at),
        }
        Ok(())
    }
}

// Resource header and block table
pub const FILE_SIZE: Field = Field::u32("file_size", 0x00);
pub const RERL_SIZE: Field = Field::u32("rerl_size", 0x18);
pub const REDI_OFFSET: Field = Field::u32("redi_offset", 0x20);
pub const REDI_SIZE: Field = Field::u32("redi_size", 0x24);
pub const DATA_OFFSET: Field = Field::u32("data_offset", 0x2C);
pub const DATA_SIZE: Field = Field::u32("data_size", 0x30);

// RERL: one external reference, the texture
pub const RESOURCE_ID: Field = Field::u64("resource_id", 0x3C);
pub const TEXTURE_PATH_SLOT: usize = 0x48;

// REDI list offsets, counted from the end of the texture path string
pub const REDI_ADDITIONAL_DEPS: Field =
    Field::u32("redi_additional_deps", TEXTURE_PATH_SLOT + 0x11);
pub const REDI_ARGUMENT_DEPS: Field = Field::u32("redi_argument_deps", TEXTURE_PATH_SLOT + 0x19);
pub const REDI_CHILD_RESOURCES: Field =
    Field::u32("redi_child_resources", TEXTURE_PATH_SLOT + 0x39);

// REDI input dependency entry
pub const REDI_SEARCH_PATH_PTR: Field = Field::u32("redi_search_path_ptr", 0x8D);
pub const REDI_TEXTURE_CRC: Field = Field::u32("redi_texture_crc", 0x91);
pub const RELATED_FILE_SLOT: usize = 0x99;
pub const SEARCH_PATH_SLOT: usize = 0x9A;

pub const RERL_SIZE_BIAS: u32 = 0x1D;
pub const REDI_OFFSET_BIAS: u32 = 0x31;
/// REDI holds the related file and search path strings, so it grows by both.
pub const REDI_SIZE_BIAS: u32 = 0xCE;
pub const ADDITIONAL_DEPS_BIAS: u32 = 0x52;
pub const ARGUMENT_DEPS_BIAS: u32 = 0x82;
pub const CHILD_RESOURCES_BIAS: u32 = 0x9E;
pub const SEARCH_PATH_BIAS: u32 = 0x0D;
/// `DATA_OFFSET` is relative to its own position and the DATA block opens with the
/// last 0x24 bytes of the header template, hence 0x2C + 0x24.
pub const DATA_OFFSET_BIAS: u32 = 0x50;
pub const DATA_SIZE_BIAS: u32 = 0x28;

/// Empty string slot for `m_hTexture` inside the data template's string table.
pub const DATA_TEXTURE_SLOT: usize = 0xF9;
