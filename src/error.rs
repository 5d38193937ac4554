use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VpcfError {
    #[error("failed to read texture resource {path}: {source}")]
    ReadTexture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write particle resource {path}: {source}")]
    WriteParticle {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write build report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialise build report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("{field} value {value:#x} does not fit in 32 bits")]
    FieldOverflow { field: &'static str, value: u64 },

    #[error("lz4 block compression failed: {0}")]
    Compression(#[from] lz4_flex::block::CompressError),
}

pub type VpcfResult<T> = Result<T, VpcfError>;
