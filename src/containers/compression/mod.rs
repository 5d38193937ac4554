pub mod lz4;

pub use lz4::Lz4Block;
